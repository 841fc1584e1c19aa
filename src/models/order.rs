//! The stable order schema this relay guarantees to its clients, regardless
//! of which vendor shape produced it.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// One parcel, flattened out of whichever vendor shape it arrived in.
///
/// Every field has a defined default so a partial vendor record can never
/// produce a missing key in the relay's own responses. `express_status` is
/// injected by the normalizer ("1" pending, "2" completed), not sourced from
/// the vendor. `pick_tm` only exists on completed records and
/// `box_global_row` only on pending ones; both serialize only when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedOrder {
    pub express_id: String,
    pub company_name: String,
    pub courier_name: String,
    pub pickup_code: String,
    pub box_no: String,
    pub box_name: String,
    pub box_location: String,
    pub address: String,
    pub send_tm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pick_tm: Option<String>,
    pub client_mobile: String,
    pub pick_status: String,
    pub pick_status_desc: String,
    pub express_status: String,
    pub post_id: String,
    pub company_logo_url: String,
    pub staff_mobile: String,
    pub total_custody_fee: String,
    pub custody_fee_tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_global_row: Option<String>,
}

/// Inbound pagination query parameters (`page`, `limit`).
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PageQuery {
    pub fn window(&self) -> PageWindow {
        PageWindow::new(
            self.page.unwrap_or(DEFAULT_PAGE),
            self.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// A 1-indexed page window over a locally materialized sequence.
///
/// Used only where the vendor provides no native pagination (the pending
/// orders path). Values below 1 are clamped so a hostile `page=0` cannot
/// produce an out-of-range slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub page_size: u32,
}

impl PageWindow {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Returns the slice `[(page-1)*size, page*size)` of `items`.
    ///
    /// A window past the end of the data yields an empty vector, never an
    /// error.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let start = (self.page as usize)
            .saturating_sub(1)
            .saturating_mul(self.page_size as usize);
        if start >= items.len() {
            return Vec::new();
        }
        items
            .into_iter()
            .skip(start)
            .take(self.page_size as usize)
            .collect()
    }
}
