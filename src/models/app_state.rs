use std::sync::Arc;

use crate::services::{VendorApiTrait, VendorClient};

/// Shared application state.
///
/// Generic over the vendor gateway so controllers can be exercised against
/// a mock in unit tests. There is no other shared state; the relay is
/// deliberately stateless between requests.
pub struct AppState<V: VendorApiTrait> {
    pub vendor: Arc<V>,
}

impl<V: VendorApiTrait> AppState<V> {
    pub fn new(vendor: V) -> Self {
        Self {
            vendor: Arc::new(vendor),
        }
    }
}

pub type DefaultAppState = AppState<VendorClient>;
