//! # Order Normalizer Module
//!
//! Collapses the vendor's two order shapes into the stable
//! [`NormalizedOrder`] schema.
//!
//! The flat shape (completed orders) is a list under one of two field
//! names; the nested shape (pending orders) is a cabinet → box → package
//! tree whose cabinet- and box-level fields must be propagated down onto
//! every package. Each variant has one pure mapping function, and the
//! `expressStatus` tag is injected here; the vendor does not send it.

use serde_json::Value;

use crate::{
    constants::{
        EXPRESS_STATUS_COMPLETED, EXPRESS_STATUS_PENDING, PICKED_UP_DESC, UNKNOWN_COMPANY,
        UNKNOWN_COURIER, WAITING_PICK_DESC, ZERO_CUSTODY_FEE,
    },
    models::NormalizedOrder,
    services::vendor::{Cabinet, CabinetBox, CabinetTree, FlatOrderData, FlatOrderRecord, PackageRecord},
};

/// The two shapes the vendor returns order data in.
#[derive(Debug, Clone)]
pub enum VendorOrderPayload {
    /// Flat list (completed orders).
    Flat(FlatOrderData),
    /// Cabinet tree (pending orders).
    Nested(CabinetTree),
}

/// Normalizes either vendor shape into the stable schema.
pub fn normalize(payload: &VendorOrderPayload) -> Vec<NormalizedOrder> {
    match payload {
        VendorOrderPayload::Flat(data) => normalize_flat(data),
        VendorOrderPayload::Nested(tree) => normalize_nested(tree),
    }
}

/// Maps each flat record into the stable schema, tagging every one as
/// completed.
pub fn normalize_flat(data: &FlatOrderData) -> Vec<NormalizedOrder> {
    data.records().iter().map(flat_record).collect()
}

/// Flattens the cabinet tree, propagating the cabinet's code/address and
/// the box's id/location onto every package, tagging every one as pending.
pub fn normalize_nested(tree: &CabinetTree) -> Vec<NormalizedOrder> {
    let mut orders = Vec::new();
    for cabinet in &tree.cabinets {
        for cabinet_box in &cabinet.boxes {
            for package in &cabinet_box.packages {
                orders.push(nested_record(cabinet, cabinet_box, package));
            }
        }
    }
    orders
}

fn flat_record(record: &FlatOrderRecord) -> NormalizedOrder {
    NormalizedOrder {
        express_id: record.express_id.clone(),
        company_name: company_or_unknown(record.company_name.as_deref()),
        courier_name: courier_or_unknown(record.company_name.as_deref()),
        pickup_code: record.code.clone(),
        box_no: record.box_id.clone(),
        box_name: record.cabinet_code.clone(),
        box_location: record.box_location.clone(),
        address: record.address.clone(),
        send_tm: record.send_tm.clone(),
        pick_tm: Some(record.pick_tm.clone()),
        client_mobile: record
            .client_mobile
            .clone()
            .unwrap_or_else(|| record.picker_phone.clone()),
        pick_status: record.pick_status.clone(),
        pick_status_desc: record
            .pick_status_desc
            .clone()
            .unwrap_or_else(|| PICKED_UP_DESC.to_string()),
        express_status: EXPRESS_STATUS_COMPLETED.to_string(),
        post_id: record.post_id.clone(),
        company_logo_url: record.company_logo_url.clone(),
        staff_mobile: record.staff_mobile.clone(),
        total_custody_fee: record
            .total_custody_fee
            .clone()
            .unwrap_or_else(|| ZERO_CUSTODY_FEE.to_string()),
        custody_fee_tag: custody_fee_tag(&record.custody_fee_info),
        box_global_row: None,
    }
}

fn nested_record(cabinet: &Cabinet, cabinet_box: &CabinetBox, package: &PackageRecord) -> NormalizedOrder {
    NormalizedOrder {
        express_id: package.express_id.clone(),
        company_name: company_or_unknown(package.company_name.as_deref()),
        courier_name: courier_or_unknown(package.company_name.as_deref()),
        pickup_code: package.code.clone(),
        box_no: cabinet_box.box_id.clone(),
        box_name: cabinet.cabinet_code.clone(),
        box_location: cabinet_box.location.clone(),
        address: cabinet.address.clone(),
        send_tm: package.send_tm.clone(),
        pick_tm: None,
        client_mobile: package.client_mobile.clone(),
        pick_status: package.pick_status.clone(),
        pick_status_desc: package
            .pick_status_desc
            .clone()
            .unwrap_or_else(|| WAITING_PICK_DESC.to_string()),
        express_status: EXPRESS_STATUS_PENDING.to_string(),
        post_id: package.post_id.clone(),
        company_logo_url: package.company_logo_url.clone(),
        staff_mobile: package.staff_mobile.clone(),
        total_custody_fee: package
            .total_custody_fee
            .clone()
            .unwrap_or_else(|| ZERO_CUSTODY_FEE.to_string()),
        custody_fee_tag: custody_fee_tag(&package.custody_fee_info),
        box_global_row: Some(package.box_global_row.clone()),
    }
}

fn company_or_unknown(company_name: Option<&str>) -> String {
    company_name.unwrap_or(UNKNOWN_COMPANY).to_string()
}

fn courier_or_unknown(company_name: Option<&str>) -> String {
    company_name.unwrap_or(UNKNOWN_COURIER).to_string()
}

// custodyFeeInfo has been observed absent and is untyped upstream; anything
// that is not an object with a string custodyFeeTag collapses to "".
fn custody_fee_tag(custody_fee_info: &Value) -> String {
    custody_fee_info
        .get("custodyFeeTag")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
