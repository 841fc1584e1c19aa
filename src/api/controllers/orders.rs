//! # Orders Controller
//!
//! Read endpoints over the vendor's order data. Both require the caller's
//! vendor session token and both relay vendor failures as HTTP 200 bodies
//! with `success: false`; the caller must be able to tell "not logged in"
//! (401) apart from "vendor is unhappy".

use actix_web::{web, HttpRequest, HttpResponse};

use crate::{
    models::{ApiError, AppState, OrdersPageReply, PageQuery},
    services::{
        normalizer::{normalize_flat, normalize_nested},
        vendor::VendorApiTrait,
    },
    utils::extract_session_token,
};

/// Lists completed orders. The vendor paginates this endpoint natively, so
/// the page window is forwarded as-is.
pub async fn completed_orders<V: VendorApiTrait>(
    req: HttpRequest,
    query: PageQuery,
    state: web::Data<AppState<V>>,
) -> Result<HttpResponse, ApiError> {
    let session_token = extract_session_token(&req)?;
    let window = query.window();

    let envelope = match state
        .vendor
        .completed_orders(&session_token, window.page, window.page_size)
        .await
    {
        Ok(envelope) => envelope,
        Err(e) => {
            return Ok(HttpResponse::Ok().json(OrdersPageReply::failed(
                e.to_string(),
                window.page,
                window.page_size,
            )));
        }
    };

    let (orders, total) = match (envelope.success, envelope.data) {
        (true, Some(data)) => {
            let orders = normalize_flat(&data);
            let total = data.total.unwrap_or(orders.len() as u64);
            (orders, total)
        }
        // a vendor-declined or empty envelope is still a well-formed page
        _ => (Vec::new(), 0),
    };

    Ok(HttpResponse::Ok().json(OrdersPageReply::completed(
        orders,
        window.page,
        window.page_size,
        total,
    )))
}

/// Lists pending orders. The vendor has no pagination here, so the full
/// cabinet tree is flattened and the page window is applied locally.
pub async fn pending_orders<V: VendorApiTrait>(
    req: HttpRequest,
    query: PageQuery,
    state: web::Data<AppState<V>>,
) -> Result<HttpResponse, ApiError> {
    let session_token = extract_session_token(&req)?;
    let window = query.window();

    let envelope = match state.vendor.pending_orders(&session_token).await {
        Ok(envelope) => envelope,
        Err(e) => {
            return Ok(HttpResponse::Ok().json(OrdersPageReply::failed(
                e.to_string(),
                window.page,
                window.page_size,
            )));
        }
    };

    let orders = match (envelope.success, &envelope.data) {
        (true, Some(tree)) => normalize_nested(tree),
        _ => Vec::new(),
    };
    let paged = window.apply(orders);

    Ok(HttpResponse::Ok().json(OrdersPageReply::pending(
        paged,
        window.page,
        window.page_size,
    )))
}
