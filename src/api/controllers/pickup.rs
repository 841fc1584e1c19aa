//! # Pickup Controller
//!
//! Cabinet lookup and box-open, the two token-protected write-through
//! endpoints. Unlike the order listings these relay the vendor's own
//! `success` verdict: a delivered-but-declined vendor envelope is a failure
//! with the vendor's message attached.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::{
    models::{ActionReply, ApiError, AppState, CabinetLocationRequest, OpenBoxRequest},
    services::vendor::{VendorApiTrait, VendorEnvelope, VendorResult},
    utils::extract_session_token,
};

fn relay_envelope(result: VendorResult<VendorEnvelope>) -> ActionReply {
    match result {
        Ok(envelope) if envelope.success => ActionReply::ok(envelope.data_or_empty()),
        Ok(envelope) => ActionReply::failed(format!(
            "API返回错误: {}",
            envelope.message.unwrap_or_else(|| "未知错误".to_string())
        )),
        Err(e) => ActionReply::failed(e.to_string()),
    }
}

/// Looks up the visual/location info of the cabinet holding a package.
pub async fn cabinet_location<V: VendorApiTrait>(
    req: HttpRequest,
    request: CabinetLocationRequest,
    state: web::Data<AppState<V>>,
) -> Result<HttpResponse, ApiError> {
    let session_token = extract_session_token(&req)?;
    let cabinet_code = request.cabinet_code.clone().unwrap_or_default();

    let result = state
        .vendor
        .cabinet_visual_info(&session_token, &cabinet_code)
        .await;
    Ok(HttpResponse::Ok().json(relay_envelope(result)))
}

/// Asks the vendor to open the box holding the identified package.
pub async fn open_box<V: VendorApiTrait>(
    req: HttpRequest,
    request: OpenBoxRequest,
    state: web::Data<AppState<V>>,
) -> Result<HttpResponse, ApiError> {
    let session_token = extract_session_token(&req)?;

    let result = state.vendor.open_box(&session_token, &request).await;
    Ok(HttpResponse::Ok().json(relay_envelope(result)))
}
