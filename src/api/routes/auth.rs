//! Routes for the signed account flows.

use actix_web::{post, web, Responder};

use crate::{
    api::controllers::auth,
    models::{DefaultAppState, LoginRequest, VerificationRequest},
};

/// Fetches the vendor challenge, then signs and submits a
/// verification-code send.
#[post("/send_verification_code")]
async fn send_verification_code(
    request: web::Json<VerificationRequest>,
    data: web::Data<DefaultAppState>,
) -> impl Responder {
    auth::send_verification_code(request.into_inner(), data).await
}

/// Signs and submits a phone + verification-code login.
#[post("/login")]
async fn login(
    request: web::Json<LoginRequest>,
    data: web::Data<DefaultAppState>,
) -> impl Responder {
    auth::login(request.into_inner(), data).await
}

/// Registers the auth routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(send_verification_code);
    cfg.service(login);
}
