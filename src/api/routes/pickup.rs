//! Routes for cabinet lookup and box-open.

use actix_web::{post, web, HttpRequest, Responder};

use crate::{
    api::controllers::pickup,
    models::{CabinetLocationRequest, DefaultAppState, OpenBoxRequest},
};

/// Looks up a cabinet's visual/location info.
#[post("/cabinet_location")]
async fn cabinet_location(
    req: HttpRequest,
    request: web::Json<CabinetLocationRequest>,
    data: web::Data<DefaultAppState>,
) -> impl Responder {
    pickup::cabinet_location(req, request.into_inner(), data).await
}

/// Opens the box holding a package.
#[post("/openBox")]
async fn open_box(
    req: HttpRequest,
    request: web::Json<OpenBoxRequest>,
    data: web::Data<DefaultAppState>,
) -> impl Responder {
    pickup::open_box(req, request.into_inner(), data).await
}

/// Registers the pickup routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(cabinet_location);
    cfg.service(open_box);
}
