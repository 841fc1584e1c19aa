//! Routes for the order listings.

use actix_web::{get, web, HttpRequest, Responder};

use crate::{
    api::controllers::orders,
    models::{DefaultAppState, PageQuery},
};

/// Lists completed orders (vendor-paginated).
#[get("/completed_orders")]
async fn completed_orders(
    req: HttpRequest,
    query: web::Query<PageQuery>,
    data: web::Data<DefaultAppState>,
) -> impl Responder {
    orders::completed_orders(req, query.into_inner(), data).await
}

/// Lists pending orders (locally paginated).
#[get("/pending_orders")]
async fn pending_orders(
    req: HttpRequest,
    query: web::Query<PageQuery>,
    data: web::Data<DefaultAppState>,
) -> impl Responder {
    orders::pending_orders(req, query.into_inner(), data).await
}

/// Registers the order routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(completed_orders);
    cfg.service(pending_orders);
}
