//! # API Routes Module
//!
//! Configures HTTP routes for the relay API.
//!
//! ## Routes
//!
//! * `/health` - Health check endpoint
//! * `/send_verification_code`, `/login` - Signed account flows
//! * `/completed_orders`, `/pending_orders` - Order listings
//! * `/cabinet_location`, `/openBox` - Cabinet lookup and box-open

pub mod auth;
pub mod health;
pub mod orders;
pub mod pickup;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::init)
        .configure(auth::init)
        .configure(orders::init)
        .configure(pickup::init);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppState;
    use crate::services::vendor::VendorClient;
    use actix_web::{http::StatusCode, test, web::Data, App};
    use serde_json::Value;

    // the missing-token check fires before any vendor call, so a real
    // client pointed at the production base URL never gets used here
    fn app_state() -> Data<AppState<VendorClient>> {
        Data::new(AppState::new(VendorClient::new().unwrap()))
    }

    #[actix_web::test]
    async fn test_completed_orders_without_token_is_401() {
        let app = test::init_service(
            App::new()
                .app_data(app_state())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/completed_orders").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_pending_orders_without_token_is_401() {
        let app = test::init_service(
            App::new()
                .app_data(app_state())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/pending_orders").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_open_box_without_token_is_401() {
        let app = test::init_service(
            App::new()
                .app_data(app_state())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/openBox")
            .set_json(serde_json::json!({
                "cabinetCode": "SZ-001",
                "boxId": "17",
                "expressId": "e1",
                "clientMobile": "13800138000",
                "staffMobile": "13900139000",
                "companyLogoUrl": "",
                "companyName": "顺丰速运",
                "expressType": 1,
                "postId": "p1",
                "code": "123456",
                "boxGlobalRow": "3",
                "address": "小区北门"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
