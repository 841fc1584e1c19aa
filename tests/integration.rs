//! End-to-end tests: the full actix app wired to a mock vendor.

use actix_web::{test, web, App};
use base64::Engine;
use rsa::pkcs8::{EncodePublicKey, LineEnding};
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fcbox_relay::api::routes::configure_routes;
use fcbox_relay::models::AppState;
use fcbox_relay::services::signer::{SigningContext, SigningOperation};
use fcbox_relay::services::vendor::VendorClient;

macro_rules! spawn_app {
    ($vendor:expr) => {{
        let state = web::Data::new(AppState::new(
            VendorClient::with_base_url($vendor.uri()).unwrap(),
        ));
        test::init_service(App::new().app_data(state).configure(configure_routes)).await
    }};
}

fn generated_key() -> (RsaPrivateKey, String) {
    let mut rng = rand::thread_rng();
    let private_key = RsaPrivateKey::new(&mut rng, 2048).unwrap();
    let key_body: String = private_key
        .to_public_key()
        .to_public_key_pem(LineEnding::LF)
        .unwrap()
        .lines()
        .filter(|line| !line.starts_with("-----"))
        .collect();
    (private_key, key_body)
}

/// Splits a compact base64 key body into five fragments laid out so that
/// keyOrder "3,1,4,2,5" reassembles the original body.
fn fragment_fixture(key_body: &str) -> Value {
    let chunk = key_body.len() / 5;
    let cuts = [
        &key_body[..chunk],
        &key_body[chunk..2 * chunk],
        &key_body[2 * chunk..3 * chunk],
        &key_body[3 * chunk..4 * chunk],
        &key_body[4 * chunk..],
    ];
    // position order picks key3, key1, key4, key2, key5
    json!({
        "keyOrder": "3,1,4,2,5",
        "key3": cuts[0],
        "key1": cuts[1],
        "key4": cuts[2],
        "key2": cuts[3],
        "key5": cuts[4],
        "clientIp": "223.104.40.1",
        "requestCode": "req-1",
        "timestamp": "1742830234658",
        "needSliderCode": "false"
    })
}

#[actix_web::test]
async fn test_send_verification_code_signs_with_the_reassembled_key() {
    let (private_key, key_body) = generated_key();

    let vendor = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/account/secureCheckMobile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": fragment_fixture(&key_body)
        })))
        .mount(&vendor)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/account/secureSendCode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&vendor)
        .await;

    let app = spawn_app!(vendor);
    let req = test::TestRequest::post()
        .uri("/send_verification_code")
        .set_json(json!({"phoneNumber": "13800138000"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    // the reconstructed key is fragment3+fragment1+fragment4+fragment2+fragment5
    assert_eq!(body["params"]["rsa_public_key"], key_body);
    assert_eq!(body["params"]["client_ip"], "223.104.40.1");
    assert_eq!(body["params"]["request_code"], "req-1");
    assert_eq!(body["params"]["timestamp"], "1742830234658");

    // the sign parameter must decrypt back to the expected signable string
    let requests = vendor.received_requests().await.unwrap();
    let send_request = requests
        .iter()
        .find(|r| r.url.path() == "/v1/account/secureSendCode")
        .expect("send-code call not issued");
    let sign = send_request
        .url
        .query_pairs()
        .find(|(name, _)| name == "sign")
        .map(|(_, value)| value.into_owned())
        .expect("sign parameter missing");

    let ciphertext = base64::engine::general_purpose::STANDARD
        .decode(sign.as_bytes())
        .unwrap();
    let plaintext = private_key.decrypt(Pkcs1v15Encrypt, &ciphertext).unwrap();

    let expected = SigningContext {
        phone_number: "13800138000".to_string(),
        timestamp: "1742830234658".to_string(),
        client_ip: "223.104.40.1".to_string(),
        request_code: "req-1".to_string(),
        operation: SigningOperation::SendCode { slider: None },
    }
    .signable_string();
    assert_eq!(plaintext, expected.as_bytes());
}

#[actix_web::test]
async fn test_login_without_vendor_token_header_reports_empty_authorization() {
    let (_private_key, key_body) = generated_key();

    let vendor = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/account/secureLoginByPhone"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&vendor)
        .await;

    let app = spawn_app!(vendor);
    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({
            "phoneNumber": "13800138000",
            "verificationCode": "654321",
            "rsaPublicKey": key_body,
            "clientIp": "223.104.40.1",
            "requestCode": "req-1",
            "timestamp": 1742830234658u64
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["authorization"], "");
    assert_eq!(body["data"]["success"], true);
}

#[actix_web::test]
async fn test_completed_orders_relays_vendor_500_as_degraded_body() {
    let vendor = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/post/express/pageQuery4App"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&vendor)
        .await;

    let app = spawn_app!(vendor);
    let req = test::TestRequest::get()
        .uri("/completed_orders?page=3&limit=7")
        .insert_header(("Authorization", "session-token-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    // the vendor's 500 must not propagate as our status
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["message"], "API返回状态码: 500");
    assert_eq!(body["page"], 3);
    assert_eq!(body["pageSize"], 7);
}

#[actix_web::test]
async fn test_pending_orders_flattens_and_paginates() {
    let vendor = MockServer::start().await;
    let packages: Vec<Value> = (0..5)
        .map(|i| json!({"expressId": format!("e{i}")}))
        .collect();
    Mock::given(method("GET"))
        .and(path("/post/mobilePick/queryWaitPick"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "cabinets": [{
                    "cabinetCode": "SZ-001",
                    "address": "小区北门",
                    "boxes": [{"boxId": "17", "location": "3排2列", "packages": packages}]
                }]
            }
        })))
        .mount(&vendor)
        .await;

    let app = spawn_app!(vendor);
    let req = test::TestRequest::get()
        .uri("/pending_orders?page=2&limit=2")
        .insert_header(("Authorization", "session-token-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["expressId"], "e2");
    assert_eq!(data[0]["boxName"], "SZ-001");
    assert_eq!(data[0]["address"], "小区北门");
    assert_eq!(data[0]["expressStatus"], "1");
    assert!(body.get("total").is_none());
}
