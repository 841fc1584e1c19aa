//! # Auth Controller
//!
//! Handles the two signed account flows: verification-code send and login.
//!
//! Both flows sign their vendor call with the MD5+RSA scheme. The
//! verification flow is the only two-step handler in the relay: the
//! challenge fetch must complete first because the signature covers the
//! timestamp, client IP and request code the challenge returns.

use actix_web::{web, HttpResponse};
use log::debug;

use crate::{
    models::{
        ApiError, AppState, ChallengeParams, LoginReply, LoginRequest, SendCodeReply,
        VerificationRequest,
    },
    services::{
        signer::{sign_with_raw_key, SigningContext, SigningOperation, SliderTokens},
        vendor::VendorApiTrait,
    },
};

/// Fetches the vendor challenge, signs and submits a verification-code
/// send. Returns the challenge parameters alongside the vendor body so the
/// client can feed them back into `/login`.
pub async fn send_verification_code<V: VendorApiTrait>(
    request: VerificationRequest,
    state: web::Data<AppState<V>>,
) -> Result<HttpResponse, ApiError> {
    let challenge = match state.vendor.fetch_challenge(&request.phone_number).await {
        Ok(challenge) => challenge,
        Err(e) => {
            return Ok(HttpResponse::Ok().json(SendCodeReply::failed(e.to_string(), None)));
        }
    };

    let public_key = challenge.assemble_public_key();
    debug!(
        "challenge for {}: slider={}, key of {} chars",
        request.phone_number,
        challenge.slider_required(),
        public_key.len()
    );

    let slider = SliderTokens {
        ticket: request.slider_ticket.clone(),
        randstr: request.slider_randstr.clone(),
    };
    let context = SigningContext {
        phone_number: request.phone_number.clone(),
        timestamp: challenge.timestamp.clone(),
        client_ip: challenge.client_ip.clone(),
        request_code: challenge.request_code.clone(),
        // the pre-hash layout changes when the vendor demands a slider pass
        operation: SigningOperation::SendCode {
            slider: challenge.slider_required().then(|| slider.clone()),
        },
    };

    let sign = match sign_with_raw_key(&context, &public_key) {
        Ok(sign) => sign,
        Err(e) => {
            return Ok(HttpResponse::Ok().json(SendCodeReply::failed(format!("加密失败: {e}"), None)));
        }
    };

    match state
        .vendor
        .send_code(&request.phone_number, &slider, &sign)
        .await
    {
        Ok(data) => Ok(HttpResponse::Ok().json(SendCodeReply::sent(
            data,
            ChallengeParams {
                rsa_public_key: public_key,
                client_ip: challenge.client_ip,
                request_code: challenge.request_code,
                timestamp: challenge.timestamp,
            },
        ))),
        Err(e) => Ok(HttpResponse::Ok().json(SendCodeReply::failed(e.to_string(), None))),
    }
}

/// Signs and submits a phone + verification-code login. The vendor returns
/// the session token in its response headers; when the header is absent the
/// login still reports success with an empty `authorization`; callers
/// check token presence separately from call success.
pub async fn login<V: VendorApiTrait>(
    request: LoginRequest,
    state: web::Data<AppState<V>>,
) -> Result<HttpResponse, ApiError> {
    let context = SigningContext {
        phone_number: request.phone_number.clone(),
        timestamp: request.timestamp.clone(),
        client_ip: request.client_ip.clone(),
        request_code: request.request_code.clone(),
        operation: SigningOperation::Login {
            verification_code: request.verification_code.clone(),
        },
    };

    let sign = match sign_with_raw_key(&context, &request.rsa_public_key) {
        Ok(sign) => sign,
        Err(e) => {
            return Ok(HttpResponse::Ok().json(LoginReply::failed(format!("登录加密失败: {e}"))));
        }
    };

    match state
        .vendor
        .login(&request.phone_number, &request.verification_code, &sign)
        .await
    {
        Ok(outcome) => {
            Ok(HttpResponse::Ok().json(LoginReply::logged_in(outcome.data, outcome.authorization)))
        }
        Err(e) => Ok(HttpResponse::Ok().json(LoginReply::failed(e.to_string()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::vendor::{
        ChallengeData, LoginOutcome, MockVendorApiTrait, VendorError,
    };
    use actix_web::body::to_bytes;
    use rsa::pkcs8::{EncodePublicKey, LineEnding};
    use serde_json::{json, Value};

    fn state(mock: MockVendorApiTrait) -> web::Data<AppState<MockVendorApiTrait>> {
        web::Data::new(AppState::new(mock))
    }

    async fn body_json(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn usable_key_body() -> String {
        let mut rng = rand::thread_rng();
        let private_key = rsa::RsaPrivateKey::new(&mut rng, 2048).unwrap();
        private_key
            .to_public_key()
            .to_public_key_pem(LineEnding::LF)
            .unwrap()
            .lines()
            .filter(|line| !line.starts_with("-----"))
            .collect()
    }

    fn challenge_with_key(key_body: &str) -> ChallengeData {
        // hand the whole key out as fragment 2 to keep the fixture small
        serde_json::from_value(json!({
            "keyOrder": "2,1,3,4,5",
            "key1": "", "key2": key_body, "key3": "", "key4": "", "key5": "",
            "clientIp": "223.104.40.1",
            "requestCode": "req-1",
            "timestamp": "1742830234658",
            "needSliderCode": "false"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_send_verification_code_happy_path() {
        let key_body = usable_key_body();
        let challenge = challenge_with_key(&key_body);

        let mut mock = MockVendorApiTrait::new();
        mock.expect_fetch_challenge()
            .returning(move |_| Ok(challenge.clone()));
        mock.expect_send_code()
            .withf(|phone, _, sign| phone == "13800138000" && !sign.is_empty())
            .returning(|_, _, _| Ok(json!({"success": true})));

        let request = VerificationRequest {
            phone_number: "13800138000".to_string(),
            slider_ticket: String::new(),
            slider_randstr: String::new(),
        };
        let response = send_verification_code(request, state(mock)).await.unwrap();
        let body = body_json(response).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["success"], true);
        assert_eq!(body["params"]["client_ip"], "223.104.40.1");
        assert_eq!(body["params"]["rsa_public_key"], key_body);
    }

    #[tokio::test]
    async fn test_send_verification_code_degrades_on_challenge_failure() {
        let mut mock = MockVendorApiTrait::new();
        mock.expect_fetch_challenge()
            .returning(|_| Err(VendorError::Status(500)));
        // the second vendor call must never happen
        mock.expect_send_code().never();

        let request = VerificationRequest {
            phone_number: "13800138000".to_string(),
            slider_ticket: String::new(),
            slider_randstr: String::new(),
        };
        let response = send_verification_code(request, state(mock)).await.unwrap();
        let body = body_json(response).await;

        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "API返回状态码: 500");
    }

    #[tokio::test]
    async fn test_send_verification_code_reports_unusable_key() {
        let challenge = challenge_with_key("not-base64-at-all!!");

        let mut mock = MockVendorApiTrait::new();
        mock.expect_fetch_challenge()
            .returning(move |_| Ok(challenge.clone()));
        mock.expect_send_code().never();

        let request = VerificationRequest {
            phone_number: "13800138000".to_string(),
            slider_ticket: String::new(),
            slider_randstr: String::new(),
        };
        let response = send_verification_code(request, state(mock)).await.unwrap();
        let body = body_json(response).await;

        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().starts_with("加密失败"));
    }

    #[tokio::test]
    async fn test_login_returns_empty_authorization_when_header_missing() {
        let key_body = usable_key_body();

        let mut mock = MockVendorApiTrait::new();
        mock.expect_login().returning(|_, _, _| {
            Ok(LoginOutcome {
                authorization: String::new(),
                data: json!({"success": true}),
            })
        });

        let request = LoginRequest {
            phone_number: "13800138000".to_string(),
            verification_code: "654321".to_string(),
            rsa_public_key: key_body,
            client_ip: "223.104.40.1".to_string(),
            request_code: "req-1".to_string(),
            timestamp: "1742830234658".to_string(),
        };
        let response = login(request, state(mock)).await.unwrap();
        let body = body_json(response).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["authorization"], "");
        assert_eq!(body["data"]["success"], true);
    }

    #[tokio::test]
    async fn test_login_reports_signing_failure() {
        let mut mock = MockVendorApiTrait::new();
        mock.expect_login().never();

        let request = LoginRequest {
            phone_number: "13800138000".to_string(),
            verification_code: "654321".to_string(),
            rsa_public_key: "garbage".to_string(),
            client_ip: "223.104.40.1".to_string(),
            request_code: "req-1".to_string(),
            timestamp: "1742830234658".to_string(),
        };
        let response = login(request, state(mock)).await.unwrap();
        let body = body_json(response).await;

        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().starts_with("登录加密失败"));
    }
}
