//! Inbound request bodies.

use serde::Deserialize;

use crate::utils::deserialize_string_or_number;

/// Body of `POST /send_verification_code`.
///
/// The slider fields are only meaningful when the vendor's challenge says a
/// slider verification is required; they default to empty strings so the
/// signing layout stays byte-stable either way.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequest {
    pub phone_number: String,
    #[serde(default)]
    pub slider_ticket: String,
    #[serde(default)]
    pub slider_randstr: String,
}

/// Body of `POST /login`.
///
/// All of these except the phone number and code are echoes of the
/// `params` block returned by `/send_verification_code`. `timestamp` is
/// accepted as either a string or an integer; the vendor itself is not
/// consistent about which it hands out.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub phone_number: String,
    pub verification_code: String,
    pub rsa_public_key: String,
    pub client_ip: String,
    pub request_code: String,
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub timestamp: String,
}

/// Body of `POST /cabinet_location`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetLocationRequest {
    pub express_id: String,
    #[serde(default)]
    pub box_id: Option<String>,
    #[serde(default)]
    pub cabinet_code: Option<String>,
}

/// Body of `POST /openBox`; the identifying fields of one package sitting
/// in one box of one cabinet, as previously returned by `/pending_orders`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenBoxRequest {
    pub cabinet_code: String,
    pub box_id: String,
    pub express_id: String,
    pub client_mobile: String,
    pub staff_mobile: String,
    pub company_logo_url: String,
    pub company_name: String,
    pub express_type: i64,
    pub post_id: String,
    pub code: String,
    pub box_global_row: String,
    pub address: String,
}
