//! Outbound response bodies.
//!
//! Every failure mode still serializes to a well-formed JSON body with a
//! `success` flag and a human-readable diagnostic; no code path may leave
//! the caller with an empty or non-JSON response.

use serde::Serialize;
use serde_json::Value;

use crate::models::NormalizedOrder;

/// Echo of the vendor challenge parameters the client must feed back into
/// `/login`. Serialized in snake_case; this block predates the camelCase
/// request bodies and existing clients depend on it.
#[derive(Debug, Clone, Serialize)]
pub struct ChallengeParams {
    pub rsa_public_key: String,
    pub client_ip: String,
    pub request_code: String,
    pub timestamp: String,
}

/// Reply of `POST /send_verification_code`.
#[derive(Debug, Serialize)]
pub struct SendCodeReply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<ChallengeParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SendCodeReply {
    pub fn sent(data: Value, params: ChallengeParams) -> Self {
        Self {
            success: true,
            data: Some(data),
            params: Some(params),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            success: false,
            data,
            params: None,
            error: Some(error.into()),
        }
    }
}

/// Reply of `POST /login`.
#[derive(Debug, Serialize)]
pub struct LoginReply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoginReply {
    /// A completed login call. `authorization` is empty when the vendor
    /// omitted the header; that is a valid-but-degraded outcome, not a
    /// failure; callers check token presence separately.
    pub fn logged_in(data: Value, authorization: String) -> Self {
        Self {
            success: true,
            data: Some(data),
            authorization: Some(authorization),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            authorization: None,
            error: Some(error.into()),
        }
    }
}

/// Reply of the two order-listing endpoints. `total` only exists on the
/// completed path (the vendor reports no total for pending orders).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersPageReply {
    pub success: bool,
    pub data: Vec<NormalizedOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl OrdersPageReply {
    pub fn completed(data: Vec<NormalizedOrder>, page: u32, page_size: u32, total: u64) -> Self {
        Self {
            success: true,
            data,
            message: None,
            page,
            page_size,
            total: Some(total),
        }
    }

    pub fn pending(data: Vec<NormalizedOrder>, page: u32, page_size: u32) -> Self {
        Self {
            success: true,
            data,
            message: None,
            page,
            page_size,
            total: None,
        }
    }

    pub fn failed(message: impl Into<String>, page: u32, page_size: u32) -> Self {
        Self {
            success: false,
            data: Vec::new(),
            message: Some(message.into()),
            page,
            page_size,
            total: None,
        }
    }
}

/// Reply of `POST /cabinet_location` and `POST /openBox`.
#[derive(Debug, Serialize)]
pub struct ActionReply {
    pub success: bool,
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionReply {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: Value::Object(Default::default()),
            message: Some(message.into()),
        }
    }
}
