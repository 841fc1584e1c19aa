use actix_web::HttpRequest;

use crate::{constants::AUTHORIZATION_HEADER_NAME, models::ApiError};

/// Extracts the vendor session token from the `Authorization` header.
///
/// The token is the opaque value the vendor issued at login and is forwarded
/// to the vendor verbatim; there is no `Bearer ` prefix in this protocol.
/// A missing or unreadable header fails before any vendor call is made.
pub fn extract_session_token(req: &HttpRequest) -> Result<String, ApiError> {
    let headers: Vec<_> = req.headers().get_all(AUTHORIZATION_HEADER_NAME).collect();
    if headers.len() != 1 {
        return Err(ApiError::Unauthorized(
            "Authorization header is required".to_string(),
        ));
    }

    let token = headers[0]
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    if token.is_empty() {
        return Err(ApiError::Unauthorized(
            "Authorization header is required".to_string(),
        ));
    }

    Ok(token.to_string())
}
