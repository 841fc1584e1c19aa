//! Server-side defaults for the relay itself.

/// Name of the inbound header carrying the vendor session token.
pub const AUTHORIZATION_HEADER_NAME: &str = "Authorization";

/// Default page number when the caller omits `page`.
pub const DEFAULT_PAGE: u32 = 1;
/// Default window size when the caller omits `limit`.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default HTTP client connection timeout in seconds.
/// Maximum time to wait for establishing a connection to the vendor.
pub const DEFAULT_HTTP_CLIENT_CONNECT_TIMEOUT_SECONDS: u64 = 5;

/// Default HTTP client timeout in seconds.
/// Overall timeout for a single vendor request.
pub const DEFAULT_HTTP_CLIENT_TIMEOUT_SECONDS: u64 = 10;
