mod serde;

pub use serde::*;

mod auth;
pub use auth::*;

mod time;
pub use time::*;

mod base64;
pub use base64::*;
