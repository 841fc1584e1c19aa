//! Core services: key resolution, request signing, the vendor gateway and
//! the order normalizer.

pub mod keys;
pub mod normalizer;
pub mod signer;
pub mod vendor;

pub use keys::*;
pub use normalizer::*;
pub use signer::*;
pub use vendor::*;
