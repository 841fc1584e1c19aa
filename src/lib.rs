//! # fcbox-relay
//!
//! A server-side adapter for the Hive Box parcel-locker vendor's private
//! consumer API. Clients talk to a small, stable HTTP surface; the relay
//! reproduces the vendor's undocumented MD5+RSA request signing (including
//! public-key reassembly from permuted fragments) and collapses the
//! vendor's inconsistent response shapes into one normalized order schema.
//!
//! ## Architecture
//!
//! ```text
//! api::routes ─→ api::controllers
//!                   ├── services::signer  (pre-hash → MD5 → RSA → base64)
//!                   │      └── services::keys (multi-strategy key parsing)
//!                   ├── services::vendor  (fixed endpoint/header templates)
//!                   └── services::normalizer (flat/nested → NormalizedOrder)
//! ```
//!
//! The relay holds no state between requests: no cache, no session store,
//! no retries. Every vendor failure degrades to a structured
//! `success: false` body rather than an unhandled fault.

pub mod api;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;
