//! HTTP controllers: request validation and orchestration of the signer,
//! gateway and normalizer. Routes stay thin and delegate here.

pub mod auth;
pub mod orders;
pub mod pickup;
