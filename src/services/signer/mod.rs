//! # Signature Engine Module
//!
//! Produces the `sign` parameter the vendor requires on its write-like
//! account endpoints.
//!
//! The pipeline is: fixed-order pre-hash string → MD5 (lowercase hex) →
//! `86{phone}{digest}` signable string → RSA PKCS#1 v1.5 encryption →
//! base64. MD5 and PKCS#1 v1.5 padding are NOT choices this crate gets to
//! make: they are mandated by the vendor's existing client protocol, and
//! substituting a stronger digest or padding produces signatures the vendor
//! silently rejects. Do not "fix" either of them.
//!
//! The concatenation order of the pre-hash fields is endpoint-specific and
//! must match the vendor byte for byte; any deviation yields a generic
//! vendor-side failure with no further diagnostics.

use log::debug;
use rsa::{Pkcs1v15Encrypt, RsaPublicKey};
use thiserror::Error;

use crate::{
    constants::{LOGIN_TYPE_CODE, NATION_CODE, OP_CODE, SEND_CODE_TYPE},
    services::keys::{resolve_public_key, KeyFormatError},
    utils::base64_encode,
};

#[derive(Error, Debug)]
pub enum SignerError {
    #[error(transparent)]
    KeyFormat(#[from] KeyFormatError),

    #[error("RSA encryption failed: {0}")]
    Encryption(String),
}

/// Result type for signing operations.
pub type SignerResult<T> = Result<T, SignerError>;

/// Tokens produced by the vendor's slider (human-verification) challenge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliderTokens {
    pub ticket: String,
    pub randstr: String,
}

/// Which vendor operation the signature is for. The variant decides the
/// pre-hash field layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningOperation {
    /// Verification-code send; carries slider tokens when the challenge
    /// demanded them.
    SendCode { slider: Option<SliderTokens> },
    /// Phone + verification-code login.
    Login { verification_code: String },
}

/// Ephemeral signing input, assembled per request and discarded with it.
#[derive(Debug, Clone)]
pub struct SigningContext {
    pub phone_number: String,
    pub timestamp: String,
    pub client_ip: String,
    pub request_code: String,
    pub operation: SigningOperation,
}

impl SigningContext {
    /// The string fed to MD5. Field order is fixed per operation variant.
    fn pre_hash_string(&self) -> String {
        let Self {
            phone_number,
            timestamp,
            client_ip,
            request_code,
            ..
        } = self;
        match &self.operation {
            SigningOperation::SendCode {
                slider: Some(SliderTokens { ticket, randstr }),
            } => format!(
                "{NATION_CODE}{phone_number}{SEND_CODE_TYPE}{ticket}{randstr}{timestamp}{client_ip}{request_code}{OP_CODE}"
            ),
            SigningOperation::SendCode { slider: None } => format!(
                "{NATION_CODE}{phone_number}{SEND_CODE_TYPE}{timestamp}{client_ip}{request_code}{OP_CODE}"
            ),
            SigningOperation::Login { verification_code } => format!(
                "{NATION_CODE}{phone_number}{verification_code}{LOGIN_TYPE_CODE}{timestamp}{client_ip}{request_code}{OP_CODE}"
            ),
        }
    }

    /// Country code + phone number + lowercase hex MD5 of the pre-hash
    /// string. This is the plaintext that gets RSA-encrypted.
    pub fn signable_string(&self) -> String {
        let digest = md5::compute(self.pre_hash_string().as_bytes());
        format!("{NATION_CODE}{}{digest:x}", self.phone_number)
    }
}

/// Encrypts the signable string under the vendor's public key and base64
/// encodes the ciphertext. PKCS#1 v1.5 padding is randomized, so the
/// ciphertext differs across calls even for identical input; the stable
/// invariant is that the vendor can decrypt it back to `signable_string`.
pub fn sign(context: &SigningContext, public_key: &RsaPublicKey) -> SignerResult<String> {
    let signable = context.signable_string();
    debug!("signing {} bytes", signable.len());

    let mut rng = rand::thread_rng();
    let ciphertext = public_key
        .encrypt(&mut rng, Pkcs1v15Encrypt, signable.as_bytes())
        .map_err(|e| SignerError::Encryption(e.to_string()))?;

    Ok(base64_encode(&ciphertext))
}

/// Resolves the raw key material first, then signs. This is the entry point
/// the handlers use; key-format and encryption failures both surface as
/// `SignerError` so the calling endpoint can degrade to a structured
/// `success: false` body.
pub fn sign_with_raw_key(context: &SigningContext, raw_key: &str) -> SignerResult<String> {
    let public_key = resolve_public_key(raw_key)?;
    sign(context, &public_key)
}
