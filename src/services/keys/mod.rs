//! # Key Resolver Module
//!
//! Normalizes the vendor's RSA public-key material into a usable key.
//!
//! The vendor hands out its public key pre-split into five arbitrarily
//! ordered fragments whose concatenation may be a full PEM document, a bare
//! PEM body, or raw base64 DER. Parsing is an explicit ordered list of named
//! strategies: each one either yields a fully usable key or fails outright,
//! and the first success wins. When every strategy fails, the error carries
//! the first strategy's diagnostic; the earliest failure is the most
//! informative one.

use log::debug;
use rsa::{pkcs1::DecodeRsaPublicKey, pkcs8::DecodePublicKey, RsaPublicKey};
use thiserror::Error;

use crate::utils::base64_decode;

/// No parsing strategy produced a usable key.
#[derive(Error, Debug)]
#[error("unable to parse RSA public key: {reason}")]
pub struct KeyFormatError {
    reason: String,
}

/// Result type for key resolution.
pub type KeyResult<T> = Result<T, KeyFormatError>;

type ParseStrategy = fn(&str) -> Result<RsaPublicKey, String>;

/// Ordered parsing strategies; the order is load-bearing (see module docs).
const STRATEGIES: &[(&str, ParseStrategy)] = &[
    ("pem-document", parse_pem_document),
    ("wrapped-pem", parse_wrapped_pem),
    ("base64-der", parse_base64_der),
];

/// Resolves a raw key string of unknown encoding into an RSA public key.
pub fn resolve_public_key(raw: &str) -> KeyResult<RsaPublicKey> {
    let raw = raw.trim();
    let mut first_failure: Option<String> = None;

    for (name, parse) in STRATEGIES {
        match parse(raw) {
            Ok(key) => {
                debug!("public key parsed via {name} strategy");
                return Ok(key);
            }
            Err(reason) => {
                debug!("{name} strategy failed: {reason}");
                first_failure.get_or_insert_with(|| format!("{name}: {reason}"));
            }
        }
    }

    Err(KeyFormatError {
        reason: first_failure.unwrap_or_else(|| "no parsing strategy applied".to_string()),
    })
}

/// Strategy a: the string is already a PEM document with headers. Routes on
/// the PEM tag so both SPKI and PKCS#1 documents load.
fn parse_pem_document(raw: &str) -> Result<RsaPublicKey, String> {
    let doc = pem::parse(raw).map_err(|e| e.to_string())?;
    match doc.tag() {
        "PUBLIC KEY" => RsaPublicKey::from_public_key_der(doc.contents()).map_err(|e| e.to_string()),
        "RSA PUBLIC KEY" => RsaPublicKey::from_pkcs1_der(doc.contents()).map_err(|e| e.to_string()),
        other => Err(format!("unexpected PEM tag '{other}'")),
    }
}

/// Strategy b: the string is a bare PEM body. Re-fold the base64 into
/// 64-column lines, wrap it in standard markers and parse it as SPKI.
fn parse_wrapped_pem(raw: &str) -> Result<RsaPublicKey, String> {
    let body = fold_base64(raw);
    let pem_text = format!("-----BEGIN PUBLIC KEY-----\n{body}\n-----END PUBLIC KEY-----\n");
    RsaPublicKey::from_public_key_pem(&pem_text).map_err(|e| e.to_string())
}

/// Strategy c: the string is base64-encoded DER bytes, SPKI or PKCS#1.
fn parse_base64_der(raw: &str) -> Result<RsaPublicKey, String> {
    let compact: String = raw.split_whitespace().collect();
    let der = base64_decode(&compact).map_err(|e| e.to_string())?;
    RsaPublicKey::from_public_key_der(&der)
        .or_else(|_| RsaPublicKey::from_pkcs1_der(&der))
        .map_err(|e| e.to_string())
}

fn fold_base64(raw: &str) -> String {
    let compact: String = raw.split_whitespace().collect();
    compact
        .as_bytes()
        .chunks(64)
        .map(|line| std::str::from_utf8(line).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n")
}
