//! Request signing for authenticated Last.fm calls.
//!
//! Signed calls carry an `api_sig` parameter: every parameter except
//! `format` and `callback`, sorted by name, concatenated as `name` + `value`,
//! followed by the shared secret, hashed with MD5 and hex encoded.

use std::collections::BTreeMap;

use md5::{Digest, Md5};

/// Parameters that are sent but never signed.
const UNSIGNED_PARAMS: &[&str] = &["format", "callback", "api_sig"];

/// Compute MD5 hash of a string and return as hex string.
pub fn md5_hex(data: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(data.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

/// Compute the `api_sig` value for a set of parameters.
pub fn api_signature(params: &BTreeMap<String, String>, secret: &str) -> String {
    let mut payload = String::new();
    for (key, value) in params {
        if UNSIGNED_PARAMS.contains(&key.as_str()) {
            continue;
        }
        payload.push_str(key);
        payload.push_str(value);
    }
    payload.push_str(secret);
    md5_hex(&payload)
}
