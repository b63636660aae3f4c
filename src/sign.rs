//! Request signing.
//!
//! The provider authenticates GET requests with an MD5 digest over the
//! request path, the sorted raw (not URL-encoded) parameters and the app
//! secret:
//!
//! ```text
//! sig = md5_hex("{uri}?{k1}={v1}&{k2}={v2}...{secret}")
//! ```
//!
//! The `key` parameter takes part in the digest; `sig` itself never does.

use md5::{Digest, Md5};

use crate::network::{KEY, SIG};
use crate::shared::Params;

/// Join parameters as `k=v` pairs in key order, values left raw.
pub fn canonical_query(params: &Params) -> String {
    params
        .iter()
        .filter(|(k, _)| k.as_str() != SIG)
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// Compute the lowercase hex signature for `uri` + `params` under `secret`.
pub fn sign(uri: &str, secret: &str, params: &Params) -> String {
    let mut hasher = Md5::new();
    hasher.update(uri.as_bytes());
    hasher.update(b"?");
    hasher.update(canonical_query(params).as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Add `key` to `params`, sign them, and return the signature.
///
/// The caller appends the returned value as `sig` before dispatch.
pub fn sign_get_request(uri: &str, secret: &str, app_key: &str, params: &mut Params) -> String {
    params.insert(KEY.to_string(), app_key.to_string());
    sign(uri, secret, params)
}
