//! Session Tokens
//!
//! Stateless, HMAC-signed session credentials. A token is two
//! independently base64url-encoded segments joined by `.`:
//! the serialized claims and an HMAC-SHA256 tag over those bytes.
//!
//! Nothing is stored server-side; validity is recomputed on every
//! request, and rotating the signing secret invalidates all
//! outstanding tokens at once.

use serde::{Deserialize, Serialize};

use platform::crypto::{from_base64url, hmac_sha256, hmac_sha256_verify, to_base64url};

/// Claims carried by a session token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Expiry as epoch milliseconds
    pub exp: i64,
}

impl SessionClaims {
    /// Claims expiring `ttl_secs` from `now_ms`
    pub fn expiring_in(ttl_secs: i64, now_ms: i64) -> Self {
        Self {
            exp: now_ms + ttl_secs * 1000,
        }
    }
}

/// Current time as epoch milliseconds
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Sign claims into a session token
pub fn sign_claims(claims: &SessionClaims, secret: &[u8]) -> String {
    let payload = serde_json::to_vec(claims).expect("claims serialize to JSON");
    let tag = hmac_sha256(secret, &payload);
    format!("{}.{}", to_base64url(&payload), to_base64url(&tag))
}

/// Verify a session token against the signing secret and current time.
///
/// Fails closed: any structural defect (missing separator, undecodable
/// segment, MAC mismatch, unparsable claims) and any expiry at or
/// before `now_ms` yields `false`. The MAC check is constant-time.
pub fn verify_token(token: &str, secret: &[u8], now_ms: i64) -> bool {
    let Some((payload_b64, tag_b64)) = token.split_once('.') else {
        return false;
    };
    let Ok(payload) = from_base64url(payload_b64) else {
        return false;
    };
    let Ok(tag) = from_base64url(tag_b64) else {
        return false;
    };
    if !hmac_sha256_verify(secret, &payload, &tag) {
        return false;
    }
    let Ok(claims) = serde_json::from_slice::<SessionClaims>(&payload) else {
        return false;
    };
    claims.exp > now_ms
}
