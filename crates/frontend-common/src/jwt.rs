//! Unverified JWT payload decoding
//!
//! Only the claims segment is read. Signatures are not checked: the client
//! uses `exp` to decide when to refresh, the server remains the authority.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

/// JWT decoding errors
#[derive(Debug, Error)]
pub enum JwtError {
    /// Not three dot-separated segments
    #[error("Malformed token: expected 3 segments, found {0}")]
    Malformed(usize),

    /// Payload segment is not valid base64url
    #[error("Invalid payload encoding: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// Payload is not a JSON claims object with a numeric `exp`
    #[error("Invalid claims: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Decoded claims of a bearer token
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct JwtPayload {
    /// Expiry, seconds since the Unix epoch (a NumericDate, may be fractional)
    pub exp: f64,
    #[serde(default)]
    pub iat: Option<f64>,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl JwtPayload {
    /// Expired strictly before `now`; a token expiring this very second is still valid
    #[allow(clippy::cast_precision_loss)]
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp < now as f64
    }
}

/// Decode the claims segment of a compact JWS
pub fn decode_payload(token: &str) -> Result<JwtPayload, JwtError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(JwtError::Malformed(segments.len()));
    }

    let payload = segments[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token(claims: &JsonValue) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn decodes_standard_claims() {
        let payload = decode_payload(&token(&json!({
            "sub": "student-1",
            "iat": 1_700_000_000,
            "exp": 1_700_000_900,
            "role": 1
        })))
        .unwrap();

        assert_eq!(payload.exp, 1_700_000_900.0);
        assert_eq!(payload.iat, Some(1_700_000_000.0));
        assert_eq!(payload.sub.as_deref(), Some("student-1"));
        assert_eq!(payload.extra.get("role"), Some(&json!(1)));
    }

    #[test]
    fn expiry_comparison_is_strict() {
        let payload = decode_payload(&token(&json!({ "exp": 100 }))).unwrap();
        assert!(!payload.is_expired_at(99));
        assert!(!payload.is_expired_at(100));
        assert!(payload.is_expired_at(101));
    }

    #[test]
    fn tolerates_padded_payload() {
        let body = base64::engine::general_purpose::URL_SAFE.encode(r#"{"exp":50}"#);
        assert!(body.ends_with('='));
        let payload = decode_payload(&format!("h.{body}.s")).unwrap();
        assert_eq!(payload.exp, 50.0);
    }

    #[test]
    fn accepts_fractional_expiry() {
        let payload = decode_payload(&token(&json!({ "exp": 4_102_444_800.5 }))).unwrap();
        assert_eq!(payload.exp, 4_102_444_800.5);
        assert!(!payload.is_expired_at(4_102_444_800));
        assert!(payload.is_expired_at(4_102_444_801));

        let payload = decode_payload(&token(&json!({ "exp": 100.5, "iat": 99.25 }))).unwrap();
        assert_eq!(payload.iat, Some(99.25));
        assert!(!payload.is_expired_at(100));
        assert!(payload.is_expired_at(101));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(matches!(decode_payload("opaque"), Err(JwtError::Malformed(1))));
        assert!(matches!(decode_payload("a.b.c.d"), Err(JwtError::Malformed(4))));
        assert!(matches!(decode_payload("a.%%%.c"), Err(JwtError::Encoding(_))));

        let no_exp = token(&json!({ "sub": "x" }));
        assert!(matches!(decode_payload(&no_exp), Err(JwtError::Claims(_))));
    }
}
