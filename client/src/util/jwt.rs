//! Compact bearer-token payload decoding.
//!
//! The signature is never checked here. The backend is the authority; the
//! client only reads claims to label the UI and pick routes.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value};

/// URL-safe alphabet, padded or unpadded input.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decoded claim set, in the order the token lists its keys.
pub type Claims = Map<String, Value>;

/// Decode the payload segment of `header.payload[.signature]`.
///
/// The signature segment may be absent. Returns `None` for anything with
/// fewer than two or more than three dot-separated segments, or without a
/// base64url JSON object in the second one.
#[must_use]
pub fn decode(token: &str) -> Option<Claims> {
    let mut segments = token.trim().split('.');
    let (_header, payload) = (segments.next()?, segments.next()?);
    let _signature = segments.next();
    if segments.next().is_some() || payload.is_empty() {
        return None;
    }
    let bytes = PAYLOAD_ENGINE.decode(payload).ok()?;
    match serde_json::from_slice::<Value>(&bytes).ok()? {
        Value::Object(claims) => Some(claims),
        _ => None,
    }
}

/// First few characters of a token, for log lines.
#[must_use]
pub fn preview(token: &str) -> &str {
    let end = token.char_indices().nth(12).map_or(token.len(), |(i, _)| i);
    &token[..end]
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use serde_json::Value;

    /// Build an unsigned `header.payload.sig` token around `claims`.
    #[must_use]
    pub fn unsigned_token(claims: &Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{header}.{payload}.c2lnbmF0dXJl")
    }
}
