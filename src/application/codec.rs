//! Compact token text format: `header.payload.signature`.
//!
//! Every segment is base64url without padding. The signature is
//! HMAC-SHA256 over the ASCII text `header + "." + payload`, so it covers
//! the exact encoded bytes rather than the decoded values.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use serde::{Serialize, de::DeserializeOwned};
use sha2::Sha256;

use crate::app_error::{TokenError, TokenResult};

type HmacSha256 = Hmac<Sha256>;

const SEPARATOR: char = '.';

/// Serialize `value` to JSON and base64url-encode it.
///
/// Only the crate's fixed-field token structs are passed here, which keeps
/// key order stable and serialization infallible.
pub(crate) fn encode_segment<T: Serialize>(value: &T) -> String {
    let json = serde_json::to_vec(value).expect("token structs always serialize to JSON");
    URL_SAFE_NO_PAD.encode(json)
}

/// Inverse of [`encode_segment`].
pub fn decode_segment<T: DeserializeOwned>(text: &str) -> TokenResult<T> {
    let bytes = URL_SAFE_NO_PAD
        .decode(text)
        .map_err(|e| TokenError::MalformedSegment(format!("invalid base64url: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| TokenError::MalformedSegment(format!("invalid json: {e}")))
}

/// Cheap structural check: base64url alphabet and a length that unpadded
/// base64 can produce. Does not decode.
pub fn is_base64url(text: &str) -> bool {
    text.len() % 4 != 1
        && text
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn mac_for(header_text: &str, payload_text: &str, secret: &[u8]) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts any key length");
    mac.update(header_text.as_bytes());
    mac.update(&[SEPARATOR as u8]);
    mac.update(payload_text.as_bytes());
    mac
}

pub fn sign(header_text: &str, payload_text: &str, secret: &[u8]) -> String {
    let mac = mac_for(header_text, payload_text, secret);
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}

/// Recompute the MAC and compare it to `signature_text` in constant time.
///
/// Any mismatch, including an undecodable or wrong-length signature, is
/// reported as `false`.
pub fn verify_signature(
    header_text: &str,
    payload_text: &str,
    signature_text: &str,
    secret: &[u8],
) -> bool {
    let Ok(signature) = URL_SAFE_NO_PAD.decode(signature_text) else {
        return false;
    };
    mac_for(header_text, payload_text, secret)
        .verify_slice(&signature)
        .is_ok()
}

pub fn assemble_token(header_text: &str, payload_text: &str, signature_text: &str) -> String {
    format!("{header_text}{SEPARATOR}{payload_text}{SEPARATOR}{signature_text}")
}

pub fn split_token(token: &str) -> TokenResult<(&str, &str, &str)> {
    let mut parts = token.split(SEPARATOR);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature), None)
            if !header.is_empty() && !payload.is_empty() && !signature.is_empty() =>
        {
            Ok((header, payload, signature))
        }
        _ => Err(TokenError::MalformedToken),
    }
}
