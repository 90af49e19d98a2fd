use crate::app_error::{ErrorCode, TokenError};

pub const UNAUTHORIZED: u16 = 401;
pub const BAD_REQUEST: u16 = 400;

/// HTTP status for a token failure. Every verification failure denies access
/// with 401; a bad principal at issuance is the caller's input error.
pub fn status_for(err: &TokenError) -> u16 {
    match err.code() {
        ErrorCode::MalformedToken
        | ErrorCode::MalformedSegment
        | ErrorCode::InvalidSignature
        | ErrorCode::TokenExpired => UNAUTHORIZED,
        ErrorCode::InvalidPrincipal => BAD_REQUEST,
    }
}

/// JSON error body. Only the stable code is exposed to clients.
pub fn error_body(err: &TokenError) -> serde_json::Value {
    serde_json::json!({ "code": err.code().as_str() })
}

/// Status and body together, logging the rejection first.
pub fn error_resp(err: &TokenError) -> (u16, serde_json::Value) {
    tracing::info!(error = %err, "Request failed");
    (status_for(err), error_body(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_failures_are_unauthorized() {
        for err in [
            TokenError::MalformedToken,
            TokenError::MalformedSegment("invalid json".into()),
            TokenError::InvalidSignature,
            TokenError::TokenExpired,
        ] {
            assert_eq!(status_for(&err), 401, "{err}");
        }
    }

    #[test]
    fn test_invalid_principal_is_bad_request() {
        assert_eq!(
            status_for(&TokenError::InvalidPrincipal("empty subject".into())),
            400
        );
    }

    #[test]
    fn test_error_body_exposes_code_only() {
        let (status, body) = error_resp(&TokenError::TokenExpired);
        assert_eq!(status, 401);
        assert_eq!(body, serde_json::json!({ "code": "TOKEN_EXPIRED" }));

        let body = error_body(&TokenError::MalformedSegment("invalid json: eof".into()));
        assert_eq!(body, serde_json::json!({ "code": "MALFORMED_SEGMENT" }));
    }
}
