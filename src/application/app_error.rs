use thiserror::Error;

/// Token issuance and verification failures.
///
/// Display messages never include token text or secrets and are safe to log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token: expected three non-empty segments")]
    MalformedToken,

    #[error("Malformed token segment: {0}")]
    MalformedSegment(String),

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Invalid principal: {0}")]
    InvalidPrincipal(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    MalformedToken,
    MalformedSegment,
    InvalidSignature,
    TokenExpired,
    InvalidPrincipal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MalformedToken => "MALFORMED_TOKEN",
            ErrorCode::MalformedSegment => "MALFORMED_SEGMENT",
            ErrorCode::InvalidSignature => "INVALID_SIGNATURE",
            ErrorCode::TokenExpired => "TOKEN_EXPIRED",
            ErrorCode::InvalidPrincipal => "INVALID_PRINCIPAL",
        }
    }
}

impl TokenError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TokenError::MalformedToken => ErrorCode::MalformedToken,
            TokenError::MalformedSegment(_) => ErrorCode::MalformedSegment,
            TokenError::InvalidSignature => ErrorCode::InvalidSignature,
            TokenError::TokenExpired => ErrorCode::TokenExpired,
            TokenError::InvalidPrincipal(_) => ErrorCode::InvalidPrincipal,
        }
    }
}

pub type TokenResult<T> = Result<T, TokenError>;
