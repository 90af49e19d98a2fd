use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The authenticated identity a token pair is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Opaque principal identifier, carried as `sub`.
    pub subject: String,
    pub email: String,
    pub display_name: String,
}

impl Principal {
    pub fn new(
        subject: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            email: email.into(),
            display_name: display_name.into(),
        }
    }
}

/// Signed token payload.
///
/// Field declaration order is the key order on the wire, so the encoded
/// bytes are stable for a given set of values. Fields are read-only; a new
/// token always gets a freshly built `Claims`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "sub")]
    subject: String,

    email: String,

    #[serde(rename = "name")]
    display_name: String,

    /// Issued at (Unix timestamp)
    #[serde(rename = "iat")]
    issued_at: i64,

    /// Expiration (Unix timestamp)
    #[serde(rename = "exp")]
    expires_at: i64,
}

impl Claims {
    pub(crate) fn for_principal(principal: &Principal, issued_at: i64, ttl_secs: i64) -> Self {
        Self {
            subject: principal.subject.clone(),
            email: principal.email.clone(),
            display_name: principal.display_name.clone(),
            issued_at,
            expires_at: issued_at.saturating_add(ttl_secs),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn issued_at(&self) -> i64 {
        self.issued_at
    }

    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    /// A token stops being valid at the instant `exp` is reached.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at <= now
    }

    /// Identity portion of the claims, used to re-issue on rotation.
    pub fn principal(&self) -> Principal {
        Principal::new(&self.subject, &self.email, &self.display_name)
    }
}

/// Fixed token header. Covered by the signature like the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    pub alg: String,
    pub typ: String,
}

impl TokenHeader {
    pub const ALGORITHM: &'static str = "HS256";
    pub const TYPE: &'static str = "JWT";

    pub fn hs256() -> Self {
        Self {
            alg: Self::ALGORITHM.to_string(),
            typ: Self::TYPE.to_string(),
        }
    }
}

/// Access and refresh tokens issued together for one principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Selects which secret and lifetime a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "access" => Ok(Self::Access),
            "refresh" => Ok(Self::Refresh),
            other => Err(format!("unknown token kind '{other}', expected 'access' or 'refresh'")),
        }
    }
}
