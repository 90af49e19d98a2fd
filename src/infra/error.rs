use thiserror::Error;

/// Configuration errors raised while building the token service.
///
/// Messages name the offending variable, never its value.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration error: environment variable {var} not set")]
    Missing { var: &'static str },

    #[error("Configuration error: {var} must not be empty")]
    Empty { var: &'static str },

    #[error("Configuration error: {var} must be a positive duration")]
    InvalidTtl { var: &'static str },

    #[error("Configuration error: JWT_SECRET and JWT_REFRESH_SECRET must differ")]
    SharedSecret,
}
