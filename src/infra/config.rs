use std::env;

use env_helpers::get_env_default;
use secrecy::{ExposeSecret, SecretString};
use time::Duration;

use super::error::ConfigError;

pub const ACCESS_SECRET_VAR: &str = "JWT_SECRET";
pub const REFRESH_SECRET_VAR: &str = "JWT_REFRESH_SECRET";
pub const ACCESS_TTL_VAR: &str = "ACCESS_TOKEN_TTL_SECS";
pub const REFRESH_TTL_VAR: &str = "REFRESH_TOKEN_TTL_DAYS";

/// 45 minutes.
pub const DEFAULT_ACCESS_TTL_SECS: i64 = 2_700;
pub const DEFAULT_REFRESH_TTL_DAYS: i64 = 7;
/// Upper bound for either lifetime, keeps `iat + ttl` far from overflow.
pub const MAX_TTL_DAYS: i64 = 3_650;

/// Secrets and lifetimes for the token service. Validated on construction.
#[derive(Debug)]
pub struct TokenConfig {
    pub access_secret: SecretString,
    pub refresh_secret: SecretString,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
}

impl TokenConfig {
    pub fn new(
        access_secret: impl Into<String>,
        refresh_secret: impl Into<String>,
        access_token_ttl: Duration,
        refresh_token_ttl: Duration,
    ) -> Result<Self, ConfigError> {
        let access_secret: String = access_secret.into();
        let refresh_secret: String = refresh_secret.into();

        if access_secret.is_empty() {
            return Err(ConfigError::Empty {
                var: ACCESS_SECRET_VAR,
            });
        }
        if refresh_secret.is_empty() {
            return Err(ConfigError::Empty {
                var: REFRESH_SECRET_VAR,
            });
        }
        if access_secret == refresh_secret {
            return Err(ConfigError::SharedSecret);
        }
        if !ttl_in_range(access_token_ttl) {
            return Err(ConfigError::InvalidTtl {
                var: ACCESS_TTL_VAR,
            });
        }
        if !ttl_in_range(refresh_token_ttl) {
            return Err(ConfigError::InvalidTtl {
                var: REFRESH_TTL_VAR,
            });
        }

        Ok(Self {
            access_secret: SecretString::new(access_secret.into()),
            refresh_secret: SecretString::new(refresh_secret.into()),
            access_token_ttl,
            refresh_token_ttl,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let access_secret = required_secret(ACCESS_SECRET_VAR)?;
        let refresh_secret = required_secret(REFRESH_SECRET_VAR)?;

        let access_token_ttl_secs: i64 = get_env_default(ACCESS_TTL_VAR, DEFAULT_ACCESS_TTL_SECS);
        let refresh_token_ttl_days: i64 =
            get_env_default(REFRESH_TTL_VAR, DEFAULT_REFRESH_TTL_DAYS);

        Self::new(
            access_secret.expose_secret(),
            refresh_secret.expose_secret(),
            Duration::seconds(access_token_ttl_secs),
            refresh_ttl_from_days(refresh_token_ttl_days)?,
        )
    }
}

/// `Duration::days` panics past `i64::MAX` seconds, so the raw count is
/// bounded before conversion.
fn refresh_ttl_from_days(days: i64) -> Result<Duration, ConfigError> {
    if days <= 0 || days > MAX_TTL_DAYS {
        return Err(ConfigError::InvalidTtl {
            var: REFRESH_TTL_VAR,
        });
    }
    Ok(Duration::days(days))
}

fn ttl_in_range(ttl: Duration) -> bool {
    ttl.is_positive() && ttl <= Duration::days(MAX_TTL_DAYS)
}

fn required_secret(var: &'static str) -> Result<SecretString, ConfigError> {
    let value = env::var(var).map_err(|_| ConfigError::Missing { var })?;
    if value.is_empty() {
        return Err(ConfigError::Empty { var });
    }
    Ok(SecretString::new(value.into()))
}
