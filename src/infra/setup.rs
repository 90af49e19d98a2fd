use std::env;
use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    application::token_service::TokenService,
    infra::{config::TokenConfig, error::ConfigError},
};

/// Build a token service from the environment, failing fast on bad config.
pub fn init_token_service() -> Result<TokenService, ConfigError> {
    let config = TokenConfig::from_env()?;
    tracing::info!(
        access_ttl_secs = config.access_token_ttl.whole_seconds(),
        refresh_ttl_secs = config.refresh_token_ttl.whole_seconds(),
        "Token service configured"
    );
    Ok(TokenService::with_system_clock(config))
}

/// Logs go to stderr so stdout stays free for command output.
/// `LOG_FORMAT=json` switches to structured JSON lines.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "authtoken=info".into());

    let json = env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let console_layer = (!json).then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_level(true)
    });

    let json_layer = json.then(|| {
        fmt::layer()
            .json()
            .with_writer(io::stderr)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
