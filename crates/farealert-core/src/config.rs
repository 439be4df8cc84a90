use crate::app_config::{AppConfig, Environment, ExtractorConfig};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`
/// lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("FAREALERT_ENV", "development"))?;
    let log_level = or_default("FAREALERT_LOG_LEVEL", "info");
    let source_label = or_default("FAREALERT_SOURCE_LABEL", "gmail");
    let rank_limit = parse_usize("FAREALERT_RANK_LIMIT", "100")?;

    let defaults = ExtractorConfig::default();
    let tracking_link_prefix = or_default(
        "FAREALERT_TRACKING_LINK_PREFIX",
        &defaults.tracking_link_prefix,
    );
    if tracking_link_prefix.trim().is_empty() || tracking_link_prefix.contains('"') {
        return Err(ConfigError::InvalidEnvVar {
            var: "FAREALERT_TRACKING_LINK_PREFIX".to_string(),
            reason: "must be a non-empty URL prefix without quotes".to_string(),
        });
    }
    let sibling_scan_limit = parse_usize(
        "FAREALERT_SIBLING_SCAN_LIMIT",
        &defaults.sibling_scan_limit.to_string(),
    )?;

    Ok(AppConfig {
        env,
        log_level,
        source_label,
        rank_limit,
        extractor: ExtractorConfig {
            tracking_link_prefix,
            sibling_scan_limit,
        },
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FAREALERT_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
