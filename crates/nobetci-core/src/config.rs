use crate::app_config::{AppConfig, Environment};
use crate::provinces::find_province;
use crate::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://api.collectapi.com/";
pub const DEFAULT_USER_AGENT: &str = "nobetci/0.1 (duty-pharmacy-lookup)";
pub const DEFAULT_PROVINCE: &str = "Ankara";

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
/// Every variable is optional. The API key in particular is allowed to be
/// absent; the search form reports it when the user submits.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let env = parse_environment(&or_default("NOBETCI_ENV", "development"))?;
    let log_level = or_default("NOBETCI_LOG_LEVEL", "warn");

    // The original front end read its key from a Vite variable; keep accepting it.
    let collect_api_key =
        non_empty("COLLECT_API_KEY").or_else(|| non_empty("VITE_COLLECT_API_KEY"));

    let api_base_url = or_default("NOBETCI_API_BASE_URL", DEFAULT_API_BASE_URL);

    let request_timeout_secs = match non_empty("NOBETCI_REQUEST_TIMEOUT_SECS") {
        None => None,
        Some(raw) => {
            let secs = raw
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: "NOBETCI_REQUEST_TIMEOUT_SECS".to_string(),
                    reason: e.to_string(),
                })?;
            // Zero means "no deadline", same as leaving it unset.
            (secs > 0).then_some(secs)
        }
    };

    let user_agent = or_default("NOBETCI_USER_AGENT", DEFAULT_USER_AGENT);

    let raw_province = or_default("NOBETCI_DEFAULT_PROVINCE", DEFAULT_PROVINCE);
    let default_province = find_province(&raw_province)
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            var: "NOBETCI_DEFAULT_PROVINCE".to_string(),
            reason: format!("'{raw_province}' is not one of the 81 provinces"),
        })?
        .to_string();

    Ok(AppConfig {
        env,
        log_level,
        collect_api_key,
        api_base_url,
        request_timeout_secs,
        user_agent,
        default_province,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "NOBETCI_ENV".to_string(),
            reason: format!("expected development, test or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
