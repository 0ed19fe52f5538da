//! Application configuration loaded from environment variables.
//!
//! Credentials are read and validated once at startup; a missing one stops
//! the process before any request is served.

use std::env;
use std::time::Duration;

/// Default Strava REST base URL.
pub const DEFAULT_STRAVA_API_URL: &str = "https://www.strava.com/api/v3";
/// Default Strava OAuth token endpoint.
pub const DEFAULT_STRAVA_OAUTH_URL: &str = "https://www.strava.com/oauth/token";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Strava credentials ---
    /// Strava OAuth client ID
    pub client_id: String,
    /// Strava OAuth client secret
    pub client_secret: String,
    /// Long-lived refresh token for the single tracked athlete
    pub refresh_token: String,

    // --- Upstream endpoints ---
    pub strava_api_url: String,
    pub strava_oauth_url: String,

    // --- Service ---
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Path of the gear limits JSON file
    pub gear_limits_path: String,
    /// Include lifetime distance and limits in the gear summary
    pub include_gear_extras: bool,
    /// Pause between activity pages
    pub page_delay: Duration,
}

impl Config {
    /// Config for tests, pointing both endpoints at the given base URL.
    pub fn test_default(base_url: &str) -> Self {
        Self {
            client_id: "test_client_id".to_string(),
            client_secret: "test_secret".to_string(),
            refresh_token: "test_refresh_token".to_string(),
            strava_api_url: format!("{}/api/v3", base_url),
            strava_oauth_url: format!("{}/oauth/token", base_url),
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
            gear_limits_path: "gear_limits.json".to_string(),
            include_gear_extras: true,
            page_delay: Duration::ZERO,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local runs.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            client_id: required("CLIENT_ID")?,
            client_secret: required("CLIENT_SECRET")?,
            refresh_token: required("REFRESH_TOKEN")?,
            strava_api_url: env::var("STRAVA_API_URL")
                .unwrap_or_else(|_| DEFAULT_STRAVA_API_URL.to_string()),
            strava_oauth_url: env::var("STRAVA_OAUTH_URL")
                .unwrap_or_else(|_| DEFAULT_STRAVA_OAUTH_URL.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            gear_limits_path: env::var("GEAR_LIMITS_PATH")
                .unwrap_or_else(|_| "gear_limits.json".to_string()),
            include_gear_extras: env::var("GEAR_EXTRAS")
                .map(|v| parse_bool(&v).unwrap_or(true))
                .unwrap_or(true),
            page_delay: Duration::from_millis(
                env::var("PAGE_DELAY_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0),
            ),
        })
    }
}

/// Read a required variable, treating blank values as missing.
fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .map(|v| v.trim().to_string())
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-global, so everything touching them lives in one test.
    #[test]
    fn test_config_from_env() {
        env::remove_var("CLIENT_ID");
        env::set_var("CLIENT_SECRET", "test_secret");
        env::set_var("REFRESH_TOKEN", "test_refresh");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Missing("CLIENT_ID"))
        ));

        env::set_var("CLIENT_ID", "   ");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Missing("CLIENT_ID"))
        ));

        env::set_var("CLIENT_ID", "test_id");
        env::set_var("GEAR_EXTRAS", "false");
        env::set_var("PAGE_DELAY_MS", "250");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.client_id, "test_id");
        assert_eq!(config.client_secret, "test_secret");
        assert_eq!(config.refresh_token, "test_refresh");
        assert_eq!(config.port, 8080);
        assert!(!config.include_gear_extras);
        assert_eq!(config.page_delay, Duration::from_millis(250));
        assert_eq!(config.strava_api_url, DEFAULT_STRAVA_API_URL);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
