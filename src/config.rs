//! Frontend Configuration
//!
//! Values baked in at build time from the environment.

use std::str::FromStr;

use log::LevelFilter;

/// Fallback backend endpoint for local development
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Fallback console log level
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    pub log_level: LevelFilter,
}

impl ApiConfig {
    /// Read `GOAL_BREAKER_API_URL` and `GOAL_BREAKER_LOG` as seen by the compiler.
    ///
    /// A WASM bundle has no process environment at runtime, so these are the
    /// values present when `trunk build` ran.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("GOAL_BREAKER_API_URL"),
            option_env!("GOAL_BREAKER_LOG"),
        )
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        let log_level = log_level
            .and_then(|level| LevelFilter::from_str(level.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            log_level,
        }
    }

    /// Point at a different backend, keeping the other settings
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Collection endpoint: `{base}/goals`
    pub fn goals_url(&self) -> String {
        format!("{}/goals", self.base_url)
    }

    /// Single goal endpoint: `{base}/goals/{id}`
    pub fn goal_url(&self, goal_id: u32) -> String {
        format!("{}/goals/{}", self.base_url, goal_id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), DEFAULT_API_URL);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = ApiConfig::from_values(Some("  "), Some("loud"));
        assert_eq!(config.base_url(), DEFAULT_API_URL);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::from_values(Some("https://api.example.com/api/"), Some("debug"));
        assert_eq!(config.goals_url(), "https://api.example.com/api/goals");
        assert_eq!(config.goal_url(42), "https://api.example.com/api/goals/42");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_with_base_url() {
        let config = ApiConfig::default().with_base_url("http://127.0.0.1:9000/");
        assert_eq!(config.goals_url(), "http://127.0.0.1:9000/goals");
    }
}
