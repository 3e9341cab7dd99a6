//! API endpoint configuration
//!
//! Resolution order for [`ApiConfig::from_env`]:
//! 1. JSON file named by `PICKLE_API_CONFIG_PATH`
//! 2. `PICKLE_API_BASE_URL`
//! 3. [`DEFAULT_BASE_URL`]

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const BASE_URL_ENV: &str = "PICKLE_API_BASE_URL";
pub const CONFIG_PATH_ENV: &str = "PICKLE_API_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root of the REST API, without a trailing slash
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string() }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let config = Self { base_url: normalize(&base_url.into()) };
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: ApiConfig = serde_json::from_str(json)?;
        Self::new(raw.base_url)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_json(&content)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`ApiConfig::from_env`] with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| {
            lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
        };

        if let Some(path) = non_empty(CONFIG_PATH_ENV) {
            log::debug!("Loading API config from {}='{}'", CONFIG_PATH_ENV, path);
            return Self::from_file(Path::new(&path));
        }
        if let Some(base_url) = non_empty(BASE_URL_ENV) {
            return Self::new(base_url);
        }
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.as_str();
        let has_scheme = url.starts_with("http://") || url.starts_with("https://");
        let has_host = url.split("://").nth(1).is_some_and(|rest| !rest.is_empty());
        if !has_scheme || !has_host {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        Ok(())
    }

    /// Absolute URL for an endpoint path such as `users/` or `/auth/login/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_default_when_nothing_is_set() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.endpoint("users/"), "http://localhost:8000/api/users/");
    }

    #[test]
    fn test_base_url_from_env_is_normalized() {
        let lookup = lookup_from(&[(BASE_URL_ENV, " https://pickle.example.com/api/ ")]);
        let config = ApiConfig::from_lookup(lookup).unwrap();
        assert_eq!(config.base_url, "https://pickle.example.com/api");
        assert_eq!(config.endpoint("/auth/login/"), "https://pickle.example.com/api/auth/login/");
    }

    #[test]
    fn test_endpoint_joins_unnormalized_base_url() {
        let config = ApiConfig { base_url: "http://x/api/".into() };
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoint("users/"), "http://x/api/users/");
        assert_eq!(config.endpoint("/users/"), "http://x/api/users/");
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let lookup = lookup_from(&[(CONFIG_PATH_ENV, "  "), (BASE_URL_ENV, "")]);
        let config = ApiConfig::from_lookup(lookup).unwrap();
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_config_file_takes_precedence() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "base_url": "http://10.0.2.2:8000/api/" }"#).unwrap();
        let path = file.path().display().to_string();

        let config = ApiConfig::from_lookup(lookup_from(&[
            (CONFIG_PATH_ENV, path.as_str()),
            (BASE_URL_ENV, "https://ignored.example.com"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://10.0.2.2:8000/api");
    }

    #[test]
    fn test_missing_config_file_reports_path() {
        let lookup = lookup_from(&[(CONFIG_PATH_ENV, "/nonexistent/pickle.json")]);
        let err = ApiConfig::from_lookup(lookup).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/pickle.json"));
    }

    #[test]
    fn test_invalid_urls_are_rejected() {
        assert!(matches!(ApiConfig::new("ftp://example.com"), Err(ConfigError::InvalidBaseUrl(_))));
        assert!(matches!(ApiConfig::new(""), Err(ConfigError::InvalidBaseUrl(_))));
        assert!(matches!(ApiConfig::new("https://"), Err(ConfigError::InvalidBaseUrl(_))));
        assert!(matches!(ApiConfig::from_json("{ not json"), Err(ConfigError::Parse(_))));
    }
}
