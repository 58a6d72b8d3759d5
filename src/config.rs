use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::client::DEFAULT_ENDPOINT;
use crate::error::{FormError, Result};
use crate::types::PhoneRule;

pub const ENDPOINT_ENV: &str = "CREATE_USER_ENDPOINT";

#[derive(Deserialize, Serialize, Default, Debug, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_rule: Option<PhoneRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| FormError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| FormError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "create-user")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(FormError::NoConfigDir)
    }

    /// Endpoint precedence: explicit flag, then env var, then file, then default.
    pub fn resolve_endpoint(&self, explicit: Option<&str>) -> String {
        let from_env = std::env::var(ENDPOINT_ENV).ok();
        pick_endpoint(explicit, from_env.as_deref(), self.endpoint.as_deref())
    }

    pub fn resolve_phone_rule(&self, explicit: Option<PhoneRule>) -> PhoneRule {
        explicit.or(self.phone_rule).unwrap_or_default()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn pick_endpoint(explicit: Option<&str>, from_env: Option<&str>, from_file: Option<&str>) -> String {
    explicit
        .or(from_env.filter(|value| !value.is_empty()))
        .or(from_file)
        .unwrap_or(DEFAULT_ENDPOINT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
endpoint = "https://users.example.com/api"
phone_rule = "digits"
timeout_secs = 10
"#,
        )
        .unwrap();
        assert_eq!(config.endpoint.as_deref(), Some("https://users.example.com/api"));
        assert_eq!(config.phone_rule, Some(PhoneRule::Digits));
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.timeout(), None);
        assert_eq!(config.resolve_phone_rule(None), PhoneRule::Formatted);
    }

    #[test]
    fn test_parse_rejects_unknown_phone_rule() {
        assert!(Config::parse("phone_rule = \"loose\"").is_err());
    }

    #[test]
    fn test_written_config_reads_back() {
        let config = Config {
            endpoint: Some("http://localhost:4000".to_string()),
            phone_rule: Some(PhoneRule::Digits),
            timeout_secs: None,
        };
        let written = toml::to_string(&config).unwrap();
        assert!(!written.contains("timeout_secs"));
        assert_eq!(Config::parse(&written).unwrap(), config);
    }

    #[test]
    fn test_endpoint_precedence() {
        assert_eq!(pick_endpoint(None, None, None), DEFAULT_ENDPOINT);
        assert_eq!(pick_endpoint(None, None, Some("http://file")), "http://file");
        assert_eq!(pick_endpoint(None, Some("http://env"), Some("http://file")), "http://env");
        assert_eq!(pick_endpoint(None, Some(""), Some("http://file")), "http://file");
        assert_eq!(
            pick_endpoint(Some("http://flag"), Some("http://env"), Some("http://file")),
            "http://flag"
        );
    }

    #[test]
    fn test_phone_rule_precedence() {
        let config = Config {
            phone_rule: Some(PhoneRule::Digits),
            ..Config::default()
        };
        assert_eq!(config.resolve_phone_rule(None), PhoneRule::Digits);
        assert_eq!(config.resolve_phone_rule(Some(PhoneRule::Formatted)), PhoneRule::Formatted);
    }
}
