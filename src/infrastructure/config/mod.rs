//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::errors::ConfigError;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub urls: UrlsConfig,
    pub resolver: ResolverConfig,
    pub oneinch: OneInchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UrlsConfig {
    pub frame: String,
    pub ens_app: String,
    pub txpay: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResolverConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct OneInchConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Bearer credential. Prefer the ONEINCH_API_KEY environment variable;
    /// this field exists for local development only.
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "ens-domain-bot".to_string(),
                prefix: "/".to_string(),
            },
            urls: UrlsConfig {
                frame: "https://ens.steer.fun/".to_string(),
                ens_app: "https://app.ens.domains/".to_string(),
                txpay: "https://txpay.vercel.app".to_string(),
            },
            resolver: ResolverConfig {
                base_url: "https://api.ensdata.net".to_string(),
                timeout_seconds: 10,
            },
            oneinch: OneInchConfig {
                base_url: "https://api.1inch.dev".to_string(),
                timeout_seconds: 10,
                api_key: None,
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();

        if let Ok(prefix) = std::env::var("BOT_PREFIX") {
            config.bot.prefix = prefix;
        }
        if let Ok(key) = std::env::var("ONEINCH_API_KEY") {
            config.oneinch.api_key = Some(key);
        }

        config
    }

    /// The 1inch bearer credential; the environment always wins over the
    /// config file.
    pub fn oneinch_api_key(&self) -> Option<String> {
        std::env::var("ONEINCH_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.oneinch.api_key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_endpoints() {
        let config = Config::default();
        assert_eq!(config.bot.prefix, "/");
        assert_eq!(config.urls.ens_app, "https://app.ens.domains/");
        assert_eq!(config.resolver.base_url, "https://api.ensdata.net");
        assert_eq!(config.oneinch.timeout_seconds, 10);
        assert!(config.oneinch.api_key.is_none());
    }

    #[test]
    fn yaml_round_trip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("base-url"));
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.bot.name, config.bot.name);
        assert_eq!(parsed.urls.txpay, config.urls.txpay);
    }
}
