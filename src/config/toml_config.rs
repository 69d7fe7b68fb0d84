use crate::adapters::species::DEFAULT_SPECIES_API_URL;
use crate::adapters::translation::DEFAULT_TRANSLATION_API_URL;
use crate::config::{validate_provider, DEFAULT_BIND_ADDR, DEFAULT_TIMEOUT_SECS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PokedexError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_species_api_url")]
    pub species_api_url: String,
    #[serde(default = "default_translation_api_url")]
    pub translation_api_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_bind() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_species_api_url() -> String {
    DEFAULT_SPECIES_API_URL.to_string()
}

fn default_translation_api_url() -> String {
    DEFAULT_TRANSLATION_API_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            species_api_url: default_species_api_url(),
            translation_api_url: default_translation_api_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PokedexError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${POKEAPI_URL})，未定義的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PokedexError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn bind_addr(&self) -> &str {
        &self.server.bind
    }

    fn species_api_url(&self) -> &str {
        &self.upstream.species_api_url
    }

    fn translation_api_url(&self) -> &str {
        &self.upstream.translation_api_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream.timeout_seconds)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
