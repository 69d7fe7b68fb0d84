pub mod toml_config;

use crate::adapters::species::DEFAULT_SPECIES_API_URL;
use crate::adapters::translation::DEFAULT_TRANSLATION_API_URL;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_socket_addr, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MAX_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pokedex")]
#[command(about = "Pokemon lookup API with translated descriptions")]
pub struct CliConfig {
    #[arg(long, env = "POKEDEX_BIND", default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    #[arg(long, env = "POKEDEX_SPECIES_API_URL", default_value = DEFAULT_SPECIES_API_URL)]
    pub species_api_url: String,

    #[arg(long, env = "POKEDEX_TRANSLATION_API_URL", default_value = DEFAULT_TRANSLATION_API_URL)]
    pub translation_api_url: String,

    #[arg(long, env = "POKEDEX_REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn bind_addr(&self) -> &str {
        &self.bind
    }

    fn species_api_url(&self) -> &str {
        &self.species_api_url
    }

    fn translation_api_url(&self) -> &str {
        &self.translation_api_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

/// Checks shared by every configuration source.
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_socket_addr("bind", config.bind_addr())?;
    validate_url("species_api_url", config.species_api_url())?;
    validate_url("translation_api_url", config.translation_api_url())?;
    validate_range(
        "request_timeout_secs",
        config.request_timeout().as_secs(),
        1,
        MAX_TIMEOUT_SECS,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> CliConfig {
        let mut argv = vec!["pokedex"];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cli_explicit_values() {
        let config = cli(&[
            "--bind",
            "127.0.0.1:3000",
            "--species-api-url",
            "http://localhost:9000/api/v2",
            "--translation-api-url",
            "http://localhost:9001",
            "--request-timeout-secs",
            "3",
            "--verbose",
        ]);

        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.species_api_url(), "http://localhost:9000/api/v2");
        assert_eq!(config.translation_api_url(), "http://localhost:9001");
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert!(config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_rejects_bad_timeout() {
        let config = cli(&[
            "--species-api-url",
            "http://localhost:9000",
            "--translation-api-url",
            "http://localhost:9001",
            "--bind",
            "127.0.0.1:3000",
            "--request-timeout-secs",
            "0",
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_rejects_bad_urls() {
        let config = cli(&[
            "--bind",
            "127.0.0.1:3000",
            "--species-api-url",
            "ftp://pokeapi.co",
            "--translation-api-url",
            "http://localhost:9001",
            "--request-timeout-secs",
            "5",
        ]);
        assert!(config.validate().is_err());
    }
}
