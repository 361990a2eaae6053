//! Configuration system for the task-board server.
//!
//! Supports layered configuration with the following priority (highest
//! first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (when `--config` is given)
//! 4. Compiled defaults

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default server bind address.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Default public base URL for share links.
const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:3000";

/// Default email of the stand-in demo user.
const DEFAULT_DEMO_EMAIL: &str = "dev@quadro.local";

/// Default display name of the stand-in demo user.
const DEFAULT_DEMO_NAME: &str = "Usuário Demo";

/// Errors that can occur when loading board configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct BoardConfigFile {
    server: ServerFileConfig,
}

/// `[server]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ServerFileConfig {
    bind_addr: Option<String>,
    public_base_url: Option<String>,
    demo_user_email: Option<String>,
    demo_user_name: Option<String>,
}

// ---------------------------------------------------------------------------
// CLI arguments
// ---------------------------------------------------------------------------

/// CLI arguments for the board server.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Quadro task board server")]
pub struct BoardCliArgs {
    /// Address to bind the server to.
    #[arg(short, long, env = "QUADRO_ADDR")]
    pub bind: Option<String>,

    /// Path to a TOML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Public base URL used to build canonical share links.
    #[arg(long, env = "QUADRO_PUBLIC_URL")]
    pub public_base_url: Option<String>,

    /// Email of the stand-in demo user the in-memory provider signs in.
    #[arg(long, env = "QUADRO_DEMO_EMAIL")]
    pub demo_user_email: Option<String>,

    /// Display name of the stand-in demo user.
    #[arg(long, env = "QUADRO_DEMO_NAME")]
    pub demo_user_name: Option<String>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "QUADRO_LOG")]
    pub log_level: String,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Fully resolved board server configuration.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Address to bind the server to (e.g., `0.0.0.0:3000`).
    pub bind_addr: String,
    /// Prefix of canonical share links.
    pub public_base_url: String,
    /// Email of the stand-in demo user.
    pub demo_user_email: String,
    /// Display name of the stand-in demo user.
    pub demo_user_name: String,
    /// Log level filter string.
    pub log_level: String,
}

impl BoardConfig {
    /// Resolves configuration from CLI args, config file, and defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the config file given via `--config`
    /// cannot be read or parsed.
    pub fn load(cli: &BoardCliArgs) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => read_config_file(path)?,
            None => BoardConfigFile::default(),
        };

        Ok(Self {
            bind_addr: cli
                .bind
                .clone()
                .or(file.server.bind_addr)
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned()),
            public_base_url: cli
                .public_base_url
                .clone()
                .or(file.server.public_base_url)
                .unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_owned()),
            demo_user_email: cli
                .demo_user_email
                .clone()
                .or(file.server.demo_user_email)
                .unwrap_or_else(|| DEFAULT_DEMO_EMAIL.to_owned()),
            demo_user_name: cli
                .demo_user_name
                .clone()
                .or(file.server.demo_user_name)
                .unwrap_or_else(|| DEFAULT_DEMO_NAME.to_owned()),
            log_level: cli.log_level.clone(),
        })
    }
}

/// Reads and parses a TOML config file.
fn read_config_file(path: &Path) -> Result<BoardConfigFile, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::{BoardCliArgs, BoardConfig};

    fn cli() -> BoardCliArgs {
        BoardCliArgs {
            log_level: "info".to_owned(),
            ..BoardCliArgs::default()
        }
    }

    #[test]
    fn load_falls_back_to_compiled_defaults() {
        let config = BoardConfig::load(&cli()).expect("config loads");

        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.public_base_url, "http://localhost:3000");
        assert_eq!(config.demo_user_email, "dev@quadro.local");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn cli_arguments_take_priority() {
        let args = BoardCliArgs {
            bind: Some("127.0.0.1:8080".to_owned()),
            public_base_url: Some("https://board.example".to_owned()),
            ..cli()
        };

        let config = BoardConfig::load(&args).expect("config loads");

        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.public_base_url, "https://board.example");
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = BoardCliArgs {
            config: Some("/definitely/not/here.toml".into()),
            ..cli()
        };

        assert!(BoardConfig::load(&args).is_err());
    }
}
