use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::source::DEFAULT_SOURCE_FILE;

pub const DEFAULT_BIND: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// take precedence over `HLT_BIND` / `HLT_PORT`.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV export of the supervisors sheet (HLT_SOURCE_PATH)
    pub source_path: PathBuf,
    /// Optional JSON vocabulary overriding the built-in tables (HLT_VOCABULARY_PATH)
    pub vocabulary_path: Option<PathBuf>,
    pub bind: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_FILE),
            vocabulary_path: None,
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; only a malformed HLT_PORT is an error.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("HLT_PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            source_path: env::var("HLT_SOURCE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.source_path),
            vocabulary_path: env::var("HLT_VOCABULARY_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            bind: env::var("HLT_BIND").unwrap_or(defaults.bind),
            port,
        })
    }

    /// Check that a configured vocabulary file actually exists.
    pub fn require_vocabulary(&self) -> Result<()> {
        if let Some(ref path) = self.vocabulary_path {
            if !path.exists() {
                anyhow::bail!(
                    "HLT_VOCABULARY_PATH points to {}, which does not exist.\n\
                     Unset it to use the built-in vocabularies.",
                    path.display()
                );
            }
        }
        Ok(())
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse()
        .with_context(|| format!("HLT_PORT must be a port number, got {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port(" 8080 ").unwrap(), 8080);
        assert!(parse_port("http").is_err());
        assert!(parse_port("70000").is_err());
    }

    #[test]
    fn test_defaults_match_original_site() {
        let config = Config::default();
        assert_eq!(config.source_path, PathBuf::from("HLT - Supervisors.csv"));
        assert_eq!(config.port, 5000);
        assert!(config.vocabulary_path.is_none());
    }

    #[test]
    fn test_require_vocabulary_missing_file() {
        let config = Config {
            vocabulary_path: Some(PathBuf::from("/nonexistent/vocab.json")),
            ..Config::default()
        };
        assert!(config.require_vocabulary().is_err());
        assert!(Config::default().require_vocabulary().is_ok());
    }
}
