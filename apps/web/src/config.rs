use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_DATA_FILE: &str = "data/profiles.json";
const DEFAULT_PORT: &str = "5000";

/// Where profiles live for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Single JSON document at `DATA_FILE`.
    File,
    /// Process memory; lost on restart.
    Memory,
}

/// Application configuration loaded from environment variables.
/// Everything has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    pub data_file: PathBuf,
    pub port: u16,
    pub rust_log: String,
    /// Bio generation falls back to the template when this is `None`.
    pub anthropic_api_key: Option<String>,
    pub anthropic_api_url: Option<String>,
    pub llm_max_attempts: Option<u32>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            store_backend: parse_store_backend(
                &std::env::var("PROFILE_STORE").unwrap_or_else(|_| "file".to_string()),
            )?,
            data_file: std::env::var("DATA_FILE")
                .unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string())
                .into(),
            port: parse_port(
                &std::env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string()),
            )?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            anthropic_api_url: optional_env("ANTHROPIC_API_URL"),
            llm_max_attempts: optional_env("LLM_MAX_ATTEMPTS")
                .map(|v| {
                    v.parse::<u32>()
                        .with_context(|| format!("LLM_MAX_ATTEMPTS must be a number, got '{v}'"))
                })
                .transpose()?,
        })
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))
}

fn parse_store_backend(raw: &str) -> Result<StoreBackend> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "file" => Ok(StoreBackend::File),
        "memory" => Ok(StoreBackend::Memory),
        other => bail!("PROFILE_STORE must be 'file' or 'memory', got '{other}'"),
    }
}

/// Reads an optional variable, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_accepts_valid_number() {
        assert_eq!(parse_port("8080").unwrap(), 8080);
        assert_eq!(parse_port(" 5000 ").unwrap(), 5000);
    }

    #[test]
    fn test_parse_port_rejects_garbage() {
        let err = parse_port("not-a-port").unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_parse_store_backend() {
        assert_eq!(parse_store_backend("file").unwrap(), StoreBackend::File);
        assert_eq!(parse_store_backend(" Memory ").unwrap(), StoreBackend::Memory);
        assert!(parse_store_backend("postgres").is_err());
    }

    #[test]
    fn test_parse_port_rejects_out_of_range() {
        assert!(parse_port("70000").is_err());
    }
}
