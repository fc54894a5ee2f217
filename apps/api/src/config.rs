use anyhow::{Context, Result};

const DEFAULT_CLASSIFIER_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_CLASSIFIER_TIMEOUT_SECS: u64 = 60;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the resume classifier service, without a trailing slash.
    pub classifier_url: String,
    pub classifier_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            classifier_url: normalize_origin(
                &std::env::var("CLASSIFIER_URL")
                    .unwrap_or_else(|_| DEFAULT_CLASSIFIER_URL.to_string()),
            ),
            classifier_timeout_secs: parse_env(
                "CLASSIFIER_TIMEOUT_SECS",
                DEFAULT_CLASSIFIER_TIMEOUT_SECS,
            )?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn normalize_origin(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
