use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    /// Credential for the scoring model. Absent keys do not stop the server;
    /// every screening attempt fails instead.
    pub api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub invite_delay: Duration,
    pub invite_webhook_url: Option<String>,
    pub toast_ttl: Duration,
    pub seed_demo_job: bool,
    pub cors_allowed_origin: Option<String>,
    pub log_format: LogFormat,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let log_format = match get_env_or("LOG_FORMAT", "text").to_lowercase().as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(Error::Config(format!(
                    "Invalid value for LOG_FORMAT: {} (expected text or json)",
                    other
                )))
            }
        };

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", "127.0.0.1:8080"),
            api_key: get_optional("API_KEY").or_else(|| get_optional("GEMINI_API_KEY")),
            gemini_model: get_env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            gemini_base_url: get_env_or("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            invite_delay: Duration::from_millis(get_env_parse("INVITE_DELAY_MS", 1500)?),
            invite_webhook_url: get_optional("INVITE_WEBHOOK_URL"),
            toast_ttl: Duration::from_millis(get_env_parse("TOAST_TTL_MS", 3000)?),
            seed_demo_job: get_env_parse("SEED_DEMO_JOB", true)?,
            cors_allowed_origin: get_optional("CORS_ALLOWED_ORIGIN"),
            log_format,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: "127.0.0.1:8080".to_string(),
            api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            invite_delay: Duration::from_millis(1500),
            invite_webhook_url: None,
            toast_ttl: Duration::from_millis(3000),
            seed_demo_job: true,
            cors_allowed_origin: None,
            log_format: LogFormat::Text,
        }
    }
}

fn get_optional(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn get_env_or(name: &str, default: &str) -> String {
    get_optional(name).unwrap_or_else(|| default.to_string())
}

fn get_env_parse<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get_optional(name) {
        Some(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        None => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}
