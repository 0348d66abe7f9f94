use serde::Deserialize;
use anyhow::Result;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TAVILY_BASE_URL: &str = "https://api.tavily.com";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_TRIP_DAYS: u32 = 60;
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:4000"];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub tavily_api_key: Option<String>,
    pub tavily_base_url: String,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub chat_model: String,
    pub http_timeout_secs: u64,
    pub max_trip_days: u32,
    pub allowed_origins: Vec<String>,
    pub tracing_enabled: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            tavily_api_key: None,
            tavily_base_url: DEFAULT_TAVILY_BASE_URL.to_string(),
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            max_trip_days: DEFAULT_MAX_TRIP_DAYS,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
            tracing_enabled: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()?,
            tavily_api_key: secret("TAVILY_API_KEY"),
            tavily_base_url: std::env::var("TAVILY_BASE_URL")
                .unwrap_or(defaults.tavily_base_url),
            openai_api_key: secret("OPENAI_API_KEY"),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or(defaults.openai_base_url),
            chat_model: std::env::var("CHAT_MODEL")
                .unwrap_or(defaults.chat_model),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_HTTP_TIMEOUT_SECS.to_string())
                .parse()?,
            max_trip_days: std::env::var("MAX_TRIP_DAYS")
                .unwrap_or_else(|_| DEFAULT_MAX_TRIP_DAYS.to_string())
                .parse()?,
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or(defaults.allowed_origins),
            tracing_enabled: std::env::var("TRACING_ENABLED")
                .map(|raw| parse_flag(&raw))
                .unwrap_or(true),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or(defaults.log_level),
        })
    }
}

// Empty keys in .env files count as unset.
fn secret(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(raw: &str) -> bool {
    !matches!(raw.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off")
}
