use dioxus::prelude::*;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

const API_BASE_URL_ENV: &str = "GITHUB_SEARCH_API_URL";
const DEBOUNCE_MS_ENV: &str = "GITHUB_SEARCH_DEBOUNCE_MS";
const PAGE_SIZE_ENV: &str = "GITHUB_SEARCH_PAGE_SIZE";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a whole number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{0} must be at least 1")]
    Zero(&'static str),
}

/// Application configuration
/// In debug builds: a .env file is loaded first
/// Environment variables override the defaults in every build
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Root of the GitHub REST API
    pub api_base_url: String,
    /// User-Agent sent with every request (GitHub rejects requests without one)
    pub user_agent: String,
    /// Users shown per table page
    pub page_size: usize,
    /// Quiet period after a keystroke before the search request is issued
    pub debounce: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: format!("github-search/{}", env!("CARGO_PKG_VERSION")),
            page_size: DEFAULT_PAGE_SIZE,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            }
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from a variable lookup, keeping defaults for anything
    /// missing or invalid
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(API_BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }

        match parse_number(DEBOUNCE_MS_ENV, lookup(DEBOUNCE_MS_ENV)) {
            Ok(Some(ms)) => config.debounce = Duration::from_millis(ms),
            Ok(None) => {}
            Err(e) => warn!("Config: {}, using {}ms", e, DEFAULT_DEBOUNCE_MS),
        }

        match parse_number(PAGE_SIZE_ENV, lookup(PAGE_SIZE_ENV)) {
            Ok(Some(0)) => warn!(
                "Config: {}, using {}",
                ConfigError::Zero(PAGE_SIZE_ENV),
                DEFAULT_PAGE_SIZE
            ),
            Ok(Some(size)) => config.page_size = size as usize,
            Ok(None) => {}
            Err(e) => warn!("Config: {}, using {}", e, DEFAULT_PAGE_SIZE),
        }

        info!(
            "Config: api={}, page_size={}, debounce={:?}",
            config.api_base_url, config.page_size, config.debounce
        );

        config
    }
}

fn parse_number(name: &'static str, value: Option<String>) -> Result<Option<u64>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };

    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidNumber { name, value })
}

/// Hook to access the configuration provided by the app shell
pub fn use_config() -> Config {
    use_context::<Config>()
}
