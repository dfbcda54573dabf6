use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ApiConfig {
    /// Absolute URL of the REST API. Derived from the page location when unset.
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ListingConfig {
    pub initial_page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            initial_page_size: 10,
            page_size_options: vec![5, 10, 25],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
# base_url = "http://localhost:3000"

[listing]
initial_page_size = 10
page_size_options = [5, 10, 25]

[logging]
level = "debug"
"#;

/// Load the application configuration
///
/// The embedded defaults are used as-is except for the API URL, which can be
/// fixed at build time through `BACKOFFICE_API_URL`.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let mut config = parse_config(DEFAULT_CONFIG)?;
    if let Some(url) = option_env!("BACKOFFICE_API_URL") {
        config.api.base_url = Some(url.to_string());
    }
    Ok(config)
}

/// Parse and normalise a TOML configuration
pub fn parse_config(src: &str) -> anyhow::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(src)?;
    config.listing.normalize();
    if let Some(url) = config.api.base_url.take() {
        let trimmed = url.trim().trim_end_matches('/').to_string();
        if !trimmed.is_empty() {
            config.api.base_url = Some(trimmed);
        }
    }
    Ok(config)
}

impl ListingConfig {
    /// Drop zero sizes and make sure the initial size is one of the options
    fn normalize(&mut self) {
        if self.initial_page_size == 0 {
            self.initial_page_size = ListingConfig::default().initial_page_size;
        }
        self.page_size_options.retain(|size| *size > 0);
        if !self.page_size_options.contains(&self.initial_page_size) {
            self.page_size_options.push(self.initial_page_size);
        }
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();
    }
}

impl AppConfig {
    /// API base URL without a trailing slash
    pub fn api_base(&self) -> String {
        match &self.api.base_url {
            Some(url) => url.clone(),
            None => crate::shared::api_utils::api_base(),
        }
    }

    /// Configured log level, `Debug` when the value is not a level name
    pub fn log_level(&self) -> (log::Level, bool) {
        match log::Level::from_str(self.logging.level.trim()) {
            Ok(level) => (level, true),
            Err(_) => (log::Level::Debug, false),
        }
    }
}
