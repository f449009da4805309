use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Recipe search configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Recipe search endpoint (Edamam Recipe Search API v2)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Application identifier sent as `app_id`
    #[serde(default = "default_app_id")]
    pub app_id: String,
    /// Application key sent as `app_key`
    #[serde(default = "default_app_key")]
    pub app_key: String,
    /// File the report is written to, overwritten on every run
    #[serde(default = "default_output_file")]
    pub output_file: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_id: default_app_id(),
            app_key: default_app_key(),
            output_file: default_output_file(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.edamam.com/api/recipes/v2".to_string()
}

fn default_app_id() -> String {
    "2494b7d1".to_string()
}

fn default_app_key() -> String {
    "d2a8cae7c64ff1a4b653baf56db8f217".to_string()
}

fn default_output_file() -> String {
    "recipes search.txt".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl SearchConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SEARCH__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SEARCH__APP_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`SearchConfig::load`] for the source priority.
pub fn load_config() -> Result<SearchConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore after the prefix: RECIPE_SEARCH__OUTPUT_FILE
        .add_source(
            Environment::with_prefix("RECIPE_SEARCH")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
