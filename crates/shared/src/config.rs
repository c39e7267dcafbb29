//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Exchange rate table loaded at startup.
    ///
    /// When absent the built-in seed table is used. Order is preserved and
    /// becomes the enumeration order of `GET /rates`.
    #[serde(default)]
    pub rates: Option<Vec<RateEntry>>,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound on the time spent serving one request.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Emit logs as JSON lines instead of human-readable text.
    #[serde(default)]
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout(),
            log_json: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_request_timeout() -> u64 {
    30
}

/// One row of the configured rate table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateEntry {
    /// Currency code, matched case-sensitively.
    pub currency: String,
    /// Units of this currency per unit of the anchor.
    pub rate: f64,
}

impl AppConfig {
    /// Loads configuration from the `config` directory and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Loads configuration from `config_dir` and the environment.
    ///
    /// Sources, lowest precedence first: `{config_dir}/default`,
    /// `{config_dir}/{RUN_MODE}`, `CONVERTO__*` variables, then a bare `PORT`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load_from(config_dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{config_dir}/default")).required(false))
            .add_source(
                config::File::with_name(&format!("{config_dir}/{run_mode}")).required(false),
            )
            .add_source(
                config::Environment::with_prefix("CONVERTO")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?;

        config.try_deserialize()
    }
}
