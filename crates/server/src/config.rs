//! # Application Configuration
//!
//! This module defines the configuration structure for the `puxa-server` and
//! provides the logic for loading it from an optional `config.yml` file and
//! environment variables. Every field has a default, so the server starts with
//! no configuration at all.

use axum::http::HeaderValue;
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates a required configuration file was not found.
    NotFound(String),
    /// Indicates a value that loaded but cannot be used.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// The address to bind to. Loaded from `HOST` env var.
    #[serde(default = "default_host")]
    pub host: String,
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The largest request body, in bytes, that handlers will read.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Origins allowed to call the API cross-origin. Empty allows any origin.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
    /// A directory of static files to serve. Disabled when unset.
    #[serde(default)]
    pub static_dir: Option<String>,
    /// The URL prefix static files are served under.
    #[serde(default = "default_static_url")]
    pub static_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// The development server port the browser extension is built against.
fn default_port() -> u16 {
    8000
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

fn default_static_url() -> String {
    "/static".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
            cors_allowed_origins: Vec::new(),
            static_dir: None,
            static_url: default_static_url(),
        }
    }
}

impl AppConfig {
    /// Resolves `host` and `port` into a bindable socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("host '{}': {e}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Parses `cors_allowed_origins` into header values.
    ///
    /// Any origin that is not a valid header value is an error, so a
    /// misconfigured list can never silently turn into "no origin allowed".
    pub fn cors_origins(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.cors_allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| {
                    ConfigError::Invalid(format!("CORS origin {origin:?}: {e}"))
                })
            })
            .collect()
    }

    fn validate(mut self) -> Result<Self, ConfigError> {
        self.socket_addr()?;
        self.cors_origins()?;

        let static_url = self.static_url.trim_end_matches('/');
        if !static_url.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "static_url '{}' must be an absolute path below '/'",
                self.static_url
            )));
        }
        self.static_url = static_url.to_string();

        Ok(self)
    }
}

// Reads a file and substitutes `${VAR}` placeholders from the environment.
// Returns Ok(None) if the file does not exist.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(e.to_string()))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        env::var(&caps["var"]).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from a file and environment variables.
///
/// - An explicit `config_path_override` must exist. Without one, `config.yml`
///   next to this crate's manifest is used if present.
/// - Top-level keys like `port` and `host` are overridden by `PORT` and `HOST`.
/// - Any key can be overridden by a `PUXA_...` variable (e.g., `PUXA_STATIC_DIR`,
///   or `PUXA_CORS_ALLOWED_ORIGINS` as a comma-separated list).
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    let file_content = match config_path_override {
        Some(path) => Some(read_and_substitute(path)?.ok_or_else(|| {
            ConfigError::NotFound(format!("Config file not found at '{path}'."))
        })?),
        None => {
            let default_path = format!("{}/config.yml", env!("CARGO_MANIFEST_DIR"));
            let content = read_and_substitute(&default_path)?;
            if content.is_some() {
                info!("Loading configuration from '{default_path}'.");
            }
            content
        }
    };
    if let Some(content) = file_content {
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    }

    let settings = builder
        .add_source(Environment::default())
        .add_source(
            Environment::with_prefix("PUXA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cors_allowed_origins"),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.validate()
}
