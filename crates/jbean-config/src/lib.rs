//! Configuration for jbean tooling.
//!
//! Configuration is read from a TOML file (conventionally `jbean.toml`):
//!
//! ```toml
//! [introspection]
//! reserved_names = ["class", "metaClass", "delegate"]
//!
//! [logging]
//! level = "debug"
//! json = false
//! ```
//!
//! Every key is optional; unknown keys are rejected.

use std::path::{Path, PathBuf};
use std::sync::Once;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::prelude::*;

/// File name looked up by [`JbeanConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "jbean.toml";

const LOG_TARGET: &str = "jbean.config";

static TRACING_INIT: Once = Once::new();

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JbeanConfig {
    #[serde(default)]
    pub introspection: IntrospectionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntrospectionConfig {
    /// Property names that never produce a descriptor. `class` is reserved
    /// even when it is not listed.
    #[serde(default = "IntrospectionConfig::default_reserved_names")]
    pub reserved_names: Vec<String>,
}

impl IntrospectionConfig {
    fn default_reserved_names() -> Vec<String> {
        vec!["class".to_owned(), "metaClass".to_owned()]
    }

    /// Configured reserved names with surrounding whitespace removed and
    /// blank entries dropped.
    pub fn normalized_reserved_names(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.reserved_names.len());
        for name in &self.reserved_names {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                tracing::warn!(
                    target: LOG_TARGET,
                    "ignoring blank entry in introspection.reserved_names"
                );
                continue;
            }
            out.push(trimmed.to_owned());
        }
        out
    }
}

impl Default for IntrospectionConfig {
    fn default() -> Self {
        Self {
            reserved_names: Self::default_reserved_names(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (`trace`..`error`) or a full `EnvFilter` directive string.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    fn default_level() -> String {
        "warn".to_owned()
    }

    pub(crate) fn normalize_level_directives(input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::default_level();
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "trace" => "trace".to_owned(),
            "debug" => "debug".to_owned(),
            "info" => "info".to_owned(),
            "warn" | "warning" => "warn".to_owned(),
            "error" => "error".to_owned(),
            // Anything else is treated as an `EnvFilter` directive string.
            _ => trimmed.to_owned(),
        }
    }

    fn config_env_filter(&self) -> tracing_subscriber::EnvFilter {
        let directives = Self::normalize_level_directives(&self.level);
        tracing_subscriber::EnvFilter::try_new(directives).unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::default()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        })
    }

    /// The effective filter: the configured level with `RUST_LOG` merged on
    /// top when set.
    pub fn env_filter(&self) -> tracing_subscriber::EnvFilter {
        let env_directives = std::env::var("RUST_LOG")
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());

        let config_directives = Self::normalize_level_directives(&self.level);

        match env_directives {
            Some(env_directives) => {
                let combined = format!("{config_directives},{env_directives}");
                tracing_subscriber::EnvFilter::try_new(combined)
                    .or_else(|_| tracing_subscriber::EnvFilter::try_new(env_directives))
                    .unwrap_or_else(|_| self.config_env_filter())
            }
            None => self.config_env_filter(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            json: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // Keep the message only; the default `Display` embeds a source snippet.
        ConfigError::Toml(err.message().to_owned())
    }
}

impl JbeanConfig {
    pub fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load_from_str(&text)
    }

    /// Loads `dir/jbean.toml` when it exists, otherwise returns defaults.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match Self::discover_path(dir) {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::default()),
        }
    }

    /// The config file [`JbeanConfig::discover`] would load from `dir`, if any.
    pub fn discover_path(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        path.is_file().then_some(path)
    }
}

/// Installs the global tracing subscriber, writing to stderr.
///
/// Only the first call has an effect.
pub fn init_tracing(config: &LoggingConfig) {
    TRACING_INIT.call_once(|| {
        let filter = config.env_filter();

        let base_layer: Box<dyn tracing_subscriber::Layer<_> + Send + Sync> = if config.json {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .boxed()
        };

        let subscriber = tracing_subscriber::registry().with(filter).with(base_layer);
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!(
                target: LOG_TARGET,
                level = %config.level,
                json = config.json,
                "tracing initialized"
            );
        }
    });
}
