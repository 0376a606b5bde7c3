//! Configuration loader
//!
//! Parses `numtext.toml` into endpoint settings and applies command-line
//! overrides on top.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "numtext.toml";

/// Where and how to reach the conversion service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Scheme, host and port of the service (default: `https://localhost:7271`)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Accept self-signed certificates, e.g. a local development server
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

fn default_base_url() -> String {
    "https://localhost:7271".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            accept_invalid_certs: false,
        }
    }
}

/// Top-level configuration parsed from numtext.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Conversion service settings
    #[serde(default)]
    pub endpoint: EndpointConfig,
}

/// Values given on the command line, taking precedence over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Replaces `endpoint.base_url`
    pub base_url: Option<String>,
    /// Replaces `endpoint.timeout_secs`
    pub timeout_secs: Option<u64>,
    /// Forces `endpoint.accept_invalid_certs` on when set
    pub accept_invalid_certs: bool,
}

impl AppConfig {
    /// Parse a config file from a path
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not parse and
    /// validate as a config.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse config content from a string
    ///
    /// # Errors
    /// Returns an error on invalid TOML or when validation fails.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse numtext.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit `path` must exist. Without one, `numtext.toml` in `dir` is
    /// used when present and built-in defaults otherwise. Overrides are
    /// applied last and the result is validated again.
    ///
    /// # Errors
    /// Returns an error if an explicit `path` is missing, a config file fails
    /// to parse or validate, or the overrides produce an invalid config.
    pub fn load(path: Option<&Path>, dir: &Path, overrides: &Overrides) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_path(path)?,
            None => {
                let fallback = dir.join(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_path(&fallback)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply(overrides);
        config.validate().context("Invalid command-line override")?;
        Ok(config)
    }

    /// Apply command-line overrides in place
    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(base_url) = &overrides.base_url {
            self.endpoint.base_url.clone_from(base_url);
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.endpoint.timeout_secs = timeout_secs;
        }
        if overrides.accept_invalid_certs {
            self.endpoint.accept_invalid_certs = true;
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        validate_base_url(&self.endpoint.base_url)?;

        if self.endpoint.timeout_secs == 0 {
            bail!("Invalid timeout_secs: must be greater than zero");
        }

        Ok(())
    }
}

/// Validate that the base URL is an absolute `http` or `https` URL.
fn validate_base_url(base_url: &str) -> Result<()> {
    let url = reqwest::Url::parse(base_url)
        .with_context(|| format!("Invalid base_url '{base_url}'"))?;

    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "Invalid base_url '{base_url}': scheme must be http or https, got '{}'",
            url.scheme()
        );
    }

    if url.host_str().is_none() {
        bail!("Invalid base_url '{base_url}': missing host");
    }

    Ok(())
}
