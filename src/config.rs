use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::http::field::Field;
use crate::http::headers::HeaderFields;
use crate::http::validator::VaryError;
use crate::http::vary::{append, vary};

/// Fields a service always varies on, typically loaded from a TOML file:
///
/// ```toml
/// fields = ["Accept-Encoding", "Origin"]
/// ```
///
/// `fields` may also be a single comma-separated string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VaryConfig {
    pub fields: Field,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to deserialize config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid field in config: {0}")]
    Field(#[from] VaryError),
}

impl VaryConfig {
    pub fn new(fields: impl Into<Field>) -> Result<Self, ConfigError> {
        let config = Self {
            fields: fields.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Decodes a TOML document and validates every listed field.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<VaryConfig>(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Like [`VaryConfig::load`], but falls back to the default (no fields)
    /// when the file cannot be read or is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "fall back to default Vary config");
                VaryConfig::default()
            }
        }
    }

    /// The configured fields merged into a header value.
    pub fn header_value(&self) -> Result<String, VaryError> {
        append("", self.fields.clone())
    }

    /// Adds the configured fields to the `Vary` header of `headers`.
    pub fn apply<H>(&self, headers: &mut H) -> Result<(), VaryError>
    where
        H: HeaderFields + ?Sized,
    {
        vary(headers, self.fields.clone())
    }

    fn validate(&self) -> Result<(), VaryError> {
        self.header_value().map(|_| ())
    }
}
