//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (`--chain-id`, applied by the pipeline)
//! 2. Environment variables (`FER_*`)
//! 3. `FactomFER.conf`
//! 4. Built-in defaults (chain id only)

use serde::Deserialize;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::constants;
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file is missing: {}", .path.display())]
    FileMissing { path: PathBuf },

    #[error("failed to read config file {}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", .path.display())]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("couldn't read all of config, missing: {}", field_list(.missing))]
    Incomplete { missing: Vec<ConfigField> },
}

fn field_list(fields: &[ConfigField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Required config fields, in the order they are reported when missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum ConfigField {
    PaymentPrivateKey,
    SigningPrivateKey,
    Version,
}

impl ConfigField {
    /// Environment variable that overrides this field.
    pub fn env_var(self) -> &'static str {
        match self {
            ConfigField::PaymentPrivateKey => constants::ENV_PAYMENT_PRIVATE_KEY,
            ConfigField::SigningPrivateKey => constants::ENV_SIGNING_PRIVATE_KEY,
            ConfigField::Version => constants::ENV_VERSION,
        }
    }

    fn value(self, config: &Config) -> &str {
        match self {
            ConfigField::PaymentPrivateKey => &config.payment_private_key,
            ConfigField::SigningPrivateKey => &config.signing_private_key,
            ConfigField::Version => &config.version,
        }
    }

    fn value_mut(self, config: &mut Config) -> &mut String {
        match self {
            ConfigField::PaymentPrivateKey => &mut config.payment_private_key,
            ConfigField::SigningPrivateKey => &mut config.signing_private_key,
            ConfigField::Version => &mut config.version,
        }
    }
}

/// Operator configuration read from `FactomFER.conf`.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Config {
    /// Hex-encoded 64-byte key of the entry credit address that pays.
    pub payment_private_key: String,
    /// Hex-encoded 64-byte key that signs the entry content.
    pub signing_private_key: String,
    /// Version string stamped into the entry.
    pub version: String,
    /// Chain the entry is written to; defaults to [`constants::FER_CHAIN_ID`].
    pub chain_id: Option<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |s: &str| if s.is_empty() { "" } else { "[REDACTED]" };
        f.debug_struct("Config")
            .field("payment_private_key", &redact(&self.payment_private_key))
            .field("signing_private_key", &redact(&self.signing_private_key))
            .field("version", &self.version)
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

impl Config {
    /// Load and validate the config at `path`, applying `FER_*` overrides
    /// from `env`.
    pub fn load(path: &Path, env: &Env) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileMissing {
                path: path.to_path_buf(),
            });
        }

        let mut config = Self::load_file(path)?;
        config.apply_env_vars(env);
        config.validate()?;

        tracing::debug!(path = %path.display(), config = ?config, "config loaded");
        Ok(config)
    }

    /// Load a config from a specific file without validation.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Apply environment variable overrides. Empty values are ignored.
    fn apply_env_vars(&mut self, env: &Env) {
        for field in ConfigField::iter() {
            if let Some(val) = env.get(field.env_var()) {
                *field.value_mut(self) = val;
            }
        }
        if let Some(val) = env.get(constants::ENV_CHAIN_ID) {
            self.chain_id = Some(val);
        }
    }

    /// Required fields that are empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<ConfigField> {
        ConfigField::iter()
            .filter(|f| f.value(self).is_empty())
            .collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Incomplete { missing })
        }
    }

    /// The chain id entries are written to.
    pub fn chain_id(&self) -> &str {
        self.chain_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(constants::FER_CHAIN_ID)
    }

    /// A sample config with all-zero keys, shown when the file is missing.
    pub fn sample() -> String {
        let zeros = "0".repeat(128);
        format!(
            "PaymentPrivateKey = \"{zeros}\"\nSigningPrivateKey = \"{zeros}\"\nVersion = \"1.0\"\n"
        )
    }
}
