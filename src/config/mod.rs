//! Configuration loading and layering.
//!
//! Handles `FactomFER.conf` loading, `FER_*` environment overrides,
//! and completeness validation of the required fields.

pub mod loader;

pub use loader::{Config, ConfigError, ConfigField};
