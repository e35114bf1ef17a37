//! App-wide constants.
//!
//! Centralises the tool name, file names, environment variable names,
//! and protocol constants so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "fer-compose";

/// Crate version, as reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Config filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "FactomFER.conf";

/// File the rendered commit/reveal commands are written to.
pub const OUTPUT_FILENAME: &str = "FERComposeCurls.dat";

/// Local factomd API endpoint the generated `curl` lines post to.
pub const DEFAULT_ENDPOINT: &str = "localhost:8088/v2";

/// The FCT/EC conversion rate chain.
pub const FER_CHAIN_ID: &str = "111111118d918a8be684e0dac725493a75862ef96d2d3f43f84b26969329bf03";

/// Dividend for the implied factoid price: `PRICE_DIVIDEND / target_price`.
pub const PRICE_DIVIDEND: f64 = 100_000.0;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_PAYMENT_PRIVATE_KEY: &str = "FER_PAYMENT_PRIVATE_KEY";
pub const ENV_SIGNING_PRIVATE_KEY: &str = "FER_SIGNING_PRIVATE_KEY";
pub const ENV_VERSION: &str = "FER_VERSION";
pub const ENV_CHAIN_ID: &str = "FER_CHAIN_ID";
