//! fer-compose: build and sign Factom FER entries (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod builder;
pub mod config;
pub mod constants;
pub mod env;
pub mod factom;
pub mod input;
pub mod keys;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod submission;
