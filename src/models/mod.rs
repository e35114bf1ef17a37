//! Shared types passed between pipeline stages.
//!
//! Stages import from here rather than reaching into each other's
//! internals.

pub mod fer;

pub use fer::FerEntry;

/// The composed commit/reveal pair and what the operator needs to check
/// before submitting it.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPayloads {
    /// `commit-entry` request JSON.
    pub commit_payload: String,
    /// `reveal-entry` request JSON.
    pub reveal_payload: String,
    /// Dollars per factoid implied by the target price.
    pub implied_price: f64,
    /// EC address paying for the entry.
    pub paying_address: String,
}
