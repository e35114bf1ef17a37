//! Commit/reveal composition for a signed entry.

use thiserror::Error;

use crate::builder::SignedEntry;
use crate::factom::{EcAddress, EntryComposer, FactomError};
use crate::models::SubmissionPayloads;

/// Errors while composing the submission.
#[derive(Error, Debug)]
pub enum ComposeError {
    /// A zero target price implies an infinite factoid price.
    #[error("trying to set target price to 0, the implied price would be infinite")]
    ZeroPrice,

    #[error("failed to compose entry submission")]
    Protocol {
        #[from]
        cause: FactomError,
    },
}

/// Compose the commit (paid by `paying`) and reveal for `signed`.
///
/// The target price is checked before `composer` is called.
pub fn compose<C: EntryComposer + ?Sized>(
    signed: SignedEntry,
    paying: &EcAddress,
    composer: &mut C,
) -> Result<SubmissionPayloads, ComposeError> {
    let implied_price = signed.fer.implied_price().ok_or(ComposeError::ZeroPrice)?;

    let commit = composer.compose_commit(&signed.entry, paying)?;
    let reveal = composer.compose_reveal(&signed.entry)?;
    let paying_address = paying.pub_string();

    tracing::info!(
        paying_address = %paying_address,
        implied_price,
        "entry commit and reveal composed"
    );

    Ok(SubmissionPayloads {
        commit_payload: commit.to_json_string()?,
        reveal_payload: reveal.to_json_string()?,
        implied_price,
        paying_address,
    })
}
