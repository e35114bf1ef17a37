//! Factom entry encoding and commit/reveal composition.
//!
//! Only the slice of the protocol needed to pay for and publish a single
//! entry: the entry binary form and hash, entry credit costing, EC address
//! encoding, and the `commit-entry` / `reveal-entry` JSON-RPC requests.

pub mod address;
pub mod compose;

use sha2::{Digest, Sha256, Sha512};
use thiserror::Error;

pub use address::EcAddress;
pub use compose::{Clock, EntryComposer, FactomComposer, FixedClock, JsonRpcRequest, SystemClock};

/// Size of the entry header (version byte, chain id, ExtID length) excluded
/// from the billed payload.
pub const ENTRY_HEADER_SIZE: usize = 35;

/// Largest billable payload.
pub const MAX_ENTRY_PAYLOAD: usize = 10_240;

/// Errors from the protocol layer.
#[derive(Error, Debug)]
pub enum FactomError {
    #[error("invalid chain id '{chain_id}': expected 64 hex characters")]
    InvalidChainId { chain_id: String },

    #[error("external id {index} is {len} bytes, more than an entry can hold")]
    ExtIdTooLarge { index: usize, len: usize },

    #[error("entry cannot be larger than 10KB (payload is {len} bytes)")]
    EntryTooLarge { len: usize },

    #[error("failed to encode request")]
    Encode(#[from] serde_json::Error),
}

/// A chain entry: chain id, external ids, and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub chain_id: String,
    pub ext_ids: Vec<Vec<u8>>,
    pub content: Vec<u8>,
}

impl Entry {
    /// Binary form:
    /// `0x00 | chain id (32) | ExtID section length (u16 BE) | (u16 BE len | ExtID)* | content`
    pub fn marshal_binary(&self) -> Result<Vec<u8>, FactomError> {
        let chain_id = parse_chain_id(&self.chain_id)?;

        let mut ids = Vec::new();
        for (index, ext_id) in self.ext_ids.iter().enumerate() {
            let len = u16::try_from(ext_id.len())
                .map_err(|_| FactomError::ExtIdTooLarge { index, len: ext_id.len() })?;
            ids.extend_from_slice(&len.to_be_bytes());
            ids.extend_from_slice(ext_id);
        }
        let ids_len = u16::try_from(ids.len()).map_err(|_| FactomError::ExtIdTooLarge {
            index: self.ext_ids.len().saturating_sub(1),
            len: ids.len(),
        })?;

        let mut buf = Vec::with_capacity(ENTRY_HEADER_SIZE + ids.len() + self.content.len());
        buf.push(0);
        buf.extend_from_slice(&chain_id);
        buf.extend_from_slice(&ids_len.to_be_bytes());
        buf.extend_from_slice(&ids);
        buf.extend_from_slice(&self.content);
        Ok(buf)
    }

    /// `SHA256(SHA512(binary) || binary)`.
    pub fn hash(&self) -> Result<[u8; 32], FactomError> {
        let binary = self.marshal_binary()?;
        let outer = Sha256::new()
            .chain_update(Sha512::digest(&binary))
            .chain_update(&binary)
            .finalize();
        Ok(outer.into())
    }

    /// Entry credits needed to publish: one per started KiB of payload.
    pub fn cost(&self) -> Result<u8, FactomError> {
        let len = self.marshal_binary()?.len() - ENTRY_HEADER_SIZE;
        if len > MAX_ENTRY_PAYLOAD {
            return Err(FactomError::EntryTooLarge { len });
        }
        let credits = len.div_ceil(1024).max(1);
        // Bounded by MAX_ENTRY_PAYLOAD / 1024.
        Ok(credits as u8)
    }
}

/// Decode a 64-hex-character chain id into its 32 bytes.
pub fn parse_chain_id(chain_id: &str) -> Result<[u8; 32], FactomError> {
    let invalid = || FactomError::InvalidChainId {
        chain_id: chain_id.to_string(),
    };
    hex::decode(chain_id)
        .map_err(|_| invalid())?
        .try_into()
        .map_err(|_| invalid())
}
