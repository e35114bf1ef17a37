//! Ed25519 key handling for the 64-byte private key convention.
//!
//! A private key is stored as 128 hex characters: the 32-byte seed followed
//! by the 32-byte public key. Only the seed is used to rebuild the key pair;
//! the stored public half is checked against the derived one.

use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use thiserror::Error;

/// Length of a stored private key in bytes.
pub const PRIVATE_KEY_LEN: usize = 64;

/// Which configured key a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum KeyRole {
    #[strum(to_string = "payment")]
    Payment,
    #[strum(to_string = "signing")]
    Signing,
}

/// Failure decoding a hex private key.
#[derive(Error, Debug, PartialEq)]
pub enum KeyDecodeError {
    #[error("{which} private key isn't parsable")]
    InvalidHex {
        which: KeyRole,
        source: hex::FromHexError,
    },

    #[error("{which} private key must be 64 bytes, got {len}")]
    WrongLength { which: KeyRole, len: usize },
}

impl KeyDecodeError {
    pub fn which(&self) -> KeyRole {
        match self {
            KeyDecodeError::InvalidHex { which, .. } | KeyDecodeError::WrongLength { which, .. } => {
                *which
            }
        }
    }
}

/// Decode a hex private key into its 64 raw bytes.
pub fn decode_private_key(hex_key: &str, which: KeyRole) -> Result<[u8; PRIVATE_KEY_LEN], KeyDecodeError> {
    let bytes = hex::decode(hex_key.trim())
        .map_err(|source| KeyDecodeError::InvalidHex { which, source })?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| KeyDecodeError::WrongLength { which, len })
}

/// An Ed25519 key pair rebuilt from a stored private key.
#[derive(Clone)]
pub struct KeyPair {
    signing: SigningKey,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &hex::encode(self.public_bytes()))
            .finish()
    }
}

impl KeyPair {
    /// Rebuild a key pair from a 32-byte seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing: SigningKey::from_bytes(seed),
        }
    }

    /// Rebuild a key pair from the 64-byte stored form.
    pub fn from_private_bytes(bytes: &[u8; PRIVATE_KEY_LEN], which: KeyRole) -> Self {
        let (seed, stored_public) = bytes.split_at(32);
        let mut seed_arr = [0u8; 32];
        seed_arr.copy_from_slice(seed);
        let pair = Self::from_seed(&seed_arr);
        if stored_public != pair.public_bytes().as_slice() {
            tracing::warn!(
                key = %which,
                derived = %hex::encode(pair.public_bytes()),
                "stored public half of private key does not match its seed; using the derived key"
            );
        }
        pair
    }

    /// Decode and rebuild in one step.
    pub fn from_hex(hex_key: &str, which: KeyRole) -> Result<Self, KeyDecodeError> {
        let bytes = decode_private_key(hex_key, which)?;
        Ok(Self::from_private_bytes(&bytes, which))
    }

    pub fn public_key(&self) -> VerifyingKey {
        self.signing.verifying_key()
    }

    pub fn public_bytes(&self) -> [u8; 32] {
        self.public_key().to_bytes()
    }

    /// The 64-byte stored form: seed followed by the derived public key.
    pub fn to_private_bytes(&self) -> [u8; PRIVATE_KEY_LEN] {
        self.signing.to_keypair_bytes()
    }

    /// Detached signature over `message`.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        let signature: Signature = self.signing.sign(message);
        signature.to_bytes()
    }
}
