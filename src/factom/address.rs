//! Entry credit addresses.

use sha2::{Digest, Sha256};

use crate::keys::KeyPair;

/// Prefix bytes that make a public EC address render as `EC...`.
const EC_PUB_PREFIX: [u8; 2] = [0x59, 0x2a];

/// An entry credit address: the key pair that pays for commits.
#[derive(Debug, Clone)]
pub struct EcAddress {
    keys: KeyPair,
}

impl EcAddress {
    pub fn new(keys: KeyPair) -> Self {
        Self { keys }
    }

    pub fn pub_bytes(&self) -> [u8; 32] {
        self.keys.public_bytes()
    }

    /// Sign a commit message with the address key.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.keys.sign(message)
    }

    /// Human-readable public address:
    /// `base58(prefix | pub | sha256d(prefix | pub)[..4])`.
    pub fn pub_string(&self) -> String {
        let mut buf = Vec::with_capacity(38);
        buf.extend_from_slice(&EC_PUB_PREFIX);
        buf.extend_from_slice(&self.pub_bytes());
        let check = Sha256::digest(Sha256::digest(&buf));
        buf.extend_from_slice(&check[..4]);
        bs58::encode(buf).into_string()
    }
}
