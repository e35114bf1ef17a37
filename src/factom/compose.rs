//! `commit-entry` and `reveal-entry` JSON-RPC request composition.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::{EcAddress, Entry, FactomError};

/// Source of the commit timestamp.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }
}

/// A clock stopped at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

/// A JSON-RPC 2.0 request as accepted by the factomd v2 API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub params: serde_json::Value,
    pub method: String,
}

impl JsonRpcRequest {
    fn new(method: &str, id: u64, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            params,
            method: method.to_string(),
        }
    }

    /// Compact JSON, ready to pass to `curl -d`.
    pub fn to_json_string(&self) -> Result<String, FactomError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Produces the two requests that publish an entry.
pub trait EntryComposer {
    /// Commit paid for and signed by `ec`.
    fn compose_commit(&mut self, entry: &Entry, ec: &EcAddress) -> Result<JsonRpcRequest, FactomError>;

    /// Reveal carrying the full entry.
    fn compose_reveal(&mut self, entry: &Entry) -> Result<JsonRpcRequest, FactomError>;
}

/// Composer speaking the factomd wire format.
#[derive(Debug)]
pub struct FactomComposer<C: Clock = SystemClock> {
    clock: C,
    next_id: u64,
}

impl FactomComposer<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for FactomComposer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FactomComposer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock, next_id: 1 }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Binary commit message:
    /// `0x00 | millis (6, BE) | entry hash (32) | cost (1) | EC pub (32) | sig (64)`,
    /// the signature covering the first 40 bytes.
    pub fn commit_message(&self, entry: &Entry, ec: &EcAddress) -> Result<Vec<u8>, FactomError> {
        let mut buf = Vec::with_capacity(136);
        buf.push(0);
        buf.extend_from_slice(&self.clock.now_millis().to_be_bytes()[2..]);
        buf.extend_from_slice(&entry.hash()?);
        buf.push(entry.cost()?);

        let signature = ec.sign(&buf);
        buf.extend_from_slice(&ec.pub_bytes());
        buf.extend_from_slice(&signature);
        Ok(buf)
    }
}

impl<C: Clock> EntryComposer for FactomComposer<C> {
    fn compose_commit(&mut self, entry: &Entry, ec: &EcAddress) -> Result<JsonRpcRequest, FactomError> {
        let message = self.commit_message(entry, ec)?;
        let params = serde_json::json!({ "message": hex::encode(message) });
        Ok(JsonRpcRequest::new("commit-entry", self.take_id(), params))
    }

    fn compose_reveal(&mut self, entry: &Entry) -> Result<JsonRpcRequest, FactomError> {
        let binary = entry.marshal_binary()?;
        let params = serde_json::json!({ "entry": hex::encode(binary) });
        Ok(JsonRpcRequest::new("reveal-entry", self.take_id(), params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FER_CHAIN_ID;
    use crate::keys::KeyPair;
    use ed25519_dalek::{Signature, Verifier, VerifyingKey};

    const MILLIS: u64 = 1_500_000_000_123;

    fn sample_entry() -> Entry {
        Entry {
            chain_id: FER_CHAIN_ID.to_string(),
            ext_ids: vec![vec![9u8; 64]],
            content: br#"{"priority":1}"#.to_vec(),
        }
    }

    fn ec() -> EcAddress {
        EcAddress::new(KeyPair::from_seed(&[4u8; 32]))
    }

    #[test]
    fn commit_message_layout() {
        let composer = FactomComposer::with_clock(FixedClock(MILLIS));
        let entry = sample_entry();
        let ec = ec();
        let msg = composer.commit_message(&entry, &ec).unwrap();

        assert_eq!(msg.len(), 136);
        assert_eq!(msg[0], 0);
        assert_eq!(&msg[1..7], &MILLIS.to_be_bytes()[2..]);
        assert_eq!(&msg[7..39], &entry.hash().unwrap());
        assert_eq!(msg[39], 1);
        assert_eq!(&msg[40..72], &ec.pub_bytes());

        let key = VerifyingKey::from_bytes(&ec.pub_bytes()).unwrap();
        let sig_bytes: [u8; 64] = msg[72..136].try_into().unwrap();
        let sig = Signature::from_bytes(&sig_bytes);
        assert!(key.verify(&msg[..40], &sig).is_ok());
    }

    #[test]
    fn commit_request_shape() {
        let mut composer = FactomComposer::with_clock(FixedClock(MILLIS));
        let req = composer.compose_commit(&sample_entry(), &ec()).unwrap();
        assert_eq!(req.method, "commit-entry");
        assert_eq!(req.jsonrpc, "2.0");
        let message = req.params["message"].as_str().unwrap();
        assert_eq!(message.len(), 272);
    }

    #[test]
    fn reveal_carries_entry_binary() {
        let mut composer = FactomComposer::with_clock(FixedClock(MILLIS));
        let entry = sample_entry();
        let req = composer.compose_reveal(&entry).unwrap();
        assert_eq!(req.method, "reveal-entry");
        assert_eq!(
            req.params["entry"].as_str().unwrap(),
            hex::encode(entry.marshal_binary().unwrap())
        );
    }

    #[test]
    fn ids_increase_per_request() {
        let mut composer = FactomComposer::with_clock(FixedClock(MILLIS));
        let commit = composer.compose_commit(&sample_entry(), &ec()).unwrap();
        let reveal = composer.compose_reveal(&sample_entry()).unwrap();
        assert_eq!(commit.id, 1);
        assert_eq!(reveal.id, 2);
    }

    #[test]
    fn json_string_field_order() {
        let req = JsonRpcRequest::new("reveal-entry", 3, serde_json::json!({ "entry": "00" }));
        assert_eq!(
            req.to_json_string().unwrap(),
            r#"{"jsonrpc":"2.0","id":3,"params":{"entry":"00"},"method":"reveal-entry"}"#
        );
    }

    #[test]
    fn bad_chain_id_fails_commit() {
        let mut composer = FactomComposer::with_clock(FixedClock(MILLIS));
        let mut entry = sample_entry();
        entry.chain_id = "nope".into();
        assert!(matches!(
            composer.compose_commit(&entry, &ec()),
            Err(FactomError::InvalidChainId { .. })
        ));
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }
}
