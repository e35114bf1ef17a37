//! FER entry assembly and signing.
//!
//! Keys and the chain id are checked before any prompt is shown, and the entry is only
//! signed once every field has been read, so a bad key or a bad answer
//! never produces a signature.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::config::Config;
use crate::factom::{self, EcAddress, Entry, FactomError};
use crate::input::{self, BitWidth, InputError};
use crate::keys::{KeyDecodeError, KeyPair, KeyRole};
use crate::models::FerEntry;

/// Errors while building the signed entry.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error(transparent)]
    Key(#[from] KeyDecodeError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    ChainId(#[from] FactomError),

    #[error("could not marshal the data into an FER entry")]
    Serialization(#[source] serde_json::Error),
}

/// One operator prompt.
struct Prompt {
    text: &'static str,
    label: &'static str,
    width: BitWidth,
}

const EXPIRATION_HEIGHT: Prompt = Prompt {
    text: "Enter the entry expiration height: ",
    label: "Bad expiration height",
    width: BitWidth::U32,
};
const TARGET_ACTIVATION_HEIGHT: Prompt = Prompt {
    text: "Enter the target activation height: ",
    label: "Bad target activation height",
    width: BitWidth::U32,
};
const PRIORITY: Prompt = Prompt {
    text: "Enter the entry priority: ",
    label: "Bad priority",
    width: BitWidth::U32,
};
const TARGET_PRICE: Prompt = Prompt {
    text: "Enter the new Factoshis Per EC: ",
    label: "Bad Factoshis Per EC",
    width: BitWidth::U64,
};

/// A signed FER entry wrapped for its chain.
#[derive(Debug, Clone)]
pub struct SignedEntry {
    pub fer: FerEntry,
    pub signature: [u8; 64],
    /// Chain entry: the signature as the only external id, the FER JSON as content.
    pub entry: Entry,
}

/// Holds the decoded keys and builds one signed entry from operator input.
#[derive(Debug)]
pub struct EntryBuilder {
    payment: KeyPair,
    signing: KeyPair,
    version: String,
    chain_id: String,
}

impl EntryBuilder {
    /// Decode both private keys from `config` and check its chain id.
    pub fn from_config(config: &Config) -> Result<Self, BuildError> {
        factom::parse_chain_id(config.chain_id())?;
        let payment = KeyPair::from_hex(&config.payment_private_key, KeyRole::Payment)?;
        let signing = KeyPair::from_hex(&config.signing_private_key, KeyRole::Signing)?;
        tracing::debug!(
            payment_public = %hex::encode(payment.public_bytes()),
            signing_public = %hex::encode(signing.public_bytes()),
            "keys decoded"
        );
        Ok(Self {
            payment,
            signing,
            version: config.version.clone(),
            chain_id: config.chain_id().to_string(),
        })
    }

    /// Write to a different chain than the configured one.
    pub fn with_chain_id(mut self, chain_id: impl Into<String>) -> Result<Self, BuildError> {
        let chain_id = chain_id.into();
        factom::parse_chain_id(&chain_id)?;
        self.chain_id = chain_id;
        Ok(self)
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// The entry credit address that pays for the commit.
    pub fn paying_address(&self) -> EcAddress {
        EcAddress::new(self.payment.clone())
    }

    /// Prompt for the four numeric fields, in order. Stops at the first bad answer.
    pub fn read_entry<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        out: &mut W,
    ) -> Result<FerEntry, BuildError> {
        let mut ask = |p: &Prompt| input::read_unsigned_int(reader, out, p.text, p.label, p.width);

        // Widths are enforced by the reader.
        let expiration_height = ask(&EXPIRATION_HEIGHT)? as u32;
        let target_activation_height = ask(&TARGET_ACTIVATION_HEIGHT)? as u32;
        let priority = ask(&PRIORITY)? as u32;
        let target_price = ask(&TARGET_PRICE)?;

        Ok(FerEntry {
            expiration_height,
            target_activation_height,
            priority,
            target_price,
            version: self.version.clone(),
        })
    }

    /// Serialize and sign `fer`, and wrap it in a chain entry.
    pub fn sign(&self, fer: FerEntry) -> Result<SignedEntry, BuildError> {
        let content = fer.to_json().map_err(BuildError::Serialization)?;
        let signature = self.signing.sign(&content);
        tracing::info!(
            chain_id = %self.chain_id,
            content_len = content.len(),
            "entry signed"
        );

        let entry = Entry {
            chain_id: self.chain_id.clone(),
            ext_ids: vec![signature.to_vec()],
            content,
        };
        Ok(SignedEntry {
            fer,
            signature,
            entry,
        })
    }

    /// Read the entry fields from the operator, then sign.
    pub fn build<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        out: &mut W,
    ) -> Result<SignedEntry, BuildError> {
        let fer = self.read_entry(reader, out)?;
        self.sign(fer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FER_CHAIN_ID;
    use crate::input::InputCause;
    use ed25519_dalek::{Signature, Verifier};
    use std::io::Cursor;

    fn key_hex(seed: u8) -> String {
        hex::encode(KeyPair::from_seed(&[seed; 32]).to_private_bytes())
    }

    fn config() -> Config {
        Config {
            payment_private_key: key_hex(1),
            signing_private_key: key_hex(2),
            version: "1.0".into(),
            chain_id: None,
        }
    }

    fn build(answers: &str) -> (Result<SignedEntry, BuildError>, String) {
        let builder = EntryBuilder::from_config(&config()).unwrap();
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = builder.build(&mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn builds_signed_entry() {
        let (result, prompts) = build("100\n50\n1\n50000\n");
        let signed = result.unwrap();

        assert_eq!(
            signed.fer,
            FerEntry {
                expiration_height: 100,
                target_activation_height: 50,
                priority: 1,
                target_price: 50_000,
                version: "1.0".into(),
            }
        );
        assert_eq!(signed.entry.chain_id, FER_CHAIN_ID);
        assert_eq!(signed.entry.ext_ids, vec![signed.signature.to_vec()]);
        assert_eq!(signed.entry.content, signed.fer.to_json().unwrap());
        assert!(prompts.contains("expiration height"));
        assert!(prompts.contains("Factoshis Per EC"));
    }

    #[test]
    fn signature_is_by_signing_key() {
        let (result, _) = build("1\n2\n3\n4\n");
        let signed = result.unwrap();
        let signing = KeyPair::from_seed(&[2u8; 32]);
        let sig = Signature::from_bytes(&signed.signature);
        assert!(signing.public_key().verify(&signed.entry.content, &sig).is_ok());
    }

    #[test]
    fn first_bad_answer_stops_prompting() {
        let (result, prompts) = build("100\nabc\n1\n50000\n");
        match result {
            Err(BuildError::Input(e)) => {
                assert_eq!(e.label, "Bad target activation height");
                assert!(matches!(e.cause, InputCause::NotANumber { .. }));
            }
            other => panic!("expected input error, got {other:?}"),
        }
        assert!(!prompts.contains("priority"));
        assert!(!prompts.contains("Factoshis"));
    }

    #[test]
    fn height_over_32_bits_is_rejected() {
        let (result, _) = build("4294967296\n");
        assert!(matches!(result, Err(BuildError::Input(_))));
    }

    #[test]
    fn bad_keys_fail_before_prompting() {
        let mut cfg = config();
        cfg.signing_private_key = "not hex".into();
        let err = EntryBuilder::from_config(&cfg).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Key(ref e) if e.which() == KeyRole::Signing
        ));

        let mut cfg = config();
        cfg.payment_private_key = "abcd".into();
        let err = EntryBuilder::from_config(&cfg).unwrap_err();
        assert!(matches!(
            err,
            BuildError::Key(KeyDecodeError::WrongLength { which: KeyRole::Payment, len: 2 })
        ));
    }

    #[test]
    fn chain_id_override() {
        let builder = EntryBuilder::from_config(&config())
            .unwrap()
            .with_chain_id("ab".repeat(32))
            .unwrap();
        assert_eq!(builder.chain_id(), "ab".repeat(32));
    }

    #[test]
    fn bad_chain_id_is_rejected_up_front() {
        let mut cfg = config();
        cfg.chain_id = Some("nope".into());
        assert!(matches!(
            EntryBuilder::from_config(&cfg),
            Err(BuildError::ChainId(FactomError::InvalidChainId { .. }))
        ));

        let builder = EntryBuilder::from_config(&config()).unwrap();
        assert!(matches!(
            builder.with_chain_id("ab"),
            Err(BuildError::ChainId(FactomError::InvalidChainId { .. }))
        ));
    }

    #[test]
    fn paying_address_comes_from_payment_key() {
        let builder = EntryBuilder::from_config(&config()).unwrap();
        let expected = EcAddress::new(KeyPair::from_seed(&[1u8; 32]));
        assert_eq!(builder.paying_address().pub_string(), expected.pub_string());
    }
}
