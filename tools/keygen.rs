//! Generate fresh payment and signing keys and print a ready-to-use config.
//!
//! Run with: cargo run --example keygen > FactomFER.conf
//!
//! Outputs:
//! - A `FactomFER.conf` body on stdout (keep it out of version control)
//! - The EC address that will pay for entries, on stderr (fund it before use)

fn main() {
    use ed25519_dalek::SigningKey;
    use fer_compose::factom::EcAddress;
    use fer_compose::keys::{KeyPair, KeyRole};
    use rand_core::OsRng;

    let payment = SigningKey::generate(&mut OsRng);
    let signing = SigningKey::generate(&mut OsRng);

    let payment_hex = hex::encode(payment.to_keypair_bytes());
    let signing_hex = hex::encode(signing.to_keypair_bytes());

    let payment_pair = KeyPair::from_hex(&payment_hex, KeyRole::Payment)
        .expect("generated key is 64 bytes");
    let ec = EcAddress::new(payment_pair);

    eprintln!("=== PAYING EC ADDRESS (fund with entry credits) ===");
    eprintln!("{}", ec.pub_string());
    eprintln!("\n=== SIGNING PUBLIC KEY ===");
    eprintln!("{}", hex::encode(signing.verifying_key().to_bytes()));
    eprintln!();

    println!("PaymentPrivateKey = \"{payment_hex}\"");
    println!("SigningPrivateKey = \"{signing_hex}\"");
    println!("Version = \"1.0\"");
}
