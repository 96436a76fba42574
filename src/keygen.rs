// SPDX-License-Identifier: MIT OR Apache-2.0

//! String-level operations matching the key-handling commands of
//! wireguard-tools: `genkey`, `pubkey` and `genpsk`.
//!
//! All keys pass over this boundary as padded standard base64, the text
//! encoding WireGuard itself uses, so the outputs can be pasted directly
//! into peer configurations.
use thiserror::Error;

use crate::crypto::x25519::{SecretKey, X25519Error};
use crate::crypto::{Rng, RngError};
use crate::psk::Psk;

/// Generates a new X25519 private key, encoded as base64.
///
/// Each call seeds from the operating system's entropy source and returns an
/// independently random key.
pub fn generate_private_key() -> Result<String, KeyError> {
    let rng = Rng::from_os()?;
    let secret_key = SecretKey::generate(&rng)?;
    Ok(secret_key.to_base64())
}

/// Derives the public key matching a base64-encoded private key.
///
/// Deterministic: the same private key always yields the same public key.
pub fn derive_public_key(private_key: &str) -> Result<String, KeyError> {
    let secret_key: SecretKey = private_key.parse()?;
    Ok(secret_key.public_key().to_base64())
}

/// Derives a deterministic pre-shared key from two peer identifiers and a
/// salt, encoded as base64.
///
/// Symmetric in the two peers; pass an empty salt when none is needed. See
/// [`Psk::from_peers`] for the exact construction.
pub fn derive_psk(peer_a: &str, peer_b: &str, salt: &str) -> String {
    Psk::from_peers(peer_a, peer_b, salt).to_base64()
}

#[derive(Debug, Error)]
pub enum KeyError {
    #[error(transparent)]
    InvalidKeyEncoding(#[from] X25519Error),

    #[error(transparent)]
    RandomSourceUnavailable(#[from] RngError),
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as BASE64;

    use crate::crypto::x25519::X25519Error;

    use super::{KeyError, derive_psk, derive_public_key, generate_private_key};

    #[test]
    fn generated_keys_decode_to_32_bytes() {
        let private_key = generate_private_key().unwrap();
        assert_eq!(BASE64.decode(&private_key).unwrap().len(), 32);

        let public_key = derive_public_key(&private_key).unwrap();
        assert_eq!(BASE64.decode(&public_key).unwrap().len(), 32);
    }

    #[test]
    fn public_key_derivation_is_deterministic() {
        let private_key = generate_private_key().unwrap();
        assert_eq!(
            derive_public_key(&private_key).unwrap(),
            derive_public_key(&private_key).unwrap()
        );
    }

    #[test]
    fn rejects_invalid_base64() {
        let result = derive_public_key("not-base64!!");
        assert!(matches!(
            result,
            Err(KeyError::InvalidKeyEncoding(
                X25519Error::InvalidBase64Encoding(_)
            ))
        ));
    }

    #[test]
    fn rejects_wrong_key_length() {
        let short = BASE64.encode([0; 31]);
        let result = derive_public_key(&short);
        assert!(matches!(
            result,
            Err(KeyError::InvalidKeyEncoding(X25519Error::InvalidLength(
                31, 32
            )))
        ));
    }

    #[test]
    fn generated_keys_are_unique() {
        let keys: HashSet<String> = (0..10_000)
            .map(|_| generate_private_key().unwrap())
            .collect();
        assert_eq!(keys.len(), 10_000);
    }

    #[test]
    fn psk_matches_typed_derivation() {
        assert_eq!(
            derive_psk("AAA=", "BBB=", ""),
            "c45xYIzeFeF4NEzrlYorWk5tvoS7lOTSYTQeCSCzvv4="
        );
        assert_eq!(derive_psk("x", "y", "s"), derive_psk("y", "x", "s"));
    }
}
