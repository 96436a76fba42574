// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic pre-shared key derivation for a pair of peers.
#[cfg(not(test))]
use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use subtle::ConstantTimeEq;
use zeroize::ZeroizeOnDrop;

use crate::crypto::sha2::{SHA256_DIGEST_SIZE, sha2_256};

/// Size of pre-shared keys.
pub const PSK_SIZE: usize = SHA256_DIGEST_SIZE;

/// Pre-shared key, the SHA2-256 digest of a canonical message built from a
/// salt and two peer identifiers.
///
/// Same hygiene as [`crate::SecretKey`]: zeroized on drop, constant-time
/// comparison, masked debug output.
#[derive(Clone, Eq, ZeroizeOnDrop)]
#[cfg_attr(test, derive(Debug))]
pub struct Psk([u8; PSK_SIZE]);

impl Psk {
    /// Derives the pre-shared key for a pair of peers.
    ///
    /// The identifiers are sorted byte-wise before hashing, so the result is
    /// the same no matter in which order the peers are given. They are
    /// treated as opaque text and not validated as keys. Colons inside
    /// identifiers are not escaped in the canonical message.
    pub fn from_peers(peer_a: &str, peer_b: &str, salt: &str) -> Self {
        let (low, high) = if peer_a <= peer_b {
            (peer_a, peer_b)
        } else {
            (peer_b, peer_a)
        };

        // Canonical message: `salt:low:high`.
        Self(sha2_256(&[
            salt.as_bytes(),
            b":",
            low.as_bytes(),
            b":",
            high.as_bytes(),
        ]))
    }

    pub fn from_bytes(bytes: [u8; PSK_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PSK_SIZE] {
        &self.0
    }

    pub fn to_bytes(&self) -> [u8; PSK_SIZE] {
        self.0
    }

    /// Encodes the pre-shared key as padded standard base64.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0)
    }
}

impl PartialEq for Psk {
    fn eq(&self, other: &Self) -> bool {
        // Constant-time comparison.
        bool::from(self.0.ct_eq(&other.0))
    }
}

#[cfg(not(test))]
impl fmt::Debug for Psk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not reveal secret values when printing debug info.
        f.debug_struct("Psk").field("value", &"***").finish()
    }
}
