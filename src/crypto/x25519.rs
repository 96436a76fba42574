// SPDX-License-Identifier: MIT OR Apache-2.0

//! X25519 key material in the base64 text encoding WireGuard uses on the
//! wire and in configuration files.
use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use subtle::ConstantTimeEq;
use thiserror::Error;
use zeroize::ZeroizeOnDrop;

use crate::crypto::{Rng, RngError};

/// Size of X25519 secret keys.
pub const SECRET_KEY_SIZE: usize = 32;

/// Size of X25519 public keys.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// X25519 secret key.
///
/// Holds the raw 32-byte scalar with best-effort hygiene: memory is zeroized
/// on drop, comparison runs in constant time and the value is hidden when
/// printing debug info.
#[derive(Clone, Eq, ZeroizeOnDrop)]
#[cfg_attr(test, derive(Debug))]
pub struct SecretKey([u8; SECRET_KEY_SIZE]);

impl SecretKey {
    /// Generates a new secret key from the given random number generator.
    ///
    /// Clamping of the scalar is left to the curve implementation, which
    /// accepts every 32-byte string.
    pub fn generate(rng: &Rng) -> Result<Self, RngError> {
        Ok(Self(rng.random_array()?))
    }

    pub fn from_bytes(bytes: [u8; SECRET_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_SIZE] {
        &self.0
    }

    pub fn to_bytes(&self) -> [u8; SECRET_KEY_SIZE] {
        self.0
    }

    /// Derives the matching public key by fixed-base scalar multiplication
    /// with the curve's base point.
    pub fn public_key(&self) -> PublicKey {
        let secret = x25519_dalek::StaticSecret::from(self.0);
        PublicKey(x25519_dalek::PublicKey::from(&secret).to_bytes())
    }

    /// Encodes the secret key as padded standard base64.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0)
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        // Constant-time comparison.
        bool::from(self.0.ct_eq(&other.0))
    }
}

#[cfg(not(test))]
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not reveal secret values when printing debug info.
        f.debug_struct("SecretKey").field("value", &"***").finish()
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = X25519Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let value_len = value.len();

        let checked_value: [u8; SECRET_KEY_SIZE] = value
            .try_into()
            .map_err(|_| X25519Error::InvalidLength(value_len, SECRET_KEY_SIZE))?;

        Ok(Self(checked_value))
    }
}

impl FromStr for SecretKey {
    type Err = X25519Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(BASE64.decode(value)?.as_slice())
    }
}

/// X25519 public key, always derived from a [`SecretKey`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    pub const fn from_bytes(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }

    /// Encodes the public key as padded standard base64.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = X25519Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let value_len = value.len();

        let checked_value: [u8; PUBLIC_KEY_SIZE] = value
            .try_into()
            .map_err(|_| X25519Error::InvalidLength(value_len, PUBLIC_KEY_SIZE))?;

        Ok(Self(checked_value))
    }
}

impl FromStr for PublicKey {
    type Err = X25519Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(BASE64.decode(value)?.as_slice())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base64())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey").field(&self.to_base64()).finish()
    }
}

/// Error types for X25519 key material.
#[derive(Debug, Error)]
pub enum X25519Error {
    /// Key has an invalid length.
    #[error("invalid key length {0} bytes, expected {1} bytes")]
    InvalidLength(usize, usize),

    /// Key string is not valid base64.
    #[error("invalid base64 encoding in key string")]
    InvalidBase64Encoding(#[from] base64::DecodeError),
}
