// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wg-keys` generates and derives key material compatible with the
//! [WireGuard](https://www.wireguard.com) VPN protocol: X25519 private and
//! public key pairs and a deterministic pre-shared key (PSK) derived from
//! two peer identifiers.
//!
//! This is a utility library, not a protocol implementation. There is no
//! handshake, no packet framing and no session state; configuration
//! management and transport live with the caller. Curve arithmetic is
//! delegated to [`x25519-dalek`](https://docs.rs/x25519-dalek).
//!
//! ## Key encoding
//!
//! All keys cross the API boundary as padded standard base64 of their raw 32
//! bytes, the canonical text encoding of WireGuard key material. Outputs are
//! byte-compatible with wireguard-tools' `genkey`, `pubkey` and `genpsk`
//! commands and can be pasted directly into peer configurations.
//!
//! ```
//! use wg_keys::{derive_public_key, generate_private_key};
//!
//! let private_key = generate_private_key()?;
//! let public_key = derive_public_key(&private_key)?;
//! # Ok::<(), wg_keys::KeyError>(())
//! ```
//!
//! ## Pre-shared keys
//!
//! [`derive_psk`] hashes an optional salt and the two peer identifiers
//! (sorted, so the derivation is symmetric) with SHA2-256. Both sides of a
//! tunnel derive the identical PSK from their pair of public keys without
//! further coordination.
//!
//! ```
//! let psk_1 = wg_keys::derive_psk("alice-pubkey", "bob-pubkey", "");
//! let psk_2 = wg_keys::derive_psk("bob-pubkey", "alice-pubkey", "");
//! assert_eq!(psk_1, psk_2);
//! ```
//!
//! Next to the string-level functions the typed layer ([`SecretKey`],
//! [`PublicKey`], [`Psk`]) is exported for callers which want to hold key
//! material as values rather than strings.
mod crypto;
mod keygen;
mod psk;
mod serde;

pub use crypto::x25519::{PUBLIC_KEY_SIZE, PublicKey, SECRET_KEY_SIZE, SecretKey, X25519Error};
pub use crypto::{Rng, RngError};
pub use keygen::{KeyError, derive_psk, derive_public_key, generate_private_key};
pub use psk::{PSK_SIZE, Psk};
