// SPDX-License-Identifier: MIT OR Apache-2.0

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::de::Error as SerdeError;
use serde::{Deserialize, Serialize};
use serde_bytes::{ByteBuf as SerdeByteBuf, Bytes as SerdeBytes};

use crate::crypto::x25519::{PublicKey, SecretKey, X25519Error};
use crate::psk::{PSK_SIZE, Psk};

/// Helper method for `serde` to serialize key material into a base64 string when using a human
/// readable encoding (JSON), otherwise it serializes the bytes directly (CBOR).
pub fn serialize_base64<S>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if serializer.is_human_readable() {
        serializer.serialize_str(&BASE64.encode(value))
    } else {
        SerdeBytes::new(value).serialize(serializer)
    }
}

/// Helper method for `serde` to deserialize from a base64 string into bytes when using a human
/// readable encoding (JSON), otherwise it deserializes the bytes directly (CBOR).
pub fn deserialize_base64<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    if deserializer.is_human_readable() {
        let value = String::deserialize(deserializer)?;
        BASE64.decode(&value).map_err(SerdeError::custom)
    } else {
        let bytes = <SerdeByteBuf>::deserialize(deserializer)?;
        Ok(bytes.to_vec())
    }
}

impl Serialize for SecretKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_base64(self.as_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for SecretKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes = deserialize_base64(deserializer)?;

        bytes
            .as_slice()
            .try_into()
            .map_err(|err: X25519Error| SerdeError::custom(err.to_string()))
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_base64(self.as_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes = deserialize_base64(deserializer)?;

        bytes
            .as_slice()
            .try_into()
            .map_err(|err: X25519Error| SerdeError::custom(err.to_string()))
    }
}

impl Serialize for Psk {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serialize_base64(self.as_bytes(), serializer)
    }
}

impl<'de> Deserialize<'de> for Psk {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes = deserialize_base64(deserializer)?;

        let checked_bytes: [u8; PSK_SIZE] = bytes.as_slice().try_into().map_err(|_| {
            SerdeError::custom(format!(
                "invalid pre-shared key length {} bytes, expected {} bytes",
                bytes.len(),
                PSK_SIZE
            ))
        })?;

        Ok(Psk::from_bytes(checked_bytes))
    }
}

#[cfg(test)]
mod tests {
    use crate::crypto::x25519::{PublicKey, SecretKey};
    use crate::psk::Psk;

    #[test]
    fn serialize() {
        let public_key: PublicKey = "hSDwCYkwp1R0i33ctD73Wg2/Og0mOBr066SpjqqbTmo="
            .parse()
            .unwrap();

        // Serialize JSON (human-readable base64 encoding)
        let json = serde_json::to_string(&public_key).unwrap();
        assert_eq!(json, "\"hSDwCYkwp1R0i33ctD73Wg2/Og0mOBr066SpjqqbTmo=\"");

        // Serialize CBOR (non human-readable byte encoding)
        let mut bytes: Vec<u8> = Vec::new();
        ciborium::ser::into_writer(&public_key, &mut bytes).unwrap();
        // Byte-string header followed by the raw 32 bytes.
        assert_eq!(&bytes[..2], &[88, 32]);
        assert_eq!(&bytes[2..], public_key.as_bytes());
    }

    #[test]
    fn deserialize() {
        let json = "\"dwdtCnMYpX08FsFyUbJmRd9ML4frwJkqsXf7pR25LCo=\"";
        let secret_key: SecretKey = serde_json::from_str(json).unwrap();
        assert_eq!(
            secret_key.to_base64(),
            "dwdtCnMYpX08FsFyUbJmRd9ML4frwJkqsXf7pR25LCo="
        );

        // Round-trip through CBOR.
        let psk = Psk::from_peers("AAA=", "BBB=", "");
        let mut bytes: Vec<u8> = Vec::new();
        ciborium::ser::into_writer(&psk, &mut bytes).unwrap();
        let decoded: Psk = ciborium::de::from_reader(&bytes[..]).unwrap();
        assert_eq!(psk, decoded);
    }

    #[test]
    fn invalid_length() {
        let json = "\"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA==\"";
        let result: Result<PublicKey, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
