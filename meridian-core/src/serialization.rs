//! Deterministic binary serialization for protocol structures.
//!
//! Wire values (assets, signer keys, signatures) are serialized with
//! bincode under a fixed configuration so that identical values always
//! produce identical bytes on every platform:
//! - Fixed-size integer encoding (not variable-length)
//! - Little-endian byte order
//! - Reject trailing bytes on deserialization

use bincode::Options;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::SerializationError;

fn config() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .reject_trailing_bytes()
}

/// Serialize a value to bytes using the deterministic configuration.
pub fn serialize<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    config()
        .serialize(value)
        .map_err(|e| SerializationError::EncodeFailed(e.to_string()))
}

/// Deserialize a value from bytes.
///
/// Returns an error if the bytes are malformed, carry trailing data,
/// or don't match the expected type.
pub fn deserialize<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    config()
        .deserialize(bytes)
        .map_err(|e| SerializationError::DecodeFailed(e.to_string()))
}

/// Get the serialized size of a value without serializing it.
pub fn serialized_size<T: Serialize>(value: &T) -> Result<u64, SerializationError> {
    config()
        .serialized_size(value)
        .map_err(|e| SerializationError::EncodeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::KeyPair;
    use crate::types::{Asset, SignedPayload, SignerKey};

    #[test]
    fn test_asset_round_trip() {
        let issuer = KeyPair::generate().address();
        let asset = Asset::credit("USDC", &issuer).unwrap();

        let bytes = serialize(&asset).unwrap();
        let recovered: Asset = deserialize(&bytes).unwrap();
        assert_eq!(asset, recovered);
    }

    #[test]
    fn test_signer_key_round_trip() {
        let key = SignerKey::Ed25519SignedPayload(
            SignedPayload::new([4u8; 32], vec![1, 2, 3]).unwrap(),
        );

        let bytes = serialize(&key).unwrap();
        let recovered: SignerKey = deserialize(&bytes).unwrap();
        assert_eq!(key, recovered);
    }

    #[test]
    fn test_determinism() {
        let asset = Asset::native();
        assert_eq!(serialize(&asset).unwrap(), serialize(&asset).unwrap());
    }

    #[test]
    fn test_rejects_trailing_bytes() {
        let mut bytes = serialize(&Asset::native()).unwrap();
        bytes.push(0xFF);

        let result: Result<Asset, _> = deserialize(&bytes);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialized_size_matches() {
        let key = SignerKey::PreAuthTx([7u8; 32]);
        let size = serialized_size(&key).unwrap();
        assert_eq!(size, serialize(&key).unwrap().len() as u64);
    }
}
