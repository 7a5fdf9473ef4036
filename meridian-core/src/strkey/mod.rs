//! Checksummed textual key encoding.
//!
//! Every piece of key material travels as text in a self-describing,
//! checksummed form: a one-byte version tag, the raw key data, and a
//! two-byte CRC16 appended little-endian, all rendered as unpadded
//! uppercase base32. The version byte is chosen so that each key kind
//! renders with a fixed leading letter (`G` for account keys, `S` for
//! secret seeds, and so on), which makes keys self-identifying to both
//! humans and parsers.
//!
//! Decoding is unforgiving: any checksum, version, length, or alphabet
//! violation is an error. A string either round-trips losslessly or is
//! rejected.

mod base32;
mod checksum;

use crate::error::StrkeyError;

/// Maximum byte length of a signed-payload payload.
pub const MAX_PAYLOAD_LEN: usize = 64;

/// Version byte for each key kind.
///
/// Each version byte places the encoded form under a distinct leading
/// letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Version {
    /// Account public key, rendered with a leading `G`.
    Ed25519PublicKey,
    /// Secret seed, rendered with a leading `S`.
    Ed25519SecretSeed,
    /// Pre-authorized transaction hash, rendered with a leading `T`.
    PreAuthTx,
    /// SHA-256 hash of a preimage, rendered with a leading `X`.
    Sha256Hash,
    /// Ed25519 public key plus a raw payload, rendered with a leading `P`.
    SignedPayload,
}

impl Version {
    /// The version byte placed in front of the key data.
    pub fn byte(self) -> u8 {
        match self {
            Version::Ed25519PublicKey => 6 << 3,
            Version::Ed25519SecretSeed => 18 << 3,
            Version::PreAuthTx => 19 << 3,
            Version::Sha256Hash => 23 << 3,
            Version::SignedPayload => 15 << 3,
        }
    }
}

/// Encode key data under the given version byte.
pub fn encode(version: Version, data: &[u8]) -> String {
    let mut payload = Vec::with_capacity(data.len() + 3);
    payload.push(version.byte());
    payload.extend_from_slice(data);
    let crc = checksum::crc16(&payload);
    payload.extend_from_slice(&crc.to_le_bytes());
    base32::encode(&payload)
}

/// Decode a key string, verifying checksum and version byte.
///
/// Returns the raw key data without the version byte or checksum.
/// Kind-specific length rules are enforced by the typed helpers.
pub fn decode(expected: Version, input: &str) -> Result<Vec<u8>, StrkeyError> {
    let raw = base32::decode(input)?;
    if raw.len() < 3 {
        return Err(StrkeyError::InvalidLength);
    }

    let (payload, crc_bytes) = raw.split_at(raw.len() - 2);
    let found = u16::from_le_bytes([crc_bytes[0], crc_bytes[1]]);
    if checksum::crc16(payload) != found {
        return Err(StrkeyError::InvalidChecksum);
    }

    if payload[0] != expected.byte() {
        return Err(StrkeyError::InvalidVersionByte);
    }

    Ok(payload[1..].to_vec())
}

fn decode_fixed32(version: Version, input: &str) -> Result<[u8; 32], StrkeyError> {
    let data = decode(version, input)?;
    let bytes: [u8; 32] = data
        .as_slice()
        .try_into()
        .map_err(|_| StrkeyError::InvalidPayloadLength)?;
    Ok(bytes)
}

/// Encode a 32-byte ed25519 public key as a `G` address.
pub fn encode_ed25519_public_key(key: &[u8; 32]) -> String {
    encode(Version::Ed25519PublicKey, key)
}

/// Decode a `G` address into the raw 32-byte public key.
pub fn decode_ed25519_public_key(input: &str) -> Result<[u8; 32], StrkeyError> {
    decode_fixed32(Version::Ed25519PublicKey, input)
}

/// Whether a string is a well-formed `G` address.
///
/// This is a pure encoding check: alphabet, length, version byte, and
/// checksum. It does not require the bytes to be a valid curve point.
pub fn is_valid_ed25519_public_key(input: &str) -> bool {
    decode_ed25519_public_key(input).is_ok()
}

/// Encode a 32-byte secret seed as an `S` string.
pub fn encode_ed25519_secret_seed(seed: &[u8; 32]) -> String {
    encode(Version::Ed25519SecretSeed, seed)
}

/// Decode an `S` string into the raw 32-byte secret seed.
pub fn decode_ed25519_secret_seed(input: &str) -> Result<[u8; 32], StrkeyError> {
    decode_fixed32(Version::Ed25519SecretSeed, input)
}

/// Encode a 32-byte pre-authorized transaction hash as a `T` string.
pub fn encode_pre_auth_tx(hash: &[u8; 32]) -> String {
    encode(Version::PreAuthTx, hash)
}

/// Decode a `T` string into the raw 32-byte transaction hash.
pub fn decode_pre_auth_tx(input: &str) -> Result<[u8; 32], StrkeyError> {
    decode_fixed32(Version::PreAuthTx, input)
}

/// Encode a 32-byte SHA-256 hash as an `X` string.
pub fn encode_sha256_hash(hash: &[u8; 32]) -> String {
    encode(Version::Sha256Hash, hash)
}

/// Decode an `X` string into the raw 32-byte hash.
pub fn decode_sha256_hash(input: &str) -> Result<[u8; 32], StrkeyError> {
    decode_fixed32(Version::Sha256Hash, input)
}

/// Encode an ed25519 public key plus payload as a `P` string.
///
/// The payload must be 1 to 64 bytes. On the wire it is preceded by a
/// 4-byte big-endian length and zero-padded to a 4-byte multiple.
pub fn encode_signed_payload(key: &[u8; 32], payload: &[u8]) -> Result<String, StrkeyError> {
    if payload.is_empty() || payload.len() > MAX_PAYLOAD_LEN {
        return Err(StrkeyError::InvalidPayloadLength);
    }

    let padded_len = payload.len().div_ceil(4) * 4;
    let mut data = Vec::with_capacity(32 + 4 + padded_len);
    data.extend_from_slice(key);
    data.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    data.extend_from_slice(payload);
    data.resize(32 + 4 + padded_len, 0);

    Ok(encode(Version::SignedPayload, &data))
}

/// Decode a `P` string into the public key and unpadded payload.
pub fn decode_signed_payload(input: &str) -> Result<([u8; 32], Vec<u8>), StrkeyError> {
    let data = decode(Version::SignedPayload, input)?;
    if data.len() < 32 + 4 {
        return Err(StrkeyError::InvalidPayloadLength);
    }

    let mut key = [0u8; 32];
    key.copy_from_slice(&data[..32]);

    let mut len_bytes = [0u8; 4];
    len_bytes.copy_from_slice(&data[32..36]);
    let payload_len = u32::from_be_bytes(len_bytes) as usize;
    if payload_len == 0 || payload_len > MAX_PAYLOAD_LEN {
        return Err(StrkeyError::InvalidPayloadLength);
    }

    let padded_len = payload_len.div_ceil(4) * 4;
    if data.len() != 32 + 4 + padded_len {
        return Err(StrkeyError::InvalidPayloadLength);
    }

    // Padding bytes must be zero, otherwise two strings would decode
    // to the same payload.
    if data[36 + payload_len..].iter().any(|&b| b != 0) {
        return Err(StrkeyError::InvalidPayloadLength);
    }

    Ok((key, data[36..36 + payload_len].to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_ADDRESS: &str = "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ";

    #[test]
    fn test_known_address_is_valid() {
        assert!(is_valid_ed25519_public_key(KNOWN_ADDRESS));
        assert_eq!(KNOWN_ADDRESS.len(), 56);
    }

    #[test]
    fn test_public_key_round_trip() {
        let key = [7u8; 32];
        let encoded = encode_ed25519_public_key(&key);
        assert_eq!(encoded.len(), 56);
        assert!(encoded.starts_with('G'));
        assert_eq!(decode_ed25519_public_key(&encoded).unwrap(), key);
    }

    #[test]
    fn test_leading_letters() {
        let bytes = [42u8; 32];
        assert!(encode_ed25519_secret_seed(&bytes).starts_with('S'));
        assert!(encode_pre_auth_tx(&bytes).starts_with('T'));
        assert!(encode_sha256_hash(&bytes).starts_with('X'));
        assert!(encode_signed_payload(&bytes, &[1, 2, 3]).unwrap().starts_with('P'));
    }

    #[test]
    fn test_fixed_kind_round_trips() {
        let bytes = [0xABu8; 32];
        assert_eq!(
            decode_ed25519_secret_seed(&encode_ed25519_secret_seed(&bytes)).unwrap(),
            bytes
        );
        assert_eq!(decode_pre_auth_tx(&encode_pre_auth_tx(&bytes)).unwrap(), bytes);
        assert_eq!(decode_sha256_hash(&encode_sha256_hash(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn test_flipping_any_character_is_rejected() {
        let encoded = encode_ed25519_public_key(&[13u8; 32]);
        let bytes = encoded.as_bytes();

        for i in 0..bytes.len() {
            let mut corrupted = bytes.to_vec();
            corrupted[i] = if corrupted[i] == b'A' { b'B' } else { b'A' };
            let corrupted = String::from_utf8(corrupted).unwrap();
            assert!(
                decode_ed25519_public_key(&corrupted).is_err(),
                "flip at {} accepted",
                i
            );
        }
    }

    #[test]
    fn test_wrong_version_byte() {
        let seed = encode_ed25519_secret_seed(&[9u8; 32]);
        assert_eq!(
            decode_ed25519_public_key(&seed),
            Err(StrkeyError::InvalidVersionByte)
        );
        assert!(!is_valid_ed25519_public_key(&seed));
    }

    #[test]
    fn test_rejects_truncation_and_case() {
        let encoded = encode_ed25519_public_key(&[5u8; 32]);
        assert!(decode_ed25519_public_key(&encoded[..55]).is_err());
        assert!(decode_ed25519_public_key(&encoded.to_lowercase()).is_err());
        assert!(decode_ed25519_public_key("").is_err());
    }

    #[test]
    fn test_rejects_wrong_data_length() {
        // Valid checksum and version byte, but 31 bytes of key data.
        let encoded = encode(Version::Ed25519PublicKey, &[1u8; 31]);
        assert_eq!(
            decode_ed25519_public_key(&encoded),
            Err(StrkeyError::InvalidPayloadLength)
        );
    }

    #[test]
    fn test_signed_payload_round_trip() {
        let key = [3u8; 32];
        for len in [1usize, 3, 4, 29, 32, 64] {
            let payload: Vec<u8> = (0..len as u8).collect();
            let encoded = encode_signed_payload(&key, &payload).unwrap();
            let (decoded_key, decoded_payload) = decode_signed_payload(&encoded).unwrap();
            assert_eq!(decoded_key, key);
            assert_eq!(decoded_payload, payload);
        }
    }

    #[test]
    fn test_signed_payload_length_bounds() {
        let key = [0u8; 32];
        assert_eq!(
            encode_signed_payload(&key, &[]),
            Err(StrkeyError::InvalidPayloadLength)
        );
        assert_eq!(
            encode_signed_payload(&key, &[0u8; 65]),
            Err(StrkeyError::InvalidPayloadLength)
        );
    }

    #[test]
    fn test_signed_payload_rejects_nonzero_padding() {
        // Hand-build wire data claiming a 5-byte payload but carrying
        // non-zero bytes in the 3 padding positions.
        let mut data = Vec::new();
        data.extend_from_slice(&[1u8; 32]);
        data.extend_from_slice(&5u32.to_be_bytes());
        data.extend_from_slice(&[9, 9, 9, 9, 9, 0xFF, 0xFF, 0xFF]);
        let encoded = encode(Version::SignedPayload, &data);
        assert_eq!(
            decode_signed_payload(&encoded),
            Err(StrkeyError::InvalidPayloadLength)
        );
    }
}
