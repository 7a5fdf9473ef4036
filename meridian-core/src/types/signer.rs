//! Signer key variants and their textual addresses.
//!
//! An account may authorize signatures from four kinds of keys: an
//! ordinary ed25519 public key, the hash of a pre-authorized
//! transaction, the SHA-256 image of an arbitrary preimage (hash-x),
//! and an ed25519 key bound to a fixed payload. The set is closed at
//! the protocol level, so a plain enum models it.

use serde::{Deserialize, Serialize};

use crate::crypto::sha256;
use crate::error::StrkeyError;
use crate::strkey;

/// One of the four accepted signer key variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignerKey {
    /// Ordinary ed25519 public key (`G` address).
    Ed25519([u8; 32]),
    /// Hash of a pre-authorized transaction (`T` string).
    PreAuthTx([u8; 32]),
    /// SHA-256 image of a preimage (`X` string).
    HashX([u8; 32]),
    /// Ed25519 key bound to a fixed payload (`P` string).
    Ed25519SignedPayload(SignedPayload),
}

/// An ed25519 public key together with a fixed 1-64 byte payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedPayload {
    ed25519: [u8; 32],
    payload: Vec<u8>,
}

impl SignedPayload {
    /// Build a signed payload, enforcing the payload length bounds.
    pub fn new(ed25519: [u8; 32], payload: Vec<u8>) -> Result<Self, StrkeyError> {
        if payload.is_empty() || payload.len() > strkey::MAX_PAYLOAD_LEN {
            return Err(StrkeyError::InvalidPayloadLength);
        }
        Ok(SignedPayload { ed25519, payload })
    }

    /// The raw ed25519 public key.
    pub fn ed25519(&self) -> &[u8; 32] {
        &self.ed25519
    }

    /// The payload bytes, without wire padding.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

impl SignerKey {
    /// Decode a signer key from any of its four textual forms.
    ///
    /// The leading letter selects the variant; the rest of the string
    /// must decode losslessly under that variant's rules.
    pub fn from_address(address: &str) -> Result<Self, StrkeyError> {
        match address.as_bytes().first() {
            Some(b'G') => Ok(SignerKey::Ed25519(strkey::decode_ed25519_public_key(address)?)),
            Some(b'T') => Ok(SignerKey::PreAuthTx(strkey::decode_pre_auth_tx(address)?)),
            Some(b'X') => Ok(SignerKey::HashX(strkey::decode_sha256_hash(address)?)),
            Some(b'P') => {
                let (ed25519, payload) = strkey::decode_signed_payload(address)?;
                Ok(SignerKey::Ed25519SignedPayload(SignedPayload { ed25519, payload }))
            }
            _ => Err(StrkeyError::InvalidVersionByte),
        }
    }

    /// Render the signer key in its textual form.
    pub fn to_address(&self) -> Result<String, StrkeyError> {
        match self {
            SignerKey::Ed25519(key) => Ok(strkey::encode_ed25519_public_key(key)),
            SignerKey::PreAuthTx(hash) => Ok(strkey::encode_pre_auth_tx(hash)),
            SignerKey::HashX(hash) => Ok(strkey::encode_sha256_hash(hash)),
            SignerKey::Ed25519SignedPayload(sp) => {
                strkey::encode_signed_payload(&sp.ed25519, &sp.payload)
            }
        }
    }

    /// Build a hash-x signer key from its preimage.
    pub fn from_preimage(preimage: &[u8]) -> Self {
        SignerKey::HashX(sha256(preimage))
    }
}
