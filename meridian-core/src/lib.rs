//! # Meridian Core
//!
//! Core key encodings, wire types, and serialization for the Meridian
//! protocol. This crate provides the foundation the transaction-building
//! crates rest on:
//! - Checksummed textual key encoding (base32 + CRC16 "strkey" form)
//! - Wire-level asset and signer-key tagged unions
//! - Canonical asset-string parsing
//! - Fixed-point amount parsing and formatting (7 decimal digits)
//! - Ed25519 key pairs, signing, and verification
//! - Deterministic binary serialization

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod amount;
pub mod crypto;
pub mod error;
pub mod serialization;
pub mod strkey;
pub mod types;

// Re-export commonly used types at crate root
pub use crypto::{KeyPair, PublicKey, Signature};
pub use error::{
    AmountError, AssetError, CoreError, CryptoError, SerializationError, StrkeyError,
};
pub use types::{build_assets, Asset, AssetType, SignedPayload, SignerKey};
