//! Cryptographic primitives for the Meridian protocol.
//!
//! This module provides:
//! - Ed25519 key pair generation, signing, and verification
//! - Checksummed textual addresses for public keys and secret seeds
//! - SHA-256 hashing (hash-x signer keys are SHA-256 images)

mod hashing;
mod keys;

pub use hashing::sha256;
pub use keys::{KeyPair, PublicKey, Signature};
