//! Wire-level assets and their canonical string form.
//!
//! An asset is either the network's native asset or a credit issued by
//! an account, identified by a short alphanumeric code and the issuer's
//! public key. Codes up to 4 characters and codes of 5 to 12 characters
//! are distinct wire variants; both store the code NUL-padded to the
//! variant's fixed width.
//!
//! The canonical string form is `native` for the native asset and
//! `CODE:ISSUER` for credits, with `ISSUER` in `G` address form. Lists
//! of assets are comma-separated canonical forms.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AssetError;
use crate::strkey;

/// Maximum asset code length in characters.
pub const MAX_CODE_LEN: usize = 12;

/// Wire type tag for an asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetType {
    /// The network's native asset.
    Native,
    /// Credit asset with a 1-4 character code.
    CreditAlphanum4,
    /// Credit asset with a 5-12 character code.
    CreditAlphanum12,
    /// Share in a liquidity pool.
    PoolShare,
}

/// Wire-level asset value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Asset {
    /// The network's native asset. Carries neither code nor issuer.
    Native,
    /// Credit asset with a 1-4 character code.
    CreditAlphanum4 {
        /// NUL-padded asset code.
        code: [u8; 4],
        /// Issuer's raw ed25519 public key.
        issuer: [u8; 32],
    },
    /// Credit asset with a 5-12 character code.
    CreditAlphanum12 {
        /// NUL-padded asset code.
        code: [u8; 12],
        /// Issuer's raw ed25519 public key.
        issuer: [u8; 32],
    },
}

/// Whether a string is a syntactically valid asset code:
/// 1 to 12 ASCII alphanumeric characters, case-sensitive.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= MAX_CODE_LEN
        && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

impl Asset {
    /// The native asset.
    pub fn native() -> Self {
        Asset::Native
    }

    /// Build a credit asset from a code and an issuer `G` address.
    ///
    /// The code length selects the wire variant; the issuer address must
    /// decode as an account public key.
    pub fn credit(code: &str, issuer_address: &str) -> Result<Self, AssetError> {
        if !is_valid_code(code) {
            return Err(AssetError::InvalidCode { code: code.to_string() });
        }

        let issuer = strkey::decode_ed25519_public_key(issuer_address)
            .map_err(|_| AssetError::InvalidIssuer { issuer: issuer_address.to_string() })?;

        if code.len() <= 4 {
            let mut padded = [0u8; 4];
            padded[..code.len()].copy_from_slice(code.as_bytes());
            Ok(Asset::CreditAlphanum4 { code: padded, issuer })
        } else {
            let mut padded = [0u8; 12];
            padded[..code.len()].copy_from_slice(code.as_bytes());
            Ok(Asset::CreditAlphanum12 { code: padded, issuer })
        }
    }

    /// The wire type tag.
    pub fn asset_type(&self) -> AssetType {
        match self {
            Asset::Native => AssetType::Native,
            Asset::CreditAlphanum4 { .. } => AssetType::CreditAlphanum4,
            Asset::CreditAlphanum12 { .. } => AssetType::CreditAlphanum12,
        }
    }

    /// The asset code with padding stripped; `None` for the native asset.
    pub fn code(&self) -> Option<String> {
        match self {
            Asset::Native => None,
            Asset::CreditAlphanum4 { code, .. } => Some(trim_code(code)),
            Asset::CreditAlphanum12 { code, .. } => Some(trim_code(code)),
        }
    }

    /// The issuer as a `G` address; `None` for the native asset.
    pub fn issuer(&self) -> Option<String> {
        match self {
            Asset::Native => None,
            Asset::CreditAlphanum4 { issuer, .. } | Asset::CreditAlphanum12 { issuer, .. } => {
                Some(strkey::encode_ed25519_public_key(issuer))
            }
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code(), self.issuer()) {
            (Some(code), Some(issuer)) => write!(f, "{}:{}", code, issuer),
            _ => write!(f, "native"),
        }
    }
}

fn trim_code(code: &[u8]) -> String {
    let end = code.iter().position(|&b| b == 0).unwrap_or(code.len());
    String::from_utf8_lossy(&code[..end]).into_owned()
}

/// Parse a comma-separated list of canonical asset strings.
///
/// The empty string is an empty list; each element must be `native` or
/// `CODE:ISSUER`.
pub fn build_assets(input: &str) -> Result<Vec<Asset>, AssetError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    input.split(',').map(parse_canonical).collect()
}

fn parse_canonical(canonical: &str) -> Result<Asset, AssetError> {
    if canonical == "native" {
        return Ok(Asset::Native);
    }

    let mut parts = canonical.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(code), Some(issuer), None) => Asset::credit(code, issuer),
        _ => Err(AssetError::InvalidCanonicalForm { input: canonical.to_string() }),
    }
}
