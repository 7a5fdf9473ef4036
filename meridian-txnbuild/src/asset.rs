//! Builder-level asset representations.
//!
//! Operation builders work with assets as plain code and issuer
//! strings; the wire form is only produced once an operation is
//! assembled. Two representations exist because different operations
//! accept different subsets: payment-style operations take [`Asset`],
//! trustline operations take [`ChangeTrustAsset`], which adds the
//! liquidity-pool-share variant.
//!
//! The [`BasicAsset`] trait is the capability set the validators
//! operate on; each validation policy is a plain function over it
//! rather than a method hierarchy.

use std::fmt;

use serde::{Deserialize, Serialize};

use meridian_core::types::is_valid_code;
use meridian_core::{AssetError, AssetType};

use crate::error::FieldError;

/// A credit asset as supplied by the caller: a code and an issuer
/// `G` address, both unvalidated until a validator runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditAsset {
    /// Asset code, 1-12 alphanumeric characters.
    pub code: String,
    /// Issuer account address.
    pub issuer: String,
}

/// A payment-style asset: native or an issued credit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Asset {
    /// The network's native asset.
    Native,
    /// An issued credit asset.
    Credit(CreditAsset),
}

/// Identifier of a liquidity pool.
///
/// Only its presence matters to this layer; validating pool contents
/// is the pool operations' business.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityPoolId(pub [u8; 32]);

/// An asset as referenced by trustline operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeTrustAsset {
    /// The network's native asset. Representable so that validators can
    /// reject it explicitly.
    Native,
    /// An issued credit asset.
    Credit(CreditAsset),
    /// A share in a liquidity pool. Carries no code or issuer.
    PoolShare(LiquidityPoolId),
}

/// Capability set shared by asset representations.
///
/// The three validation policies (general, code-only, trustline) are
/// plain functions selecting which of these capabilities to check.
pub trait BasicAsset {
    /// True for the network's native asset.
    fn is_native(&self) -> bool;

    /// The wire type tag, validating the asset code on the way.
    fn asset_type(&self) -> Result<AssetType, FieldError>;

    /// The issuer account address; empty for assets without one.
    fn issuer(&self) -> &str;
}

fn credit_asset_type(code: &str) -> Result<AssetType, FieldError> {
    if !is_valid_code(code) {
        return Err(FieldError::InvalidAssetCode { code: code.to_string() });
    }
    if code.len() <= 4 {
        Ok(AssetType::CreditAlphanum4)
    } else {
        Ok(AssetType::CreditAlphanum12)
    }
}

impl Asset {
    /// The native asset.
    pub fn native() -> Self {
        Asset::Native
    }

    /// A credit asset from a code and issuer address.
    pub fn credit(code: impl Into<String>, issuer: impl Into<String>) -> Self {
        Asset::Credit(CreditAsset {
            code: code.into(),
            issuer: issuer.into(),
        })
    }

    /// Convert to the wire-level representation.
    ///
    /// Fails if the code or issuer would not survive the trip.
    pub fn to_wire(&self) -> Result<meridian_core::Asset, AssetError> {
        match self {
            Asset::Native => Ok(meridian_core::Asset::Native),
            Asset::Credit(credit) => {
                meridian_core::Asset::credit(&credit.code, &credit.issuer)
            }
        }
    }
}

impl From<&meridian_core::Asset> for Asset {
    fn from(wire: &meridian_core::Asset) -> Self {
        match (wire.code(), wire.issuer()) {
            (Some(code), Some(issuer)) => Asset::Credit(CreditAsset { code, issuer }),
            _ => Asset::Native,
        }
    }
}

impl fmt::Display for Asset {
    /// Canonical form: `native` or `CODE:ISSUER`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Native => write!(f, "native"),
            Asset::Credit(credit) => write!(f, "{}:{}", credit.code, credit.issuer),
        }
    }
}

impl BasicAsset for Asset {
    fn is_native(&self) -> bool {
        matches!(self, Asset::Native)
    }

    fn asset_type(&self) -> Result<AssetType, FieldError> {
        match self {
            Asset::Native => Ok(AssetType::Native),
            Asset::Credit(credit) => credit_asset_type(&credit.code),
        }
    }

    fn issuer(&self) -> &str {
        match self {
            Asset::Native => "",
            Asset::Credit(credit) => &credit.issuer,
        }
    }
}

impl ChangeTrustAsset {
    /// A credit asset from a code and issuer address.
    pub fn credit(code: impl Into<String>, issuer: impl Into<String>) -> Self {
        ChangeTrustAsset::Credit(CreditAsset {
            code: code.into(),
            issuer: issuer.into(),
        })
    }

    /// A liquidity-pool share.
    pub fn pool_share(id: LiquidityPoolId) -> Self {
        ChangeTrustAsset::PoolShare(id)
    }
}

impl From<Asset> for ChangeTrustAsset {
    fn from(asset: Asset) -> Self {
        match asset {
            Asset::Native => ChangeTrustAsset::Native,
            Asset::Credit(credit) => ChangeTrustAsset::Credit(credit),
        }
    }
}

impl BasicAsset for ChangeTrustAsset {
    fn is_native(&self) -> bool {
        matches!(self, ChangeTrustAsset::Native)
    }

    fn asset_type(&self) -> Result<AssetType, FieldError> {
        match self {
            ChangeTrustAsset::Native => Ok(AssetType::Native),
            ChangeTrustAsset::Credit(credit) => credit_asset_type(&credit.code),
            ChangeTrustAsset::PoolShare(_) => Ok(AssetType::PoolShare),
        }
    }

    fn issuer(&self) -> &str {
        match self {
            ChangeTrustAsset::Credit(credit) => &credit.issuer,
            _ => "",
        }
    }
}
