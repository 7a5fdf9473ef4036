//! # Meridian Txnbuild
//!
//! Field validation and canonical asset parsing for building Meridian
//! transactions. Operation builders feed every user-supplied field -
//! account keys, signer keys, asset descriptors, amounts - through this
//! crate before assembling a transaction envelope; a malformed field
//! here would otherwise surface as a transaction the network rejects,
//! or worse, one that is silently wrong.
//!
//! All entry points are pure functions: they return `Ok` or a typed
//! error, hold no state between calls, and are safe to call from any
//! thread.
//!
//! ```rust
//! use meridian_txnbuild::{parse_amount, parse_asset_string, validate_public_key};
//!
//! let units = parse_amount("10.1234567").unwrap();
//! assert_eq!(units, 101_234_567);
//!
//! assert!(parse_asset_string("native").is_ok());
//! assert!(validate_public_key("").is_err());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod asset;
mod error;
mod validation;

pub use asset::{Asset, BasicAsset, ChangeTrustAsset, CreditAsset, LiquidityPoolId};
pub use error::{FieldError, ValidationError};
pub use validation::{
    parse_amount, parse_asset_string, validate_asset, validate_asset_code,
    validate_change_trust_asset, validate_public_key, validate_signer_key, AmountValue,
};
