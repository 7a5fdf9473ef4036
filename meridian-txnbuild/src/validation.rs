//! Field validators for operation builders.
//!
//! Every user-supplied field of an operation (account keys, signer
//! keys, assets, amounts) passes through one of these gates before the
//! operation is assembled into a transaction. Each validator either
//! returns `Ok` or a [`FieldError`] naming what was wrong; nothing here
//! retries, recovers, or touches anything outside its arguments.

use meridian_core::types::build_assets;
use meridian_core::{amount, strkey, AssetType, SignerKey};

use crate::asset::{Asset, BasicAsset, ChangeTrustAsset};
use crate::error::FieldError;

/// A numeric field value: either already in scaled (10^-7) units or
/// decimal text that still needs parsing.
///
/// Operation structs carry amounts in both shapes, so the validators
/// accept either through one sum type instead of two entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AmountValue {
    /// Already scaled to 10^-7 units; no further scaling is applied.
    Units(i64),
    /// Base-10 decimal text, scaled during validation.
    Text(String),
}

impl From<i64> for AmountValue {
    fn from(value: i64) -> Self {
        AmountValue::Units(value)
    }
}

impl From<&str> for AmountValue {
    fn from(value: &str) -> Self {
        AmountValue::Text(value.to_string())
    }
}

impl From<String> for AmountValue {
    fn from(value: String) -> Self {
        AmountValue::Text(value)
    }
}

/// Validate and scale an amount field.
///
/// Text values parse as base-10 decimals with at most 7 fractional
/// digits; integer values are taken as already scaled. Negative
/// amounts are rejected in both shapes.
pub fn parse_amount<V: Into<AmountValue>>(value: V) -> Result<i64, FieldError> {
    let scaled = match value.into() {
        AmountValue::Units(units) => units,
        AmountValue::Text(text) => amount::parse(&text)?,
    };

    if scaled < 0 {
        return Err(FieldError::NegativeAmount);
    }
    Ok(scaled)
}

/// Validate an account public key field.
pub fn validate_public_key(public_key: &str) -> Result<(), FieldError> {
    if public_key.is_empty() {
        return Err(FieldError::UndefinedPublicKey);
    }

    if !strkey::is_valid_ed25519_public_key(public_key) {
        return Err(FieldError::InvalidPublicKey { key: public_key.to_string() });
    }
    Ok(())
}

/// Validate a signer key field.
///
/// Any of the four signer-key variants is accepted; the protocol's
/// notion of "signer" is not restricted to plain account keys.
pub fn validate_signer_key(signer_key: &str) -> Result<(), FieldError> {
    if signer_key.is_empty() {
        return Err(FieldError::UndefinedSignerKey);
    }

    if SignerKey::from_address(signer_key).is_err() {
        return Err(FieldError::InvalidSignerKey { key: signer_key.to_string() });
    }
    Ok(())
}

/// Validate an asset used as a payment or trade asset.
///
/// The native asset passes with no further checks; a credit asset must
/// carry a well-formed code and a valid issuer.
pub fn validate_asset<A: BasicAsset>(asset: Option<&A>) -> Result<(), FieldError> {
    let asset = asset.ok_or(FieldError::UndefinedAsset)?;

    if asset.is_native() {
        return Ok(());
    }

    asset.asset_type()?;

    validate_public_key(asset.issuer()).map_err(|e| FieldError::AssetIssuer(Box::new(e)))?;

    Ok(())
}

/// Validate an asset of which only the code matters.
///
/// Trust-authorization operations ignore the issuer field even when it
/// is present, so only the code is checked. The native asset is never
/// acceptable to these operations.
pub fn validate_asset_code<A: BasicAsset>(asset: Option<&A>) -> Result<(), FieldError> {
    let asset = asset.ok_or(FieldError::UndefinedAsset)?;

    if asset.is_native() {
        return Err(FieldError::NativeAssetNotAllowed);
    }

    asset.asset_type()?;
    Ok(())
}

/// Validate an asset used to establish or modify a trustline.
///
/// Runs the code-only policy first, then requires a valid issuer -
/// except for pool shares, which carry none.
pub fn validate_change_trust_asset(asset: Option<&ChangeTrustAsset>) -> Result<(), FieldError> {
    validate_asset_code(asset)?;

    let asset = match asset {
        Some(asset) => asset,
        None => return Err(FieldError::UndefinedAsset),
    };

    if asset.asset_type()? == AssetType::PoolShare {
        // No issuer for these to validate.
        return Ok(());
    }

    validate_public_key(asset.issuer()).map_err(|e| FieldError::AssetIssuer(Box::new(e)))
}

/// Parse a single asset in canonical string form.
///
/// The input must be exactly one canonical asset (`native` or
/// `CODE:ISSUER`); the list decoder returning zero or several assets
/// is an error here.
pub fn parse_asset_string(canonical: &str) -> Result<Asset, FieldError> {
    let assets = build_assets(canonical).map_err(FieldError::MalformedAssetString)?;

    if assets.len() != 1 {
        return Err(FieldError::NotSingleAsset);
    }

    Ok(Asset::from(&assets[0]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::LiquidityPoolId;
    use meridian_core::KeyPair;

    const KNOWN_ADDRESS: &str = "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ";

    #[test]
    fn test_empty_keys_are_undefined() {
        assert_eq!(validate_public_key(""), Err(FieldError::UndefinedPublicKey));
        assert_eq!(validate_signer_key(""), Err(FieldError::UndefinedSignerKey));
    }

    #[test]
    fn test_valid_public_key() {
        assert!(validate_public_key(KNOWN_ADDRESS).is_ok());
        assert!(validate_public_key(&KeyPair::generate().address()).is_ok());
    }

    #[test]
    fn test_corrupted_public_key_is_rejected() {
        let address = KeyPair::generate().address();
        let bytes = address.as_bytes();

        for i in 0..bytes.len() {
            let mut corrupted = bytes.to_vec();
            corrupted[i] = if corrupted[i] == b'A' { b'B' } else { b'A' };
            let corrupted = String::from_utf8(corrupted).unwrap();
            assert!(
                matches!(
                    validate_public_key(&corrupted),
                    Err(FieldError::InvalidPublicKey { .. })
                ),
                "flip at {} accepted",
                i
            );
        }
    }

    #[test]
    fn test_secret_seed_is_not_a_public_key() {
        let secret = KeyPair::generate().secret_seed();
        assert!(matches!(
            validate_public_key(&secret),
            Err(FieldError::InvalidPublicKey { .. })
        ));
    }

    #[test]
    fn test_signer_key_accepts_all_variants() {
        let bytes = [21u8; 32];
        let addresses = [
            strkey::encode_ed25519_public_key(&bytes),
            strkey::encode_pre_auth_tx(&bytes),
            strkey::encode_sha256_hash(&bytes),
            strkey::encode_signed_payload(&bytes, &[1, 2, 3]).unwrap(),
        ];

        for address in addresses {
            assert!(validate_signer_key(&address).is_ok(), "rejected {}", address);
        }
    }

    #[test]
    fn test_signer_key_rejects_seed_and_garbage() {
        let secret = KeyPair::generate().secret_seed();
        assert!(matches!(
            validate_signer_key(&secret),
            Err(FieldError::InvalidSignerKey { .. })
        ));
        assert!(matches!(
            validate_signer_key("garbage"),
            Err(FieldError::InvalidSignerKey { .. })
        ));
    }

    #[test]
    fn test_parse_amount_text() {
        assert_eq!(parse_amount("10.1234567").unwrap(), 101_234_567);
        assert_eq!(parse_amount("0").unwrap(), 0);
        assert!(matches!(
            parse_amount("10.12345678"),
            Err(FieldError::MalformedAmount(_))
        ));
        assert!(matches!(
            parse_amount("abc"),
            Err(FieldError::MalformedAmount(_))
        ));
    }

    #[test]
    fn test_parse_amount_rejects_negative() {
        assert_eq!(parse_amount(-1i64), Err(FieldError::NegativeAmount));
        assert_eq!(parse_amount("-1"), Err(FieldError::NegativeAmount));
    }

    #[test]
    fn test_parse_amount_units_pass_through() {
        assert_eq!(parse_amount(0i64).unwrap(), 0);
        assert_eq!(parse_amount(101_234_567i64).unwrap(), 101_234_567);
    }

    #[test]
    fn test_validate_asset_native_and_absent() {
        assert!(validate_asset(Some(&Asset::native())).is_ok());
        assert_eq!(
            validate_asset(None::<&Asset>),
            Err(FieldError::UndefinedAsset)
        );
    }

    #[test]
    fn test_validate_asset_checks_code_and_issuer() {
        let issuer = KeyPair::generate().address();
        assert!(validate_asset(Some(&Asset::credit("USD", &issuer))).is_ok());

        assert!(matches!(
            validate_asset(Some(&Asset::credit("US$", &issuer))),
            Err(FieldError::InvalidAssetCode { .. })
        ));

        let err = validate_asset(Some(&Asset::credit("USD", "JUNK"))).unwrap_err();
        assert!(matches!(err, FieldError::AssetIssuer(_)));
        assert!(err.to_string().starts_with("asset issuer: "));
    }

    #[test]
    fn test_validate_asset_code_forbids_native() {
        assert_eq!(
            validate_asset_code(Some(&Asset::native())),
            Err(FieldError::NativeAssetNotAllowed)
        );
    }

    #[test]
    fn test_validate_asset_code_ignores_issuer() {
        // The operations this policy serves disregard the issuer field,
        // so a bogus issuer must not fail it.
        assert!(validate_asset_code(Some(&Asset::credit("USD", "JUNK"))).is_ok());
        assert!(matches!(
            validate_asset_code(Some(&Asset::credit("toolongassetcode", "JUNK"))),
            Err(FieldError::InvalidAssetCode { .. })
        ));
    }

    #[test]
    fn test_change_trust_pool_share_needs_no_issuer() {
        let asset = ChangeTrustAsset::pool_share(LiquidityPoolId([7u8; 32]));
        assert!(validate_change_trust_asset(Some(&asset)).is_ok());
    }

    #[test]
    fn test_change_trust_rejects_native_and_bad_issuer() {
        assert_eq!(
            validate_change_trust_asset(Some(&ChangeTrustAsset::Native)),
            Err(FieldError::NativeAssetNotAllowed)
        );

        let err =
            validate_change_trust_asset(Some(&ChangeTrustAsset::credit("USD", "JUNK")))
                .unwrap_err();
        assert!(err.to_string().starts_with("asset issuer: "));
    }

    #[test]
    fn test_change_trust_accepts_valid_credit() {
        let issuer = KeyPair::generate().address();
        let asset = ChangeTrustAsset::credit("USDCOIN", &issuer);
        assert!(validate_change_trust_asset(Some(&asset)).is_ok());
    }

    #[test]
    fn test_parse_asset_string_native() {
        assert_eq!(parse_asset_string("native").unwrap(), Asset::Native);
    }

    #[test]
    fn test_parse_asset_string_credit() {
        let asset = parse_asset_string(&format!("USD:{}", KNOWN_ADDRESS)).unwrap();
        assert_eq!(asset, Asset::credit("USD", KNOWN_ADDRESS));
    }

    #[test]
    fn test_parse_asset_string_rejects_malformed() {
        assert!(matches!(
            parse_asset_string("USD:BAD:EXTRA"),
            Err(FieldError::MalformedAssetString(_))
        ));
        assert!(matches!(
            parse_asset_string(&format!("USD:{}", "G".repeat(56))),
            Err(FieldError::MalformedAssetString(_))
        ));
    }

    #[test]
    fn test_parse_asset_string_requires_exactly_one() {
        let err = parse_asset_string("").unwrap_err();
        assert_eq!(err, FieldError::NotSingleAsset);
        assert_eq!(err.to_string(), "expected exactly one asset");

        let two = format!("USD:{},EUR:{}", KNOWN_ADDRESS, KNOWN_ADDRESS);
        assert_eq!(parse_asset_string(&two), Err(FieldError::NotSingleAsset));
    }

    #[test]
    fn test_canonical_round_trip() {
        let issuer = KeyPair::generate().address();
        let assets = [
            Asset::native(),
            Asset::credit("USD", &issuer),
            Asset::credit("USDCOIN", issuer.as_str()),
        ];

        for asset in assets {
            assert!(validate_asset(Some(&asset)).is_ok());
            let reparsed = parse_asset_string(&asset.to_string()).unwrap();
            assert_eq!(reparsed, asset);
        }
    }
}
