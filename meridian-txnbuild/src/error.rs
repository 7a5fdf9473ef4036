//! Error types for transaction-field validation.

use std::fmt;

use meridian_core::{AmountError, AssetError};

/// A failure detected while validating a single operation field.
///
/// Validators return these; attributing a failure to a named struct
/// field is the operation builder's job, via [`ValidationError`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    // Missing required fields
    /// The public key field is empty.
    UndefinedPublicKey,
    /// The signer key field is empty.
    UndefinedSignerKey,
    /// The asset field is absent.
    UndefinedAsset,

    // Malformed encodings
    /// The string is not a valid account public key.
    InvalidPublicKey {
        /// The rejected string.
        key: String,
    },
    /// The string is not a valid signer key in any accepted form.
    InvalidSignerKey {
        /// The rejected string.
        key: String,
    },
    /// The asset code breaks the 1-12 character alphanumeric rules.
    InvalidAssetCode {
        /// The rejected code.
        code: String,
    },
    /// The asset issuer failed public-key validation.
    AssetIssuer(Box<FieldError>),
    /// The native asset is forbidden for this operation.
    NativeAssetNotAllowed,

    // Domain violations
    /// The amount is negative.
    NegativeAmount,

    // Parse failures
    /// The amount text failed to parse or scale.
    MalformedAmount(AmountError),
    /// The canonical asset string failed to decode.
    MalformedAssetString(AssetError),
    /// The canonical asset string held zero or several assets.
    NotSingleAsset,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::UndefinedPublicKey => write!(f, "public key is undefined"),
            FieldError::UndefinedSignerKey => write!(f, "signer key is undefined"),
            FieldError::UndefinedAsset => write!(f, "asset is undefined"),
            FieldError::InvalidPublicKey { key } => {
                write!(f, "{} is not a valid account public key", key)
            }
            FieldError::InvalidSignerKey { key } => {
                write!(f, "{} is not a valid signer key", key)
            }
            FieldError::InvalidAssetCode { code } => {
                write!(f, "asset code must be 1 to 12 alphanumeric characters: {}", code)
            }
            FieldError::AssetIssuer(inner) => write!(f, "asset issuer: {}", inner),
            FieldError::NativeAssetNotAllowed => {
                write!(f, "native asset type is not allowed")
            }
            FieldError::NegativeAmount => write!(f, "amount can not be negative"),
            FieldError::MalformedAmount(e) => write!(f, "{}", e),
            FieldError::MalformedAssetString(e) => {
                write!(f, "error parsing asset string: {}", e)
            }
            FieldError::NotSingleAsset => write!(f, "expected exactly one asset"),
        }
    }
}

impl std::error::Error for FieldError {}

impl From<AmountError> for FieldError {
    fn from(e: AmountError) -> Self {
        FieldError::MalformedAmount(e)
    }
}

/// A validation failure attributed to a named operation field.
///
/// Operation builders construct these when a field of a named operation
/// struct fails validation; the validators themselves only return
/// [`FieldError`] values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    /// The struct field on which the validation error occurred.
    pub field: String,
    /// The validation error message.
    pub message: String,
}

impl ValidationError {
    /// Create a ValidationError for the given field and message.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field: {}, Error: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("amount", FieldError::NegativeAmount.to_string());
        assert_eq!(err.to_string(), "Field: amount, Error: amount can not be negative");
    }

    #[test]
    fn test_issuer_wrapping_prefixes_message() {
        let inner = FieldError::InvalidPublicKey { key: "JUNK".into() };
        let err = FieldError::AssetIssuer(Box::new(inner));
        assert_eq!(
            err.to_string(),
            "asset issuer: JUNK is not a valid account public key"
        );
    }

    #[test]
    fn test_amount_error_conversion() {
        let e: FieldError = AmountError::InvalidFormat { input: "x".into() }.into();
        assert!(matches!(e, FieldError::MalformedAmount(_)));
    }
}
