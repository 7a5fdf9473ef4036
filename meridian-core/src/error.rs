//! Error types for the Meridian core crate.

use std::fmt;

/// Top-level error type for meridian-core operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Checksummed key encoding or decoding failed.
    Strkey(StrkeyError),
    /// Amount parsing failed.
    Amount(AmountError),
    /// Asset construction or canonical parsing failed.
    Asset(AssetError),
    /// Cryptographic operation failed.
    Crypto(CryptoError),
    /// Serialization or deserialization failed.
    Serialization(SerializationError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::Strkey(e) => write!(f, "strkey error: {}", e),
            CoreError::Amount(e) => write!(f, "amount error: {}", e),
            CoreError::Asset(e) => write!(f, "asset error: {}", e),
            CoreError::Crypto(e) => write!(f, "crypto error: {}", e),
            CoreError::Serialization(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<StrkeyError> for CoreError {
    fn from(e: StrkeyError) -> Self {
        CoreError::Strkey(e)
    }
}

impl From<AmountError> for CoreError {
    fn from(e: AmountError) -> Self {
        CoreError::Amount(e)
    }
}

impl From<AssetError> for CoreError {
    fn from(e: AssetError) -> Self {
        CoreError::Asset(e)
    }
}

impl From<CryptoError> for CoreError {
    fn from(e: CryptoError) -> Self {
        CoreError::Crypto(e)
    }
}

impl From<SerializationError> for CoreError {
    fn from(e: SerializationError) -> Self {
        CoreError::Serialization(e)
    }
}

/// Errors from decoding a checksummed key string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrkeyError {
    /// The string length is impossible for an unpadded base32 encoding,
    /// or the decoded payload is too short to hold a checksum.
    InvalidLength,
    /// A character outside the base32 alphabet (A-Z, 2-7).
    InvalidCharacter,
    /// The trailing CRC16 checksum does not match the payload.
    InvalidChecksum,
    /// The leading version byte does not match the expected key kind.
    InvalidVersionByte,
    /// Leftover bits in the final base32 symbol are non-zero.
    NonCanonical,
    /// The decoded payload has the wrong size for its key kind.
    InvalidPayloadLength,
}

impl fmt::Display for StrkeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrkeyError::InvalidLength => write!(f, "invalid encoded length"),
            StrkeyError::InvalidCharacter => write!(f, "invalid base32 character"),
            StrkeyError::InvalidChecksum => write!(f, "checksum mismatch"),
            StrkeyError::InvalidVersionByte => write!(f, "version byte mismatch"),
            StrkeyError::NonCanonical => write!(f, "non-canonical base32 encoding"),
            StrkeyError::InvalidPayloadLength => write!(f, "invalid payload length"),
        }
    }
}

impl std::error::Error for StrkeyError {}

/// Errors from parsing a decimal amount string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AmountError {
    /// The input is not a base-10 decimal number.
    InvalidFormat {
        /// The rejected input.
        input: String,
    },
    /// More than 7 digits follow the decimal point.
    TooPrecise {
        /// The rejected input.
        input: String,
    },
    /// The scaled value does not fit in a signed 64-bit integer.
    Overflow {
        /// The rejected input.
        input: String,
    },
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::InvalidFormat { input } => {
                write!(f, "invalid amount format: {}", input)
            }
            AmountError::TooPrecise { input } => {
                write!(f, "amount has more than 7 decimal places: {}", input)
            }
            AmountError::Overflow { input } => {
                write!(f, "amount overflows a signed 64-bit integer: {}", input)
            }
        }
    }
}

impl std::error::Error for AmountError {}

/// Errors from building an asset or parsing its canonical string form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetError {
    /// The string is neither `native` nor `CODE:ISSUER`.
    InvalidCanonicalForm {
        /// The rejected input.
        input: String,
    },
    /// The asset code is not 1-12 ASCII alphanumeric characters.
    InvalidCode {
        /// The rejected code.
        code: String,
    },
    /// The issuer is not a valid account public key.
    InvalidIssuer {
        /// The rejected issuer string.
        issuer: String,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::InvalidCanonicalForm { input } => {
                write!(f, "{} is not in canonical asset form", input)
            }
            AssetError::InvalidCode { code } => {
                write!(f, "asset code must be 1 to 12 alphanumeric characters: {}", code)
            }
            AssetError::InvalidIssuer { issuer } => {
                write!(f, "{} is not a valid issuer account", issuer)
            }
        }
    }
}

impl std::error::Error for AssetError {}

/// Errors related to cryptographic operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CryptoError {
    /// The public key bytes do not form a valid curve point.
    InvalidPublicKey,
    /// The secret seed is malformed.
    InvalidSeed,
    /// Signature verification failed (signature doesn't match message/key).
    SignatureVerificationFailed,
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::InvalidPublicKey => write!(f, "invalid public key format"),
            CryptoError::InvalidSeed => write!(f, "invalid secret seed format"),
            CryptoError::SignatureVerificationFailed => write!(f, "signature verification failed"),
        }
    }
}

impl std::error::Error for CryptoError {}

/// Errors related to serialization and deserialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to encode data to bytes.
    EncodeFailed(String),
    /// Failed to decode data from bytes.
    DecodeFailed(String),
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializationError::EncodeFailed(msg) => write!(f, "encode failed: {}", msg),
            SerializationError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
        }
    }
}

impl std::error::Error for SerializationError {}
