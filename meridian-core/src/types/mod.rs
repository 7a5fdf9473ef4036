//! Protocol data types shared across the workspace.

pub mod asset;
pub mod signer;

pub use asset::{build_assets, is_valid_code, Asset, AssetType};
pub use signer::{SignedPayload, SignerKey};
