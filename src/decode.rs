use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::DeriveError;
use crate::hash::digest_bytes;
use crate::types::HashAlgorithm;

/// Raw digest plus its two audit renderings.
///
/// `hex` keeps leading zero digits (two chars per byte); `decimal` is the
/// numeric value and drops them. Both come from the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestResult {
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub hex: String,
    pub decimal: String,
}

impl DigestResult {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let hex = hex::encode(&bytes);
        let decimal = BigUint::from_bytes_be(&bytes).to_str_radix(10);
        Self { bytes, hex, decimal }
    }

    /// Rebuild from a published hex digest (either case accepted, stored lowercase).
    pub fn from_hex(hex_digest: &str) -> Result<Self, DeriveError> {
        let bytes = hex::decode(hex_digest.trim())
            .map_err(|e| DeriveError::Unexpected(format!("invalid hex digest: {e}")))?;
        Ok(Self::from_bytes(bytes))
    }

    #[inline]
    pub fn compute(algorithm: HashAlgorithm, combined: &str) -> Self {
        Self::from_bytes(digest_bytes(algorithm, combined))
    }
}

/// Base-10 rendering of a base-16 string of any length.
pub fn hex_to_decimal(hex_digits: &str) -> Result<String, DeriveError> {
    if hex_digits.is_empty() {
        return Err(DeriveError::Unexpected("empty hex string".to_string()));
    }
    BigUint::parse_bytes(hex_digits.as_bytes(), 16)
        .map(|v| v.to_str_radix(10))
        .ok_or_else(|| DeriveError::Unexpected(format!("'{hex_digits}' is not a hex number")))
}
