use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeriveError;

/// Cells per board side (5x5 board).
pub const BOARD_SIDE: u8 = 5;

/// Total number of board positions.
pub const BOARD_SIZE: u8 = BOARD_SIDE * BOARD_SIDE;

/// Hex characters consumed per draw (32 bits).
pub const CHUNK_HEX_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    #[default]
    #[serde(rename = "SHA-256")]
    Sha256,
    #[serde(rename = "SHA-512")]
    Sha512,
}

impl HashAlgorithm {
    #[inline]
    pub fn all() -> [HashAlgorithm; 2] {
        [HashAlgorithm::Sha256, HashAlgorithm::Sha512]
    }

    /// Digest length in bytes.
    #[inline]
    pub fn digest_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Length of the lowercase hex encoding of a digest.
    #[inline]
    pub fn hex_len(self) -> usize {
        self.digest_len() * 2
    }

    /// Number of full draws one digest can feed.
    #[inline]
    pub fn max_draws(self) -> usize {
        self.hex_len() / CHUNK_HEX_WIDTH
    }

    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HashAlgorithm {
    type Err = DeriveError;

    /// Accepts "SHA-256"/"SHA-512" in any case, hyphen optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match norm.as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(DeriveError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}
