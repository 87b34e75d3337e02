use serde::{Deserialize, Serialize};

use crate::decode::DigestResult;
use crate::engine::derive::{derive, Derivation};
use crate::error::DeriveError;
use crate::hash::digest_bytes;
use crate::seed::SeedMaterial;
use crate::types::{HashAlgorithm, BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    pub matches: bool,
    /// Recomputed but not claimed, ascending.
    pub missing: Vec<u8>,
    /// Claimed but not recomputed, ascending.
    pub unexpected: Vec<u8>,
    pub derivation: Derivation,
}

/// Recompute a round and compare a claimed placement against it.
///
/// The comparison is by set: claimed positions may be in any order, since
/// only the sorted form is normally published. Duplicates in the claim are
/// reported once as unexpected.
pub fn verify_placement(
    material: &SeedMaterial,
    algorithm: HashAlgorithm,
    count: u32,
    claimed: &[u8],
) -> Result<Verification, DeriveError> {
    if let Some(&bad) = claimed.iter().find(|&&p| p >= BOARD_SIZE) {
        return Err(DeriveError::InvalidPosition(bad));
    }
    let derivation = derive(material, algorithm, count)?;

    let mut claimed_mask = [0u8; BOARD_SIZE as usize];
    for &p in claimed {
        claimed_mask[usize::from(p)] = claimed_mask[usize::from(p)].saturating_add(1);
    }
    let mut derived_mask = [false; BOARD_SIZE as usize];
    for &p in &derivation.placement {
        derived_mask[usize::from(p)] = true;
    }

    let mut missing = Vec::new();
    let mut unexpected = Vec::new();
    for p in 0..BOARD_SIZE {
        let seen = claimed_mask[usize::from(p)];
        let derived = derived_mask[usize::from(p)];
        if derived && seen == 0 {
            missing.push(p);
        } else if (!derived && seen > 0) || seen > 1 {
            unexpected.push(p);
        }
    }

    Ok(Verification {
        matches: missing.is_empty() && unexpected.is_empty(),
        missing,
        unexpected,
        derivation,
    })
}

/// Check a published digest for a round. Hex case does not matter; a
/// published value that is not hex at all is an error, not a mismatch.
pub fn verify_digest(
    material: &SeedMaterial,
    algorithm: HashAlgorithm,
    digest_hex: &str,
) -> Result<bool, DeriveError> {
    let combined = material.combine()?;
    let published = DigestResult::from_hex(digest_hex)?;
    Ok(published.bytes == digest_bytes(algorithm, &combined))
}
