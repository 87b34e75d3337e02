use serde::{Deserialize, Serialize};

use crate::decode::DigestResult;
use crate::error::DeriveError;
use crate::rules::DEFAULT_MINES;
use crate::sampler::{sample_mines, DrawStep};
use crate::seed::SeedMaterial;
use crate::types::HashAlgorithm;

/// Attached to a result when the digest ran out before all mines were drawn.
pub const EXHAUSTION_WARNING: &str =
    "Could not generate enough unique mine positions. Please verify your game's exact algorithm.";

/// The placement rule here is a placeholder for whatever a given game actually uses.
pub const PLACEHOLDER_NOTICE: &str =
    "Mine placement logic is a placeholder. Adapt it to your game's exact rules before relying on it.";

/// Everything one derivation produces, for display and audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Derivation {
    pub combined: String,
    pub algorithm: HashAlgorithm,
    pub nonce: u64,
    pub digest_hex: String,
    pub digest_decimal: String,
    pub requested: u32,
    /// Ascending mine positions.
    pub placement: Vec<u8>,
    /// Positions in the order they were drawn.
    pub draw_order: Vec<u8>,
    pub steps: Vec<DrawStep>,
    pub exhausted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Request shape accepted by the JSON front-ends. The algorithm stays a
/// string here so an unknown selector is reported as a validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeriveRequest {
    pub server_seed: String,
    pub client_seed: String,
    #[serde(default)]
    pub nonce: u64,
    #[serde(default = "default_algorithm_label")]
    pub algorithm: String,
    #[serde(default = "default_mines")]
    pub mines: u32,
}

fn default_algorithm_label() -> String {
    HashAlgorithm::default().label().to_string()
}

fn default_mines() -> u32 {
    u32::from(DEFAULT_MINES)
}

impl DeriveRequest {
    pub fn material(&self) -> SeedMaterial {
        SeedMaterial::new(self.server_seed.clone(), self.client_seed.clone(), self.nonce)
    }
}

/// Run the full pipeline: combine, hash, decode, sample.
///
/// Seeds are validated before anything is hashed. `count` is used as given;
/// callers apply [`crate::rules::clamp_mine_count`] first.
pub fn derive(material: &SeedMaterial, algorithm: HashAlgorithm, count: u32) -> Result<Derivation, DeriveError> {
    let combined = material.combine()?;
    let digest = DigestResult::compute(algorithm, &combined);
    if digest.hex.len() != algorithm.hex_len() {
        return Err(DeriveError::Unexpected(format!(
            "{algorithm} digest has {} hex chars, expected {}",
            digest.hex.len(),
            algorithm.hex_len()
        )));
    }

    let outcome = sample_mines(&digest.hex, count as usize);
    let placement = outcome.sorted();
    let warning = if outcome.exhausted {
        Some(EXHAUSTION_WARNING.to_string())
    } else {
        None
    };

    Ok(Derivation {
        combined,
        algorithm,
        nonce: material.nonce,
        digest_hex: digest.hex,
        digest_decimal: digest.decimal,
        requested: count,
        placement,
        draw_order: outcome.drawn,
        steps: outcome.steps,
        exhausted: outcome.exhausted,
        warning,
    })
}

/// Flat-argument entry point.
#[inline]
pub fn derive_placement(
    server_seed: &str,
    client_seed: &str,
    nonce: u64,
    algorithm: HashAlgorithm,
    count: u32,
) -> Result<Derivation, DeriveError> {
    derive(&SeedMaterial::new(server_seed, client_seed, nonce), algorithm, count)
}

/// Entry point for string selectors (JSON requests, form input).
pub fn derive_request(req: &DeriveRequest) -> Result<Derivation, DeriveError> {
    let material = req.material();
    // Seed errors take precedence over a bad selector, matching the form's check order.
    material.validate()?;
    let algorithm: HashAlgorithm = req.algorithm.parse()?;
    derive(&material, algorithm, req.mines)
}

/// Lazily derives consecutive rounds; see [`derive_range`].
///
/// Yields at most one error, after which it is fused: a seed problem comes
/// out as the first item, and a nonce overflow comes out after every round
/// below `u64::MAX` has been produced.
#[derive(Debug, Clone)]
pub struct Rounds {
    material: SeedMaterial,
    algorithm: HashAlgorithm,
    count: u32,
    offset: u64,
    rounds: u64,
    done: bool,
}

impl Iterator for Rounds {
    type Item = Result<Derivation, DeriveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.rounds {
            return None;
        }
        let Some(nonce) = self.material.nonce.checked_add(self.offset) else {
            self.done = true;
            return Some(Err(DeriveError::Unexpected(format!(
                "nonce overflow at round {}",
                self.offset
            ))));
        };
        self.offset += 1;
        let result = derive(&self.material.with_nonce(nonce), self.algorithm, self.count);
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

impl std::iter::FusedIterator for Rounds {}

/// Derive `rounds` consecutive nonces starting at `material.nonce`, one at a time.
pub fn derive_range(material: &SeedMaterial, rounds: u64, algorithm: HashAlgorithm, count: u32) -> Rounds {
    Rounds {
        material: material.clone(),
        algorithm,
        count,
        offset: 0,
        rounds,
        done: false,
    }
}
