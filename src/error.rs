use thiserror::Error;

/// Failures surfaced by the derivation pipeline.
///
/// Running out of hash material is not an error: it is reported through
/// `Derivation::warning` alongside the partial placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    #[error("Server seed is empty. Please enter both Server Seed and Client Seed.")]
    MissingServerSeed,

    #[error("Client seed is empty. Please enter both Server Seed and Client Seed.")]
    MissingClientSeed,

    #[error("Unsupported hashing algorithm '{0}' (expected SHA-256 or SHA-512)")]
    UnsupportedAlgorithm(String),

    #[error("Position {0} is outside the 5x5 board")]
    InvalidPosition(u8),

    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl DeriveError {
    /// True for input problems reported before any hashing happens.
    #[inline]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DeriveError::MissingServerSeed
                | DeriveError::MissingClientSeed
                | DeriveError::UnsupportedAlgorithm(_)
        )
    }
}
