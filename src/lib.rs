#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited
#![allow(clippy::cast_possible_truncation)] // board indices are u8 by construction
#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod error;
pub mod types;
pub mod seed;
pub mod hash;
pub mod decode;
pub mod sampler;
pub mod rules;
pub mod board;
pub mod rng;

pub mod engine {
    pub mod derive;
    pub mod verify;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::board::MineBoard;
pub use crate::decode::{hex_to_decimal, DigestResult};
pub use crate::engine::derive::{
    derive, derive_placement, derive_range, derive_request, Derivation, DeriveRequest, Rounds,
    EXHAUSTION_WARNING, PLACEHOLDER_NOTICE,
};
pub use crate::engine::verify::{verify_digest, verify_placement, Verification};
pub use crate::error::DeriveError;
pub use crate::hash::{commitment, digest_bytes, digest_hex, verify_commitment};
pub use crate::rng::{random_seed_hex, seed_stream};
pub use crate::rules::{clamp_mine_count, MAX_MINES};
pub use crate::sampler::{sample_mines, sample_positions, DrawStep, PositionPool, SampleOutcome};
pub use crate::seed::{combine, SeedMaterial};
pub use crate::types::{HashAlgorithm, BOARD_SIZE, CHUNK_HEX_WIDTH};
