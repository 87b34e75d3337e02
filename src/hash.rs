use sha2::{Digest, Sha256, Sha512};

use crate::types::HashAlgorithm;

/// Digest of the UTF-8 bytes of `input` under `algorithm`.
/// Output length is exactly `algorithm.digest_len()`.
#[inline]
pub fn digest_bytes(algorithm: HashAlgorithm, input: &str) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Sha256 => Sha256::digest(input.as_bytes()).to_vec(),
        HashAlgorithm::Sha512 => Sha512::digest(input.as_bytes()).to_vec(),
    }
}

/// Lowercase hex digest of `input`.
#[inline]
pub fn digest_hex(algorithm: HashAlgorithm, input: &str) -> String {
    hex::encode(digest_bytes(algorithm, input))
}

/// Commitment published before play: digest of the server seed alone.
#[inline]
pub fn commitment(server_seed: &str, algorithm: HashAlgorithm) -> String {
    digest_hex(algorithm, server_seed)
}

/// Check a revealed server seed against its published commitment.
/// Hex comparison is case-insensitive.
pub fn verify_commitment(server_seed: &str, algorithm: HashAlgorithm, commitment_hex: &str) -> bool {
    commitment(server_seed, algorithm).eq_ignore_ascii_case(commitment_hex.trim())
}
