use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64;

/// Default seed size in bytes (64 hex chars).
pub const SEED_BYTES: usize = 32;

/// Deterministic RNG for a given (seed, stream) pair.
///
/// Derives a 64-bit seed as `seed ^ stream.rotate_left(32)` and feeds it to
/// `Pcg64`, so equal inputs give equal sequences across runs.
#[inline]
pub fn seed_stream(seed: u64, stream: u64) -> Pcg64 {
    let derived: u64 = seed ^ stream.rotate_left(32);
    Pcg64::seed_from_u64(derived)
}

/// Lowercase hex seed string built from `n_bytes` random bytes.
pub fn random_seed_hex<R: RngCore + ?Sized>(rng: &mut R, n_bytes: usize) -> String {
    let mut buf = vec![0u8; n_bytes];
    rng.fill_bytes(&mut buf);
    hex::encode(buf)
}

/// Fresh server seed from the thread-local OS-seeded generator.
#[inline]
pub fn fresh_seed_hex(n_bytes: usize) -> String {
    random_seed_hex(&mut rand::thread_rng(), n_bytes)
}
