use rand::Rng;
use minecargo::{random_seed_hex, seed_stream};

fn sample(seq_len: usize, seed: u64, stream: u64) -> Vec<u64> {
    let mut rng = seed_stream(seed, stream);
    (0..seq_len).map(|_| rng.gen::<u64>()).collect()
}

#[test]
fn seed_stream_stable_for_same_pair() {
    let a = sample(16, 0xDEAD_BEEFu64, 7);
    let b = sample(16, 0xDEAD_BEEFu64, 7);
    assert_eq!(a, b, "seed_stream must produce stable sequences for identical (seed, stream)");
}

#[test]
fn seed_stream_differs_across_pairs() {
    let base_seed: u64 = 0x00C0_FFEEu64;
    let s1 = sample(16, base_seed, 0);
    let s2 = sample(16, base_seed, 1);
    let s3 = sample(16, base_seed.wrapping_add(1), 0);
    assert_ne!(s1, s2, "changing stream should alter sequence");
    assert_ne!(s1, s3, "changing seed should alter sequence");
}

#[test]
fn random_seed_hex_shape() {
    let mut rng = seed_stream(1, 2);
    let s = random_seed_hex(&mut rng, 32);
    assert_eq!(s.len(), 64);
    assert!(s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));

    let mut again = seed_stream(1, 2);
    assert_eq!(random_seed_hex(&mut again, 32), s);
    assert_eq!(random_seed_hex(&mut again, 0), "");
}
