use clap::Parser;
use minecargo::rng::{fresh_seed_hex, SEED_BYTES};
use minecargo::{commitment, random_seed_hex, seed_stream, HashAlgorithm};
use serde::Serialize;

/// Upper bound for `--bytes`; a seed is a handful of bytes, not a payload.
const MAX_SEED_BYTES: u64 = 1024;

#[derive(Debug, Parser)]
#[command(name = "seedgen", about = "Generate a server/client seed pair and the server-seed commitment")]
struct Args {
    /// Hash algorithm for the commitment: SHA-256 | SHA-512
    #[arg(long, default_value = "SHA-256")]
    algorithm: String,

    /// Seed length in bytes (1..=1024)
    #[arg(
        long,
        default_value_t = SEED_BYTES,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_SEED_BYTES)
    )]
    bytes: usize,

    /// Derive seeds from this value instead of the OS-seeded generator (reproducible)
    #[arg(long)]
    deterministic: Option<u64>,

    /// Print a single JSON object instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct SeedPair {
    server_seed: String,
    client_seed: String,
    algorithm: HashAlgorithm,
    commitment: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let algorithm: HashAlgorithm = args.algorithm.parse()?;

    let (server_seed, client_seed) = match args.deterministic {
        Some(seed) => {
            let mut server_rng = seed_stream(seed, 0);
            let mut client_rng = seed_stream(seed, 1);
            (
                random_seed_hex(&mut server_rng, args.bytes),
                random_seed_hex(&mut client_rng, args.bytes),
            )
        }
        None => (fresh_seed_hex(args.bytes), fresh_seed_hex(args.bytes)),
    };

    let pair = SeedPair {
        commitment: commitment(&server_seed, algorithm),
        server_seed,
        client_seed,
        algorithm,
    };

    if args.json {
        println!("{}", serde_json::to_string(&pair)?);
    } else {
        println!("[seedgen] Server seed: {}", pair.server_seed);
        println!("[seedgen] Client seed: {}", pair.client_seed);
        println!("[seedgen] Commitment ({}): {}", pair.algorithm, pair.commitment);
        println!("[seedgen] Publish the commitment now; reveal the server seed after the round.");
    }
    Ok(())
}
