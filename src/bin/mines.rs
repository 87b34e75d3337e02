use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use minecargo::{
    clamp_mine_count, derive_range, derive_request, Derivation, DeriveError, DeriveRequest,
    HashAlgorithm, MineBoard, SeedMaterial, PLACEHOLDER_NOTICE,
};

#[derive(Debug, Parser)]
#[command(name = "mines", about = "Derive provably-fair mine positions on a 5x5 board")]
struct Args {
    /// Server seed (revealed after the round)
    #[arg(long, default_value = "")]
    server_seed: String,

    /// Client seed
    #[arg(long, default_value = "")]
    client_seed: String,

    /// Round counter mixed into the hash input
    #[arg(long, default_value_t = 0)]
    nonce: u64,

    /// Hash algorithm: SHA-256 | SHA-512
    #[arg(long, default_value = "SHA-256")]
    algorithm: String,

    /// Number of mines; clamped to 0..=24
    #[arg(long, default_value_t = 1)]
    mines: u32,

    /// Derive this many consecutive nonces starting at --nonce (at least 1)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    rounds: u64,

    /// Emit one JSON object per round on stdout instead of the text report
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Read a single JSON request from stdin and print one JSON result line
    #[arg(long, default_value_t = false, conflicts_with = "request")]
    stdin_json: bool,

    /// Read a single JSON request from a file and print one JSON result line
    #[arg(long)]
    request: Option<PathBuf>,

    /// Trace every draw on stderr
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn parse_request(text: &str) -> Result<DeriveRequest, DeriveError> {
    serde_json::from_str(text).map_err(|e| DeriveError::Unexpected(format!("invalid JSON request: {e}")))
}

fn run_request(text: &str) -> Result<(), DeriveError> {
    let mut req = parse_request(text)?;
    req.mines = u32::from(clamp_mine_count(req.mines));
    let d = derive_request(&req)?;
    let line = serde_json::to_string(&d).map_err(|e| DeriveError::Unexpected(e.to_string()))?;
    println!("{line}");
    Ok(())
}

fn trace_draws(d: &Derivation) {
    for (i, step) in d.steps.iter().enumerate() {
        eprintln!(
            "[mines] draw {}: chunk={} value={} pool_len={} index={} -> position {}",
            i + 1,
            step.chunk,
            step.value,
            step.pool_len,
            step.pool_index,
            step.position
        );
    }
}

fn print_report(d: &Derivation) -> Result<(), DeriveError> {
    println!("[mines] Nonce {}", d.nonce);
    println!("[mines] Combined string (ServerSeed + ClientSeed + : + Nonce): {}", d.combined);
    println!("[mines] Hash ({}): {}", d.algorithm, d.digest_hex);
    println!("[mines] Large decimal number: {}", d.digest_decimal);

    let board = MineBoard::from_placement(&d.placement)?;
    print!("{}", board.render_grid());

    let list: Vec<String> = board.mines().iter().map(ToString::to_string).collect();
    if board.mine_count() == 0 {
        println!("[mines] No mines requested.");
    } else {
        println!("[mines] Mine(s) at 0-indexed positions: {}", list.join(", "));
    }
    if let Some(w) = &d.warning {
        eprintln!("[mines] Warning: {w}");
    }
    println!("[mines] Note: {PLACEHOLDER_NOTICE}");
    Ok(())
}

fn run(args: &Args) -> Result<(), DeriveError> {
    if args.stdin_json {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .map_err(|e| DeriveError::Unexpected(format!("stdin read error: {e}")))?;
        return run_request(&input);
    }
    if let Some(path) = &args.request {
        let input = fs::read_to_string(path)
            .map_err(|e| DeriveError::Unexpected(format!("read {}: {e}", path.display())))?;
        return run_request(&input);
    }

    let material = SeedMaterial::new(args.server_seed.clone(), args.client_seed.clone(), args.nonce);
    material.validate()?;
    let algorithm: HashAlgorithm = args.algorithm.parse()?;
    let mines = clamp_mine_count(args.mines);
    if u32::from(mines) != args.mines && !args.json {
        eprintln!("[mines] Warning: mine count {} clamped to {}", args.mines, mines);
    }

    // Rounds are printed as they are derived; an overflow ends the run after the valid ones.
    for result in derive_range(&material, args.rounds, algorithm, u32::from(mines)) {
        let d = result?;
        if args.verbose {
            trace_draws(&d);
        }
        if args.json {
            let line = serde_json::to_string(&d).map_err(|e| DeriveError::Unexpected(e.to_string()))?;
            println!("{line}");
        } else {
            print_report(&d)?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("[mines] Error: {e}");
        std::process::exit(1);
    }
}
