use clap::Parser;
use minecargo::{
    clamp_mine_count, verify_commitment, verify_digest, verify_placement, DeriveError,
    HashAlgorithm, SeedMaterial,
};
use serde::Serialize;

/// Exit code when inputs are valid but something does not match.
const EXIT_MISMATCH: i32 = 3;

#[derive(Debug, Parser)]
#[command(name = "verify", about = "Recompute a round and check published values against it")]
struct Args {
    /// Revealed server seed
    #[arg(long, default_value = "")]
    server_seed: String,

    /// Client seed
    #[arg(long, default_value = "")]
    client_seed: String,

    #[arg(long, default_value_t = 0)]
    nonce: u64,

    /// Hash algorithm: SHA-256 | SHA-512
    #[arg(long, default_value = "SHA-256")]
    algorithm: String,

    /// Mine count the round was played with; clamped to 0..=24
    #[arg(long, default_value_t = 1)]
    mines: u32,

    /// Claimed mine positions, comma-separated (any order), e.g. "1,7,20"
    #[arg(long, default_value = "")]
    claimed: String,

    /// Published round digest (hex) to check
    #[arg(long)]
    digest: Option<String>,

    /// Server-seed commitment (hex) published before the round
    #[arg(long)]
    commitment: Option<String>,

    /// Print a single JSON object instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    placement_matches: bool,
    missing: Vec<u8>,
    unexpected: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    digest_matches: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    commitment_matches: Option<bool>,
    placement: Vec<u8>,
    digest_hex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

impl Report {
    fn all_ok(&self) -> bool {
        self.placement_matches && self.digest_matches != Some(false) && self.commitment_matches != Some(false)
    }
}

fn parse_positions(s: &str) -> Result<Vec<u8>, DeriveError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|tok| {
            tok.trim()
                .parse::<u8>()
                .map_err(|e| DeriveError::Unexpected(format!("invalid position '{}': {e}", tok.trim())))
        })
        .collect()
}

fn fmt_list(v: &[u8]) -> String {
    v.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

fn run(args: &Args) -> Result<Report, DeriveError> {
    let material = SeedMaterial::new(args.server_seed.clone(), args.client_seed.clone(), args.nonce);
    material.validate()?;
    let algorithm: HashAlgorithm = args.algorithm.parse()?;
    let claimed = parse_positions(&args.claimed)?;
    let mines = u32::from(clamp_mine_count(args.mines));

    let v = verify_placement(&material, algorithm, mines, &claimed)?;
    let digest_matches = match &args.digest {
        Some(d) => Some(verify_digest(&material, algorithm, d)?),
        None => None,
    };
    let commitment_matches = args
        .commitment
        .as_ref()
        .map(|c| verify_commitment(&material.server_seed, algorithm, c));

    Ok(Report {
        placement_matches: v.matches,
        missing: v.missing,
        unexpected: v.unexpected,
        digest_matches,
        commitment_matches,
        placement: v.derivation.placement,
        digest_hex: v.derivation.digest_hex,
        warning: v.derivation.warning,
    })
}

fn main() {
    let args = Args::parse();
    let report = match run(&args) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[verify] Error: {e}");
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string(&report) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("[verify] Error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("[verify] Round hash: {}", report.digest_hex);
        println!("[verify] Recomputed mines: {}", fmt_list(&report.placement));
        if report.placement_matches {
            println!("[verify] Placement: OK");
        } else {
            println!(
                "[verify] Placement: MISMATCH (missing [{}], unexpected [{}])",
                fmt_list(&report.missing),
                fmt_list(&report.unexpected)
            );
        }
        match report.digest_matches {
            Some(true) => println!("[verify] Digest: OK"),
            Some(false) => println!("[verify] Digest: MISMATCH"),
            None => {}
        }
        match report.commitment_matches {
            Some(true) => println!("[verify] Commitment: OK"),
            Some(false) => println!("[verify] Commitment: MISMATCH"),
            None => {}
        }
        if let Some(w) = &report.warning {
            eprintln!("[verify] Warning: {w}");
        }
    }

    if !report.all_ok() {
        std::process::exit(EXIT_MISMATCH);
    }
}
