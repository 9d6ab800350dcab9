use std::{fs, path::PathBuf, process};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use mtsp_core::{complexity, SolverConfig};
use mtsp_validation::{run_sweep, SweepOptions, CSV_HEADER};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Sweep random instances, check Held-Karp against brute force and print CSV.
#[derive(Debug, Parser)]
#[command(name = "exact-sweep", version)]
struct Cli {
    #[arg(long, default_value_t = 2)]
    min_cities: usize,
    #[arg(long, default_value_t = 10)]
    max_cities: usize,
    /// Random instances per city count.
    #[arg(long, default_value_t = 5)]
    instances: usize,
    /// Agents for the m-TSP column; clamped to `cities - 1`.
    #[arg(long, default_value_t = 1)]
    agents: usize,
    #[arg(long, default_value_t = 100)]
    coord_max: u32,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// JSON solver configuration; the sweep uses `max_exact_cities` and `partition_mode`.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("exact-sweep: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level)
        .target(env_logger::Target::Stderr)
        .init();

    if cli.min_cities == 0 || cli.min_cities > cli.max_cities {
        bail!(
            "invalid city range {}..={}",
            cli.min_cities,
            cli.max_cities
        );
    }

    let config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SolverConfig::from_json_str(&raw)?
        }
        None => SolverConfig::default(),
    };
    let limit = config.scale_limit();
    limit
        .check(cli.max_cities)
        .context("max-cities is past the exact solver limit")?;

    let estimate = complexity::held_karp(cli.max_cities as u32);
    info!(
        "sweeping n={}..={} x{} seed={} (largest run ~{} transitions, {} memo slots)",
        cli.min_cities,
        cli.max_cities,
        cli.instances,
        cli.seed,
        estimate.time.map_or("overflow".into(), |t| t.to_string()),
        estimate.space.map_or("overflow".into(), |s| s.to_string()),
    );
    info!(
        "config: {}",
        serde_json::to_string(&config).context("serializing config")?
    );

    let options = SweepOptions {
        min_cities: cli.min_cities,
        max_cities: cli.max_cities,
        instances: cli.instances,
        agents: cli.agents,
        coord_max: cli.coord_max,
        config,
    };

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(cli.seed);
    println!("{CSV_HEADER}");
    let mismatches = run_sweep(&options, &mut rng, |row| println!("{}", row.to_csv()))?;

    if mismatches > 0 {
        bail!("{mismatches} instance(s) where held-karp disagreed with brute force");
    }
    info!("all exact results agree");
    Ok(())
}
