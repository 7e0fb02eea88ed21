//! Collapse dynamics simulator CLI.
//!
//! Runs headless Monte-Carlo batches to analyze how the scheme dies.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 runs
//!   cargo run --bin simulate -- -n 100 -r 300   # 100 runs, 300-round cap
//!   cargo run --bin simulate -- --seed 42       # Reproducible batch

use ponzilab::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("===============================================================");
    println!("              PONZILAB COLLAPSE SIMULATOR");
    println!("===============================================================");
    println!();
    println!("Configuration:");
    println!("  Runs:        {}", config.num_runs);
    println!("  Round cap:   {}", config.max_rounds_per_run);
    println!("  Investment:  {:.0}", config.investment_amount);
    println!(
        "  Joiners:     {}-{} per round",
        config.min_joiners, config.max_joiners
    );
    if let Some(seed) = config.seed {
        println!("  Seed:        {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "collapse_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-r" | "--rounds" => {
                if i + 1 < args.len() {
                    config.max_rounds_per_run = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-a" | "--amount" => {
                if i + 1 < args.len() {
                    config.investment_amount = args[i + 1].parse().unwrap_or(500.0);
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--json" => {
                // handled after the run
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --runs <N>     Number of runs (default: 1000)");
    println!("  -s, --seed <SEED>  Seed for reproducible batches");
    println!("  -r, --rounds <N>   Round cap per run (default: 200)");
    println!("  -a, --amount <X>   Contribution per joiner (default: 500)");
    println!("  -v, --verbose      Print per-run results");
    println!("      --json         Also write a JSON report");
    println!("  -h, --help         Show this help message");
}
