//! Memory-hierarchy benchmark CLI.
//!
//! This binary is the single entry point for running the model. It performs:
//! 1. **Config:** Loads a JSON config file or falls back to built-in defaults.
//! 2. **Run:** Executes the concurrent benchmark and prints the summary.
//! 3. **Artifacts:** Persists `results.json` and `latencies.csv` into the
//!    results directory.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use memsim_core::config::Config;
use memsim_core::sim::{BenchmarkRunner, report};

#[derive(Parser, Debug)]
#[command(
    name = "memsim",
    author,
    version,
    about = "Concurrent memory-hierarchy benchmark",
    long_about = "Model a stream of memory requests against a set-associative LRU cache backed by a tiered latency table, and report mean latency, throughput, and hit rate.\n\nExamples:\n  memsim run\n  memsim run -c config.json\n  memsim run -c config.json --results-dir out"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the benchmark described by a config file (or the defaults).
    Run {
        /// JSON config file; omitted keys fall back to built-in defaults.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the results directory from the config.
        #[arg(long)]
        results_dir: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            config,
            results_dir,
        }) => cmd_run(config, results_dir),
        None => {
            eprintln!("memsim — pass a subcommand");
            eprintln!();
            eprintln!("  memsim run                 Benchmark with built-in defaults");
            eprintln!("  memsim run -c config.json  Benchmark a config file");
            eprintln!();
            eprintln!("  memsim --help  for full options");
            process::exit(1);
        }
    }
}

/// Runs the benchmark: loads config, executes the run, prints the summary,
/// and persists artifacts.
///
/// Uses built-in defaults when no config file is given. On any error
/// (config, run, or persistence) prints a FATAL line and exits with code 1.
fn cmd_run(config_path: Option<PathBuf>, results_dir: Option<PathBuf>) {
    let config = match config_path {
        Some(path) => match Config::from_file(&path) {
            Ok(config) => {
                println!("Configuration: {}", path.display());
                config
            }
            Err(e) => fatal(&e),
        },
        None => {
            println!("Configuration: built-in defaults");
            Config::default()
        }
    };

    let out_dir = results_dir.unwrap_or_else(|| PathBuf::from(&config.output.results_dir));

    let runner = BenchmarkRunner::new(config);
    print_setup(&runner);

    let output = match runner.run() {
        Ok(output) => output,
        Err(e) => fatal(&e),
    };

    output.summary.print();

    let stats = runner.cache().stats();
    println!(
        "cache_occupancy          {} / {} lines",
        stats.used_lines,
        stats.num_sets * stats.associativity
    );

    match report::write_results(&out_dir, &output.summary) {
        Ok(path) => println!("\n[*] Results saved to {}", path.display()),
        Err(e) => fatal(&e),
    }
    match report::write_latencies(&out_dir, &output.latencies) {
        Ok(path) => println!("[*] Latencies saved to {}", path.display()),
        Err(e) => fatal(&e),
    }
}

/// Prints the effective benchmark and cache geometry.
fn print_setup(runner: &BenchmarkRunner) {
    let config = runner.config();
    let stats = runner.cache().stats();

    println!(
        "  Pattern: {}  Requests: {}  Workers: {}  Seed: {}",
        config.benchmark.access_pattern,
        config.benchmark.num_requests,
        config.benchmark.num_threads,
        runner.seed()
    );
    if runner.cache().is_enabled() {
        println!(
            "  Cache: {} KiB, {}-way, {} sets of {}-byte lines  Working set: {} blocks",
            stats.capacity_bytes / 1024,
            stats.associativity,
            stats.num_sets,
            stats.line_size,
            runner.num_blocks()
        );
    } else {
        println!(
            "  Cache: disabled, every access misses to DRAM  Working set: {} blocks",
            runner.num_blocks()
        );
    }
    println!();
}

/// Prints a fatal error with its cause chain and exits with code 1.
fn fatal(error: &dyn std::error::Error) -> ! {
    eprintln!("\n[!] FATAL: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("    caused by: {cause}");
        source = cause.source();
    }
    process::exit(1)
}
