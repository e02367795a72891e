//! CLI interface for tritgen
//!
//! One operation: generate a stimulus + golden-reference artifact for a
//! ternary SIMD multiply-accumulate testbench. All behavioral knobs of the
//! generator are exposed as flags; a fixed `--seed` makes the run fully
//! reproducible.

use crate::generator::{generate_to_path, GenConfig};
use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tritgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Stimulus and golden-reference generator for ternary SIMD MAC units")]
#[command(
    long_about = "Tritgen - test-vector generator for ternary multiply-accumulate hardware\n\n\
    Each test case models one accumulation window: WINDOW_SIZE cycles of\n\
    SIMD_FACTOR lanes, every lane fed a random (activation, weight) pair of\n\
    ternary {-1, 0, +1} digits. The expected dot-product accumulation is\n\
    precomputed and emitted directly after the window's stimulus rows, so a\n\
    hardware simulator can diff its own result against the golden line.\n\n\
    Examples:\n\
      tritgen -o test.txt\n\
      tritgen -a 4 -w 4 -s 8 -n 2 -t 100 --seed 42 -o vectors.txt -v"
)]
pub struct Cli {
    /// Digit width of each activation vector
    #[arg(short = 'a', long, default_value_t = 3, value_name = "WIDTH")]
    pub activation_width: usize,

    /// Digit width of each weight vector
    #[arg(short = 'w', long, default_value_t = 3, value_name = "WIDTH")]
    pub weight_width: usize,

    /// Number of parallel multiply-accumulate lanes per cycle
    #[arg(short = 's', long, default_value_t = 4, value_name = "LANES")]
    pub simd_factor: usize,

    /// Number of cycles accumulated into one golden result
    #[arg(short = 'n', long, default_value_t = 4, value_name = "CYCLES")]
    pub window_size: usize,

    /// Number of test cases to emit
    #[arg(short = 't', long = "tests", default_value_t = 10, value_name = "COUNT")]
    pub test_count: usize,

    /// Output artifact (created or truncated, then appended per case)
    #[arg(short, long, default_value = "test.txt", value_name = "FILE")]
    pub output: PathBuf,

    /// Seed for the random source; omit for an entropy-seeded run
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Verbose output showing the configuration and run statistics
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn config(&self) -> GenConfig {
        GenConfig {
            activation_width: self.activation_width,
            weight_width: self.weight_width,
            simd_factor: self.simd_factor,
            window_size: self.window_size,
            test_count: self.test_count,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    if cli.verbose {
        println!("Tritgen v{} - Ternary MAC Test Vectors", env!("CARGO_PKG_VERSION"));
        println!("=======================================");
        println!("  Activation width: {}", config.activation_width);
        println!("  Weight width:     {}", config.weight_width);
        println!("  SIMD factor:      {}", config.simd_factor);
        println!("  Window size:      {}", config.window_size);
        println!("  Test cases:       {}", config.test_count);
        match cli.seed {
            Some(seed) => println!("  Seed:             {}", seed),
            None => println!("  Seed:             (entropy)"),
        }
        println!();
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = generate_to_path(&config, rng, &cli.output)
        .with_context(|| format!("writing test vectors to {}", cli.output.display()))?;

    println!("Test data generated!");

    if cli.verbose {
        println!("  Output: {}", cli.output.display());
        println!("  Cases:  {}", report.cases);
        println!("  Pairs:  {}", report.pairs);
        println!("  Lines:  {}", report.lines);
    }

    Ok(())
}
