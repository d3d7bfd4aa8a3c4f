//! Marble Mania entry point
//!
//! Reads the game description from a file and prints the winning score.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use marble_mania::{GameConfig, Variant, play};

#[derive(Parser, Debug)]
#[command(name = "marble-mania")]
#[command(about = "Simulate the marble circle game and report the high score", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the full report as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play with the last marble as given
    #[command(name = "part-1")]
    Part1 {
        /// Input file holding the game description
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Play with the last marble 100 times larger
    #[command(name = "part-2")]
    Part2 {
        /// Input file holding the game description
        #[arg(short, long)]
        input: PathBuf,
    },
}

impl Command {
    fn variant(&self) -> Variant {
        match self {
            Command::Part1 { .. } => Variant::Part1,
            Command::Part2 { .. } => Variant::Part2,
        }
    }

    fn input(&self) -> &Path {
        match self {
            Command::Part1 { input } | Command::Part2 { input } => input,
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let variant = args.command.variant();
    let input = args.command.input();

    let config = GameConfig::from_file(input)
        .with_context(|| format!("could not load game from {}", input.display()))?;
    let config = config
        .for_variant(variant)
        .with_context(|| format!("could not apply {}", variant.as_str()))?;
    log::info!("Running {}", variant.as_str());

    let report = play(config).context("simulation aborted")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("High score: {}", report.high_score);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging (RUST_LOG overrides the default level)
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
