//! TACTIX CLI - Command-line interface
//!
//! Commands:
//! - play: interactive rounds against the computer or another human
//! - match: non-interactive bot-vs-bot series with aggregate statistics

use clap::{Parser, Subcommand};

mod match_cmd;
mod messages;
mod play_cmd;

#[derive(Parser)]
#[command(name = "tactix")]
#[command(about = "Tic-tac-toe with a three-tier computer opponent")]
struct Cli {
    /// RNG seed for reproducible bot play
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactive rounds
    Play(play_cmd::PlayArgs),
    /// Run a bot-vs-bot series
    Match(match_cmd::MatchArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Match(args) => match_cmd::run(args, cli.seed),
    }
}
