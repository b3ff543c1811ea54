//! Reversi CLI - game launcher
//!
//! Commands:
//! - play: play a single game between two named strategies
//! - match: play a series of games and report statistics

mod match_cmd;
mod play_cmd;
mod render;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "reversi")]
#[command(about = "Hex and square Reversi with pluggable strategies")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play(play_cmd::PlayArgs),
    /// Play a series of games between two strategies
    Match(match_cmd::MatchArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args),
        Commands::Match(args) => match_cmd::run(args),
    }
}
