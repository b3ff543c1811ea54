//! Match command - play a series of games between two strategies

use anyhow::Result;
use clap::Args;

use reversi_core::{Color, GameSetup};

use crate::play_cmd::{drive_game, parse_geometry};

#[derive(Args)]
pub struct MatchArgs {
    /// Strategy for contestant A (plays Black in odd-numbered games)
    #[arg(long)]
    pub first: String,

    /// Strategy for contestant B
    #[arg(long)]
    pub second: String,

    /// Board kind: "hex" or "square"
    #[arg(long, default_value = "hex")]
    pub board: String,

    /// Hex ring radius or square side length
    #[arg(long, default_value = "3")]
    pub size: i32,

    /// Number of games to play (colors alternate between games)
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Base seed; omitted means a fresh random one
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRecord {
    game_number: usize,
    black_strategy: String,
    white_strategy: String,
    winner: Option<Color>,
    black_score: usize,
    white_score: usize,
    placements: usize,
}

/// Aggregated match results
#[derive(Clone, Debug)]
struct MatchResults {
    games: Vec<GameRecord>,
    first_wins: usize,
    second_wins: usize,
    ties: usize,
    avg_placements: f32,
}

/// Run match command
pub fn run(args: MatchArgs) -> Result<()> {
    let geometry = parse_geometry(&args.board, args.size)?;
    let base_seed = args.seed.unwrap_or_else(rand::random);

    tracing::info!(
        "Starting match: {} vs {} ({} games on {:?}, seed {})",
        args.first,
        args.second,
        args.games,
        geometry,
        base_seed
    );

    let mut games = Vec::with_capacity(args.games);
    for game_number in 1..=args.games {
        // Alternate colors for fairness
        let swap_colors = game_number % 2 == 0;
        let (black, white) = if swap_colors {
            (&args.second, &args.first)
        } else {
            (&args.first, &args.second)
        };

        let setup = GameSetup {
            geometry,
            black: black.clone(),
            white: white.clone(),
            seed: base_seed.wrapping_add(game_number as u64 * 2),
        };
        let record = play_single_game(&setup, game_number)?;

        tracing::info!(
            "Game {}: {:?} ({} - {}, {} placements)",
            record.game_number,
            record.winner,
            record.black_score,
            record.white_score,
            record.placements
        );

        games.push(record);
    }

    let results = compute_match_statistics(&args.first, games);

    if args.json {
        print_json_results(&args, &results);
    } else {
        print_text_results(&args, &results);
    }

    Ok(())
}

/// Play one game to completion
fn play_single_game(setup: &GameSetup, game_number: usize) -> Result<GameRecord> {
    let (mut engine, black, white) = setup.build()?;
    engine.start_game()?;

    let placements = drive_game(&mut engine, black.as_ref(), white.as_ref(), false)?;

    Ok(GameRecord {
        game_number,
        black_strategy: setup.black.clone(),
        white_strategy: setup.white.clone(),
        winner: engine.winner(),
        black_score: engine.score_of(Color::Black),
        white_score: engine.score_of(Color::White),
        placements,
    })
}

/// Fold game records into per-contestant totals
fn compute_match_statistics(first_strategy: &str, games: Vec<GameRecord>) -> MatchResults {
    let mut first_wins = 0;
    let mut second_wins = 0;
    let mut ties = 0;

    for game in &games {
        let winner_strategy = match game.winner {
            Some(Color::Black) => Some(game.black_strategy.as_str()),
            Some(Color::White) => Some(game.white_strategy.as_str()),
            None => None,
        };
        match winner_strategy {
            Some(name) if name == first_strategy => first_wins += 1,
            Some(_) => second_wins += 1,
            None => ties += 1,
        }
    }

    let total_placements: usize = games.iter().map(|g| g.placements).sum();
    let avg_placements = if games.is_empty() {
        0.0
    } else {
        total_placements as f32 / games.len() as f32
    };

    MatchResults {
        games,
        first_wins,
        second_wins,
        ties,
        avg_placements,
    }
}

/// Print results as JSON
fn print_json_results(args: &MatchArgs, results: &MatchResults) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        black_strategy: String,
        white_strategy: String,
        winner: Option<String>,
        black_score: usize,
        white_score: usize,
        placements: usize,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        first_strategy: String,
        second_strategy: String,
        total_games: usize,
        first_wins: usize,
        second_wins: usize,
        ties: usize,
        avg_placements: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        first_strategy: args.first.clone(),
        second_strategy: args.second.clone(),
        total_games: results.games.len(),
        first_wins: results.first_wins,
        second_wins: results.second_wins,
        ties: results.ties,
        avg_placements: results.avg_placements,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                black_strategy: g.black_strategy.clone(),
                white_strategy: g.white_strategy.clone(),
                winner: g.winner.map(|c| format!("{c:?}")),
                black_score: g.black_score,
                white_score: g.white_score,
                placements: g.placements,
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{json}");
    }
}

/// Print results as text
fn print_text_results(args: &MatchArgs, results: &MatchResults) {
    let total = results.games.len();

    println!("\n=== Match Results ===");
    println!("Total games: {total}");
    println!("{}: {} wins", args.first, results.first_wins);
    println!("{}: {} wins", args.second, results.second_wins);
    println!("Ties:        {}", results.ties);
    println!("Avg placements: {:.1}", results.avg_placements);

    println!("\nGame details:");
    for game in &results.games {
        println!(
            "  Game {}: {} (B) {} - {} {} (W), winner {:?}",
            game.game_number,
            game.black_strategy,
            game.black_score,
            game.white_score,
            game.white_strategy,
            game.winner
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        game_number: usize,
        black: &str,
        white: &str,
        winner: Option<Color>,
    ) -> GameRecord {
        GameRecord {
            game_number,
            black_strategy: black.to_string(),
            white_strategy: white.to_string(),
            winner,
            black_score: 10,
            white_score: 9,
            placements: 12,
        }
    }

    #[test]
    fn test_compute_match_statistics_empty() {
        let results = compute_match_statistics("greedy", vec![]);
        assert_eq!(results.first_wins, 0);
        assert_eq!(results.second_wins, 0);
        assert_eq!(results.ties, 0);
        assert_eq!(results.avg_placements, 0.0);
    }

    #[test]
    fn test_compute_match_statistics_tracks_contestants_across_colors() {
        let games = vec![
            record(1, "greedy", "random", Some(Color::Black)),
            record(2, "random", "greedy", Some(Color::White)),
            record(3, "greedy", "random", Some(Color::White)),
            record(4, "random", "greedy", None),
        ];
        let results = compute_match_statistics("greedy", games);
        assert_eq!(results.first_wins, 2);
        assert_eq!(results.second_wins, 1);
        assert_eq!(results.ties, 1);
        assert_eq!(results.avg_placements, 12.0);
    }

    #[test]
    fn test_play_single_game() {
        let setup = GameSetup {
            geometry: reversi_core::Geometry::Hex { radius: 2 },
            black: "greedy".to_string(),
            white: "random".to_string(),
            seed: 11,
        };
        let record = play_single_game(&setup, 1).unwrap();
        assert!(record.placements > 0);
        // seeded tokens plus at least one placement
        assert!(record.black_score + record.white_score >= 7);
    }
}
