//! Play command - one game between two named strategies

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use reversi_core::{Color, GameEngine, GameSetup, Geometry, Strategy};

use crate::render;

#[derive(Args)]
pub struct PlayArgs {
    /// Board kind: "hex" or "square"
    #[arg(long, default_value = "hex")]
    pub board: String,

    /// Hex ring radius or square side length
    #[arg(long, default_value = "3")]
    pub size: i32,

    /// Strategy for the first player (Black)
    #[arg(long, default_value = "lookahead")]
    pub black: String,

    /// Strategy for the second player (White)
    #[arg(long, default_value = "greedy")]
    pub white: String,

    /// Seed for seeded strategies
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Game setup JSON file (overrides the flags above)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the board after every move
    #[arg(long)]
    pub show: bool,
}

/// Run play command
pub fn run(args: PlayArgs) -> Result<()> {
    let setup = resolve_setup(&args)?;
    let (mut engine, black, white) = setup.build()?;
    engine.start_game()?;

    tracing::info!(
        "Starting game: {} (Black) vs {} (White) on {:?}",
        setup.black,
        setup.white,
        setup.geometry
    );

    if args.show {
        println!("{}", render::board_to_text(engine.view().board()));
    }

    let moves = drive_game(&mut engine, black.as_ref(), white.as_ref(), args.show)?;

    tracing::info!("Game over after {} placements", moves);
    report(&engine);
    Ok(())
}

/// Translate CLI flags into a board geometry
pub fn parse_geometry(kind: &str, size: i32) -> Result<Geometry> {
    match kind {
        "hex" => Ok(Geometry::hex(size)?),
        "square" => Ok(Geometry::square(size)?),
        other => bail!("unknown board kind: {other} (expected \"hex\" or \"square\")"),
    }
}

fn resolve_setup(args: &PlayArgs) -> Result<GameSetup> {
    if let Some(path) = &args.config {
        return GameSetup::load(path)
            .with_context(|| format!("failed to load setup: {}", path.display()));
    }
    Ok(GameSetup {
        geometry: parse_geometry(&args.board, args.size)?,
        black: args.black.clone(),
        white: args.white.clone(),
        seed: args.seed,
    })
}

/// The player-wrapper loop: a strategy's first recommended cell is placed,
/// an empty recommendation passes. Returns the number of placements.
pub fn drive_game(
    engine: &mut GameEngine,
    black: &dyn Strategy,
    white: &dyn Strategy,
    show: bool,
) -> Result<usize> {
    // two actions per cell plus a closing pass pair is a hard ceiling
    let cap = engine.view().board().cells().len() * 2 + 2;
    let mut placements = 0usize;

    for _ in 0..cap {
        if engine.is_game_over() {
            break;
        }
        let color = engine.current_color();
        let strategy = match color {
            Color::Black => black,
            Color::White => white,
        };
        let choice = strategy.choose_moves(&engine.view(), &[]);
        match choice.first() {
            Some(&cell) => {
                engine
                    .place_current_player_piece(cell)
                    .with_context(|| format!("{color:?} suggested an illegal move {cell:?}"))?;
                tracing::debug!("{:?} plays {:?}", color, cell);
                placements += 1;
                if show {
                    println!("{}", render::board_to_text(engine.view().board()));
                }
            }
            None => {
                engine.pass_turn()?;
                tracing::debug!("{:?} passes", color);
            }
        }
    }

    Ok(placements)
}

fn report(engine: &GameEngine) {
    println!("\n=== Final position ===");
    println!("Black: {}", engine.score_of(Color::Black));
    println!("White: {}", engine.score_of(Color::White));
    match engine.winner() {
        Some(color) => println!("Winner: {color:?}"),
        None => println!("Winner: none (tie)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_geometry() {
        assert_eq!(
            parse_geometry("hex", 3).unwrap(),
            Geometry::Hex { radius: 3 }
        );
        assert_eq!(
            parse_geometry("square", 6).unwrap(),
            Geometry::Square { side: 6 }
        );
        assert!(parse_geometry("hex", 1).is_err());
        assert!(parse_geometry("octagon", 3).is_err());
    }

    #[test]
    fn test_drive_game_to_completion() {
        let setup = GameSetup {
            geometry: Geometry::Hex { radius: 2 },
            black: "greedy".to_string(),
            white: "heuristic".to_string(),
            seed: 0,
        };
        let (mut engine, black, white) = setup.build().unwrap();
        engine.start_game().unwrap();
        let placements = drive_game(&mut engine, black.as_ref(), white.as_ref(), false).unwrap();
        assert!(engine.is_game_over());
        assert!(placements > 0);
    }
}
