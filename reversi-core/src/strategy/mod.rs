//! Composable move-selection strategies
//!
//! A strategy is a pure decision function over a read-only game view: it
//! narrows or orders a candidate sequence and never mutates authoritative
//! state. An empty *input* asks the strategy to compute the legal-move set
//! itself; an empty *output* recommends a pass.

mod filters;
mod greedy;
mod lookahead;
mod random;
mod tiebreak;

pub use filters::{CornerPreference, EdgeAvoidance};
pub use greedy::GreedyCapture;
pub use lookahead::AdversarialLookahead;
pub use random::RandomChoice;
pub use tiebreak::UpperLeftTiebreak;

use crate::cell::Cell;
use crate::engine::GameView;
use crate::error::GameError;

/// A move-selection policy
pub trait Strategy {
    /// Narrow or order `candidates`; with no candidates given, start from
    /// the legal-move set of the color to act. Returning an empty sequence
    /// recommends a pass.
    fn choose_moves(&self, view: &GameView<'_>, candidates: &[Cell]) -> Vec<Cell>;
}

/// The working candidate set: the given sequence, or the legal moves of the
/// color to act when none was given
fn candidate_pool(view: &GameView<'_>, candidates: &[Cell]) -> Vec<Cell> {
    if candidates.is_empty() {
        view.legal_moves()
    } else {
        candidates.to_vec()
    }
}

/// Applies each stage to the output of the previous one
///
/// A stage returning an empty sequence means "this filter found nothing
/// applicable", never "pass": the previous non-empty set flows on to the
/// next stage unchanged. Narrowing filters can therefore be chained ahead
/// of a decisive final stage without ever forcing a pass.
pub struct Chain {
    stages: Vec<Box<dyn Strategy>>,
}

impl Chain {
    pub fn new(stages: Vec<Box<dyn Strategy>>) -> Self {
        Self { stages }
    }
}

impl Strategy for Chain {
    fn choose_moves(&self, view: &GameView<'_>, candidates: &[Cell]) -> Vec<Cell> {
        let mut current = candidate_pool(view, candidates);
        for stage in &self.stages {
            let narrowed = stage.choose_moves(view, &current);
            if !narrowed.is_empty() {
                current = narrowed;
            }
        }
        current
    }
}

/// Look up a strategy by its launcher-facing name
///
/// `seed` only matters for the random baseline; deterministic strategies
/// ignore it.
pub fn by_name(name: &str, seed: u64) -> Result<Box<dyn Strategy>, GameError> {
    match name {
        "greedy" => Ok(Box::new(GreedyCapture)),
        "corner" => Ok(Box::new(Chain::new(vec![
            Box::new(CornerPreference),
            Box::new(GreedyCapture),
        ]))),
        "edge" => Ok(Box::new(Chain::new(vec![
            Box::new(EdgeAvoidance),
            Box::new(GreedyCapture),
        ]))),
        "heuristic" => Ok(Box::new(Chain::new(vec![
            Box::new(EdgeAvoidance),
            Box::new(CornerPreference),
            Box::new(GreedyCapture),
        ]))),
        "lookahead" => Ok(Box::new(AdversarialLookahead)),
        "random" => Ok(Box::new(RandomChoice::new(seed))),
        other => Err(GameError::InvalidArgument(format!(
            "unknown strategy: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Color, Geometry};

    fn seeded_hex3() -> Board {
        let mut board = Board::new(Geometry::Hex { radius: 3 }).unwrap();
        for (cell, color) in board.geometry().seed_tokens() {
            board.set_occupant(cell, Some(color)).unwrap();
        }
        board
    }

    /// A filter keeping nothing, to exercise the chain fallback
    struct RejectAll;

    impl Strategy for RejectAll {
        fn choose_moves(&self, _view: &GameView<'_>, _candidates: &[Cell]) -> Vec<Cell> {
            Vec::new()
        }
    }

    #[test]
    fn test_chain_skips_empty_stage_output() {
        let board = seeded_hex3();
        let view = GameView::new(&board, Color::Black);
        let chain = Chain::new(vec![Box::new(RejectAll), Box::new(GreedyCapture)]);
        let alone = GreedyCapture.choose_moves(&view, &[]);
        assert_eq!(chain.choose_moves(&view, &[]), alone);
        assert!(!alone.is_empty());
    }

    #[test]
    fn test_chain_with_corner_filter_matches_greedy_when_no_corner() {
        let board = seeded_hex3();
        let view = GameView::new(&board, Color::Black);
        // no fresh-board opening is a corner cell
        let chain = Chain::new(vec![Box::new(CornerPreference), Box::new(GreedyCapture)]);
        assert_eq!(
            chain.choose_moves(&view, &[]),
            GreedyCapture.choose_moves(&view, &[])
        );
    }

    #[test]
    fn test_chain_passes_through_when_no_moves_exist() {
        let board = Board::new(Geometry::Hex { radius: 3 }).unwrap();
        let view = GameView::new(&board, Color::Black);
        let chain = Chain::new(vec![Box::new(CornerPreference), Box::new(GreedyCapture)]);
        assert!(chain.choose_moves(&view, &[]).is_empty());
    }

    #[test]
    fn test_by_name() {
        assert!(by_name("greedy", 0).is_ok());
        assert!(by_name("corner", 0).is_ok());
        assert!(by_name("edge", 0).is_ok());
        assert!(by_name("heuristic", 0).is_ok());
        assert!(by_name("lookahead", 0).is_ok());
        assert!(by_name("random", 7).is_ok());
        assert!(matches!(
            by_name("psychic", 0),
            Err(GameError::InvalidArgument(_))
        ));
    }
}
