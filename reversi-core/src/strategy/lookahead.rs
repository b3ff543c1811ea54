//! One-ply adversarial lookahead

use super::{candidate_pool, Chain, CornerPreference, EdgeAvoidance, GreedyCapture, Strategy};
use crate::board::{Board, Color};
use crate::cell::Cell;
use crate::engine::GameView;

/// Sentinel value for a detected win or loss one ply ahead
const WIN_VALUE: i64 = 1_000_000;

/// Scores each candidate by the position left after the opponent's best
/// single reply, and keeps the candidate the opponent can punish least
///
/// The opponent's reply is chosen with a fixed heuristic composite
/// (edge avoidance, then corner preference, then greedy capture). A
/// candidate whose child position is immediately terminal scores a win/loss
/// sentinel instead of the heuristic difference. The best candidate is also
/// compared against passing; only when passing scores strictly higher does
/// the strategy recommend a pass by returning an empty sequence.
///
/// Depth is deliberately bounded to one ply, keeping the cost linear in
/// (own moves x opponent moves); anything deeper needs an explicit depth
/// bound and memoization first.
pub struct AdversarialLookahead;

impl AdversarialLookahead {
    /// The opponent model used for the single reply
    fn reply_composite() -> Chain {
        Chain::new(vec![
            Box::new(EdgeAvoidance),
            Box::new(CornerPreference),
            Box::new(GreedyCapture),
        ])
    }

    fn score_difference(board: &Board, mover: Color) -> i64 {
        board.score_of(mover) as i64 - board.score_of(mover.opposite()) as i64
    }

    /// Value, from `mover`'s perspective, of a board where `mover` has just
    /// acted and the opponent answers once
    fn value_after_best_reply(board: &Board, mover: Color) -> i64 {
        let opponent = mover.opposite();
        if board.legal_moves(mover).is_empty() && board.legal_moves(opponent).is_empty() {
            let diff = Self::score_difference(board, mover);
            return match diff.signum() {
                1 => WIN_VALUE,
                -1 => -WIN_VALUE,
                _ => 0,
            };
        }

        let reply_view = GameView::new(board, opponent);
        let replies = Self::reply_composite().choose_moves(&reply_view, &[]);
        match replies.first() {
            // the opponent has to pass
            None => Self::score_difference(board, mover),
            Some(&reply) => {
                let mut sim = board.clone();
                let _ = sim.validate_move(reply, opponent, true);
                Self::score_difference(&sim, mover)
            }
        }
    }
}

impl Strategy for AdversarialLookahead {
    fn choose_moves(&self, view: &GameView<'_>, candidates: &[Cell]) -> Vec<Cell> {
        let pool = candidate_pool(view, candidates);
        let mover = view.to_move();

        // earlier candidates win ties: input order carries tie-break meaning
        let mut best: Option<(i64, Cell)> = None;
        for &cell in &pool {
            let mut sim = view.copy_board();
            if !sim.validate_move(cell, mover, true).unwrap_or(false) {
                continue;
            }
            let value = Self::value_after_best_reply(&sim, mover);
            if best.map_or(true, |(best_value, _)| value > best_value) {
                best = Some((value, cell));
            }
        }

        match best {
            None => Vec::new(),
            Some((best_value, cell)) => {
                let pass_value = Self::value_after_best_reply(view.board(), mover);
                if pass_value > best_value {
                    Vec::new()
                } else {
                    vec![cell]
                }
            }
        }
    }
}
