//! Maximum immediate capture

use super::{candidate_pool, Strategy, UpperLeftTiebreak};
use crate::cell::Cell;
use crate::engine::GameView;

/// Keeps the candidates with the highest score gain under a simulated
/// commit; ties are handed to `UpperLeftTiebreak`. Candidates that capture
/// nothing are dropped, so an all-illegal pool recommends a pass.
pub struct GreedyCapture;

impl Strategy for GreedyCapture {
    fn choose_moves(&self, view: &GameView<'_>, candidates: &[Cell]) -> Vec<Cell> {
        let pool = candidate_pool(view, candidates);
        if pool.is_empty() {
            return pool;
        }
        let color = view.to_move();
        let before = view.score_of(color);

        let mut best_gain = 0;
        let mut gains = Vec::with_capacity(pool.len());
        for &cell in &pool {
            let mut sim = view.copy_board();
            let legal = sim.validate_move(cell, color, true).unwrap_or(false);
            let gain = if legal { sim.score_of(color) - before } else { 0 };
            best_gain = best_gain.max(gain);
            gains.push((cell, gain));
        }
        if best_gain == 0 {
            return Vec::new();
        }

        let mut best: Vec<Cell> = gains
            .into_iter()
            .filter(|&(_, gain)| gain == best_gain)
            .map(|(cell, _)| cell)
            .collect();
        best.sort_by_key(|&cell| UpperLeftTiebreak::sort_key(cell));
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Color, Geometry};

    fn hex(q: i32, r: i32, s: i32) -> Cell {
        Cell::hex(q, r, s).unwrap()
    }

    /// One triple-capture line along r=0 and two single-capture lines
    fn mixed_gain_board() -> Board {
        let mut board = Board::new(Geometry::Hex { radius: 3 }).unwrap();
        let whites = [
            hex(0, 0, 0),
            hex(1, 0, -1),
            hex(2, 0, -2),
            hex(0, 2, -2),
            hex(2, -2, 0),
        ];
        let blacks = [hex(3, 0, -3), hex(0, 3, -3), hex(3, -3, 0)];
        for cell in whites {
            board.set_occupant(cell, Some(Color::White)).unwrap();
        }
        for cell in blacks {
            board.set_occupant(cell, Some(Color::Black)).unwrap();
        }
        board
    }

    #[test]
    fn test_greedy_prefers_largest_capture() {
        let board = mixed_gain_board();
        let view = GameView::new(&board, Color::Black);
        // two single-capture candidates and one triple-capture candidate
        let candidates = vec![hex(0, 1, -1), hex(1, -1, 0), hex(-1, 0, 1)];
        assert_eq!(
            GreedyCapture.choose_moves(&view, &candidates),
            vec![hex(-1, 0, 1)]
        );
    }

    #[test]
    fn test_greedy_breaks_ties_deterministically() {
        let board = mixed_gain_board();
        let view = GameView::new(&board, Color::Black);
        // both capture one token; the tiebreak orders them regardless of
        // the input order
        let candidates = vec![hex(0, 1, -1), hex(1, -1, 0)];
        assert_eq!(
            GreedyCapture.choose_moves(&view, &candidates),
            vec![hex(1, -1, 0), hex(0, 1, -1)]
        );
    }

    #[test]
    fn test_greedy_drops_capture_less_candidates() {
        let board = mixed_gain_board();
        let view = GameView::new(&board, Color::Black);
        let candidates = vec![hex(-3, 0, 3), hex(-1, 0, 1)];
        assert_eq!(
            GreedyCapture.choose_moves(&view, &candidates),
            vec![hex(-1, 0, 1)]
        );
    }

    #[test]
    fn test_greedy_recommends_pass_when_nothing_captures() {
        let board = Board::new(Geometry::Hex { radius: 3 }).unwrap();
        let view = GameView::new(&board, Color::Black);
        assert!(GreedyCapture.choose_moves(&view, &[]).is_empty());
        assert!(GreedyCapture
            .choose_moves(&view, &[hex(0, 0, 0)])
            .is_empty());
    }

    #[test]
    fn test_greedy_computes_pool_when_given_none() {
        let board = mixed_gain_board();
        let view = GameView::new(&board, Color::Black);
        let chosen = GreedyCapture.choose_moves(&view, &[]);
        // the triple capture dominates the full legal-move set too
        assert_eq!(chosen, vec![hex(-1, 0, 1)]);
    }
}
