//! Seeded random baseline

use std::cell::RefCell;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{candidate_pool, Strategy};
use crate::cell::Cell;
use crate::engine::GameView;

/// Uniform pick from the candidate pool, reproducible under a fixed seed;
/// the baseline opponent for matches
pub struct RandomChoice {
    rng: RefCell<ChaCha8Rng>,
}

impl RandomChoice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl Strategy for RandomChoice {
    fn choose_moves(&self, view: &GameView<'_>, candidates: &[Cell]) -> Vec<Cell> {
        let pool = candidate_pool(view, candidates);
        if pool.is_empty() {
            return pool;
        }
        let index = self.rng.borrow_mut().gen_range(0..pool.len());
        vec![pool[index]]
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

    #[test]
    fn test_picks_a_legal_move() {
        let board = seeded_hex3();
        let view = GameView::new(&board, Color::Black);
        let legal = view.legal_moves();
        let chosen = RandomChoice::new(42).choose_moves(&view, &[]);
        assert_eq!(chosen.len(), 1);
        assert!(legal.contains(&chosen[0]));
    }

    #[test]
    fn test_same_seed_same_picks() {
        let board = seeded_hex3();
        let view = GameView::new(&board, Color::Black);
        let a = RandomChoice::new(7);
        let b = RandomChoice::new(7);
        for _ in 0..5 {
            assert_eq!(a.choose_moves(&view, &[]), b.choose_moves(&view, &[]));
        }
    }

    #[test]
    fn test_empty_pool_recommends_pass() {
        let board = Board::new(Geometry::Hex { radius: 2 }).unwrap();
        let view = GameView::new(&board, Color::Black);
        assert!(RandomChoice::new(0).choose_moves(&view, &[]).is_empty());
    }
}
