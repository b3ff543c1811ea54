//! Deterministic candidate ordering

use super::{candidate_pool, Strategy};
use crate::cell::Cell;
use crate::engine::GameView;

/// Total order over candidates: hex cells by descending `s - r`, then
/// descending `s`; square cells row-major. A reproducible tie-break, not a
/// gameplay heuristic.
pub struct UpperLeftTiebreak;

impl UpperLeftTiebreak {
    /// Ascending sort key realizing the order
    pub fn sort_key(cell: Cell) -> (i64, i64) {
        match cell {
            Cell::Hex { r, s, .. } => (-((s - r) as i64), -(s as i64)),
            Cell::Sq { row, col } => (row as i64, col as i64),
        }
    }
}

impl Strategy for UpperLeftTiebreak {
    fn choose_moves(&self, view: &GameView<'_>, candidates: &[Cell]) -> Vec<Cell> {
        let mut pool = candidate_pool(view, candidates);
        pool.sort_by_key(|&cell| Self::sort_key(cell));
        pool
    }
}
