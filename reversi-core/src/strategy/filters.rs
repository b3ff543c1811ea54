//! Positional narrowing filters

use rustc_hash::FxHashSet;

use super::{candidate_pool, Strategy};
use crate::cell::Cell;
use crate::engine::GameView;

/// Keeps only candidates on true corner cells; falls back to the unfiltered
/// input when no candidate is a corner
pub struct CornerPreference;

impl Strategy for CornerPreference {
    fn choose_moves(&self, view: &GameView<'_>, candidates: &[Cell]) -> Vec<Cell> {
        let pool = candidate_pool(view, candidates);
        let corners: FxHashSet<Cell> = view.board().geometry().corners().into_iter().collect();
        let kept: Vec<Cell> = pool
            .iter()
            .copied()
            .filter(|cell| corners.contains(cell))
            .collect();
        if kept.is_empty() {
            pool
        } else {
            kept
        }
    }
}

/// Drops candidates adjacent to a corner cell; falls back to the unfiltered
/// input rather than emptying the set (dodging an edge is never worth a pass)
pub struct EdgeAvoidance;

impl Strategy for EdgeAvoidance {
    fn choose_moves(&self, view: &GameView<'_>, candidates: &[Cell]) -> Vec<Cell> {
        let pool = candidate_pool(view, candidates);
        let geometry = view.board().geometry();
        let risky: FxHashSet<Cell> = geometry
            .corners()
            .into_iter()
            .flat_map(|corner| geometry.neighbors(corner))
            .collect();
        let kept: Vec<Cell> = pool
            .iter()
            .copied()
            .filter(|cell| !risky.contains(cell))
            .collect();
        if kept.is_empty() {
            pool
        } else {
            kept
        }
    }
}
