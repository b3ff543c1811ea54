//! Board coordinates: cube-coordinate hex cells and row/col square cells

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// A single board position
///
/// Hex cells carry cube coordinates with the invariant `q + r + s == 0`;
/// square cells are a plain row/column pair. Cells are immutable values,
/// compared and hashed by coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Hex { q: i32, r: i32, s: i32 },
    Sq { row: i32, col: i32 },
}

impl Cell {
    /// Create a hex cell, checking the cube-coordinate invariant
    pub fn hex(q: i32, r: i32, s: i32) -> Result<Self, GameError> {
        if q + r + s != 0 {
            return Err(GameError::InvalidArgument(format!(
                "cube coordinates must sum to zero, got ({q}, {r}, {s})"
            )));
        }
        Ok(Cell::Hex { q, r, s })
    }

    /// Create a square-board cell
    pub const fn sq(row: i32, col: i32) -> Self {
        Cell::Sq { row, col }
    }

    /// Hex ring distance from the board center (0 for the center itself)
    pub fn ring_distance(&self) -> i32 {
        match *self {
            Cell::Hex { q, r, s } => q.abs().max(r.abs()).max(s.abs()),
            Cell::Sq { row, col } => row.abs().max(col.abs()),
        }
    }
}

/// Cube unit direction vectors (dq, dr, ds)
/// Index: 0=N, 1=NE, 2=SE, 3=S, 4=SW, 5=NW
pub const HEX_DIRECTIONS: [(i32, i32, i32); 6] = [
    (0, -1, 1),  // N
    (1, -1, 0),  // NE
    (1, 0, -1),  // SE
    (0, 1, -1),  // S
    (-1, 1, 0),  // SW
    (-1, 0, 1),  // NW
];

/// Square-board direction vectors (drow, dcol), 8-neighborhood
pub const SQ_DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
