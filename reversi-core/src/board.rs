//! Board geometry, occupancy, and the capture/flip move validator

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cell::{Cell, HEX_DIRECTIONS, SQ_DIRECTIONS};
use crate::error::GameError;

/// Token color; Black moves first
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Board shape: hexagon by ring radius, or square by side length
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Geometry {
    Hex { radius: i32 },
    Square { side: i32 },
}

impl Geometry {
    /// Hexagonal board with the given ring radius
    pub fn hex(radius: i32) -> Result<Self, GameError> {
        let geometry = Geometry::Hex { radius };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Square board with the given side length
    pub fn square(side: i32) -> Result<Self, GameError> {
        let geometry = Geometry::Square { side };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Reject boards too small to hold the seed pattern plus a first move
    pub fn validate(&self) -> Result<(), GameError> {
        match *self {
            Geometry::Hex { radius } if radius < 2 => Err(GameError::InvalidArgument(format!(
                "hex radius must be at least 2, got {radius}"
            ))),
            Geometry::Square { side } if side < 4 => Err(GameError::InvalidArgument(format!(
                "square side must be at least 4, got {side}"
            ))),
            _ => Ok(()),
        }
    }

    /// Whether the cell lies on this board
    pub fn contains(&self, cell: Cell) -> bool {
        match (*self, cell) {
            (Geometry::Hex { radius }, Cell::Hex { q, r, s }) => {
                q.abs().max(r.abs()).max(s.abs()) <= radius
            }
            (Geometry::Square { side }, Cell::Sq { row, col }) => {
                (0..side).contains(&row) && (0..side).contains(&col)
            }
            _ => false,
        }
    }

    /// Number of ray directions (6 for hex, 8 for square)
    pub fn direction_count(&self) -> usize {
        match self {
            Geometry::Hex { .. } => HEX_DIRECTIONS.len(),
            Geometry::Square { .. } => SQ_DIRECTIONS.len(),
        }
    }

    /// Next cell in the given direction, or None when the step leaves the board
    pub fn step(&self, cell: Cell, direction: usize) -> Option<Cell> {
        let next = match (*self, cell) {
            (Geometry::Hex { .. }, Cell::Hex { q, r, s }) => {
                let (dq, dr, ds) = HEX_DIRECTIONS[direction];
                Cell::Hex {
                    q: q + dq,
                    r: r + dr,
                    s: s + ds,
                }
            }
            (Geometry::Square { .. }, Cell::Sq { row, col }) => {
                let (dr, dc) = SQ_DIRECTIONS[direction];
                Cell::Sq {
                    row: row + dr,
                    col: col + dc,
                }
            }
            _ => return None,
        };
        self.contains(next).then_some(next)
    }

    /// Every cell on the board, in canonical iteration order
    /// (hex: ascending q then r; square: row-major)
    pub fn cells(&self) -> Vec<Cell> {
        match *self {
            Geometry::Hex { radius } => {
                let mut cells = Vec::new();
                for q in -radius..=radius {
                    let r_min = (-radius).max(-q - radius);
                    let r_max = radius.min(-q + radius);
                    for r in r_min..=r_max {
                        cells.push(Cell::Hex { q, r, s: -q - r });
                    }
                }
                cells
            }
            Geometry::Square { side } => {
                let mut cells = Vec::with_capacity((side * side) as usize);
                for row in 0..side {
                    for col in 0..side {
                        cells.push(Cell::Sq { row, col });
                    }
                }
                cells
            }
        }
    }

    /// True corner cells: hex cells at ring radius with a zero axis
    /// (the scaled direction vectors), square extreme row/col pairs
    pub fn corners(&self) -> Vec<Cell> {
        match *self {
            Geometry::Hex { radius } => HEX_DIRECTIONS
                .iter()
                .map(|&(dq, dr, ds)| Cell::Hex {
                    q: dq * radius,
                    r: dr * radius,
                    s: ds * radius,
                })
                .collect(),
            Geometry::Square { side } => vec![
                Cell::sq(0, 0),
                Cell::sq(0, side - 1),
                Cell::sq(side - 1, 0),
                Cell::sq(side - 1, side - 1),
            ],
        }
    }

    /// On-board neighbors of a cell
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        (0..self.direction_count())
            .filter_map(|d| self.step(cell, d))
            .collect()
    }

    /// Canonical starting tokens: six alternating tokens on the ring
    /// around the empty hex center, or the central 2x2 quad with White
    /// on the main diagonal
    pub fn seed_tokens(&self) -> Vec<(Cell, Color)> {
        match *self {
            Geometry::Hex { .. } => HEX_DIRECTIONS
                .iter()
                .enumerate()
                .map(|(i, &(dq, dr, ds))| {
                    let color = if i % 2 == 0 { Color::Black } else { Color::White };
                    (Cell::Hex { q: dq, r: dr, s: ds }, color)
                })
                .collect(),
            Geometry::Square { side } => {
                let m = side / 2;
                vec![
                    (Cell::sq(m - 1, m - 1), Color::White),
                    (Cell::sq(m - 1, m), Color::Black),
                    (Cell::sq(m, m - 1), Color::Black),
                    (Cell::sq(m, m), Color::White),
                ]
            }
        }
    }
}

/// Occupancy map over a fixed cell set
///
/// The cell set is fixed at construction; only occupancy changes. `clone()`
/// produces a fully independent board (cells are plain values), which is the
/// unit of copying for strategy simulation.
#[derive(Clone, Debug)]
pub struct Board {
    geometry: Geometry,
    cells: Vec<Cell>,
    occupancy: FxHashMap<Cell, Color>,
}

impl Board {
    /// Empty board over the given geometry
    pub fn new(geometry: Geometry) -> Result<Self, GameError> {
        geometry.validate()?;
        Ok(Self {
            geometry,
            cells: geometry.cells(),
            occupancy: FxHashMap::default(),
        })
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// All cells in canonical iteration order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Direct placement or removal, for seeding and test setups only;
    /// gameplay goes through `validate_move`
    pub fn set_occupant(&mut self, cell: Cell, color: Option<Color>) -> Result<(), GameError> {
        if !self.geometry.contains(cell) {
            return Err(GameError::InvalidArgument(format!(
                "cell {cell:?} is outside the board"
            )));
        }
        match color {
            Some(c) => self.occupancy.insert(cell, c),
            None => self.occupancy.remove(&cell),
        };
        Ok(())
    }

    /// Occupant of a cell, None when empty
    pub fn occupant_of(&self, cell: Cell) -> Result<Option<Color>, GameError> {
        if !self.geometry.contains(cell) {
            return Err(GameError::InvalidArgument(format!(
                "cell {cell:?} is outside the board"
            )));
        }
        Ok(self.occupancy.get(&cell).copied())
    }

    /// Check a placement for `color` at `cell`, committing it when asked
    ///
    /// Walks every direction from `cell`, collecting the contiguous run of
    /// opposite-color tokens; a run is captured only when it is closed off
    /// by a token of the mover's own color, and discarded when the walk
    /// reaches an empty cell or the board edge. The move is legal iff at
    /// least one token is captured. With `commit` the placement and all
    /// flips are applied; without it the board is untouched, so the query
    /// can be repeated freely.
    pub fn validate_move(
        &mut self,
        cell: Cell,
        color: Color,
        commit: bool,
    ) -> Result<bool, GameError> {
        let captured = self.captures_for(cell, color)?;
        if captured.is_empty() {
            return Ok(false);
        }
        if commit {
            self.occupancy.insert(cell, color);
            for flipped in captured {
                self.occupancy.insert(flipped, color);
            }
        }
        Ok(true)
    }

    /// Number of cells occupied by `color`
    pub fn score_of(&self, color: Color) -> usize {
        self.occupancy.values().filter(|&&c| c == color).count()
    }

    /// Every legal placement for `color`, in canonical cell order
    pub fn legal_moves(&self, color: Color) -> Vec<Cell> {
        self.cells
            .iter()
            .copied()
            .filter(|cell| !self.occupancy.contains_key(cell))
            .filter(|&cell| {
                self.captures_for(cell, color)
                    .map_or(false, |captured| !captured.is_empty())
            })
            .collect()
    }

    /// Aggregate capture set for placing `color` at `cell`
    fn captures_for(&self, cell: Cell, color: Color) -> Result<Vec<Cell>, GameError> {
        if !self.geometry.contains(cell) {
            return Err(GameError::InvalidArgument(format!(
                "cell {cell:?} is outside the board"
            )));
        }
        if self.occupancy.contains_key(&cell) {
            return Err(GameError::IllegalState(format!(
                "cell {cell:?} is already occupied"
            )));
        }

        let mut captured = Vec::new();
        for direction in 0..self.geometry.direction_count() {
            let mut run = Vec::new();
            let mut current = cell;
            loop {
                match self.geometry.step(current, direction) {
                    // Board edge: the run is unclosed, discard it
                    None => break,
                    Some(next) => match self.occupancy.get(&next) {
                        // Empty cell: unclosed, discard
                        None => break,
                        // Own color closes the run; an empty run captures nothing
                        Some(&c) if c == color => {
                            captured.append(&mut run);
                            break;
                        }
                        Some(_) => {
                            run.push(next);
                            current = next;
                        }
                    },
                }
            }
        }
        Ok(captured)
    }
}
