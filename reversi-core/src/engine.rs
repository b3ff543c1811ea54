//! Turn state machine over a single board

use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Geometry};
use crate::cell::Cell;
use crate::error::GameError;

/// Game lifecycle phase; `Over` is terminal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    Running,
    Over,
}

/// Owns one board plus the turn bookkeeping
///
/// All authoritative mutation goes through `place_current_player_piece` and
/// `pass_turn`; strategies and views only ever see borrowed or detached
/// board state.
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    current_color: Color,
    consecutive_passes: u32,
    phase: Phase,
}

impl GameEngine {
    /// Engine over an empty, unseeded board
    pub fn new(geometry: Geometry) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(geometry)?,
            current_color: Color::Black,
            consecutive_passes: 0,
            phase: Phase::NotStarted,
        })
    }

    /// Seed the starting tokens and begin play with Black to move
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::NotStarted {
            return Err(GameError::IllegalState(
                "game has already been started".to_string(),
            ));
        }
        for (cell, color) in self.board.geometry().seed_tokens() {
            self.board.set_occupant(cell, Some(color))?;
        }
        self.current_color = Color::Black;
        self.consecutive_passes = 0;
        self.phase = Phase::Running;
        Ok(())
    }

    /// Commit a move for the player to act; flips the turn on success
    pub fn place_current_player_piece(&mut self, cell: Cell) -> Result<(), GameError> {
        self.ensure_running()?;
        let legal = self.board.validate_move(cell, self.current_color, true)?;
        if !legal {
            return Err(GameError::IllegalState("invalid move".to_string()));
        }
        self.consecutive_passes = 0;
        self.current_color = self.current_color.opposite();
        self.refresh_phase();
        Ok(())
    }

    /// Give up the turn without placing a token
    pub fn pass_turn(&mut self) -> Result<(), GameError> {
        self.ensure_running()?;
        self.consecutive_passes += 1;
        self.current_color = self.current_color.opposite();
        self.refresh_phase();
        Ok(())
    }

    /// Whether the game has ended; once true it stays true
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::Over
    }

    /// Higher score wins; None on a tie. Meaningful once the game is over.
    pub fn winner(&self) -> Option<Color> {
        let black = self.board.score_of(Color::Black);
        let white = self.board.score_of(Color::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn score_of(&self, color: Color) -> usize {
        self.board.score_of(color)
    }

    pub fn occupant_of(&self, cell: Cell) -> Result<Option<Color>, GameError> {
        self.board.occupant_of(cell)
    }

    pub fn legal_moves(&self, color: Color) -> Vec<Cell> {
        self.board.legal_moves(color)
    }

    /// Detached deep snapshot of the board, never the live one
    pub fn copy_board(&self) -> Board {
        self.board.clone()
    }

    /// Read-only view for strategies
    pub fn view(&self) -> GameView<'_> {
        GameView::new(&self.board, self.current_color)
    }

    fn ensure_running(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::Running => Ok(()),
            Phase::NotStarted => Err(GameError::IllegalState(
                "game has not been started".to_string(),
            )),
            Phase::Over => Err(GameError::IllegalState("game is over".to_string())),
        }
    }

    /// The game ends after two consecutive passes, or as soon as neither
    /// color has a legal move; the transition latches.
    fn refresh_phase(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let exhausted = self.board.legal_moves(Color::Black).is_empty()
            && self.board.legal_moves(Color::White).is_empty();
        if self.consecutive_passes >= 2 || exhausted {
            self.phase = Phase::Over;
        }
    }
}

/// Read-only view of a board with a color to act, the input to strategies
///
/// Borrowing keeps strategies honest: they can query freely and take
/// detached copies for simulation, but never touch live state.
pub struct GameView<'a> {
    board: &'a Board,
    to_move: Color,
}

impl<'a> GameView<'a> {
    pub fn new(board: &'a Board, to_move: Color) -> Self {
        Self { board, to_move }
    }

    pub fn board(&self) -> &Board {
        self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn score_of(&self, color: Color) -> usize {
        self.board.score_of(color)
    }

    /// Legal moves for the color to act, in canonical order
    pub fn legal_moves(&self) -> Vec<Cell> {
        self.board.legal_moves(self.to_move)
    }

    /// Detached deep copy for simulation
    pub fn copy_board(&self) -> Board {
        self.board.clone()
    }
}
