//! Reversi core - board/move engine and strategy engine
//!
//! This crate provides the capture board game core:
//! - Coordinates (cube-coordinate hex cells, row/col square cells)
//! - Board occupancy with the directional capture/flip validator
//! - The turn state machine (start, place, pass, terminal detection)
//! - Composable move-selection strategies with a one-ply adversarial
//!   lookahead
//! - Game setup configuration for launchers

pub mod board;
pub mod cell;
pub mod engine;
pub mod error;
pub mod setup;
pub mod strategy;

// Re-exports for convenient access
pub use board::{Board, Color, Geometry};
pub use cell::{Cell, HEX_DIRECTIONS, SQ_DIRECTIONS};
pub use engine::{GameEngine, GameView, Phase};
pub use error::GameError;
pub use setup::GameSetup;
pub use strategy::{
    by_name, AdversarialLookahead, Chain, CornerPreference, EdgeAvoidance, GreedyCapture,
    RandomChoice, Strategy, UpperLeftTiebreak,
};
