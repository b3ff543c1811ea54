//! Core error taxonomy

/// Error type for all fallible core operations
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Malformed input: bad coordinates, out-of-range cells, unknown names
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation not permitted in the current game state
    #[error("illegal state: {0}")]
    IllegalState(String),
}
