//! Error types for game sessions
//!
//! Move submissions fail with a user-facing error and leave the session
//! unchanged. `SearchExhausted` is the only fatal variant: it means the
//! rules engine and the search disagree about whether a move exists.

use thiserror::Error;

/// Errors that can occur while driving a game
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Text matches neither algebraic nor coordinate notation
    #[error("'{0}' is not a valid move")]
    InvalidMoveSyntax(String),

    /// Text parses but the move is not legal in the current position
    #[error("'{0}' is not a legal move")]
    IllegalMove(String),

    /// A move was submitted before any game was started
    #[error("no game in progress, start a new game first")]
    SessionNotStarted,

    /// A move was submitted after the game ended
    #[error("the game is over, start a new game")]
    SessionAlreadyOver,

    /// The engine had to move but found no legal move
    #[error("engine found no legal move in a position that is not over")]
    SearchExhausted,

    /// A FEN string could not be turned into a legal position
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

impl GameError {
    /// True for internal contract violations that must abort the caller.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GameError::SearchExhausted)
    }
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
