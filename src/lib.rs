pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod uci;

pub use engine::eval::evaluate;
pub use engine::search::{SearchResult, Searcher};
pub use error::{GameError, GameResult};
pub use game::{GameSession, GameStatus, SessionHandle};
pub use shakmaty;
pub use uci::UCI;
