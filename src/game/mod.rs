//! Game session: whose turn it is, when the engine moves, and how the
//! single active game is shared between callers.

pub mod handle;
pub mod session;

pub use handle::{Reply, SessionHandle, Snapshot};
pub use session::{DrawKind, GameSession, GameStatus, Phase, Turn};
