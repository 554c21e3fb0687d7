//! Shared, lock-guarded access to the one active game session.
//!
//! Mutations hold the session mutex for their whole duration, engine
//! search included. Reads go to a snapshot published after every
//! mutation, so `board()` never waits for a search.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rand::Rng;
use rand::rngs::StdRng;
use shakmaty::{Color, Move, Setup};

use crate::error::{GameError, GameResult};
use crate::rules::{self, color_name, move_to_uci};

use super::session::{DrawKind, GameSession, GameStatus, Turn};

/// Read-only view of the session at the time of the last mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub status: Option<GameStatus>,
    pub draw: Option<DrawKind>,
    pub fen: String,
    pub human: Option<Color>,
    pub turn: Color,
    /// Diagram with the human's side at the bottom.
    pub diagram: String,
}

impl Snapshot {
    fn capture<R: Rng>(session: &GameSession<R>) -> Self {
        let setup: Setup = session.render();
        let human = session.human_color();
        let flipped = human == Some(Color::Black);
        Snapshot {
            status: session.status(),
            draw: session.draw_kind(),
            turn: setup.turn,
            diagram: rules::render(&setup.board, flipped),
            fen: rules::serialize_setup(setup),
            human,
        }
    }
}

/// Answer to a front-end command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    /// `None` before the first game.
    pub status: Option<GameStatus>,
    pub fen: String,
    /// Diagram of the same position as `fen`.
    pub diagram: String,
    pub message: String,
}

pub struct SessionHandle<R = StdRng> {
    session: Arc<Mutex<GameSession<R>>>,
    snapshot: Arc<RwLock<Snapshot>>,
}

impl<R> Clone for SessionHandle<R> {
    fn clone(&self) -> Self {
        SessionHandle {
            session: Arc::clone(&self.session),
            snapshot: Arc::clone(&self.snapshot),
        }
    }
}

impl<R: Rng> SessionHandle<R> {
    pub fn new(session: GameSession<R>) -> Self {
        let snapshot = Snapshot::capture(&session);
        SessionHandle {
            session: Arc::new(Mutex::new(session)),
            snapshot: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Replace the current game with a fresh one.
    pub fn new_game(&self, human: Color) -> GameResult<Reply> {
        self.start(human, None)
    }

    pub fn new_game_from_fen(&self, human: Color, fen: &str) -> GameResult<Reply> {
        self.start(human, Some(fen))
    }

    fn start(&self, human: Color, fen: Option<&str>) -> GameResult<Reply> {
        let mut session = self.session.lock();
        let opening = match fen {
            Some(fen) => session.new_game_from_fen(human, fen)?,
            None => session.new_game(human)?,
        };
        let snapshot = self.publish(&session);

        let mut message = format!("New game started. You play as {}.", color_name(human));
        if let Some(mv) = opening {
            message.push_str(&format!(" Engine played {}.", move_to_uci(&mv)));
        }
        if let Some(status) = snapshot.status.filter(|s| s.is_over()) {
            message.push(' ');
            message.push_str(&game_over_message(status, &snapshot));
        }
        Ok(reply(&snapshot, message))
    }

    /// Submit a human move. Rejected moves leave the session unchanged.
    pub fn submit_move(&self, notation: &str) -> GameResult<Reply> {
        let mut session = self.session.lock();
        let turn = session.submit_human_move(notation)?;
        let snapshot = self.publish(&session);
        Ok(reply(&snapshot, turn_message(&turn, &snapshot)))
    }

    /// Current board from the last published snapshot.
    pub fn board(&self) -> Reply {
        let snapshot = self.snapshot.read();
        let message = match snapshot.status {
            None => "No game in progress.".to_string(),
            Some(GameStatus::InProgress) => "Your move.".to_string(),
            Some(status) => game_over_message(status, &snapshot),
        };
        reply(&snapshot, message)
    }

    /// Reply for a rejected command: current state plus the error text.
    pub fn error_reply(&self, err: &GameError) -> Reply {
        reply(&self.snapshot.read(), err.to_string())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.read().clone()
    }

    /// Run `f` with exclusive access to the session.
    pub fn with_session<T>(&self, f: impl FnOnce(&mut GameSession<R>) -> T) -> T {
        let mut session = self.session.lock();
        let out = f(&mut *session);
        self.publish(&session);
        out
    }

    fn publish(&self, session: &GameSession<R>) -> Snapshot {
        let snapshot = Snapshot::capture(session);
        *self.snapshot.write() = snapshot.clone();
        snapshot
    }
}

fn reply(snapshot: &Snapshot, message: String) -> Reply {
    Reply {
        status: snapshot.status,
        fen: snapshot.fen.clone(),
        diagram: snapshot.diagram.clone(),
        message,
    }
}

fn turn_message(turn: &Turn, snapshot: &Snapshot) -> String {
    let engine = turn.engine_move.as_ref().map(describe_engine_move);
    match (engine, turn.status.is_over()) {
        (Some(engine), false) => engine,
        (Some(engine), true) => format!("{} {}", engine, game_over_message(turn.status, snapshot)),
        (None, _) => game_over_message(turn.status, snapshot),
    }
}

fn describe_engine_move(mv: &Move) -> String {
    format!("Engine played {}.", move_to_uci(mv))
}

/// The side to move in `snapshot` is the one that got mated when `status`
/// is `Checkmate`.
fn game_over_message(status: GameStatus, snapshot: &Snapshot) -> String {
    match status {
        GameStatus::Checkmate => format!("Checkmate, {} wins.", color_name(snapshot.turn.other())),
        GameStatus::Stalemate => "Stalemate, the game is drawn.".to_string(),
        GameStatus::Draw => match snapshot.draw {
            Some(DrawKind::SeventyFiveMoves) => "Draw by the 75-move rule.".to_string(),
            Some(DrawKind::FivefoldRepetition) => "Draw by fivefold repetition.".to_string(),
            _ => "Draw by insufficient material.".to_string(),
        },
        GameStatus::InProgress => "Your move.".to_string(),
    }
}
