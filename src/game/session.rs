//! Single-game state machine: human move, engine reply, status.

use log::{error, info, warn};
use rand::Rng;
use rand::rngs::StdRng;
use shakmaty::zobrist::Zobrist64;
use shakmaty::{Chess, Color, EnPassantMode, Move, Position, Setup};

use crate::engine::search::{DEFAULT_DEPTH, Searcher};
use crate::error::{GameError, GameResult};
use crate::rules::{self, FIVEFOLD, color_name, move_to_uci};

/// Game status, derived from the position and, for repetitions, the moves
/// that led to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Checkmate,
    Stalemate,
    /// See [`DrawKind`]
    Draw,
}

/// Automatic draws other than stalemate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawKind {
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

impl GameStatus {
    /// Status of a position with no known history.
    pub fn of(pos: &Chess) -> Self {
        if pos.is_checkmate() {
            GameStatus::Checkmate
        } else if pos.is_stalemate() {
            GameStatus::Stalemate
        } else if position_draw(pos).is_some() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::InProgress => "InProgress",
            GameStatus::Checkmate => "Checkmate",
            GameStatus::Stalemate => "Stalemate",
            GameStatus::Draw => "Draw",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Empty,
    InProgress,
    /// Absorbing until the next new game
    Terminal,
}

/// What happened during one accepted human move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub human_move: Move,
    /// `None` when the human move ended the game.
    pub engine_move: Option<Move>,
    pub status: GameStatus,
}

fn position_draw(pos: &Chess) -> Option<DrawKind> {
    if pos.is_insufficient_material() {
        Some(DrawKind::InsufficientMaterial)
    } else if rules::is_seventy_five_move_draw(pos) {
        Some(DrawKind::SeventyFiveMoves)
    } else {
        None
    }
}

#[derive(Clone, Debug)]
struct Game {
    human: Color,
    position: Chess,
    /// Key of every position reached, the current one included.
    history: Vec<Zobrist64>,
}

impl Game {
    fn new(human: Color, position: Chess) -> Self {
        let history = vec![rules::position_key(&position)];
        Game { human, position, history }
    }

    fn play(&mut self, mv: &Move) {
        self.position.play_unchecked(mv);
        self.history.push(rules::position_key(&self.position));
    }

    fn repetitions(&self) -> usize {
        let key = rules::position_key(&self.position);
        self.history.iter().filter(|k| **k == key).count()
    }

    fn draw_kind(&self) -> Option<DrawKind> {
        let pos = &self.position;
        if pos.is_checkmate() || pos.is_stalemate() {
            return None;
        }
        position_draw(pos).or_else(|| {
            (self.repetitions() >= FIVEFOLD).then_some(DrawKind::FivefoldRepetition)
        })
    }

    fn status(&self) -> GameStatus {
        if self.draw_kind().is_some() {
            GameStatus::Draw
        } else {
            GameStatus::of(&self.position)
        }
    }
}

pub struct GameSession<R = StdRng> {
    game: Option<Game>,
    searcher: Searcher<R>,
    depth: u32,
}

impl GameSession<StdRng> {
    pub fn new(depth: u32) -> Self {
        Self::with_searcher(Searcher::new(), depth)
    }

    pub fn with_seed(depth: u32, seed: u64) -> Self {
        Self::with_searcher(Searcher::with_seed(seed), depth)
    }
}

impl Default for GameSession<StdRng> {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_searcher(searcher: Searcher<R>, depth: u32) -> Self {
        GameSession {
            game: None,
            searcher,
            depth: depth.max(1),
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn searcher(&self) -> &Searcher<R> {
        &self.searcher
    }

    pub fn phase(&self) -> Phase {
        match &self.game {
            None => Phase::Empty,
            Some(game) if game.status().is_over() => Phase::Terminal,
            Some(_) => Phase::InProgress,
        }
    }

    /// `None` before the first game.
    pub fn status(&self) -> Option<GameStatus> {
        self.game.as_ref().map(Game::status)
    }

    /// Which automatic draw ended the game, if one did.
    pub fn draw_kind(&self) -> Option<DrawKind> {
        self.game.as_ref().and_then(Game::draw_kind)
    }

    pub fn human_color(&self) -> Option<Color> {
        self.game.as_ref().map(|g| g.human)
    }

    pub fn engine_color(&self) -> Option<Color> {
        self.human_color().map(|c| c.other())
    }

    /// Start from the initial position. Returns the engine's opening move
    /// when the engine plays White.
    pub fn new_game(&mut self, human: Color) -> GameResult<Option<Move>> {
        self.start(human, Chess::default())
    }

    /// Start from an arbitrary legal position. If it is the engine's turn and
    /// the game is not over, the engine moves before this returns.
    pub fn new_game_from_fen(&mut self, human: Color, fen: &str) -> GameResult<Option<Move>> {
        let position = rules::position_from_fen(fen)?;
        self.start(human, position)
    }

    fn start(&mut self, human: Color, position: Chess) -> GameResult<Option<Move>> {
        info!(
            "new game: human plays {}, engine plays {}",
            color_name(human),
            color_name(human.other())
        );
        let mut game = Game::new(human, position);

        let opening = if game.position.turn() != human && !game.status().is_over() {
            Some(self.engine_reply(&mut game)?)
        } else {
            None
        };
        self.game = Some(game);
        Ok(opening)
    }

    /// Apply a human move given in algebraic or coordinate notation and,
    /// unless that ends the game, the engine's reply. On error the session
    /// is unchanged.
    pub fn submit_human_move(&mut self, text: &str) -> GameResult<Turn> {
        let game = self.game.as_ref().ok_or(GameError::SessionNotStarted)?;
        if game.status().is_over() {
            return Err(GameError::SessionAlreadyOver);
        }

        let mut next = game.clone();
        let human_move =
            rules::parse_move(&next.position, text).inspect_err(|e| warn!("rejected move: {}", e))?;
        next.play(&human_move);
        info!("human played {}", move_to_uci(&human_move));

        let status = next.status();
        if status.is_over() {
            info!("game over after human move: {}", status.as_str());
            self.game = Some(next);
            return Ok(Turn {
                human_move,
                engine_move: None,
                status,
            });
        }

        let engine_move = self.engine_reply(&mut next)?;
        let status = next.status();
        if status.is_over() {
            info!("game over after engine move: {}", status.as_str());
        }
        self.game = Some(next);
        Ok(Turn {
            human_move,
            engine_move: Some(engine_move),
            status,
        })
    }

    /// Board, side to move, rights and counters of the current game, or the
    /// empty setup before the first game.
    pub fn render(&self) -> Setup {
        match &self.game {
            Some(game) => game.position.clone().into_setup(EnPassantMode::Legal),
            None => Setup::empty(),
        }
    }

    pub fn position(&self) -> Option<&Chess> {
        self.game.as_ref().map(|g| &g.position)
    }

    fn engine_reply(&mut self, game: &mut Game) -> GameResult<Move> {
        let result = self.searcher.best_move(&game.position, self.depth).ok_or_else(|| {
            error!("no legal engine move in a live position");
            GameError::SearchExhausted
        })?;
        info!(
            "engine played {} (score {})",
            move_to_uci(&result.best_move),
            result.score
        );
        game.play(&result.best_move);
        Ok(result.best_move)
    }
}
