use std::io::{self, BufRead, Write};

use log::{debug, warn};
use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, Position};
use vampirc_uci::uci::UciSearchControl;
use vampirc_uci::{parser, UciMessage};

use crate::config::EngineConfig;
use crate::engine::eval::evaluate;
use crate::engine::search::Searcher;
use crate::rules::{self, move_to_uci};

pub struct UCI {
    pub board: Chess,
    searcher: Searcher,
    depth: u32,
}

impl UCI {
    pub fn new(config: EngineConfig) -> Self {
        let searcher = match config.seed {
            Some(seed) => Searcher::with_seed(seed),
            None => Searcher::new(),
        };
        UCI {
            board: Chess::default(),
            searcher,
            depth: config.depth,
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        self.run_with(stdin.lock(), &mut stdout)
    }

    pub fn run_with<I: BufRead, O: Write>(&mut self, input: I, out: &mut O) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match parser::parse_one(line) {
                UciMessage::Uci => self.cmd_uci(out)?,
                UciMessage::IsReady => writeln!(out, "readyok")?,
                UciMessage::SetOption { name, value } => {
                    self.apply_setoption(name.trim(), value.as_deref());
                }
                UciMessage::UciNewGame => self.cmd_ucinewgame(),
                UciMessage::Position { startpos, fen, moves } => {
                    let fen_str = fen.as_ref().map(|f| f.as_str());
                    let move_strs: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                    let refs: Vec<&str> = move_strs.iter().map(String::as_str).collect();
                    self.apply_position(startpos, fen_str, &refs);
                }
                UciMessage::Go { search_control, .. } => {
                    let depth = go_depth(search_control.as_ref()).unwrap_or(self.depth);
                    self.do_go(depth, out)?;
                }
                UciMessage::Quit => break,
                UciMessage::Unknown(ref s, _) => {
                    let parts: Vec<&str> = s.split_whitespace().collect();
                    match parts.first() {
                        Some(&"d") | Some(&"display") => self.cmd_display(out)?,
                        Some(&"eval") => self.cmd_eval(out)?,
                        _ => debug!("ignoring unknown command: {}", s),
                    }
                }
                _ => {}
            }
            out.flush()?;
        }
        Ok(())
    }

    fn cmd_uci<O: Write>(&self, out: &mut O) -> io::Result<()> {
        writeln!(out, "id name chess_bot {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "id author chess_bot developers")?;
        writeln!(out)?;
        writeln!(out, "option name Depth type spin default {} min 1 max 8", self.depth)?;
        writeln!(out, "option name Seed type string default")?;
        writeln!(out, "uciok")
    }

    /// Apply setoption by name and value.
    fn apply_setoption(&mut self, name: &str, value: Option<&str>) {
        let opt = name.to_lowercase().replace([' ', '_'], "");
        let value = value.unwrap_or("").trim();
        if opt == "depth" {
            match value.parse::<u32>() {
                Ok(depth) => self.depth = depth.clamp(1, 8),
                Err(_) => warn!("bad Depth value: {}", value),
            }
        } else if opt == "seed" {
            match value.parse::<u64>() {
                Ok(seed) => self.searcher.reseed(seed),
                Err(_) if value.is_empty() => self.searcher = Searcher::new(),
                Err(_) => warn!("bad Seed value: {}", value),
            }
        }
    }

    pub fn cmd_ucinewgame(&mut self) {
        self.board = Chess::default();
    }

    fn apply_position(&mut self, startpos: bool, fen: Option<&str>, move_strs: &[&str]) {
        if startpos {
            self.board = Chess::default();
        } else if let Some(fen_str) = fen {
            match fen_str.parse::<Fen>().ok().and_then(|f| f.into_position::<Chess>(CastlingMode::Standard).ok()) {
                Some(pos) => self.board = pos,
                None => warn!("ignoring invalid fen: {}", fen_str),
            }
        }

        for &s in move_strs {
            match self.parse_move(s) {
                Some(mv) => self.board.play_unchecked(&mv),
                None => {
                    warn!("ignoring illegal move {} and the rest of the line", s);
                    break;
                }
            }
        }
    }

    pub fn parse_move(&self, move_str: &str) -> Option<shakmaty::Move> {
        let uci: UciMove = move_str.parse().ok()?;
        let mv = uci.to_move(&self.board).ok()?;
        if self.board.is_legal(&mv) { Some(mv) } else { None }
    }

    fn do_go<O: Write>(&mut self, depth: u32, out: &mut O) -> io::Result<()> {
        match self.searcher.best_move(&self.board, depth) {
            Some(result) => {
                writeln!(out, "{}", self.searcher.last_info())?;
                writeln!(out, "bestmove {}", move_to_uci(&result.best_move))
            }
            None => writeln!(out, "bestmove 0000"),
        }
    }

    fn cmd_display<O: Write>(&self, out: &mut O) -> io::Result<()> {
        writeln!(out)?;
        write!(out, "{}", rules::render(self.board.board(), false))?;
        writeln!(out, "Fen: {}", rules::serialize(&self.board))
    }

    fn cmd_eval<O: Write>(&self, out: &mut O) -> io::Result<()> {
        writeln!(out, "Evaluation: {} cp", evaluate(&self.board))?;
        writeln!(out, "(Positive = White advantage, {} to move)", match self.board.turn() {
            Color::White => "White",
            Color::Black => "Black",
        })
    }
}

fn go_depth(search_control: Option<&UciSearchControl>) -> Option<u32> {
    search_control.and_then(|sc| sc.depth).map(u32::from).filter(|&d| d > 0)
}

impl Default for UCI {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
