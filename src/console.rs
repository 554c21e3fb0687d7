//! Interactive console: a human plays the engine by typing moves.

use std::io::{self, BufRead, Write};

use log::error;
use rand::Rng;

use crate::error::GameResult;
use crate::game::{Reply, SessionHandle};
use crate::rules::parse_color;

const HELP: &str = "\
commands:
  new <white|black> [fen]   start a game, optionally from a FEN position
  move <move>               play a move, e.g. `move e4` or `move g1f3`
  <move>                    same as `move <move>`
  board                     show the current position
  help                      show this text
  quit                      leave";

pub struct Console<R: Rng> {
    handle: SessionHandle<R>,
}

impl<R: Rng> Console<R> {
    pub fn new(handle: SessionHandle<R>) -> Self {
        Console { handle }
    }

    pub fn handle(&self) -> &SessionHandle<R> {
        &self.handle
    }

    /// Read commands until `quit` or end of input. Fails on I/O errors and
    /// when the engine breaks its contract by finding no move.
    pub fn run<I: BufRead, O: Write>(&mut self, input: I, out: &mut O) -> io::Result<()> {
        writeln!(out, "Type 'new white' or 'new black' to start, 'help' for commands.")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (cmd, rest) = match line.split_once(char::is_whitespace) {
                Some((cmd, rest)) => (cmd, rest.trim()),
                None => (line, ""),
            };
            match cmd {
                "quit" | "exit" => break,
                "help" => writeln!(out, "{}", HELP)?,
                "board" | "d" => {
                    let reply = self.handle.board();
                    self.print(out, &reply)?;
                }
                "new" => {
                    let mut args = rest.splitn(2, char::is_whitespace);
                    let color = args.next().unwrap_or("white");
                    let fen = args.next().map(str::trim).filter(|f| !f.is_empty());
                    match parse_color(color) {
                        Some(human) => {
                            let result = match fen {
                                Some(fen) => self.handle.new_game_from_fen(human, fen),
                                None => self.handle.new_game(human),
                            };
                            self.answer(out, result)?;
                        }
                        None => writeln!(out, "error: unknown side '{}', use white or black", color)?,
                    }
                }
                "move" => {
                    let result = self.handle.submit_move(rest);
                    self.answer(out, result)?;
                }
                _ => {
                    let result = self.handle.submit_move(line);
                    self.answer(out, result)?;
                }
            }
            out.flush()?;
        }
        Ok(())
    }

    fn answer<O: Write>(&self, out: &mut O, result: GameResult<Reply>) -> io::Result<()> {
        match result {
            Ok(reply) => self.print(out, &reply),
            Err(err) if err.is_fatal() => {
                error!("{}", err);
                Err(io::Error::other(err))
            }
            Err(err) => writeln!(out, "error: {}", self.handle.error_reply(&err).message),
        }
    }

    fn print<O: Write>(&self, out: &mut O, reply: &Reply) -> io::Result<()> {
        let status = reply.status.map(|s| s.as_str()).unwrap_or("NotStarted");
        write!(out, "{}", reply.diagram)?;
        writeln!(out, "status: {}", status)?;
        writeln!(out, "fen: {}", reply.fen)?;
        writeln!(out, "{}", reply.message)
    }
}
