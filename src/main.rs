//! chess_bot: play against a fixed-depth alpha-beta engine

use std::io;
use std::process;

use chess_bot::config::{EngineConfig, Opt};
use chess_bot::console::Console;
use chess_bot::game::{GameSession, SessionHandle};
use chess_bot::uci::UCI;
use log::{error, info};
use structopt::StructOpt;

fn main() {
    pretty_env_logger::init();
    let opt = Opt::from_args();
    let config = EngineConfig::from(&opt);
    info!("search depth {}, seed {:?}", config.depth, config.seed);

    let result = if opt.uci {
        UCI::new(config).run()
    } else {
        run_console(config)
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("chess_bot: {}", e);
        process::exit(1);
    }
}

fn run_console(config: EngineConfig) -> io::Result<()> {
    let session = match config.seed {
        Some(seed) => GameSession::with_seed(config.depth, seed),
        None => GameSession::new(config.depth),
    };
    let mut console = Console::new(SessionHandle::new(session));
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console.run(stdin.lock(), &mut stdout)
}
