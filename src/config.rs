//! Command-line configuration.

use structopt::StructOpt;

use crate::engine::search::DEFAULT_DEPTH;

/// Play chess against a fixed-depth alpha-beta engine
#[derive(StructOpt, Debug, Clone, PartialEq, Eq)]
#[structopt(name = "chess_bot")]
pub struct Opt {
    /// Plies searched for every engine move
    #[structopt(short = "d", long = "depth", default_value = "3")]
    pub depth: u32,

    /// Seed for tie-breaking between equally scored moves
    #[structopt(short = "s", long = "seed")]
    pub seed: Option<u64>,

    /// Speak UCI on stdin/stdout instead of running the interactive console
    #[structopt(long = "uci")]
    pub uci: bool,
}

/// Engine settings shared by the front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Always at least one ply.
    pub depth: u32,
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn new(depth: u32, seed: Option<u64>) -> Self {
        EngineConfig {
            depth: depth.max(1),
            seed,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig::new(DEFAULT_DEPTH, None)
    }
}

impl From<&Opt> for EngineConfig {
    fn from(opt: &Opt) -> Self {
        EngineConfig::new(opt.depth, opt.seed)
    }
}
