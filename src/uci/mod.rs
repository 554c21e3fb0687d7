//! UCI (Universal Chess Interface) Protocol
//!
//! Lets a chess GUI drive the fixed-depth search engine.

pub mod protocol;

pub use protocol::UCI;
