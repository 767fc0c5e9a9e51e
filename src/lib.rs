//! Jorro rules engine library.
//!
//! Exposes the board representation, move generation, game orchestration,
//! setup, and replay modules for use by integration tests and the binary
//! entry point.

pub mod board;
pub mod engine;
pub mod movegen;
pub mod replay;
pub mod setup;
