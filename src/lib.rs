//! # Console Othello
//!
//! Othello (Reversi) played in the terminal: the classic 8x8 flipping
//! engine, a line-oriented console front end with move hints, and an
//! optional bot opponent driven by positional weights.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, coordinates, turn state machine
//! - [`players`] — Move sources: human console input and the heuristic bot
//! - [`ui`] — Console rendering, mode menu, and the game loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod players;
pub mod ui;
