//! Core Othello game logic: board representation, move legality and
//! flipping, and the turn state machine with pass and game-end handling.

mod board;
mod coord;
mod player;
mod state;

pub use board::{Board, Cell, ParseBoardError, Score, SIZE};
pub use coord::{Coord, ParseCoordError};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
