//! Move sources: the human console seat and the heuristic bot.

mod bot;
mod human;

pub use bot::{BotConfig, HeuristicBot};
pub use human::{resolve_move, HumanInput, LineSource, SharedStdin};

use crate::error::PlayError;
use crate::game::{Coord, GameState};

/// Something that produces moves for whoever is to play in `state`.
pub trait MoveSource {
    /// Produce a move for the current player. Implementations only return
    /// coordinates that pass the legality check.
    fn next_move(&mut self, state: &GameState) -> Result<Coord, PlayError>;

    fn name(&self) -> &str;
}
