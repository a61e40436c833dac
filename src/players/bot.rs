use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::PlayError;
use crate::game::{Coord, GameState, SIZE};

use super::MoveSource;

/// Positional value of each cell: corners dominate, and the cells that
/// hand a corner to the opponent are penalized.
const POSITION_WEIGHTS: [[i32; SIZE]; SIZE] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, 1, 1, 1, 1, -2, 10],
    [5, -2, 1, 1, 1, 1, -2, 5],
    [5, -2, 1, 1, 1, 1, -2, 5],
    [10, -2, 1, 1, 1, 1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

const DEFAULT_TOP_K: usize = 5;

/// Settings for [`HeuristicBot`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// The bot picks uniformly at random among the `top_k` best-ranked
    /// legal moves.
    pub top_k: usize,
    /// Fixed RNG seed for reproducible games.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            top_k: DEFAULT_TOP_K,
            seed: None,
        }
    }
}

/// A move source that ranks legal moves by positional weight and picks
/// randomly among the best few, so its play stays strong but not
/// predictable.
pub struct HeuristicBot {
    rng: StdRng,
    top_k: usize,
}

impl HeuristicBot {
    pub fn new() -> Self {
        HeuristicBot {
            rng: StdRng::from_os_rng(),
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Bot with a fixed seed, for reproducible games and tests.
    pub fn seeded(seed: u64) -> Self {
        HeuristicBot {
            rng: StdRng::seed_from_u64(seed),
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn from_config(config: &BotConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        HeuristicBot {
            rng,
            // Guard against a zero slipping past config validation
            top_k: config.top_k.max(1),
        }
    }

    fn weight(coord: Coord) -> i32 {
        POSITION_WEIGHTS[coord.row()][coord.col()]
    }
}

impl Default for HeuristicBot {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for HeuristicBot {
    fn next_move(&mut self, state: &GameState) -> Result<Coord, PlayError> {
        let mut moves = state.legal_moves();
        if moves.is_empty() {
            return Err(PlayError::NoLegalMove(state.current_player()));
        }

        // Stable sort keeps row-major order among equal weights
        moves.sort_by(|a, b| Self::weight(*b).cmp(&Self::weight(*a)));
        moves.truncate(self.top_k);

        let idx = self.rng.random_range(0..moves.len());
        Ok(moves[idx])
    }

    fn name(&self) -> &str {
        "Bot"
    }
}
