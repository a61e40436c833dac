use super::board;
use super::{Board, Coord, Player, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    Occupied,
    NoFlips,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Black, // Black starts
            outcome: None,
        }
    }

    /// Build a state from an arbitrary position. If `to_move` has no legal
    /// move the turn passes immediately, and if neither side can move the
    /// state starts out terminal.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let mut state = GameState {
            board,
            current_player: to_move,
            outcome: None,
        };
        state.resolve_turn();
        state
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Current piece counts.
    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// Check whether `coord` is a legal move for the current player.
    pub fn is_legal(&self, coord: Coord) -> bool {
        !self.is_terminal() && self.board.is_legal_move(coord, self.current_player)
    }

    /// Legal moves for the current player, empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_moves(self.current_player)
    }

    /// Apply a move and return the new state (immutable)
    pub fn apply_move(&self, coord: Coord) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(coord)?;
        Ok(next)
    }

    /// Apply a move in place, returning how many pieces it flipped. On
    /// error the state is left untouched.
    pub fn apply_move_mut(&mut self, coord: Coord) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let flipped = self
            .board
            .place_piece(coord, self.current_player)
            .map_err(|e| match e {
                board::MoveError::Occupied => MoveError::Occupied,
                board::MoveError::NoFlips => MoveError::NoFlips,
            })?;

        self.current_player = self.current_player.other();
        self.resolve_turn();

        Ok(flipped)
    }

    /// Pass the turn back if the player to move is stuck, and end the game
    /// when neither side has a legal move.
    fn resolve_turn(&mut self) {
        if self.board.has_any_legal_move(self.current_player) {
            return;
        }
        self.current_player = self.current_player.other();
        if !self.board.has_any_legal_move(self.current_player) {
            self.outcome = Some(self.final_outcome());
        }
    }

    /// Decide the result by piece majority.
    fn final_outcome(&self) -> GameOutcome {
        let Score { black, white } = self.board.score();
        if black > white {
            GameOutcome::Winner(Player::Black)
        } else if white > black {
            GameOutcome::Winner(Player::White)
        } else {
            GameOutcome::Draw
        }
    }
}
