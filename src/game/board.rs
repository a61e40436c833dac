use std::str::FromStr;

use super::coord::Coord;
use super::player::Player;

pub const SIZE: usize = 8;

/// The eight compass directions as `(row, col)` deltas.
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// Piece counts for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    Occupied,
    NoFlips,
}

/// Error returned when a board layout string is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseBoardError;

impl Board {
    /// Create a board in the standard starting position: Black at d5 and e4,
    /// White at d4 and e5.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.cells[3][3] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board.cells[4][4] = Cell::White;
        board
    }

    /// Create a completely empty board
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Get the cell at a coordinate
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Check whether placing `player`'s piece at `coord` would flip at least
    /// one opposing piece. Occupied cells are never legal.
    pub fn is_legal_move(&self, coord: Coord, player: Player) -> bool {
        if self.get(coord) != Cell::Empty {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&dir| self.bracketed_run(coord, dir, player) > 0)
    }

    /// Check whether `player` has at least one legal move anywhere.
    pub fn has_any_legal_move(&self, player: Player) -> bool {
        Coord::all().any(|coord| self.is_legal_move(coord, player))
    }

    /// All legal placements for `player`, in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<Coord> {
        Coord::all()
            .filter(|&coord| self.is_legal_move(coord, player))
            .collect()
    }

    /// Place `player`'s piece at `coord` and flip every bracketed opposing
    /// run. Returns the number of pieces flipped. On error the board is
    /// left untouched.
    pub fn place_piece(&mut self, coord: Coord, player: Player) -> Result<usize, MoveError> {
        if self.get(coord) != Cell::Empty {
            return Err(MoveError::Occupied);
        }
        if !self.is_legal_move(coord, player) {
            return Err(MoveError::NoFlips);
        }

        let own = player.to_cell();
        self.cells[coord.row()][coord.col()] = own;

        // The eight rays share no cells beyond the anchor, so flipping one
        // direction cannot change another direction's run.
        let mut flipped = 0;
        for &dir in &DIRECTIONS {
            let run = self.bracketed_run(coord, dir, player);
            let mut cur = coord.step(dir);
            for _ in 0..run {
                match cur {
                    Some(c) => {
                        self.cells[c.row()][c.col()] = own;
                        flipped += 1;
                        cur = c.step(dir);
                    }
                    None => unreachable!("bracketed run cannot leave the board"),
                }
            }
        }

        Ok(flipped)
    }

    /// Count the pieces on the board for both sides.
    pub fn score(&self) -> Score {
        let mut score = Score { black: 0, white: 0 };
        for coord in Coord::all() {
            match self.get(coord) {
                Cell::Black => score.black += 1,
                Cell::White => score.white += 1,
                Cell::Empty => {}
            }
        }
        score
    }

    /// Length of the contiguous opposing run starting one step from `coord`
    /// along `dir`, counted only when the run ends at one of `player`'s own
    /// pieces. Zero when the run is empty, unterminated, or walks off the
    /// board.
    fn bracketed_run(&self, coord: Coord, dir: (i32, i32), player: Player) -> usize {
        let own = player.to_cell();
        let opponent = player.other().to_cell();

        let mut run = 0;
        let mut cur = coord.step(dir);
        while let Some(c) = cur {
            let cell = self.get(c);
            if cell == opponent {
                run += 1;
                cur = c.step(dir);
            } else if cell == own && run > 0 {
                return run;
            } else {
                // Own piece with nothing between, or an empty cell
                break;
            }
        }
        0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse a layout of 64 cells in row-major order, `b` for Black, `w`
    /// for White and `.` for empty. Whitespace is ignored, so layouts can
    /// be written as eight rows.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut coords = Coord::all();
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let coord = coords.next().ok_or(ParseBoardError)?;
            board.cells[coord.row()][coord.col()] = match ch {
                'b' => Cell::Black,
                'w' => Cell::White,
                '.' => Cell::Empty,
                _ => return Err(ParseBoardError),
            };
        }
        if coords.next().is_some() {
            return Err(ParseBoardError);
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_starting_position() {
        let board = Board::new();
        assert_eq!(board.get(at(3, 3)), Cell::White);
        assert_eq!(board.get(at(3, 4)), Cell::Black);
        assert_eq!(board.get(at(4, 3)), Cell::Black);
        assert_eq!(board.get(at(4, 4)), Cell::White);
        assert_eq!(board.score(), Score { black: 2, white: 2 });

        let occupied = Coord::all()
            .filter(|&c| board.get(c) != Cell::Empty)
            .count();
        assert_eq!(occupied, 4);
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        for coord in Coord::all() {
            assert_eq!(board.get(coord), Cell::Empty);
        }
        assert_eq!(board.score(), Score { black: 0, white: 0 });
    }

    #[test]
    fn test_parse_layout() {
        let board: Board = "
            b w . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . w
        "
        .parse()
        .unwrap();
        assert_eq!(board.get(at(0, 0)), Cell::Black);
        assert_eq!(board.get(at(0, 1)), Cell::White);
        assert_eq!(board.get(at(7, 7)), Cell::White);
        assert_eq!(board.score(), Score { black: 1, white: 2 });
    }

    #[test]
    fn test_parse_layout_rejects_bad_input() {
        assert_eq!("b w .".parse::<Board>(), Err(ParseBoardError));
        assert_eq!("x".repeat(64).parse::<Board>(), Err(ParseBoardError));
        assert_eq!("b".repeat(65).parse::<Board>(), Err(ParseBoardError));
    }

    #[test]
    fn test_initial_legal_moves_for_black() {
        let board = Board::new();
        let moves = board.legal_moves(Player::Black);
        assert_eq!(moves, vec![at(2, 3), at(3, 2), at(4, 5), at(5, 4)]);
    }

    #[test]
    fn test_initial_legal_moves_for_white() {
        let board = Board::new();
        let moves = board.legal_moves(Player::White);
        assert_eq!(moves, vec![at(2, 4), at(3, 5), at(4, 2), at(5, 3)]);
    }

    #[test]
    fn test_occupied_cell_is_not_legal() {
        let board = Board::new();
        assert!(!board.is_legal_move(at(3, 3), Player::Black));
        assert!(!board.is_legal_move(at(3, 4), Player::White));
    }

    #[test]
    fn test_adjacent_own_piece_without_run_is_not_legal() {
        let board: Board = "
            b . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        "
        .parse()
        .unwrap();
        // No opposing run between the new piece and the existing one
        assert!(!board.is_legal_move(at(0, 1), Player::Black));
    }

    #[test]
    fn test_run_reaching_board_edge_is_not_legal() {
        let board: Board = "
            w w . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        "
        .parse()
        .unwrap();
        // Walking left from c1 runs off the edge before finding a black piece
        assert!(!board.is_legal_move(at(0, 2), Player::Black));
        let mut board = board;
        assert_eq!(
            board.place_piece(at(0, 2), Player::Black),
            Err(MoveError::NoFlips)
        );
    }

    #[test]
    fn test_place_piece_flips_single_direction() {
        let mut board = Board::new();
        let flipped = board.place_piece(at(2, 3), Player::Black).unwrap();
        assert_eq!(flipped, 1);
        assert_eq!(board.get(at(2, 3)), Cell::Black);
        assert_eq!(board.get(at(3, 3)), Cell::Black);
        assert_eq!(board.score(), Score { black: 4, white: 1 });
    }

    #[test]
    fn test_place_piece_flips_multiple_directions() {
        let mut board: Board = "
            . . . . . . . .
            . . . . . . . .
            . . . w b . . .
            . . w w . . . .
            . . b . b . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        "
        .parse()
        .unwrap();
        // c3 flips east, south and south-east runs at once
        let flipped = board.place_piece(at(2, 2), Player::Black).unwrap();
        assert_eq!(flipped, 3);
        assert_eq!(board.get(at(2, 3)), Cell::Black);
        assert_eq!(board.get(at(3, 2)), Cell::Black);
        assert_eq!(board.get(at(3, 3)), Cell::Black);
        assert_eq!(board.score(), Score { black: 7, white: 0 });
    }

    #[test]
    fn test_place_piece_flips_long_run() {
        let mut board: Board = "
            b w w w w w w .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        "
        .parse()
        .unwrap();
        let flipped = board.place_piece(at(0, 7), Player::Black).unwrap();
        assert_eq!(flipped, 6);
        assert_eq!(board.score(), Score { black: 8, white: 0 });
    }

    #[test]
    fn test_rejected_placement_leaves_board_unchanged() {
        let mut board = Board::new();
        let snapshot = board;

        assert_eq!(
            board.place_piece(at(3, 3), Player::Black),
            Err(MoveError::Occupied)
        );
        assert_eq!(board, snapshot);

        assert_eq!(
            board.place_piece(at(0, 0), Player::Black),
            Err(MoveError::NoFlips)
        );
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_legality_checks_do_not_mutate() {
        let board = Board::new();
        let snapshot = board;
        for coord in Coord::all() {
            board.is_legal_move(coord, Player::Black);
            board.is_legal_move(coord, Player::White);
        }
        board.has_any_legal_move(Player::Black);
        board.legal_moves(Player::White);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_every_legal_move_flips_something() {
        let board = Board::new();
        for coord in board.legal_moves(Player::Black) {
            let mut copy = board;
            let flipped = copy.place_piece(coord, Player::Black).unwrap();
            assert!(flipped >= 1);
        }
    }

    #[test]
    fn test_full_board_has_no_legal_moves() {
        let layout = "b".repeat(32) + &"w".repeat(32);
        let board: Board = layout.parse().unwrap();
        assert!(!board.has_any_legal_move(Player::Black));
        assert!(!board.has_any_legal_move(Player::White));
        assert!(board.legal_moves(Player::Black).is_empty());
    }
}
