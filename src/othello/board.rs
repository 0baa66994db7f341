//! Board representation: cells, players, positions.
//!
//! ## Cell vs Player
//!
//! `Cell` is what a square holds (`Empty`, `Black`, `White`).
//! `Player` is who moves; it has no empty variant, so a move can never
//! be attempted "as nobody".

use serde::{Deserialize, Serialize};

/// Board side length.
pub const BOARD_SIZE: usize = 8;

/// Number of squares on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Contents of a single square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// The player owning this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }
}

/// A side in the game. Black moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The cell state this player's pieces show.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// A square on the board, always in range.
///
/// Rows and columns are 0-based; (0, 0) is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Create a position, or `None` when it falls off the board.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// The neighbouring square one step along `(dr, dc)`.
    #[must_use]
    pub fn step(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as usize, col as usize)
    }

    /// Every square in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row: row as u8, col: col as u8 }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An 8x8 Reversi board.
///
/// `Board::new()` gives the standard opening; `Board::empty()` gives a
/// blank board for setting up positions by hand.
///
/// ```
/// use grid_arcade::othello::{Board, Cell, Position};
///
/// let board = Board::new();
/// assert_eq!(board.get(Position::new(3, 3).unwrap()), Cell::White);
/// assert_eq!(board.get(Position::new(3, 4).unwrap()), Cell::Black);
/// assert_eq!(board.counts(), (2, 2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard opening: the centre 2x2 split diagonally.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        let c = BOARD_SIZE / 2;
        board.cells[c - 1][c - 1] = Cell::White;
        board.cells[c][c] = Cell::White;
        board.cells[c - 1][c] = Cell::Black;
        board.cells[c][c - 1] = Cell::Black;
        board
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from eight 8-character rows.
    ///
    /// `B`/`b` is black, `W`/`w` is white, anything else is empty.
    /// Missing rows or columns are left empty.
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::empty();
        for (r, line) in rows.iter().take(BOARD_SIZE).enumerate() {
            for (c, ch) in line.chars().take(BOARD_SIZE).enumerate() {
                board.cells[r][c] = match ch {
                    'B' | 'b' => Cell::Black,
                    'W' | 'w' => Cell::White,
                    _ => Cell::Empty,
                };
            }
        }
        board
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Set every square to `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells = [[cell; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Number of pieces owned by `player`.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        let target = player.cell();
        self.cells.iter().flatten().filter(|&&c| c == target).count()
    }

    /// `(black, white)` piece counts.
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        (self.count(Player::Black), self.count(Player::White))
    }

    /// Total pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| **c != Cell::Empty).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.piece_count() == CELL_COUNT
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_layout() {
        let board = Board::new();
        let at = |r, c| board.get(Position::new(r, c).unwrap());

        assert_eq!(at(3, 3), Cell::White);
        assert_eq!(at(4, 4), Cell::White);
        assert_eq!(at(3, 4), Cell::Black);
        assert_eq!(at(4, 3), Cell::Black);
        assert_eq!(board.piece_count(), 4);
        assert!(!board.is_full());
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(7, 7).is_some());
        assert!(Position::new(8, 0).is_none());
        assert!(Position::new(0, 8).is_none());
    }

    #[test]
    fn test_position_step() {
        let corner = Position::new(0, 0).unwrap();
        assert_eq!(corner.step(-1, 0), None);
        assert_eq!(corner.step(0, -1), None);
        assert_eq!(corner.step(1, 1), Position::new(1, 1));

        let far = Position::new(7, 7).unwrap();
        assert_eq!(far.step(1, 0), None);
        assert_eq!(far.step(-1, -1), Position::new(6, 6));
    }

    #[test]
    fn test_all_positions_row_major() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), CELL_COUNT);
        assert_eq!(all[0], Position::new(0, 0).unwrap());
        assert_eq!(all[1], Position::new(0, 1).unwrap());
        assert_eq!(all[8], Position::new(1, 0).unwrap());
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_player_opponent_and_cell() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.cell(), Cell::Black);
        assert_eq!(Cell::White.owner(), Some(Player::White));
        assert_eq!(Cell::Empty.owner(), None);
    }

    #[test]
    fn test_from_rows_and_display() {
        let rows = [
            "........",
            "........",
            "........",
            "...WB...",
            "...BW...",
            "........",
            "........",
            "........",
        ];
        let board = Board::from_rows(&rows);
        assert_eq!(board, Board::new());

        let rendered = board.to_string();
        assert_eq!(rendered.lines().nth(3), Some("...WB..."));
    }

    #[test]
    fn test_fill_and_full() {
        let mut board = Board::empty();
        board.fill(Cell::Black);
        assert!(board.is_full());
        assert_eq!(board.counts(), (CELL_COUNT, 0));
    }
}
