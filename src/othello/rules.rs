//! Move legality, flip propagation and turn resolution.
//!
//! All functions here are pure over a `&Board` except `apply_move`,
//! which mutates only after the whole move has been validated.
//!
//! A move is legal when the target square is empty and at least one of
//! the eight rays leaving it holds one or more opponent pieces closed off
//! by one of the mover's own pieces (a bracketed run).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::board::{Board, Cell, Player, Position};

/// The eight compass directions as `(row delta, col delta)`.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cells flipped by one move. Spills to the heap past 18.
pub type Flips = SmallVec<[Position; 18]>;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Strictly more pieces.
    Winner(Player),
    /// Equal piece counts.
    Draw,
}

impl Outcome {
    /// Decide the outcome by majority of pieces.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let (black, white) = board.counts();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::Black),
            std::cmp::Ordering::Less => Outcome::Winner(Player::White),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, Outcome::Winner(p) if *p == player)
    }
}

/// Whose turn it is, or why nobody can move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnStatus {
    /// `player` has at least one legal move.
    ToMove(Player),
    /// `player` has no legal move but the opponent does. The caller
    /// surfaces this and then acknowledges it with a pass.
    MustPass(Player),
    /// Board full or neither side can move.
    GameOver(Outcome),
}

/// A move that has been applied.
///
/// `flipped` lists only the converted opponent pieces; `placed` is the
/// new piece. Together they drive the flip animation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player: Player,
    pub placed: Position,
    pub flipped: Flips,
}

impl MoveRecord {
    /// Every cell whose state changed: the placed piece first, then the flips.
    pub fn changed_cells(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.placed).chain(self.flipped.iter().copied())
    }
}

/// Why a move or pass was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("square {0} is already occupied")]
    Occupied(Position),
    #[error("a piece at {0} would not flip anything")]
    NoFlips(Position),
    #[error("the game is over")]
    GameOver,
    #[error("{0} has no legal move and must pass")]
    MustPass(Player),
    #[error("the player to move has a legal move and cannot pass")]
    NothingToPass,
}

/// The bracketed run leaving `from` in direction `(dr, dc)`, if any.
///
/// Returns the opponent cells that would flip, or an empty list when the
/// ray hits an empty square, the edge, or the mover's own piece before
/// any opponent piece.
fn bracketed_run(board: &Board, from: Position, player: Player, (dr, dc): (i8, i8)) -> SmallVec<[Position; 6]> {
    let own = player.cell();
    let opponent = player.opponent().cell();
    let mut run = SmallVec::new();
    let mut cursor = from.step(dr, dc);

    while let Some(pos) = cursor {
        let cell = board.get(pos);
        if cell == opponent {
            run.push(pos);
        } else if cell == own && !run.is_empty() {
            return run;
        } else {
            break;
        }
        cursor = pos.step(dr, dc);
    }

    SmallVec::new()
}

/// Check whether `player` may place a piece at `pos`.
///
/// Never mutates the board.
#[must_use]
pub fn is_valid_move(board: &Board, pos: Position, player: Player) -> bool {
    board.get(pos) == Cell::Empty
        && DIRECTIONS
            .iter()
            .any(|&dir| !bracketed_run(board, pos, player, dir).is_empty())
}

/// All legal moves for `player`, in row-major order.
#[must_use]
pub fn valid_moves(board: &Board, player: Player) -> Vec<Position> {
    Position::all()
        .filter(|&pos| is_valid_move(board, pos, player))
        .collect()
}

/// Whether `player` has any legal move at all.
#[must_use]
pub fn has_valid_move(board: &Board, player: Player) -> bool {
    Position::all().any(|pos| is_valid_move(board, pos, player))
}

/// Cells that would flip if `player` moved at `pos`.
///
/// Every direction is scanned against the same unmodified board, so a
/// flip in one direction never affects detection in another. Empty when
/// the square is occupied or the move brackets nothing.
#[must_use]
pub fn flips_for(board: &Board, pos: Position, player: Player) -> Flips {
    let mut flips = Flips::new();
    if board.get(pos) != Cell::Empty {
        return flips;
    }
    for &dir in &DIRECTIONS {
        flips.extend(bracketed_run(board, pos, player, dir));
    }
    flips
}

/// Place `player`'s piece at `pos` and flip every bracketed run.
///
/// The move is validated first; an illegal move returns an error and
/// leaves the board untouched.
pub fn apply_move(board: &mut Board, pos: Position, player: Player) -> Result<MoveRecord, MoveError> {
    if board.get(pos) != Cell::Empty {
        return Err(MoveError::Occupied(pos));
    }

    let flipped = flips_for(board, pos, player);
    if flipped.is_empty() {
        return Err(MoveError::NoFlips(pos));
    }

    let cell = player.cell();
    board.set(pos, cell);
    for &p in &flipped {
        board.set(p, cell);
    }

    Ok(MoveRecord {
        player,
        placed: pos,
        flipped,
    })
}

/// Decide the turn state when `player` is next to move.
///
/// Game over when the board is full or neither side can move. Otherwise
/// `MustPass` when only the opponent can move.
#[must_use]
pub fn resolve_turn(board: &Board, player: Player) -> TurnStatus {
    if board.is_full() {
        return TurnStatus::GameOver(Outcome::from_board(board));
    }

    let can_move = has_valid_move(board, player);
    let opponent_can_move = has_valid_move(board, player.opponent());

    match (can_move, opponent_can_move) {
        (true, _) => TurnStatus::ToMove(player),
        (false, true) => TurnStatus::MustPass(player),
        (false, false) => TurnStatus::GameOver(Outcome::from_board(board)),
    }
}
