//! Reversi session: board, turn order, pass handling, computer opponent.
//!
//! `OthelloGame` owns everything one game needs. The presentation layer
//! holds it by value and calls into it once per input event or frame.
//!
//! ## Turn flow
//!
//! After every move or pass the session re-resolves `TurnStatus`:
//!
//! - `ToMove(p)`: `p` may `play`.
//! - `MustPass(p)`: `p` has no move. `play` is refused until the host
//!   shows the notice and calls `pass`.
//! - `GameOver(outcome)`: nothing more is accepted until `reset`.

use tracing::{debug, info};

use super::ai::RandomAi;
use super::board::{Board, Cell, Player, Position};
use super::cheats::Cheat;
use super::config::{GameMode, OthelloConfig};
use super::rules::{self, MoveError, MoveRecord, Outcome, TurnStatus};

/// One Reversi game in progress.
#[derive(Clone, Debug)]
pub struct OthelloGame {
    config: OthelloConfig,
    board: Board,
    current: Player,
    status: TurnStatus,
    last_move: Option<MoveRecord>,
    ai: RandomAi,
}

impl Default for OthelloGame {
    fn default() -> Self {
        Self::new(OthelloConfig::default())
    }
}

impl OthelloGame {
    /// Start a game from the opening position with Black to move.
    #[must_use]
    pub fn new(config: OthelloConfig) -> Self {
        let ai = RandomAi::new(&config.ai);
        Self::with_ai(config, ai)
    }

    /// Start a game with an explicit computer opponent.
    #[must_use]
    pub fn with_ai(config: OthelloConfig, ai: RandomAi) -> Self {
        let board = Board::new();
        let status = rules::resolve_turn(&board, Player::Black);
        Self {
            config,
            board,
            current: Player::Black,
            status,
            last_move: None,
            ai,
        }
    }

    /// Resume from an arbitrary position (puzzles, tests).
    #[must_use]
    pub fn from_position(config: OthelloConfig, board: Board, to_move: Player) -> Self {
        let mut game = Self::new(config);
        game.board = board;
        game.current = to_move;
        game.refresh_status();
        game
    }

    /// Back to the opening position. The mode and AI are kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current = Player::Black;
        self.last_move = None;
        self.refresh_status();
        debug!("reversi game reset");
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &OthelloConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    /// Switch between two-player and computer opponent.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.config.mode = mode;
    }

    /// The player whose turn it is (or who must pass).
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current
    }

    #[must_use]
    pub fn status(&self) -> TurnStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.status, TurnStatus::GameOver(_))
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            TurnStatus::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// `(black, white)` piece counts.
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        self.board.counts()
    }

    /// The most recently applied move, for the flip animation.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// Legal moves for the player to move; empty unless `ToMove`.
    #[must_use]
    pub fn valid_moves(&self) -> Vec<Position> {
        match self.status {
            TurnStatus::ToMove(player) => rules::valid_moves(&self.board, player),
            _ => Vec::new(),
        }
    }

    /// The computer opponent, e.g. to save its RNG position.
    #[must_use]
    pub fn ai(&self) -> &RandomAi {
        &self.ai
    }

    /// Whether the computer should move now.
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        matches!(self.status, TurnStatus::ToMove(p) if self.config.mode.ai_player() == Some(p))
    }

    // === Actions ===

    /// Play the current player's piece at `pos`.
    ///
    /// On success the turn passes to the opponent and the status is
    /// re-resolved. On failure nothing changes.
    pub fn play(&mut self, pos: Position) -> Result<&MoveRecord, MoveError> {
        let player = match self.status {
            TurnStatus::ToMove(player) => player,
            TurnStatus::MustPass(player) => return Err(MoveError::MustPass(player)),
            TurnStatus::GameOver(_) => return Err(MoveError::GameOver),
        };

        let record = rules::apply_move(&mut self.board, pos, player)?;
        debug!(%player, %pos, flipped = record.flipped.len(), "move applied");

        self.current = player.opponent();
        self.refresh_status();
        Ok(&*self.last_move.insert(record))
    }

    /// Acknowledge a `MustPass` and hand the turn over.
    pub fn pass(&mut self) -> Result<(), MoveError> {
        match self.status {
            TurnStatus::MustPass(player) => {
                debug!(%player, "turn passed");
                self.current = player.opponent();
                self.refresh_status();
                Ok(())
            }
            TurnStatus::ToMove(_) => Err(MoveError::NothingToPass),
            TurnStatus::GameOver(_) => Err(MoveError::GameOver),
        }
    }

    /// Let the computer move if it is its turn.
    ///
    /// Returns `None` when it is not the computer's turn or it has no
    /// legal move. The host is expected to wait `think_delay` first.
    pub fn ai_move(&mut self) -> Option<&MoveRecord> {
        if !self.is_ai_turn() {
            return None;
        }
        let pos = self.ai.select_move(&self.board, self.current)?;
        self.play(pos).ok()
    }

    /// Carry out a cheat. Ignored once the game is over.
    ///
    /// `target` is the square under the pointer, used by `SwapPiece`.
    /// Returns whether anything changed.
    pub fn apply_cheat(&mut self, cheat: Cheat, target: Option<Position>) -> bool {
        if self.is_over() {
            return false;
        }

        match cheat {
            Cheat::InstantWin => self.board.fill(self.current.cell()),
            Cheat::ClearBoard => self.board.fill(Cell::Empty),
            Cheat::SwitchPlayer => self.current = self.current.opponent(),
            Cheat::SwapPiece => match target {
                Some(pos) if self.board.get(pos) != Cell::Empty => {
                    self.board.set(pos, self.current.cell());
                }
                _ => return false,
            },
        }

        info!(?cheat, "cheat activated");
        self.last_move = None;
        self.refresh_status();
        true
    }

    fn refresh_status(&mut self) {
        self.status = rules::resolve_turn(&self.board, self.current);
        if let TurnStatus::GameOver(outcome) = self.status {
            let (black, white) = self.board.counts();
            info!(?outcome, black, white, "reversi game over");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::othello::config::AiConfig;

    fn pos(r: usize, c: usize) -> Position {
        Position::new(r, c).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = OthelloGame::default();
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.status(), TurnStatus::ToMove(Player::Black));
        assert_eq!(game.counts(), (2, 2));
        assert_eq!(game.valid_moves().len(), 4);
        assert!(game.last_move().is_none());
    }

    #[test]
    fn test_play_switches_player() {
        let mut game = OthelloGame::default();
        let record = game.play(pos(2, 3)).unwrap().clone();

        assert_eq!(record.flipped.as_slice(), &[pos(3, 3)]);
        assert_eq!(game.current_player(), Player::White);
        assert_eq!(game.counts(), (4, 1));
        assert_eq!(game.last_move(), Some(&record));
    }

    #[test]
    fn test_illegal_play_changes_nothing() {
        let mut game = OthelloGame::default();
        assert_eq!(game.play(pos(0, 0)).unwrap_err(), MoveError::NoFlips(pos(0, 0)));
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_must_pass_blocks_play_until_pass() {
        let board = Board::from_rows(&["BW......"]);
        let mut game = OthelloGame::from_position(OthelloConfig::default(), board, Player::White);

        assert_eq!(game.status(), TurnStatus::MustPass(Player::White));
        assert!(game.valid_moves().is_empty());
        assert_eq!(game.play(pos(0, 2)).unwrap_err(), MoveError::MustPass(Player::White));

        game.pass().unwrap();
        assert_eq!(game.status(), TurnStatus::ToMove(Player::Black));
        assert_eq!(game.pass(), Err(MoveError::NothingToPass));
    }

    #[test]
    fn test_game_over_after_last_move() {
        // Black takes (0, 2); afterwards nobody can move.
        let board = Board::from_rows(&["BW......"]);
        let mut game = OthelloGame::from_position(OthelloConfig::default(), board, Player::Black);

        game.play(pos(0, 2)).unwrap();
        assert_eq!(game.outcome(), Some(Outcome::Winner(Player::Black)));
        assert_eq!(game.play(pos(0, 3)).unwrap_err(), MoveError::GameOver);
        assert_eq!(game.pass(), Err(MoveError::GameOver));
    }

    #[test]
    fn test_ai_moves_only_on_its_turn() {
        let config = OthelloConfig::new()
            .with_mode(GameMode::VsAi)
            .with_ai(AiConfig::default().with_seed(3));
        let mut game = OthelloGame::new(config);

        assert!(!game.is_ai_turn());
        assert!(game.ai_move().is_none());

        game.play(pos(2, 3)).unwrap();
        assert!(game.is_ai_turn());
        let record = game.ai_move().cloned().unwrap();
        assert_eq!(record.player, Player::White);
        assert_eq!(game.current_player(), Player::Black);
    }

    #[test]
    fn test_two_player_mode_has_no_ai() {
        let mut game = OthelloGame::default();
        game.play(pos(2, 3)).unwrap();
        assert!(!game.is_ai_turn());
        assert!(game.ai_move().is_none());
    }

    #[test]
    fn test_cheat_instant_win() {
        let mut game = OthelloGame::default();
        assert!(game.apply_cheat(Cheat::InstantWin, None));
        assert_eq!(game.outcome(), Some(Outcome::Winner(Player::Black)));
        assert!(!game.apply_cheat(Cheat::ClearBoard, None));
    }

    #[test]
    fn test_cheat_clear_board_ends_in_draw() {
        let mut game = OthelloGame::default();
        assert!(game.apply_cheat(Cheat::ClearBoard, None));
        assert_eq!(game.board().piece_count(), 0);
        assert_eq!(game.outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn test_cheat_switch_player() {
        let mut game = OthelloGame::default();
        game.apply_cheat(Cheat::SwitchPlayer, None);
        assert_eq!(game.status(), TurnStatus::ToMove(Player::White));
    }

    #[test]
    fn test_cheat_swap_piece() {
        let mut game = OthelloGame::default();
        assert!(!game.apply_cheat(Cheat::SwapPiece, Some(pos(0, 0))));
        assert!(!game.apply_cheat(Cheat::SwapPiece, None));
        assert!(game.apply_cheat(Cheat::SwapPiece, Some(pos(3, 3))));
        assert_eq!(game.board().get(pos(3, 3)), Cell::Black);
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut game = OthelloGame::new(OthelloConfig::new().with_mode(GameMode::VsAi));
        game.play(pos(2, 3)).unwrap();
        game.reset();

        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.mode(), GameMode::VsAi);
    }
}
