//! Debug cheat codes.
//!
//! Letters typed while Ctrl is held accumulate in a small buffer; when the
//! buffer spells a known code the cheat fires and the buffer resets. The
//! buffer also resets on any key pressed without Ctrl, on Ctrl release,
//! and once it grows past `MAX_BUFFER_LEN`.
//!
//! This is kept apart from the rules: `CheatBuffer` only recognises codes,
//! and `OthelloGame::apply_cheat` performs them.

use serde::{Deserialize, Serialize};

/// Longest buffer kept before it is discarded.
pub const MAX_BUFFER_LEN: usize = 10;

/// A recognised cheat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cheat {
    /// Fill the board with the current player's pieces.
    InstantWin,
    /// Remove every piece.
    ClearBoard,
    /// Hand the turn to the other player.
    SwitchPlayer,
    /// Recolour one occupied square to the current player.
    SwapPiece,
}

const CODES: [(&str, Cheat); 4] = [
    ("win", Cheat::InstantWin),
    ("clear", Cheat::ClearBoard),
    ("gameshark", Cheat::SwitchPlayer),
    ("change", Cheat::SwapPiece),
];

impl Cheat {
    /// The code that triggers this cheat.
    #[must_use]
    pub fn code(self) -> &'static str {
        CODES
            .iter()
            .find(|(_, cheat)| *cheat == self)
            .map_or("", |(code, _)| *code)
    }
}

/// Buffered matcher for cheat codes.
#[derive(Clone, Debug, Default)]
pub struct CheatBuffer {
    buffer: String,
}

impl CheatBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer contents.
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// Feed a key press. Returns the cheat when a code completes.
    ///
    /// Only ASCII letters count; they are matched case-insensitively.
    pub fn key_down(&mut self, key: char, ctrl_held: bool) -> Option<Cheat> {
        if !ctrl_held {
            self.buffer.clear();
            return None;
        }
        if !key.is_ascii_alphabetic() {
            return None;
        }

        self.buffer.push(key.to_ascii_lowercase());

        if let Some(&(_, cheat)) = CODES.iter().find(|(code, _)| *code == self.buffer) {
            self.buffer.clear();
            return Some(cheat);
        }
        if self.buffer.len() > MAX_BUFFER_LEN {
            self.buffer.clear();
        }
        None
    }

    /// Ctrl was released: forget everything typed.
    pub fn ctrl_released(&mut self) {
        self.buffer.clear();
    }
}
