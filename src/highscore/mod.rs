//! Highscore table and its flat-file persistence.

pub mod persist;
pub mod table;

pub use persist::{format_line, parse_line, HighscoreError, HIGHSCORE_FILE};
pub use table::{
    sanitize_name, HighscoreEntry, HighscoreTable, ANONYMOUS_NAME, MAX_HIGHSCORES, MAX_NAME_LEN, TIMESTAMP_FORMAT,
};
