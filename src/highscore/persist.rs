//! Flat-file storage for the highscore table.
//!
//! One entry per line, `name score timestamp`. Name and score are read as
//! whitespace-separated fields; the timestamp takes the rest of the line
//! and may contain spaces. The whole file is rewritten on every save.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::table::{sanitize_name, sanitize_timestamp, HighscoreEntry, HighscoreTable};

/// Default file name, relative to the working directory.
pub const HIGHSCORE_FILE: &str = "highscores.dat";

#[derive(Debug, Error)]
pub enum HighscoreError {
    #[error("highscore file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HighscoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        HighscoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Parse one line. `None` if it has no name or no integer score.
#[must_use]
pub fn parse_line(line: &str) -> Option<HighscoreEntry> {
    let (name, rest) = line.trim().split_once(char::is_whitespace)?;
    let rest = rest.trim_start();
    let (score, timestamp) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let score = score.parse().ok()?;

    Some(HighscoreEntry {
        name: name.to_string(),
        score,
        timestamp: timestamp.trim_start().to_string(),
    })
}

/// Render one entry as a line, without the newline.
///
/// Fields are sanitized first, so `parse_line` reads back the same entry.
#[must_use]
pub fn format_line(entry: &HighscoreEntry) -> String {
    format!(
        "{} {} {}",
        sanitize_name(&entry.name),
        entry.score,
        sanitize_timestamp(&entry.timestamp)
    )
}

impl HighscoreTable {
    /// Parse file contents. Malformed lines are skipped with a warning.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let entries = text.lines().enumerate().filter_map(|(index, line)| {
            if line.trim().is_empty() {
                return None;
            }
            let entry = parse_line(line);
            if entry.is_none() {
                warn!(line = index + 1, content = line, "skipping malformed highscore line");
            }
            entry
        });
        Self::from_entries(entries)
    }

    /// Render the whole table in file form.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for entry in self.entries() {
            text.push_str(&format_line(entry));
            text.push('\n');
        }
        text
    }

    /// Read a table from `path`. A missing file yields an empty table.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HighscoreError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no highscore file yet, starting empty");
                Ok(Self::new())
            }
            Err(err) => Err(HighscoreError::io(path, err)),
        }
    }

    /// `load`, falling back to an empty table on any error.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            warn!(error = %err, "could not read highscores, starting empty");
            Self::new()
        })
    }

    /// Overwrite `path` with the current table.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), HighscoreError> {
        let path = path.as_ref();
        fs::write(path, self.to_text()).map_err(|err| HighscoreError::io(path, err))
    }

    /// `save`, logging instead of failing. Returns whether it succeeded.
    pub fn save_or_log(&self, path: impl AsRef<Path>) -> bool {
        match self.save(path) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "could not save highscores");
                false
            }
        }
    }
}
