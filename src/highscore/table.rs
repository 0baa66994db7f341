//! Bounded, descending highscore list.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Entries kept in the table.
pub const MAX_HIGHSCORES: usize = 10;

/// Longest stored player name, in characters.
pub const MAX_NAME_LEN: usize = 7;

/// Stored form of an empty name.
pub const ANONYMOUS_NAME: &str = "-";

/// Timestamp layout, local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighscoreEntry {
    pub name: String,
    pub score: u32,
    /// Free text; written by this crate as `TIMESTAMP_FORMAT`.
    pub timestamp: String,
}

impl HighscoreEntry {
    #[must_use]
    pub fn new(name: &str, score: u32, timestamp: &str) -> Self {
        Self {
            name: sanitize_name(name),
            score,
            timestamp: sanitize_timestamp(timestamp),
        }
    }

    /// The same entry in a form that survives one line of the file.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self::new(&self.name, self.score, &self.timestamp)
    }
}

/// Normalize a player name so it fits one whitespace-separated field.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .take(MAX_NAME_LEN)
        .collect();
    if cleaned.is_empty() {
        ANONYMOUS_NAME.to_string()
    } else {
        cleaned
    }
}

/// Keep a timestamp on one line: control characters become spaces.
#[must_use]
pub fn sanitize_timestamp(timestamp: &str) -> String {
    timestamp
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Top scores, highest first, at most `MAX_HIGHSCORES` long.
///
/// Equal scores keep insertion order, so a newcomer ranks below an
/// existing entry with the same score. Every entry is sanitized on the
/// way in, so the table always round-trips through its text file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighscoreTable {
    entries: Vec<HighscoreEntry>,
}

impl HighscoreTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary entries, restoring the order and size bound.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = HighscoreEntry>) -> Self {
        let mut table = Self {
            entries: entries.into_iter().map(HighscoreEntry::sanitized).collect(),
        };
        table.normalize();
        table
    }

    #[must_use]
    pub fn entries(&self) -> &[HighscoreEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lowest kept score, if any.
    #[must_use]
    pub fn lowest(&self) -> Option<u32> {
        self.entries.last().map(|e| e.score)
    }

    /// Whether `score` would make it onto the table.
    #[must_use]
    pub fn is_highscore(&self, score: u32) -> bool {
        match self.lowest() {
            Some(lowest) if self.entries.len() >= MAX_HIGHSCORES => score > lowest,
            _ => true,
        }
    }

    /// Record a score stamped with the current local time.
    ///
    /// Returns the 0-based rank, or `None` if it fell off the table.
    pub fn add_score(&mut self, name: &str, score: u32) -> Option<usize> {
        self.add_score_at(name, score, Local::now().naive_local())
    }

    /// Record a score with an explicit timestamp.
    pub fn add_score_at(&mut self, name: &str, score: u32, at: NaiveDateTime) -> Option<usize> {
        let timestamp = at.format(TIMESTAMP_FORMAT).to_string();
        self.add_entry(HighscoreEntry::new(name, score, &timestamp))
    }

    /// Insert an entry, re-sort and truncate.
    pub fn add_entry(&mut self, entry: HighscoreEntry) -> Option<usize> {
        self.entries.push(entry.sanitized());
        let inserted = self.entries.len() - 1;

        // Stable sort over indices so the new entry can be found afterwards.
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_by(|&a, &b| self.entries[b].score.cmp(&self.entries[a].score));
        let rank = order.iter().position(|&i| i == inserted);

        self.normalize();
        rank.filter(|&r| r < MAX_HIGHSCORES)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGHSCORES);
    }
}
