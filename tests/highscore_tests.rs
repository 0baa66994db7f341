//! Highscore persistence tests against real files.

use chrono::NaiveDate;
use grid_arcade::core::GameRng;
use grid_arcade::highscore::{HighscoreEntry, HighscoreTable, HIGHSCORE_FILE, MAX_HIGHSCORES};
use grid_arcade::snake::{Difficulty, Phase, Point, SnakeConfig, SnakeGame};
use tempfile::tempdir;

fn noon() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test]
fn test_missing_file_loads_empty() {
    let td = tempdir().expect("tempdir");
    let table = HighscoreTable::load(td.path().join(HIGHSCORE_FILE)).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_save_then_load() {
    let td = tempdir().expect("tempdir");
    let path = td.path().join(HIGHSCORE_FILE);

    let mut table = HighscoreTable::new();
    for (name, score) in [("ana", 40), ("bo", 95), ("cy", 60)] {
        table.add_score_at(name, score, noon());
    }
    table.save(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().next(), Some("bo 95 2024-05-01 12:00:00"));

    let loaded = HighscoreTable::load(&path).unwrap();
    assert_eq!(loaded, table);
}

#[test]
fn test_save_overwrites() {
    let td = tempdir().expect("tempdir");
    let path = td.path().join(HIGHSCORE_FILE);

    let mut table = HighscoreTable::new();
    table.add_score_at("first", 10, noon());
    table.save(&path).unwrap();

    table.clear();
    table.add_score_at("second", 20, noon());
    table.save(&path).unwrap();

    let loaded = HighscoreTable::load(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.entries()[0].name, "second");
}

#[test]
fn test_hand_edited_file_is_normalized() {
    let td = tempdir().expect("tempdir");
    let path = td.path().join(HIGHSCORE_FILE);

    let mut text = String::from("broken line\n");
    for score in 0..14 {
        text.push_str(&format!("p{score} {score} 2024-01-01 00:00:00\n"));
    }
    std::fs::write(&path, text).unwrap();

    let table = HighscoreTable::load(&path).unwrap();
    assert_eq!(table.len(), MAX_HIGHSCORES);
    assert_eq!(table.entries()[0], HighscoreEntry::new("p13", 13, "2024-01-01 00:00:00"));
    assert_eq!(table.lowest(), Some(4));
}

#[test]
fn test_save_failure_is_reported() {
    let td = tempdir().expect("tempdir");
    // A directory cannot be written as a file.
    let path = td.path().to_path_buf();

    let table = HighscoreTable::new();
    assert!(table.save(&path).is_err());
    assert!(!table.save_or_log(&path));
}

#[test]
fn test_unreadable_path_is_an_error() {
    let td = tempdir().expect("tempdir");
    assert!(HighscoreTable::load(td.path()).is_err());
    assert!(HighscoreTable::load_or_default(td.path()).is_empty());
}

#[test]
fn test_snake_score_recorded_after_game_over() {
    let td = tempdir().expect("tempdir");
    let path = td.path().join(HIGHSCORE_FILE);

    let mut game = SnakeGame::with_rng(SnakeConfig::new(Difficulty::Hard), GameRng::new(8)).unwrap();
    assert!(game.place_food_at(Point::new(8, 7)));
    game.tick();
    assert!(game.place_food_at(Point::new(0, 0)));
    while game.phase() == Phase::Running {
        game.update(200);
    }
    assert_eq!(game.score(), 20);

    let mut table = HighscoreTable::load_or_default(&path);
    assert!(table.is_highscore(game.score()));
    table.add_score("Player One", game.score());
    assert!(table.save_or_log(&path));

    let loaded = HighscoreTable::load(&path).unwrap();
    assert_eq!(loaded.entries()[0].name, "Player_");
    assert_eq!(loaded.entries()[0].score, 20);
}
