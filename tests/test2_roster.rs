use chrono::NaiveDate;
use uuid::Uuid;

use rusty_hoops::error::AppError;
use rusty_hoops::model::{GameStats, GameStatsForm, Roster};

fn sample_game(day: u32) -> GameStats {
    GameStats {
        date: NaiveDate::from_ymd_opt(2025, 11, day).unwrap(),
        two_points: 5,
        three_points: 2,
        free_throws_made: 3,
        free_throws_attempted: 4,
        rebounds: 10,
        steals: 1,
        blocks: 0,
        assists: 4,
    }
}

#[allow(clippy::too_many_arguments)]
fn form(
    date: &str,
    two: &str,
    three: &str,
    ftm: &str,
    fta: &str,
    reb: &str,
    stl: &str,
    blk: &str,
    ast: &str,
) -> GameStatsForm {
    GameStatsForm {
        date: date.to_string(),
        two_points: two.to_string(),
        three_points: three.to_string(),
        free_throws_made: ftm.to_string(),
        free_throws_attempted: fta.to_string(),
        rebounds: reb.to_string(),
        steals: stl.to_string(),
        blocks: blk.to_string(),
        assists: ast.to_string(),
    }
}

#[test]
fn test_added_players_have_distinct_ids() {
    let roster = Roster::new()
        .add_player("Reggie")
        .add_player("Reggie")
        .add_player("Cheryl");

    let players = roster.players();
    assert_eq!(players.len(), 3);
    assert_ne!(players[0].id, players[1].id);
    assert_ne!(players[0].id, players[2].id);
    assert_ne!(players[1].id, players[2].id);

    // insertion order is display order
    assert_eq!(players[0].name, "Reggie");
    assert_eq!(players[2].name, "Cheryl");
}

#[test]
fn test_blank_name_is_a_noop() {
    let roster = Roster::new().add_player("   ");
    assert!(roster.players().is_empty());

    let roster = roster.add_player("Lisa").add_player("");
    assert_eq!(roster.players().len(), 1);
}

#[test]
fn test_player_name_is_stored_trimmed() {
    let roster = Roster::new().add_player("  Diana  ");
    assert_eq!(roster.players()[0].name, "Diana");
}

#[test]
fn test_remove_player_and_unknown_removal() {
    let roster = Roster::new()
        .add_player("Reggie")
        .add_player("Cheryl")
        .add_player("Lisa");
    let cheryl = roster.players()[1].id;

    let roster = roster.remove_player(cheryl);
    assert_eq!(roster.players().len(), 2);
    assert!(roster.player(cheryl).is_none());
    assert_ne!(roster.players()[0].id, roster.players()[1].id);

    // deleting an id nobody has changes nothing
    let roster = roster.remove_player(Uuid::new_v4());
    assert_eq!(roster.players().len(), 2);
}

#[test]
fn test_append_preserves_history_order() {
    let roster = Roster::new().add_player("Diana");
    let id = roster.players()[0].id;

    let roster = roster.append_game(id, sample_game(1)).unwrap();
    let roster = roster.append_game(id, sample_game(2)).unwrap();

    let games = &roster.player(id).unwrap().games;
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].date, NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
    assert_eq!(games[1].date, NaiveDate::from_ymd_opt(2025, 11, 2).unwrap());
}

#[test]
fn test_append_unknown_player_signals_not_found() {
    let roster = Roster::new().add_player("Diana");

    let result = roster.append_game(Uuid::new_v4(), sample_game(1));
    assert!(matches!(result, Err(AppError::NotFound(_))));

    // every existing history is untouched
    assert!(roster.players()[0].games.is_empty());
}

#[test]
fn test_mutations_produce_new_snapshots() {
    let before = Roster::new().add_player("Reggie");
    let id = before.players()[0].id;

    let after = before.append_game(id, sample_game(1)).unwrap();

    // the earlier snapshot still reads as it did when taken
    assert!(before.players()[0].games.is_empty());
    assert_eq!(after.players()[0].games.len(), 1);
}

#[test]
fn test_form_coercion_accepts_well_formed_fields() {
    let stats = form("2025-11-02", " 5 ", "2", "3", "4", "10", "1", "0", "4")
        .into_stats()
        .unwrap();

    assert_eq!(stats.two_points, 5);
    assert_eq!(stats.date, NaiveDate::from_ymd_opt(2025, 11, 2).unwrap());
}

#[test]
fn test_form_coercion_rejects_negative_counts() {
    let result = form("2025-11-02", "-5", "2", "3", "4", "10", "1", "0", "4").into_stats();
    assert!(matches!(result, Err(AppError::Parse(_))));
}

#[test]
fn test_form_coercion_rejects_non_numeric_counts() {
    let result = form("2025-11-02", "5", "two", "3", "4", "10", "1", "0", "4").into_stats();
    assert!(matches!(result, Err(AppError::Parse(_))));
}

#[test]
fn test_form_coercion_rejects_made_exceeding_attempted() {
    let result = form("2025-11-02", "5", "2", "5", "4", "10", "1", "0", "4").into_stats();
    assert!(matches!(result, Err(AppError::Parse(_))));
}

#[test]
fn test_form_coercion_rejects_malformed_date() {
    let result = form("11/02/2025", "5", "2", "3", "4", "10", "1", "0", "4").into_stats();
    assert!(matches!(result, Err(AppError::Parse(_))));
}
