use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;

use crate::model::{GameStats, PlayerId, SharedRoster};

/// Cumulative totals and per-game averages for one player's history. Rate
/// fields are pre-formatted to one decimal place for display.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatReport {
    pub games_played: usize,
    pub two_points: u32,
    pub three_points: u32,
    pub free_throws_made: u32,
    pub free_throws_attempted: u32,
    pub rebounds: u32,
    pub steals: u32,
    pub blocks: u32,
    pub assists: u32,
    pub total_points: u32,
    pub free_throw_pct: String,
    pub points_per_game: String,
    pub rebounds_per_game: String,
    pub assists_per_game: String,
    pub steals_per_game: String,
    pub blocks_per_game: String,
}

/// Reduce a player's game list into totals and per-game rates. Pure: the
/// same game list always produces the same report.
///
/// Made free throws count toward the free-throw totals but not toward
/// `total_points`; only field goals score here.
#[must_use]
pub fn aggregate_games(games: &[GameStats]) -> StatReport {
    let games_played = games.len();

    let mut two_points = 0u32;
    let mut three_points = 0u32;
    let mut free_throws_made = 0u32;
    let mut free_throws_attempted = 0u32;
    let mut rebounds = 0u32;
    let mut steals = 0u32;
    let mut blocks = 0u32;
    let mut assists = 0u32;

    for game in games {
        two_points += game.two_points;
        three_points += game.three_points;
        free_throws_made += game.free_throws_made;
        free_throws_attempted += game.free_throws_attempted;
        rebounds += game.rebounds;
        steals += game.steals;
        blocks += game.blocks;
        assists += game.assists;
    }

    let total_points = two_points * 2 + three_points * 3;

    let free_throw_pct = if free_throws_attempted > 0 {
        format!(
            "{:.1}",
            f64::from(free_throws_made) / f64::from(free_throws_attempted) * 100.0
        )
    } else {
        "0.0".to_string()
    };

    StatReport {
        games_played,
        two_points,
        three_points,
        free_throws_made,
        free_throws_attempted,
        rebounds,
        steals,
        blocks,
        assists,
        total_points,
        free_throw_pct,
        points_per_game: per_game(total_points, games_played),
        rebounds_per_game: per_game(rebounds, games_played),
        assists_per_game: per_game(assists, games_played),
        steals_per_game: per_game(steals, games_played),
        blocks_per_game: per_game(blocks, games_played),
    }
}

// An empty history reads as 0.0 rather than dividing by zero.
fn per_game(total: u32, games_played: usize) -> String {
    if games_played == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", f64::from(total) / games_played as f64)
}

pub async fn player_stats(path: web::Path<String>, store: Data<SharedRoster>) -> impl Responder {
    let id: PlayerId = match path.into_inner().parse() {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(json!({"error": "player id must be a uuid"}));
        }
    };

    let roster = store.read().await;
    match roster.player(id) {
        Some(player) => HttpResponse::Ok().json(aggregate_games(&player.games)),
        None => HttpResponse::NotFound().json(json!({"error": format!("no player with id {id}")})),
    }
}
