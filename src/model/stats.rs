use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One recorded game for one player. Counts are whole numbers and the
/// free-throw fields satisfy `free_throws_made <= free_throws_attempted`;
/// both are guaranteed by `GameStatsForm::into_stats`, the only path in
/// from user input.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub date: NaiveDate,
    pub two_points: u32,
    pub three_points: u32,
    pub free_throws_made: u32,
    pub free_throws_attempted: u32,
    pub rebounds: u32,
    pub steals: u32,
    pub blocks: u32,
    pub assists: u32,
}

/// The nine fields exactly as the game form posts them, all still strings.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GameStatsForm {
    pub date: String,
    pub two_points: String,
    pub three_points: String,
    #[serde(rename = "ftMade")]
    pub free_throws_made: String,
    #[serde(rename = "ftAtt")]
    pub free_throws_attempted: String,
    pub rebounds: String,
    pub steals: String,
    pub blocks: String,
    pub assists: String,
}

impl GameStatsForm {
    /// Coerce the raw form fields into a `GameStats`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if any counter is not a non-negative integer, the
    /// date is not `YYYY-MM-DD`, or more free throws were made than
    /// attempted.
    pub fn into_stats(self) -> Result<GameStats, AppError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|e| AppError::Parse(format!("date: {e}")))?;

        let stats = GameStats {
            date,
            two_points: parse_count("twoPoints", &self.two_points)?,
            three_points: parse_count("threePoints", &self.three_points)?,
            free_throws_made: parse_count("ftMade", &self.free_throws_made)?,
            free_throws_attempted: parse_count("ftAtt", &self.free_throws_attempted)?,
            rebounds: parse_count("rebounds", &self.rebounds)?,
            steals: parse_count("steals", &self.steals)?,
            blocks: parse_count("blocks", &self.blocks)?,
            assists: parse_count("assists", &self.assists)?,
        };

        if stats.free_throws_made > stats.free_throws_attempted {
            return Err(AppError::Parse(format!(
                "ftMade ({}) cannot exceed ftAtt ({})",
                stats.free_throws_made, stats.free_throws_attempted
            )));
        }

        Ok(stats)
    }
}

fn parse_count(field: &str, raw: &str) -> Result<u32, AppError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| AppError::Parse(format!("{field} must be a non-negative integer")))
}
