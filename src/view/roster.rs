use maud::{Markup, html};

use crate::controller::stats::{StatReport, aggregate_games};
use crate::model::Player;

#[must_use]
pub fn render_player_card(player: &Player) -> Markup {
    let totals = aggregate_games(&player.games);

    html! {
        div class="player-card" {
            div class="player-header" {
                h2 { (player.name) }
                form method="post" action=(format!("/players/{}/delete", player.id)) {
                    button class="delete-player" type="submit" { "Delete" }
                }
            }

            (render_game_form(player))
            (render_totals(&totals))
        }
    }
}

fn render_game_form(player: &Player) -> Markup {
    html! {
        form class="game-form" method="post" action=(format!("/players/{}/games", player.id)) {
            input type="date" name="date" required;
            input name="twoPoints" placeholder="2PT" required;
            input name="threePoints" placeholder="3PT" required;
            input name="ftMade" placeholder="FT Made" required;
            input name="ftAtt" placeholder="FT Attempted" required;
            input name="rebounds" placeholder="Rebounds" required;
            input name="steals" placeholder="Steals" required;
            input name="blocks" placeholder="Blocks" required;
            input name="assists" placeholder="Assists" required;
            button type="submit" { "Add Game Stats" }
        }
    }
}

fn render_totals(totals: &StatReport) -> Markup {
    html! {
        div class="totals" {
            div { "Total Games: " (totals.games_played) }
            div { "Total Points: " (totals.total_points) " (PPG: " (totals.points_per_game) ")" }
            div { "FT %: " (totals.free_throw_pct) "%" }
            div { "Rebounds: " (totals.rebounds) " (RPG: " (totals.rebounds_per_game) ")" }
            div { "Assists: " (totals.assists) " (APG: " (totals.assists_per_game) ")" }
            div { "Steals: " (totals.steals) " (SPG: " (totals.steals_per_game) ")" }
            div { "Blocks: " (totals.blocks) " (BPG: " (totals.blocks_per_game) ")" }
        }
    }
}
