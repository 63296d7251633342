use maud::{Markup, html};

use crate::model::Roster;
use crate::view::roster::render_player_card;

pub const INDEX_TITLE: &str = "Basketball Pro Stats";

/// Full page: add-player form, export link, and one card per player with
/// its totals recomputed for this render.
#[must_use]
pub fn render_index_template(roster: &Roster) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (INDEX_TITLE) }
        }
        body {
            h1 { "🏀 " (INDEX_TITLE) }

            div class="toolbar" {
                form class="add-player-form" method="post" action="/players" {
                    input name="name" placeholder="Player name";
                    button class="add-player" type="submit" { "Add Player" }
                }
                a class="export-link" href="/export" { "Export Data" }
            }

            @for player in roster.players() {
                (render_player_card(player))
            }
        }
    }
}
