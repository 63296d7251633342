use rusty_hoops::args;
use rusty_hoops::controller::export::export;
use rusty_hoops::controller::roster::{add_game, add_player, delete_player};
use rusty_hoops::controller::stats::player_stats;
use rusty_hoops::model::{Roster, SharedRoster};
use rusty_hoops::view::index::render_index_template;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use std::sync::Arc;
use tokio::sync::RwLock;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();

    let roster: SharedRoster = Arc::new(RwLock::new(Roster::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(roster.clone()))
            .route("/", web::get().to(index))
            .route("/players", web::post().to(add_player))
            .route("/players/{id}/delete", web::post().to(delete_player))
            .route("/players/{id}/games", web::post().to(add_game))
            .route("/players/{id}/stats", web::get().to(player_stats))
            .route("/export", web::get().to(export))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static")) // Serve the static files
    })
    .bind(args.bind)?
    .run()
    .await?;
    Ok(())
}

async fn index(store: Data<SharedRoster>) -> impl Responder {
    let roster = store.read().await;
    let markup = render_index_template(&roster);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
