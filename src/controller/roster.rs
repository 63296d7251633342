use actix_web::http::header;
use actix_web::web::{self, Data, Form};
use actix_web::{HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::model::{GameStatsForm, PlayerId, SharedRoster};

#[derive(Deserialize, Debug)]
pub struct AddPlayerForm {
    pub name: String,
}

pub async fn add_player(form: Form<AddPlayerForm>, store: Data<SharedRoster>) -> impl Responder {
    let mut roster = store.write().await;
    let next = roster.add_player(&form.name);
    *roster = next;
    back_to_index()
}

pub async fn delete_player(path: web::Path<String>, store: Data<SharedRoster>) -> impl Responder {
    let id: PlayerId = match path.into_inner().parse() {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(json!({"error": "player id must be a uuid"}));
        }
    };

    let mut roster = store.write().await;
    let next = roster.remove_player(id);
    *roster = next;
    back_to_index()
}

pub async fn add_game(
    path: web::Path<String>,
    form: Form<GameStatsForm>,
    store: Data<SharedRoster>,
) -> impl Responder {
    let id: PlayerId = match path.into_inner().parse() {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::BadRequest().json(json!({"error": "player id must be a uuid"}));
        }
    };

    let stats = match form.into_inner().into_stats() {
        Ok(stats) => stats,
        Err(e) => {
            return HttpResponse::BadRequest().json(json!({"error": e.to_string()}));
        }
    };

    let mut roster = store.write().await;
    match roster.append_game(id, stats) {
        Ok(next) => {
            *roster = next;
            back_to_index()
        }
        Err(e) => {
            eprintln!("Error: {e}");
            HttpResponse::NotFound().json(json!({"error": e.to_string()}))
        }
    }
}

fn back_to_index() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}
