use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::model::SharedRoster;

pub const EXPORT_FILENAME: &str = "basketball_stats.json";

/// One-shot download of the current roster as pretty-printed JSON.
pub async fn export(store: Data<SharedRoster>) -> impl Responder {
    let roster = store.read().await;
    match serde_json::to_string_pretty(roster.players()) {
        Ok(body) => HttpResponse::Ok()
            .content_type("application/json")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ))
            .body(body),
        Err(e) => {
            eprintln!("Error: {e}");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}
