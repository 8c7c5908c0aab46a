// src/web/handlers/system_handlers.rs
use crate::web::types::*;

use rocket::serde::json::Json;
use tracing::info;

pub async fn health_handler() -> Json<TextResponse> {
    info!("Health check");
    Json(TextResponse::success(
        "CV portfolio server is running".to_string(),
    ))
}
