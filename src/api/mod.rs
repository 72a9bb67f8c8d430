use axum::{
    Json, Router,
    response::IntoResponse,
    routing::{get, post},
};

use crate::application::commands::{
    search_livestreams::search_livestreams, top_livestreams::top_livestreams,
};

pub mod dto;
pub mod state;

pub async fn health_checker_handler() -> impl IntoResponse {
    const MESSAGE: &str = "Working fine, thanks!";

    let json_response = serde_json::json!({
        "status": "success",
        "message": MESSAGE
    });

    Json(json_response)
}

pub fn router(app_state: state::AppState) -> Router {
    Router::new()
        .route("/healthchecker", get(health_checker_handler))
        .route("/livestreams", get(top_livestreams))
        .route("/search", post(search_livestreams))
        .with_state(app_state)
}
