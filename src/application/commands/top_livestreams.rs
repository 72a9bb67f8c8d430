use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::{error, info};

use crate::api::state::AppState;

// Handler: GET /livestreams
pub async fn top_livestreams(State(state): State<AppState>) -> impl IntoResponse {
    info!("Received top livestreams request");

    match state.twitch.fetch_top_live_streams().await {
        Ok(results) => (StatusCode::OK, Json(json!({ "results": results }))),
        Err(e) => {
            error!("Failed to fetch top livestreams: {:?}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({"status": "error", "message": e.to_string()})),
            )
        }
    }
}
