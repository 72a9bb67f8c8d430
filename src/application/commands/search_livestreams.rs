use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::{error, info, warn};

use crate::api::{dto::search_request::SearchRequest, state::AppState};

// Handler: POST /search
pub async fn search_livestreams(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> impl IntoResponse {
    let query = match payload {
        Ok(Json(SearchRequest { query: Some(query) })) if !query.is_empty() => query,
        Ok(_) => return missing_query(),
        Err(rejection) => {
            warn!("Rejected search body: {}", rejection.body_text());
            return missing_query();
        }
    };
    info!("Received search request for {:?}", query);

    match state.twitch.search_channels(&query).await {
        Ok(results) => (StatusCode::OK, Json(json!({ "results": results }))),
        Err(e) => {
            error!("Search for {:?} failed: {:?}", query, e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({"status": "error", "message": e.to_string()})),
            )
        }
    }
}

fn missing_query() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"message": "Missing body parameter \"query\""})),
    )
}
