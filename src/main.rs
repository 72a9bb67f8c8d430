use std::sync::Arc;

use axum::http::HeaderValue;
use dotenv::dotenv;
use reqwest::{
    Method,
    header::{ACCEPT, CONTENT_TYPE},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use twitch_livestreams::{
    api::{self, state::AppState},
    application::services::twitch_manager::TwitchManager,
    config::{ServerConfig, TwitchConfig},
    infrastructure::twitch::helix_client::HelixClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .init();
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(tower_http::trace::DefaultMakeSpan::new().level(tracing::Level::INFO))
        .on_response(tower_http::trace::DefaultOnResponse::new().level(tracing::Level::INFO))
        .on_request(tower_http::trace::DefaultOnRequest::new().level(tracing::Level::INFO));

    dotenv().ok();

    let server_config = ServerConfig::from_env()?;

    let cors = CorsLayer::new()
        .allow_origin(server_config.cors_allowed_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([ACCEPT, CONTENT_TYPE]);

    let helix = HelixClient::new(TwitchConfig::from_env());
    let app_state = AppState {
        twitch: Arc::new(TwitchManager::new(Arc::new(helix))),
    };

    let app = api::router(app_state).layer(cors).layer(trace_layer);

    let listener = tokio::net::TcpListener::bind(server_config.addr).await?;
    info!("Server listening on {}", server_config.addr);
    axum::serve(listener, app).await?;

    Ok(())
}
