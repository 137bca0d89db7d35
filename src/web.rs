//! Web entry point: serves the single-page form and the JSON API

use std::sync::Arc;

use axum::{Router, response::Html, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{self, AppState};
use crate::config::AstroAiConfig;

async fn index() -> Html<&'static str> {
    Html(include_str!("../web/index.html"))
}

pub async fn run(config: AstroAiConfig) -> anyhow::Result<()> {
    let port = config.server.port;
    let state = AppState {
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index))
        .nest("/api", api::router(state))
        .layer(cors);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server running at http://localhost:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}
