use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::config::ServerConfig;
use crate::graph::LabeledGraph;
use crate::web::api::{create_router, AppState};
use crate::Result;

/// Assemble the application: API routes, static files and optional CORS
pub fn build_app(graph: LabeledGraph<u64>, config: &ServerConfig) -> Router {
    let app_state = AppState::new(graph, config);

    let app = Router::new()
        .merge(create_router())
        .fallback_service(ServeDir::new(&config.static_dir))
        .with_state(app_state);

    if !config.enable_cors {
        return app;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    app.layer(ServiceBuilder::new().layer(cors).into_inner())
}

/// Start the web server serving `graph`
pub async fn start_server_with_config(graph: LabeledGraph<u64>, config: ServerConfig) -> Result<()> {
    let app = build_app(graph, &config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Path finder web server starting on http://{}", addr);
    info!("Serving static files from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
