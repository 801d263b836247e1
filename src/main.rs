mod routes;
mod controllers;
mod services;
mod models;
mod api_docs;
mod shared_state;
mod config;
mod errors;

use std::net::SocketAddr;

use axum::{response::Html, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use crate::api_docs::ApiDoc;
use crate::config::Config;
use crate::routes::simulation_routes::api_routes;
use crate::services::pvgis::{GenerationEstimator, PvgisClient};
use crate::shared_state::{AppState, SharedState};

#[tokio::main]
async fn main() {
    // 1. Load configuration
    let config = match Config::load("config.json") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config.json: {}", e);
            return;
        }
    };
    println!("Configuration loaded: PVGIS endpoint {}", config.pvgis.base_url);

    // 2. Initialize shared state
    let client = match PvgisClient::new(&config.pvgis) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build PVGIS client: {}", e);
            return;
        }
    };
    let state = AppState::new(GenerationEstimator::new(client));
    let shared = SharedState { config: config.clone(), app: state };

    // 3. Start Axum HTTP server
    let server_port = config.server.port;
    let app = Router::new()
        .nest("/api", api_routes(shared))
        .route("/scalar", get(|| async {
            Html(Scalar::new(ApiDoc::openapi()).to_html())
        }))
        .fallback_service(ServeDir::new("static"))
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], server_port));
    println!("API Server listening on http://{}", addr);
    println!("Scalar UI: http://{}/scalar", addr);
    println!("Dashboard: http://{}/", addr);

    if let Err(e) = axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
    {
        eprintln!("Server error: {}", e);
    }
}
