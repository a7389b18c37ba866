//! Serveur HTTP de la calculatrice
//!
//! - `GET /`           : page du pavé numérique
//! - `POST /calculate` : `{"expression": "..."}` -> `{"result": "..."}` (ou `"Error"`)
//! - `GET /health`     : sonde de vie

pub mod assets;
pub mod config;
pub mod erreur;
pub mod handlers;
pub mod modeles;

#[cfg(test)]
mod tests;

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::serveur::{
    assets::serve_ui_root,
    config::ServerConfig,
    handlers::{calculate_handler, health_handler},
};

/// Démarre le serveur et bloque jusqu’à son arrêt.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.adresse();

    if config.cors_all {
        warn!("CORS ouvert à toutes les origines (mode développement)");
    }

    let app = create_app(config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("calculatrice disponible sur http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Routeur complet (routes + middlewares).
pub fn create_app(config: ServerConfig) -> Router {
    // Même origine par défaut : la page est servie par ce serveur.
    let cors = if config.cors_all {
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE])
            .allow_origin(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/", get(serve_ui_root))
        .route("/calculate", post(calculate_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(config.max_payload_size()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CatchPanicLayer::new())
        .with_state(config)
}
