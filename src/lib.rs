//! Backend de clasificados inmobiliarios sobre documentos XML planos
//!
//! Un solo proceso atiende la API REST; cada tipo de entidad vive en su
//! propio archivo XML que se relee y reescribe completo en cada operación.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;

use axum::Router;

use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Construir la aplicación completa a partir del estado
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.is_development() || state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .nest("/api", routes::create_api_router())
        .layer(cors)
        .with_state(state)
}
