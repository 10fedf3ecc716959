pub mod feedback_routes;
pub mod listing_routes;
pub mod lookup_routes;
pub mod url_hit_routes;
pub mod user_routes;

use axum::Router;

use crate::state::AppState;

/// Router completo de la API, montado bajo /api
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(user_routes::create_user_router())
        .merge(lookup_routes::create_lookup_router())
        .merge(url_hit_routes::create_url_hit_router())
        .nest("/listings", listing_routes::create_listing_router())
        .nest("/feedback", feedback_routes::create_feedback_router())
}
