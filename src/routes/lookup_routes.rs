use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::lookup_controller::LookupController;
use crate::models::lookup::LookupRecord;
use crate::state::AppState;

pub fn create_lookup_router() -> Router<AppState> {
    Router::new()
        .route("/property-types", get(property_types))
        .route("/listing-types", get(listing_types))
        .route("/property-subtypes", get(property_sub_types))
}

async fn property_types(State(state): State<AppState>) -> Json<Vec<LookupRecord>> {
    let controller = LookupController::new(state.store.clone());
    Json(controller.property_types().await)
}

async fn listing_types(State(state): State<AppState>) -> Json<Vec<LookupRecord>> {
    let controller = LookupController::new(state.store.clone());
    Json(controller.listing_types().await)
}

async fn property_sub_types(State(state): State<AppState>) -> Json<Vec<LookupRecord>> {
    let controller = LookupController::new(state.store.clone());
    Json(controller.property_sub_types().await)
}
