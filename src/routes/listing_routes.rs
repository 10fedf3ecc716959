use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, patch, post, put},
    Json, Router,
};

use crate::controllers::listing_controller::ListingController;
use crate::dto::common::ApiResponse;
use crate::dto::listing_dto::{ListingQuery, SaveListingRequest};
use crate::models::listing::ListingRecord;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_listing_router() -> Router<AppState> {
    Router::new()
        .route("/", get(browse_listings))
        .route("/", post(create_listing))
        .route("/:id", get(get_listing))
        .route("/:id", put(update_listing))
        .route("/:id", delete(delete_listing))
        .route("/:id/close", patch(close_listing))
        .route("/:id/reopen", patch(reopen_listing))
}

async fn browse_listings(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Json<Vec<ListingRecord>> {
    let controller = ListingController::new(state.store.clone());
    Json(controller.browse(query.created_by).await)
}

async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListingRecord>, AppError> {
    let controller = ListingController::new(state.store.clone());
    Ok(Json(controller.get_by_id(&id).await?))
}

async fn create_listing(
    State(state): State<AppState>,
    Json(request): Json<SaveListingRequest>,
) -> Result<(axum::http::StatusCode, Json<ApiResponse<ListingRecord>>), AppError> {
    let controller = ListingController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((axum::http::StatusCode::CREATED, Json(response)))
}

async fn update_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SaveListingRequest>,
) -> Result<Json<ApiResponse<ListingRecord>>, AppError> {
    let controller = ListingController::new(state.store.clone());
    Ok(Json(controller.update(&id, request).await?))
}

async fn delete_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ListingRecord>>, AppError> {
    let controller = ListingController::new(state.store.clone());
    Ok(Json(controller.delete(&id).await?))
}

async fn close_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ListingRecord>>, AppError> {
    let controller = ListingController::new(state.store.clone());
    Ok(Json(controller.close(&id).await?))
}

async fn reopen_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ListingRecord>>, AppError> {
    let controller = ListingController::new(state.store.clone());
    Ok(Json(controller.reopen(&id).await?))
}
