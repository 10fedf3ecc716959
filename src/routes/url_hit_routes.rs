use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::url_hit_controller::UrlHitController;
use crate::dto::common::ApiResponse;
use crate::dto::feedback_dto::{HitSummary, RecordHitRequest};
use crate::middleware::admin::AdminGuard;
use crate::models::url_hit::UrlHitRecord;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_url_hit_router() -> Router<AppState> {
    Router::new()
        .route("/link-hits", post(record_hit))
        .route("/link-hits", get(read_hits))
}

async fn record_hit(
    State(state): State<AppState>,
    Json(request): Json<RecordHitRequest>,
) -> Result<Json<ApiResponse<UrlHitRecord>>, AppError> {
    let controller = UrlHitController::new(state.store.clone());
    Ok(Json(controller.record(request).await?))
}

async fn read_hits(
    _guard: AdminGuard,
    State(state): State<AppState>,
) -> Json<Vec<HitSummary>> {
    let controller = UrlHitController::new(state.store.clone());
    Json(controller.summary().await)
}
