use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::feedback_controller::FeedbackController;
use crate::dto::common::ApiResponse;
use crate::dto::feedback_dto::CreateFeedbackRequest;
use crate::middleware::admin::AdminGuard;
use crate::models::feedback::FeedbackRecord;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_feedback_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_feedback))
        .route("/", get(list_feedback))
        .route("/:id", get(get_feedback))
}

async fn create_feedback(
    State(state): State<AppState>,
    Json(request): Json<CreateFeedbackRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FeedbackRecord>>), AppError> {
    let controller = FeedbackController::new(state.store.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_feedback(
    _guard: AdminGuard,
    State(state): State<AppState>,
) -> Json<Vec<FeedbackRecord>> {
    let controller = FeedbackController::new(state.store.clone());
    Json(controller.list().await)
}

async fn get_feedback(
    _guard: AdminGuard,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FeedbackRecord>, AppError> {
    let controller = FeedbackController::new(state.store.clone());
    Ok(Json(controller.get_by_id(&id).await?))
}
