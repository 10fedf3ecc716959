use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::user_controller::UserController;
use crate::dto::common::ApiResponse;
use crate::dto::user_dto::{
    ChangePasswordRequest, LoginRequest, ResetPasswordRequest, SignupRequest,
    UpdateProfileRequest, UserResponse,
};
use crate::middleware::admin::AdminGuard;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/reset-password", post(reset_password))
        .route("/users/change-password", post(change_password))
        .route("/users", get(list_users))
        .route("/users/:user_id", get(get_profile))
        .route("/users/:user_id", put(update_profile))
}

async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), AppError> {
    let controller = UserController::new(state.store.clone());
    let response = controller.signup(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.store.clone());
    Ok(Json(controller.login(request).await?))
}

async fn reset_password(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.store.clone());
    Ok(Json(controller.reset_password(request).await?))
}

async fn change_password(
    State(state): State<AppState>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.store.clone());
    Ok(Json(controller.change_password(request).await?))
}

async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let controller = UserController::new(state.store.clone());
    Ok(Json(controller.get_profile(&user_id).await?))
}

async fn update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.store.clone());
    Ok(Json(controller.update_profile(&user_id, request).await?))
}

async fn list_users(
    _guard: AdminGuard,
    State(state): State<AppState>,
) -> Json<Vec<UserResponse>> {
    let controller = UserController::new(state.store.clone());
    Json(controller.list().await)
}
