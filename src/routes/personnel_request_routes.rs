use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::personnel_request_controller::PersonnelRequestController;
use crate::dto::personnel_request_dto::{
    CreatePersonnelRequest, PersonnelRequestDetail, TransitionPersonnelRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::personnel_request::{PersonnelRequest, PersonnelRequestFilters, PersonnelRequestHistory};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_personnel_request_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_requests).post(create_request))
        .route("/:id", get(get_request).delete(delete_request))
        .route("/:id/transition", post(transition_request))
        .route("/:id/history", get(request_history))
}

fn controller(state: &AppState) -> PersonnelRequestController {
    PersonnelRequestController::new(
        state.repositories.personnel_requests.clone(),
        state.repositories.user_profiles.clone(),
    )
}

async fn create_request(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreatePersonnelRequest>,
) -> Result<Json<ApiResponse<PersonnelRequest>>, AppError> {
    Ok(Json(controller(&state).create(request, user.actor()).await?))
}

async fn list_requests(
    State(state): State<AppState>,
    Query(filters): Query<PersonnelRequestFilters>,
) -> Result<Json<ApiResponse<Vec<PersonnelRequest>>>, AppError> {
    Ok(Json(controller(&state).list(filters).await?))
}

async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PersonnelRequestDetail>>, AppError> {
    Ok(Json(controller(&state).get(id).await?))
}

async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    Ok(Json(controller(&state).delete(id).await?))
}

async fn transition_request(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<TransitionPersonnelRequest>,
) -> Result<Json<ApiResponse<PersonnelRequest>>, AppError> {
    Ok(Json(controller(&state).transition(id, request, user.actor()).await?))
}

async fn request_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<PersonnelRequestHistory>>>, AppError> {
    Ok(Json(controller(&state).history(id).await?))
}
