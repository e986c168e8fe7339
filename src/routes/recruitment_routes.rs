use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::recruitment_controller::RecruitmentController;
use crate::dto::recruitment_dto::{
    CandidateFilters, CreateCandidateRequest, CreateJobOpeningRequest, OpeningFilters, SubmitAssessmentRequest,
    UpdateCandidateRequest, UpdateJobOpeningRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::recruitment::{Candidate, CandidateAssessment, JobOpening};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_recruitment_router() -> Router<AppState> {
    Router::new()
        .route("/openings", get(list_openings).post(create_opening))
        .route("/openings/:id", get(get_opening).put(update_opening).delete(delete_opening))
        .route("/candidates", get(list_candidates).post(create_candidate))
        .route("/candidates/:id", get(get_candidate).put(update_candidate).delete(delete_candidate))
        .route("/candidates/:id/analyze", post(analyze_resume))
        .route("/candidates/:id/assessments", get(list_assessments).post(submit_assessment))
}

fn controller(state: &AppState) -> RecruitmentController {
    RecruitmentController::new(state.repositories.recruitment.clone(), state.resume_analyzer.clone())
}

async fn create_opening(
    State(state): State<AppState>,
    Json(request): Json<CreateJobOpeningRequest>,
) -> Result<Json<ApiResponse<JobOpening>>, AppError> {
    Ok(Json(controller(&state).create_opening(request).await?))
}

async fn list_openings(
    State(state): State<AppState>,
    Query(filters): Query<OpeningFilters>,
) -> Result<Json<ApiResponse<Vec<JobOpening>>>, AppError> {
    Ok(Json(controller(&state).list_openings(filters).await?))
}

async fn get_opening(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<JobOpening>>, AppError> {
    Ok(Json(controller(&state).get_opening(id).await?))
}

async fn update_opening(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateJobOpeningRequest>,
) -> Result<Json<ApiResponse<JobOpening>>, AppError> {
    Ok(Json(controller(&state).update_opening(id, request).await?))
}

async fn delete_opening(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    Ok(Json(controller(&state).delete_opening(id).await?))
}

async fn create_candidate(
    State(state): State<AppState>,
    Json(request): Json<CreateCandidateRequest>,
) -> Result<Json<ApiResponse<Candidate>>, AppError> {
    Ok(Json(controller(&state).create_candidate(request).await?))
}

async fn list_candidates(
    State(state): State<AppState>,
    Query(filters): Query<CandidateFilters>,
) -> Result<Json<ApiResponse<Vec<Candidate>>>, AppError> {
    Ok(Json(controller(&state).list_candidates(filters).await?))
}

async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Candidate>>, AppError> {
    Ok(Json(controller(&state).get_candidate(id).await?))
}

async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCandidateRequest>,
) -> Result<Json<ApiResponse<Candidate>>, AppError> {
    Ok(Json(controller(&state).update_candidate(id, request).await?))
}

async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    Ok(Json(controller(&state).delete_candidate(id).await?))
}

async fn analyze_resume(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Candidate>>, AppError> {
    user.require_recruiter("analyze resume")?;
    Ok(Json(controller(&state).analyze_resume(id).await?))
}

async fn submit_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SubmitAssessmentRequest>,
) -> Result<Json<ApiResponse<CandidateAssessment>>, AppError> {
    Ok(Json(controller(&state).submit_assessment(id, request).await?))
}

async fn list_assessments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<CandidateAssessment>>>, AppError> {
    Ok(Json(controller(&state).list_assessments(id).await?))
}
