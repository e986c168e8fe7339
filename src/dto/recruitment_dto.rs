use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::recruitment::{CandidateStatus, DiscAnswer, OpeningStatus};
use crate::utils::validation::validate_phone;

// Request para crear una vaga
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJobOpeningRequest {
    pub job_position_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
    #[serde(default)]
    #[validate(length(min = 1, max = 150))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "one")]
    #[validate(range(min = 1, max = 500))]
    pub vacancies: i32,
}

fn one() -> i32 {
    1
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateJobOpeningRequest {
    pub job_position_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
    #[validate(length(min = 1, max = 150))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, max = 500))]
    pub vacancies: Option<i32>,
    pub status: Option<OpeningStatus>,
}

// Request para registrar un candidato
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCandidateRequest {
    pub job_opening_id: Option<Uuid>,
    #[serde(default)]
    #[validate(length(min = 1, max = 150))]
    pub full_name: String,
    #[serde(default)]
    #[validate(email)]
    pub email: String,
    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,
    #[validate(url)]
    pub resume_url: Option<String>,
    pub resume_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCandidateRequest {
    pub job_opening_id: Option<Uuid>,
    #[validate(length(min = 1, max = 150))]
    pub full_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,
    #[validate(url)]
    pub resume_url: Option<String>,
    pub resume_text: Option<String>,
    pub status: Option<CandidateStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpeningFilters {
    pub status: Option<OpeningStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateFilters {
    pub job_opening_id: Option<Uuid>,
    pub status: Option<CandidateStatus>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitAssessmentRequest {
    #[validate(length(min = 1, max = 100))]
    pub answers: Vec<DiscAnswer>,
}
