use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::training::TrainingKind;

// Request para crear un treinamento o procedimento
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTrainingRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 30))]
    pub code: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub kind: TrainingKind,
    pub description: Option<String>,
    #[validate(range(min = 1, max = 120))]
    pub validity_months: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTrainingRequest {
    #[validate(length(min = 1, max = 30))]
    pub code: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub kind: Option<TrainingKind>,
    pub description: Option<String>,
    #[validate(range(min = 1, max = 120))]
    pub validity_months: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequirementRequest {
    pub job_position_id: Uuid,
    pub training_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordCompletionRequest {
    pub employee_id: Uuid,
    pub training_id: Uuid,
    pub completed_at: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatrixQuery {
    pub job_position_id: Option<Uuid>,
}
