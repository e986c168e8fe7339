use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::job_position::{JobPositionStatus, LevelProfile};

fn validate_level(level: &LevelProfile) -> Result<(), ValidationError> {
    if level.salary_range_is_valid() {
        Ok(())
    } else {
        Err(ValidationError::new("salary_range"))
    }
}

// Request para crear un cargo
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJobPositionRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 30))]
    pub code: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 150))]
    pub title: String,
    pub department_id: Option<Uuid>,
    pub description: Option<String>,
    #[serde(default)]
    #[validate(custom = "validate_level")]
    pub junior: LevelProfile,
    #[serde(default)]
    #[validate(custom = "validate_level")]
    pub mid: LevelProfile,
    #[serde(default)]
    #[validate(custom = "validate_level")]
    pub senior: LevelProfile,
}

// Request para actualizar un cargo
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateJobPositionRequest {
    #[validate(length(min = 1, max = 30))]
    pub code: Option<String>,
    #[validate(length(min = 1, max = 150))]
    pub title: Option<String>,
    pub department_id: Option<Uuid>,
    pub description: Option<String>,
    #[validate(custom = "validate_level")]
    pub junior: Option<LevelProfile>,
    #[validate(custom = "validate_level")]
    pub mid: Option<LevelProfile>,
    #[validate(custom = "validate_level")]
    pub senior: Option<LevelProfile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobPositionTransitionRequest {
    pub status: JobPositionStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobPositionFilters {
    pub status: Option<JobPositionStatus>,
    pub department_id: Option<Uuid>,
}
