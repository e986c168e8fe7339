use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// Request para crear un departamento
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 30))]
    pub code: String,
    pub parent_id: Option<Uuid>,
    pub manager_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateDepartmentRequest {
    #[validate(length(min = 1, max = 150))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 30))]
    pub code: Option<String>,
    pub parent_id: Option<Uuid>,
    pub manager_id: Option<Uuid>,
}
