pub mod department_routes;
pub mod employee_routes;
pub mod job_position_routes;
pub mod notification_routes;
pub mod personnel_request_routes;
pub mod recruitment_routes;
pub mod training_routes;
pub mod vacation_routes;

use axum::Router;

use crate::state::AppState;

/// Rutas de la API protegidas por autenticación (montadas bajo /api)
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/employees", employee_routes::create_employee_router())
        .nest("/departments", department_routes::create_department_router())
        .nest("/job-positions", job_position_routes::create_job_position_router())
        .nest("/personnel-requests", personnel_request_routes::create_personnel_request_router())
        .nest("/notifications", notification_routes::create_notification_router())
        .nest("/vacations", vacation_routes::create_vacation_router())
        .nest("/recruitment", recruitment_routes::create_recruitment_router())
        .nest("/trainings", training_routes::create_training_router())
}
