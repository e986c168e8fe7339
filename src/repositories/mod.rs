//! Repositorios
//!
//! Un trait por entidad y su implementación sobre PostgreSQL.

pub mod department_repository;
pub mod employee_repository;
pub mod job_position_repository;
pub mod notification_repository;
pub mod personnel_request_repository;
pub mod recruitment_repository;
pub mod training_repository;
pub mod user_profile_repository;
pub mod vacation_repository;

use std::sync::Arc;

use sqlx::PgPool;

pub use department_repository::{DepartmentRepository, PgDepartmentRepository};
pub use employee_repository::{EmployeeRepository, PgEmployeeRepository};
pub use job_position_repository::{JobPositionRepository, PgJobPositionRepository};
pub use notification_repository::{NotificationRepository, PgNotificationRepository};
pub use personnel_request_repository::{PersonnelRequestRepository, PgPersonnelRequestRepository};
pub use recruitment_repository::{PgRecruitmentRepository, RecruitmentRepository};
pub use training_repository::{PgTrainingRepository, TrainingRepository};
pub use user_profile_repository::{PgUserProfileRepository, UserProfileRepository};
pub use vacation_repository::{PgVacationRepository, VacationRepository};

/// Conjunto de repositorios compartido por los handlers
#[derive(Clone)]
pub struct Repositories {
    pub employees: Arc<dyn EmployeeRepository>,
    pub departments: Arc<dyn DepartmentRepository>,
    pub job_positions: Arc<dyn JobPositionRepository>,
    pub personnel_requests: Arc<dyn PersonnelRequestRepository>,
    pub notifications: Arc<dyn NotificationRepository>,
    pub user_profiles: Arc<dyn UserProfileRepository>,
    pub vacations: Arc<dyn VacationRepository>,
    pub recruitment: Arc<dyn RecruitmentRepository>,
    pub trainings: Arc<dyn TrainingRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            employees: Arc::new(PgEmployeeRepository::new(pool.clone())),
            departments: Arc::new(PgDepartmentRepository::new(pool.clone())),
            job_positions: Arc::new(PgJobPositionRepository::new(pool.clone())),
            personnel_requests: Arc::new(PgPersonnelRequestRepository::new(pool.clone())),
            notifications: Arc::new(PgNotificationRepository::new(pool.clone())),
            user_profiles: Arc::new(PgUserProfileRepository::new(pool.clone())),
            vacations: Arc::new(PgVacationRepository::new(pool.clone())),
            recruitment: Arc::new(PgRecruitmentRepository::new(pool.clone())),
            trainings: Arc::new(PgTrainingRepository::new(pool)),
        }
    }
}
