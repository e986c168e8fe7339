//! DTOs de la API
//!
//! Requests validados con `validator` y respuestas serializadas.

pub mod api_response;
pub mod department_dto;
pub mod employee_dto;
pub mod job_position_dto;
pub mod notification_dto;
pub mod personnel_request_dto;
pub mod recruitment_dto;
pub mod training_dto;
pub mod vacation_dto;

pub use api_response::{ApiResponse, Page};
