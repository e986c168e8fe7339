//! Controladores
//!
//! Lógica de cada caso de uso sobre los repositorios; los handlers de
//! `routes` sólo extraen parámetros y delegan aquí.

pub mod department_controller;
pub mod dossier_controller;
pub mod employee_controller;
pub mod job_position_controller;
pub mod notification_controller;
pub mod personnel_request_controller;
pub mod recruitment_controller;
pub mod training_controller;
pub mod vacation_controller;
