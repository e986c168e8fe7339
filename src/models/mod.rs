//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod department;
pub mod employee;
pub mod job_position;
pub mod notification;
pub mod personnel_request;
pub mod recruitment;
pub mod training;
pub mod user_profile;
pub mod vacation;
