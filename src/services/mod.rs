//! Services module
//!
//! Lógica de negocio pura (cálculos, validaciones de flujo) e integraciones
//! externas. No acceden a la base de datos.

pub mod disc_scoring;
pub mod org_chart;
pub mod personnel_details;
pub mod personnel_workflow;
pub mod resume_analysis;
pub mod training_matrix;
pub mod vacation_calculator;

pub use resume_analysis::{HttpResumeAnalyzer, ResumeAnalyzer, ResumeInput};
