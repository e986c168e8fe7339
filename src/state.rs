//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::middleware::rate_limit::RateLimitState;
use crate::repositories::Repositories;
use crate::services::resume_analysis::{HttpResumeAnalyzer, ResumeAnalyzer};
use crate::services::vacation_calculator::VacationPolicy;
use crate::utils::errors::AppResult;
use crate::utils::jwt::JwtConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EnvironmentConfig>,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitState,
    pub repositories: Repositories,
    pub resume_analyzer: Arc<dyn ResumeAnalyzer>,
}

impl AppState {
    /// Estado de producción sobre PostgreSQL
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> AppResult<Self> {
        let analyzer = HttpResumeAnalyzer::from_config(&config)?;
        Ok(Self::from_parts(config, Repositories::postgres(pool), Arc::new(analyzer)))
    }

    /// Estado con repositorios y analizador arbitrarios
    pub fn from_parts(
        config: EnvironmentConfig,
        repositories: Repositories,
        resume_analyzer: Arc<dyn ResumeAnalyzer>,
    ) -> Self {
        Self {
            jwt: JwtConfig::from(&config),
            rate_limit: RateLimitState::from_config(&config),
            config: Arc::new(config),
            repositories,
            resume_analyzer,
        }
    }

    pub fn vacation_policy(&self) -> VacationPolicy {
        VacationPolicy {
            warning_days: self.config.vacation_warning_days,
        }
    }
}
