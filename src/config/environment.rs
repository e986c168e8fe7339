//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Errores al leer la configuración
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a valid {expected}: '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_audience: Option<String>,
    pub cors_origins: Vec<String>,
    pub rate_limit_requests: u32,
    pub rate_limit_window: u64,
    pub log_level: String,
    // Reglas de negocio
    pub vacation_warning_days: i64,
    pub max_employee_photos: i64,
    // Función externa de análisis de currículos
    pub ai_analysis_url: Option<String>,
    pub ai_analysis_key: Option<String>,
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = optional("ENVIRONMENT").unwrap_or_else(|| "development".to_string());
        let default_level = if environment == "production" { "info" } else { "debug" };

        Ok(Self {
            port: parsed_or("PORT", "port number", 3000)?,
            host: optional("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_audience: optional("JWT_AUDIENCE"),
            cors_origins: optional("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            rate_limit_requests: parsed_or("RATE_LIMIT_REQUESTS", "number", 300)?,
            rate_limit_window: parsed_or("RATE_LIMIT_WINDOW", "number of seconds", 60)?,
            log_level: optional("LOG_LEVEL").unwrap_or_else(|| default_level.to_string()),
            vacation_warning_days: parsed_or("VACATION_WARNING_DAYS", "number of days", 60)?,
            max_employee_photos: parsed_or("MAX_EMPLOYEE_PHOTOS", "number", 3)?,
            ai_analysis_url: optional("AI_ANALYSIS_URL"),
            ai_analysis_key: optional("AI_ANALYSIS_KEY"),
            environment,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn optional(name: &'static str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::Missing(name))
}

fn parsed_or<T: FromStr>(name: &'static str, expected: &'static str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        }),
        None => Ok(default),
    }
}
