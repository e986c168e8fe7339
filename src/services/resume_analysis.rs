//! Análisis de currículos
//!
//! La puntuación la calcula una función externa de IA. El resto del
//! sistema sólo ve el trait `ResumeAnalyzer`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::environment::EnvironmentConfig;
use crate::models::recruitment::ResumeAnalysis;
use crate::utils::errors::{AppError, AppResult};

/// Datos enviados a la función de análisis
#[derive(Debug, Clone, Serialize)]
pub struct ResumeInput {
    pub candidate_name: String,
    pub resume_text: Option<String>,
    pub resume_url: Option<String>,
    pub job_title: Option<String>,
    pub job_description: Option<String>,
}

#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, input: &ResumeInput) -> AppResult<ResumeAnalysis>;
}

#[derive(Debug, Deserialize)]
struct AnalysisResponse {
    score: f64,
    #[serde(alias = "analysis")]
    summary: String,
}

/// Puntuación en [0, 100]
pub fn normalize_score(score: f64) -> i32 {
    if score.is_nan() {
        return 0;
    }
    score.round().clamp(0.0, 100.0) as i32
}

/// Implementación HTTP de la función de análisis
pub struct HttpResumeAnalyzer {
    client: reqwest::Client,
    url: Option<String>,
    api_key: Option<String>,
}

impl HttpResumeAnalyzer {
    pub fn new(url: Option<String>, api_key: Option<String>) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| AppError::Internal(format!("Error creando cliente HTTP: {}", e)))?;

        Ok(Self { client, url, api_key })
    }

    pub fn from_config(config: &EnvironmentConfig) -> AppResult<Self> {
        Self::new(config.ai_analysis_url.clone(), config.ai_analysis_key.clone())
    }
}

#[async_trait]
impl ResumeAnalyzer for HttpResumeAnalyzer {
    async fn analyze(&self, input: &ResumeInput) -> AppResult<ResumeAnalysis> {
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| AppError::ServiceUnavailable("Análisis de currículos no configurado".to_string()))?;

        info!("🤖 Analizando currículo de {}", input.candidate_name);

        let mut request = self.client.post(url).json(input);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error llamando al análisis: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("❌ Análisis de currículo falló con status {}: {}", status, body);
            return Err(AppError::ExternalApi(format!("El análisis respondió {}", status)));
        }

        let parsed: AnalysisResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Respuesta de análisis inválida: {}", e)))?;

        Ok(ResumeAnalysis {
            score: normalize_score(parsed.score),
            summary: parsed.summary,
        })
    }
}
