//! Modelos de recrutamento: vagas, candidatos y avaliações DISC

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow, Type};
use uuid::Uuid;

/// Estado de la vaga - mapea al ENUM opening_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "opening_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OpeningStatus {
    Open,
    Paused,
    Closed,
    Filled,
}

impl OpeningStatus {
    /// Una vaga cerrada o preenchida no acepta candidatos
    pub fn accepts_candidates(&self) -> bool {
        matches!(self, OpeningStatus::Open)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, OpeningStatus::Closed | OpeningStatus::Filled)
    }
}

/// Estado del candidato - mapea al ENUM candidate_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "candidate_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Applied,
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
}

/// Vaga - mapea exactamente a la tabla hr_job_openings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobOpening {
    pub id: Uuid,
    pub job_position_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub vacancies: i32,
    pub status: OpeningStatus,
    pub closed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Candidato - mapea exactamente a la tabla candidates
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: Uuid,
    pub job_opening_id: Option<Uuid>,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub resume_text: Option<String>,
    pub status: CandidateStatus,
    pub ai_score: Option<i32>,
    pub ai_summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Factor DISC
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiscFactor {
    #[serde(rename = "D")]
    Dominance,
    #[serde(rename = "I")]
    Influence,
    #[serde(rename = "S")]
    Steadiness,
    #[serde(rename = "C")]
    Conformity,
}

impl DiscFactor {
    pub const ALL: [DiscFactor; 4] = [
        DiscFactor::Dominance,
        DiscFactor::Influence,
        DiscFactor::Steadiness,
        DiscFactor::Conformity,
    ];

    pub fn letter(&self) -> &'static str {
        match self {
            DiscFactor::Dominance => "D",
            DiscFactor::Influence => "I",
            DiscFactor::Steadiness => "S",
            DiscFactor::Conformity => "C",
        }
    }
}

/// Respuesta a una pregunta DISC: el adjetivo que más y el que menos describe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscAnswer {
    pub question: i32,
    pub most: DiscFactor,
    pub least: DiscFactor,
}

/// Puntuación DISC normalizada (porcentajes que suman ~100)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiscScores {
    #[serde(rename = "D")]
    pub dominance: f64,
    #[serde(rename = "I")]
    pub influence: f64,
    #[serde(rename = "S")]
    pub steadiness: f64,
    #[serde(rename = "C")]
    pub conformity: f64,
}

impl DiscScores {
    pub fn get(&self, factor: DiscFactor) -> f64 {
        match factor {
            DiscFactor::Dominance => self.dominance,
            DiscFactor::Influence => self.influence,
            DiscFactor::Steadiness => self.steadiness,
            DiscFactor::Conformity => self.conformity,
        }
    }
}

/// Avaliação - mapea exactamente a la tabla candidate_assessments
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateAssessment {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub answers: Json<Vec<DiscAnswer>>,
    pub scores: Json<DiscScores>,
    pub primary_profile: String,
    pub secondary_profile: String,
    pub created_at: DateTime<Utc>,
}

/// Resultado del análisis de currículo por la función externa
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeAnalysis {
    pub score: i32,
    pub summary: String,
}
