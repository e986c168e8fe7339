//! Puntuación de la avaliação DISC
//!
//! Cada respuesta suma 1 al factor elegido como "más" y resta 1 al elegido
//! como "menos". Los totales se desplazan a [0, 2n] y se normalizan a
//! porcentaje; el perfil primario es el factor con mayor porcentaje.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::recruitment::{DiscAnswer, DiscFactor, DiscScores};
use crate::utils::errors::{validation_error, AppError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscError {
    #[error("La avaliação no tiene respuestas")]
    Empty,

    #[error("La pregunta {0} aparece más de una vez")]
    DuplicateQuestion(i32),

    #[error("En la pregunta {0} el mismo factor fue elegido como 'más' y 'menos'")]
    SameFactor(i32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiscResult {
    pub scores: DiscScores,
    pub primary: DiscFactor,
    pub secondary: DiscFactor,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn score_answers(answers: &[DiscAnswer]) -> Result<DiscResult, DiscError> {
    if answers.is_empty() {
        return Err(DiscError::Empty);
    }

    let mut seen = HashSet::new();
    let mut raw = [0i32; 4];

    for answer in answers {
        if !seen.insert(answer.question) {
            return Err(DiscError::DuplicateQuestion(answer.question));
        }
        if answer.most == answer.least {
            return Err(DiscError::SameFactor(answer.question));
        }
        raw[factor_index(answer.most)] += 1;
        raw[factor_index(answer.least)] -= 1;
    }

    let n = answers.len() as f64;
    let percent = |i: usize| round1((f64::from(raw[i]) + n) / (4.0 * n) * 100.0);

    let scores = DiscScores {
        dominance: percent(0),
        influence: percent(1),
        steadiness: percent(2),
        conformity: percent(3),
    };

    // Orden estable: empates se resuelven en el orden D, I, S, C
    let mut ranked = DiscFactor::ALL.to_vec();
    ranked.sort_by(|a, b| raw[factor_index(*b)].cmp(&raw[factor_index(*a)]));

    Ok(DiscResult {
        scores,
        primary: ranked[0],
        secondary: ranked[1],
    })
}

fn factor_index(factor: DiscFactor) -> usize {
    match factor {
        DiscFactor::Dominance => 0,
        DiscFactor::Influence => 1,
        DiscFactor::Steadiness => 2,
        DiscFactor::Conformity => 3,
    }
}

impl From<DiscError> for AppError {
    fn from(error: DiscError) -> Self {
        validation_error("answers", error.to_string())
    }
}
