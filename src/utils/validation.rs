//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use uuid::Uuid;
use validator::ValidationError;

lazy_static! {
    /// CPF con o sin máscara: 000.000.000-00 o 00000000000
    static ref CPF_FORMAT: Regex = Regex::new(r"^[0-9]{3}\.?[0-9]{3}\.?[0-9]{3}-?[0-9]{2}$").unwrap();
    /// Teléfono brasileño: (11) 91234-5678, +55 11 912345678, etc.
    static ref PHONE_FORMAT: Regex = Regex::new(r"^\+?[\d\s().-]{10,20}$").unwrap();
}

/// Validar y convertir string a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que una fecha no esté en el futuro respecto a `today`
pub fn validate_not_future(value: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if value > today {
        let mut error = ValidationError::new("not_future");
        error.add_param("value".into(), &value.to_string());
        error.add_param("today".into(), &today.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if !PHONE_FORMAT.is_match(value) || !(10..=13).contains(&digits) {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar CPF: formato y dígitos verificadores
pub fn validate_cpf(value: &str) -> Result<(), ValidationError> {
    let invalid = || {
        let mut error = ValidationError::new("cpf");
        error.add_param("value".into(), &value.to_string());
        error
    };

    if !CPF_FORMAT.is_match(value) {
        return Err(invalid());
    }

    let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 11 {
        return Err(invalid());
    }

    // 000.000.000-00, 111.111.111-11, ... pasan el cálculo pero no son válidos
    if digits.iter().all(|d| *d == digits[0]) {
        return Err(invalid());
    }

    let check_digit = |len: usize| -> u32 {
        let sum: u32 = digits[..len]
            .iter()
            .enumerate()
            .map(|(i, d)| d * (len as u32 + 1 - i as u32))
            .sum();
        let rest = (sum * 10) % 11;
        if rest == 10 { 0 } else { rest }
    };

    if check_digit(9) != digits[9] || check_digit(10) != digits[10] {
        return Err(invalid());
    }

    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Convertir un `ValidationError` suelto en `ValidationErrors` asociado a un campo
pub fn field_errors(field: &'static str, error: ValidationError) -> validator::ValidationErrors {
    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);
    errors
}
