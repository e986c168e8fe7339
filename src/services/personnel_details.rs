//! Validación de los detalles específicos de cada tipo de movimentação

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

use crate::models::personnel_request::MovementType;
use crate::utils::validation::{validate_date, validate_uuid};

fn detail_error(code: &'static str, key: &str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.add_param("key".into(), &key.to_string());
    error
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .ok()
            .or_else(|| n.as_f64().and_then(|f| Decimal::try_from(f).ok())),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

fn is_date_key(key: &str) -> bool {
    key == "date" || key.ends_with("_date")
}

/// Validar una solicitud antes de persistirla.
///
/// Reglas: `details` es un objeto, contiene todas las claves requeridas por
/// el tipo, las claves numéricas son positivas, fechas en `YYYY-MM-DD` y
/// claves `*_id` son UUID.
pub fn validate_request(
    movement: MovementType,
    employee_id: Option<Uuid>,
    details: &Value,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if movement.requires_employee() && employee_id.is_none() {
        errors.add("employee_id", ValidationError::new("required"));
    }

    let Some(object) = details.as_object() else {
        errors.add("details", ValidationError::new("object"));
        return Err(errors);
    };

    for key in movement.required_details() {
        match object.get(*key) {
            Some(value) if !is_blank(value) => {}
            _ => errors.add("details", detail_error("required", key)),
        }
    }

    for key in movement.positive_details() {
        if let Some(value) = object.get(*key).filter(|v| !is_blank(v)) {
            match as_decimal(value) {
                Some(number) if number > Decimal::ZERO => {}
                _ => errors.add("details", detail_error("positive", key)),
            }
        }
    }

    for (key, value) in object {
        if is_blank(value) {
            continue;
        }
        // Fechas e ids solo se aceptan como texto
        let text = value.as_str();
        if is_date_key(key) && !text.is_some_and(|t| validate_date(t).is_ok()) {
            errors.add("details", detail_error("date", key));
        }
        if key.ends_with("_id") && !text.is_some_and(|t| validate_uuid(t).is_ok()) {
            errors.add("details", detail_error("uuid", key));
        }
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys_with(errors: &ValidationErrors, code: &str) -> Vec<String> {
        errors
            .field_errors()
            .get("details")
            .map(|list| {
                list.iter()
                    .filter(|e| e.code == code)
                    .filter_map(|e| e.params.get("key").and_then(|v| v.as_str()).map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_salary_raise_requires_positive_salary() {
        let employee = Some(Uuid::new_v4());
        let ok = json!({ "new_salary": 5200.50, "effective_date": "2024-07-01" });
        assert!(validate_request(MovementType::SalaryRaise, employee, &ok).is_ok());

        let zero = json!({ "new_salary": 0, "effective_date": "2024-07-01" });
        let errors = validate_request(MovementType::SalaryRaise, employee, &zero).unwrap_err();
        assert_eq!(keys_with(&errors, "positive"), vec!["new_salary"]);

        let as_text = json!({ "new_salary": "4800.00", "effective_date": "2024-07-01" });
        assert!(validate_request(MovementType::SalaryRaise, employee, &as_text).is_ok());
    }

    #[test]
    fn test_termination_requires_date_and_reason() {
        let errors = validate_request(
            MovementType::Termination,
            Some(Uuid::new_v4()),
            &json!({ "reason": "  " }),
        )
        .unwrap_err();
        let mut missing = keys_with(&errors, "required");
        missing.sort();
        assert_eq!(missing, vec!["reason", "termination_date"]);
    }

    #[test]
    fn test_admission_does_not_need_employee() {
        let details = json!({
            "candidate_name": "Marina Lopes",
            "job_position_id": Uuid::new_v4().to_string(),
            "start_date": "2024-08-01"
        });
        assert!(validate_request(MovementType::Admission, None, &details).is_ok());

        let errors = validate_request(MovementType::Bonus, None, &json!({ "amount": 100, "reason": "meta" }))
            .unwrap_err();
        assert!(errors.field_errors().contains_key("employee_id"));
    }

    #[test]
    fn test_malformed_dates_and_ids() {
        let details = json!({ "job_position_id": "abc", "effective_date": "01/07/2024" });
        let errors = validate_request(MovementType::PositionChange, Some(Uuid::new_v4()), &details).unwrap_err();
        assert_eq!(keys_with(&errors, "date"), vec!["effective_date"]);
        assert_eq!(keys_with(&errors, "uuid"), vec!["job_position_id"]);
    }

    #[test]
    fn test_non_text_dates_and_ids_are_rejected() {
        let details = json!({ "termination_date": 12345, "reason": "Reestruturação" });
        let errors = validate_request(MovementType::Termination, Some(Uuid::new_v4()), &details).unwrap_err();
        assert_eq!(keys_with(&errors, "date"), vec!["termination_date"]);
        assert!(keys_with(&errors, "required").is_empty());

        let details = json!({ "job_position_id": 42, "effective_date": ["2024-07-01"] });
        let errors = validate_request(MovementType::PositionChange, Some(Uuid::new_v4()), &details).unwrap_err();
        assert_eq!(keys_with(&errors, "date"), vec!["effective_date"]);
        assert_eq!(keys_with(&errors, "uuid"), vec!["job_position_id"]);
    }

    #[test]
    fn test_details_must_be_object() {
        let errors = validate_request(MovementType::Overtime, Some(Uuid::new_v4()), &json!([1, 2])).unwrap_err();
        assert!(errors.field_errors().contains_key("details"));
    }
}
