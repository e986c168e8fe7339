//! Matriz de treinamentos
//!
//! Cruza cargos × treinamentos obrigatórios × conclusões de cada
//! colaborador y calcula porcentajes de cumplimiento.

use std::collections::HashMap;

use chrono::{Months, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use crate::models::employee::Employee;
use crate::models::training::{ComplianceStatus, EmployeeTraining, Training, TrainingKind};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatrixCell {
    pub training_id: Uuid,
    pub status: ComplianceStatus,
    pub completed_at: Option<NaiveDate>,
    pub expires_at: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatrixRow {
    pub employee_id: Uuid,
    pub employee_name: String,
    pub job_position_id: Option<Uuid>,
    pub cells: Vec<MatrixCell>,
    pub completion_percentage: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatrixTraining {
    pub id: Uuid,
    pub code: String,
    pub title: String,
    pub kind: TrainingKind,
    pub required_for: usize,
    pub completion_percentage: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TrainingMatrix {
    pub trainings: Vec<MatrixTraining>,
    pub rows: Vec<MatrixRow>,
    pub overall_percentage: f64,
}

/// Vencimiento de una conclusión según la validez del treinamento
pub fn expiry_for(completed_at: NaiveDate, validity_months: Option<i32>) -> Option<NaiveDate> {
    validity_months
        .filter(|m| *m > 0)
        .and_then(|m| completed_at.checked_add_months(Months::new(m as u32)))
}

pub fn cell_status(completion: Option<&EmployeeTraining>, today: NaiveDate) -> ComplianceStatus {
    match completion {
        None => ComplianceStatus::Missing,
        Some(c) if c.expires_at.map_or(false, |e| e < today) => ComplianceStatus::Expired,
        Some(_) => ComplianceStatus::Compliant,
    }
}

fn percentage(done: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (done as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Construir la matriz.
///
/// `requirements` son pares (cargo, treinamento). Colaboradores sin
/// requisitos aparecen con 100%.
pub fn build_matrix(
    trainings: &[Training],
    requirements: &[(Uuid, Uuid)],
    employees: &[Employee],
    completions: &[EmployeeTraining],
    today: NaiveDate,
) -> TrainingMatrix {
    let mut by_position: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for (position, training) in requirements {
        by_position.entry(*position).or_default().push(*training);
    }

    let known: HashMap<Uuid, &Training> = trainings.iter().map(|t| (t.id, t)).collect();
    let done: HashMap<(Uuid, Uuid), &EmployeeTraining> = completions
        .iter()
        .map(|c| ((c.employee_id, c.training_id), c))
        .collect();

    // (compliant, total) por treinamento
    let mut per_training: HashMap<Uuid, (usize, usize)> = HashMap::new();
    let (mut compliant_total, mut cells_total) = (0, 0);

    let mut rows: Vec<MatrixRow> = employees
        .iter()
        .map(|employee| {
            let mut required: Vec<&Training> = employee
                .job_position_id
                .and_then(|p| by_position.get(&p))
                .map(|ids| ids.iter().filter_map(|id| known.get(id).copied()).collect())
                .unwrap_or_default();
            required.sort_by(|a, b| a.code.cmp(&b.code));

            let cells: Vec<MatrixCell> = required
                .iter()
                .map(|training| {
                    let completion = done.get(&(employee.id, training.id)).copied();
                    let status = cell_status(completion, today);

                    let entry = per_training.entry(training.id).or_insert((0, 0));
                    entry.1 += 1;
                    if status == ComplianceStatus::Compliant {
                        entry.0 += 1;
                    }

                    MatrixCell {
                        training_id: training.id,
                        status,
                        completed_at: completion.map(|c| c.completed_at),
                        expires_at: completion.and_then(|c| c.expires_at),
                    }
                })
                .collect();

            let compliant = cells.iter().filter(|c| c.status == ComplianceStatus::Compliant).count();
            compliant_total += compliant;
            cells_total += cells.len();

            MatrixRow {
                employee_id: employee.id,
                employee_name: employee.full_name(),
                job_position_id: employee.job_position_id,
                completion_percentage: percentage(compliant, cells.len()),
                cells,
            }
        })
        .collect();
    rows.sort_by(|a, b| a.employee_name.to_lowercase().cmp(&b.employee_name.to_lowercase()));

    let mut matrix_trainings: Vec<MatrixTraining> = trainings
        .iter()
        .filter(|t| requirements.iter().any(|(_, training)| *training == t.id))
        .map(|t| {
            let (ok, total) = per_training.get(&t.id).copied().unwrap_or((0, 0));
            MatrixTraining {
                id: t.id,
                code: t.code.clone(),
                title: t.title.clone(),
                kind: t.kind,
                required_for: total,
                completion_percentage: percentage(ok, total),
            }
        })
        .collect();
    matrix_trainings.sort_by(|a, b| a.code.cmp(&b.code));

    TrainingMatrix {
        trainings: matrix_trainings,
        rows,
        overall_percentage: percentage(compliant_total, cells_total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::EmployeeStatus;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn training(code: &str, validity: Option<i32>) -> Training {
        Training {
            id: Uuid::new_v4(),
            code: code.to_string(),
            title: format!("Treinamento {}", code),
            kind: TrainingKind::Training,
            description: None,
            validity_months: validity,
            created_at: Utc::now(),
        }
    }

    fn employee(name: &str, position: Option<Uuid>) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            first_name: name.to_string(),
            last_name: "Souza".to_string(),
            email: format!("{}@empresa.com", name),
            cpf: None,
            phone: None,
            birth_date: None,
            address: None,
            department_id: None,
            job_position_id: position,
            manager_id: None,
            status: EmployeeStatus::Active,
            hire_date: date(2020, 1, 1),
            salary: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn completion(employee: &Employee, training: &Training, completed_at: NaiveDate) -> EmployeeTraining {
        EmployeeTraining {
            id: Uuid::new_v4(),
            employee_id: employee.id,
            training_id: training.id,
            completed_at,
            expires_at: expiry_for(completed_at, training.validity_months),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_expiry_for() {
        assert_eq!(expiry_for(date(2024, 1, 31), Some(1)), Some(date(2024, 2, 29)));
        assert_eq!(expiry_for(date(2024, 1, 1), None), None);
        assert_eq!(expiry_for(date(2024, 1, 1), Some(0)), None);
    }

    #[test]
    fn test_matrix_percentages() {
        let today = date(2024, 6, 1);
        let position = Uuid::new_v4();
        let nr10 = training("NR10", Some(24));
        let nr35 = training("NR35", Some(12));
        let unused = training("POP-01", None);

        let ana = employee("ana", Some(position));
        let beto = employee("beto", Some(position));
        let caio = employee("caio", None);

        let completions = vec![
            completion(&ana, &nr10, date(2023, 1, 1)),
            completion(&ana, &nr35, date(2023, 1, 1)), // venció en 2024-01-01
            completion(&beto, &nr10, date(2024, 1, 1)),
        ];

        let matrix = build_matrix(
            &[nr10.clone(), nr35.clone(), unused],
            &[(position, nr10.id), (position, nr35.id)],
            &[caio, beto, ana],
            &completions,
            today,
        );

        assert_eq!(matrix.rows.len(), 3);
        let ana_row = &matrix.rows[0];
        assert_eq!(ana_row.employee_name, "ana Souza");
        assert_eq!(ana_row.cells[0].status, ComplianceStatus::Compliant);
        assert_eq!(ana_row.cells[1].status, ComplianceStatus::Expired);
        assert_eq!(ana_row.completion_percentage, 50.0);

        let beto_row = &matrix.rows[1];
        assert_eq!(beto_row.cells[1].status, ComplianceStatus::Missing);
        assert_eq!(beto_row.completion_percentage, 50.0);

        let caio_row = &matrix.rows[2];
        assert!(caio_row.cells.is_empty());
        assert_eq!(caio_row.completion_percentage, 100.0);

        assert_eq!(matrix.trainings.len(), 2);
        assert_eq!(matrix.trainings[0].code, "NR10");
        assert_eq!(matrix.trainings[0].completion_percentage, 100.0);
        assert_eq!(matrix.trainings[1].completion_percentage, 0.0);
        assert_eq!(matrix.trainings[1].required_for, 2);
        assert_eq!(matrix.overall_percentage, 50.0);
    }

    #[test]
    fn test_one_third_rounding() {
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(0, 0), 100.0);
    }
}
