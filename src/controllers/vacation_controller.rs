use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::dto::vacation_dto::{CreateVacationRequest, ExpiringVacation, PreviewPeriodsRequest, RecordAbsenceRequest};
use crate::dto::ApiResponse;
use crate::models::employee::Employee;
use crate::models::vacation::{EmployeeAbsence, VacationPeriod, VacationRequest, VacationRequestStatus};
use crate::repositories::{EmployeeRepository, VacationRepository};
use crate::services::vacation_calculator::{
    compute_periods, validate_booking, BookingRequest, VacationError, VacationPolicy,
};
use crate::utils::errors::{not_found_error, AppResult};

/// Períodos de un colaborador; una admisión futura no tiene períodos todavía
pub fn employee_periods(
    employee: &Employee,
    bookings: &[VacationRequest],
    unjustified_absences: &[NaiveDate],
    today: NaiveDate,
    policy: &VacationPolicy,
) -> AppResult<Vec<VacationPeriod>> {
    match compute_periods(employee.hire_date, today, bookings, unjustified_absences, policy) {
        Ok(periods) => Ok(periods),
        Err(VacationError::HireDateInFuture(_)) => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

fn unjustified_dates(absences: &[EmployeeAbsence]) -> Vec<NaiveDate> {
    absences.iter().filter(|a| !a.justified).map(|a| a.absence_date).collect()
}

pub struct VacationController {
    employees: Arc<dyn EmployeeRepository>,
    vacations: Arc<dyn VacationRepository>,
    policy: VacationPolicy,
}

impl VacationController {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        vacations: Arc<dyn VacationRepository>,
        policy: VacationPolicy,
    ) -> Self {
        Self {
            employees,
            vacations,
            policy,
        }
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    async fn find_employee(&self, id: Uuid) -> AppResult<Employee> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Employee", &id.to_string()))
    }

    async fn periods_for(&self, employee: &Employee, today: NaiveDate) -> AppResult<(Vec<VacationPeriod>, Vec<VacationRequest>)> {
        let (bookings, absences) = futures::try_join!(
            self.vacations.bookings_for(employee.id),
            self.vacations.absences_for(employee.id)
        )?;
        let periods = employee_periods(employee, &bookings, &unjustified_dates(&absences), today, &self.policy)?;
        Ok((periods, bookings))
    }

    pub async fn periods(&self, employee_id: Uuid) -> AppResult<ApiResponse<Vec<VacationPeriod>>> {
        let employee = self.find_employee(employee_id).await?;
        let (periods, _) = self.periods_for(&employee, Self::today()).await?;
        Ok(ApiResponse::success(periods))
    }

    /// Simulación sin colaborador ni programaciones
    pub fn preview(&self, request: PreviewPeriodsRequest) -> AppResult<ApiResponse<Vec<VacationPeriod>>> {
        let today = request.today.unwrap_or_else(Self::today);
        let periods = compute_periods(request.hire_date, today, &[], &[], &self.policy)?;
        Ok(ApiResponse::success(periods))
    }

    pub async fn list_bookings(&self, employee_id: Uuid) -> AppResult<ApiResponse<Vec<VacationRequest>>> {
        self.find_employee(employee_id).await?;
        Ok(ApiResponse::success(self.vacations.bookings_for(employee_id).await?))
    }

    pub async fn create_booking(
        &self,
        employee_id: Uuid,
        request: CreateVacationRequest,
    ) -> AppResult<ApiResponse<VacationRequest>> {
        request.validate()?;
        let employee = self.find_employee(employee_id).await?;
        let (periods, bookings) = self.periods_for(&employee, Self::today()).await?;

        let booking = BookingRequest {
            period_number: request.period_number,
            start_date: request.start_date,
            days: request.days,
            sold_days: request.sold_days,
        };
        validate_booking(&periods, &bookings, &booking)?;

        let saved = self
            .vacations
            .create_booking(&VacationRequest {
                id: Uuid::new_v4(),
                employee_id,
                period_number: booking.period_number,
                start_date: booking.start_date,
                days: booking.days,
                sold_days: booking.sold_days,
                status: VacationRequestStatus::Scheduled,
                created_at: Utc::now(),
            })
            .await?;

        info!(
            "🏖️ Férias programadas para {}: {} días desde {} (período {})",
            employee_id, saved.days, saved.start_date, saved.period_number
        );
        Ok(ApiResponse::success_with_message(saved, "Férias programadas"))
    }

    pub async fn cancel_booking(&self, id: Uuid) -> AppResult<ApiResponse<VacationRequest>> {
        let canceled = self
            .vacations
            .cancel_booking(id)
            .await?
            .ok_or_else(|| not_found_error("VacationRequest", &id.to_string()))?;
        Ok(ApiResponse::success_with_message(canceled, "Programación cancelada"))
    }

    /// Colaboradores activos con algún concessivo a vencer
    pub async fn expiring(&self) -> AppResult<ApiResponse<Vec<ExpiringVacation>>> {
        let today = Self::today();
        let (employees, bookings, absences) = futures::try_join!(
            self.employees.list_current(),
            self.vacations.all_active_bookings(),
            self.vacations.all_unjustified_absences()
        )?;

        let mut bookings_by_employee: HashMap<Uuid, Vec<VacationRequest>> = HashMap::new();
        for booking in bookings {
            bookings_by_employee.entry(booking.employee_id).or_default().push(booking);
        }
        let mut absences_by_employee: HashMap<Uuid, Vec<NaiveDate>> = HashMap::new();
        for (employee_id, date) in absences {
            absences_by_employee.entry(employee_id).or_default().push(date);
        }

        let mut expiring = Vec::new();
        for employee in &employees {
            let bookings = bookings_by_employee.get(&employee.id).map(Vec::as_slice).unwrap_or(&[]);
            let absences = absences_by_employee.get(&employee.id).map(Vec::as_slice).unwrap_or(&[]);

            let periods = employee_periods(employee, bookings, absences, today, &self.policy)?;
            expiring.extend(periods.into_iter().filter(|p| p.is_expiring).map(|period| ExpiringVacation {
                employee_id: employee.id,
                employee_name: employee.full_name(),
                department_id: employee.department_id,
                period,
            }));
        }

        expiring.sort_by(|a, b| {
            a.period
                .concession_end
                .cmp(&b.period.concession_end)
                .then_with(|| a.employee_name.cmp(&b.employee_name))
        });

        debug!("⏰ {} períodos a vencer de {} colaboradores", expiring.len(), employees.len());
        Ok(ApiResponse::success(expiring))
    }

    pub async fn list_absences(&self, employee_id: Uuid) -> AppResult<ApiResponse<Vec<EmployeeAbsence>>> {
        self.find_employee(employee_id).await?;
        Ok(ApiResponse::success(self.vacations.absences_for(employee_id).await?))
    }

    pub async fn record_absence(
        &self,
        employee_id: Uuid,
        request: RecordAbsenceRequest,
    ) -> AppResult<ApiResponse<EmployeeAbsence>> {
        request.validate()?;
        self.find_employee(employee_id).await?;

        let saved = self
            .vacations
            .record_absence(&EmployeeAbsence {
                id: Uuid::new_v4(),
                employee_id,
                absence_date: request.absence_date,
                justified: request.justified,
                reason: request.reason,
                created_at: Utc::now(),
            })
            .await?;
        Ok(ApiResponse::success_with_message(saved, "Falta registrada"))
    }
}
