//! Appointment list and schedule-form state for the dashboards.
//!
//! The list is reloaded from the backend after every mutation; whichever
//! response lands last is what the page shows.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use chrono::{DateTime, Utc};

use crate::net::error::{ApiError, ErrorOutcome};
use crate::net::types::{Appointment, DoctorSummary, NewAppointment, Role};
use crate::util::datetime;

pub const MISSING_FIELDS: &str = "All fields are required";
pub const DATE_NOT_IN_FUTURE: &str = "Appointment date must be in the future";
pub const INVALID_DATE: &str = "Enter a valid appointment date";

/// An action the current visitor may take on one appointment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppointmentAction {
    Cancel,
    Complete,
}

impl AppointmentAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cancel => "Cancel",
            Self::Complete => "Complete",
        }
    }

    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Cancel => "Appointment cancelled",
            Self::Complete => "Appointment marked completed",
        }
    }

    /// Actions offered to `viewer` for `appointment`. Only scheduled visits
    /// can change; completing is a doctor action.
    #[must_use]
    pub fn available(appointment: &Appointment, viewer: Role) -> Vec<Self> {
        if !appointment.is_scheduled() {
            return Vec::new();
        }
        match viewer {
            Role::Patient => vec![Self::Cancel],
            Role::Doctor => vec![Self::Complete, Self::Cancel],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppointmentsState {
    pub items: Vec<Appointment>,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    /// Appointment id with a cancel/complete request in flight.
    pub pending: Option<String>,
}

impl AppointmentsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a list response. Returns a redirect target for a 401.
    pub fn finish_load(&mut self, result: Result<Vec<Appointment>, ApiError>, viewer: Role) -> Option<&'static str> {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                None
            }
            Err(err) => self.fail(&err, viewer, "Failed to load appointments"),
        }
    }

    pub fn begin_action(&mut self, id: &str) {
        self.pending = Some(id.to_owned());
        self.error = None;
        self.notice = None;
    }

    /// Apply a cancel/complete response. The caller reloads on success.
    pub fn finish_action(
        &mut self,
        action: AppointmentAction,
        result: Result<(), ApiError>,
        viewer: Role,
    ) -> Option<&'static str> {
        self.pending = None;
        match result {
            Ok(()) => {
                self.notice = Some(action.success_message().to_owned());
                None
            }
            Err(err) => {
                let fallback = match action {
                    AppointmentAction::Cancel => "Failed to cancel appointment",
                    AppointmentAction::Complete => "Failed to complete appointment",
                };
                self.fail(&err, viewer, fallback)
            }
        }
    }

    fn fail(&mut self, err: &ApiError, viewer: Role, fallback: &str) -> Option<&'static str> {
        leptos::logging::warn!("appointments: {err}");
        match err.outcome(viewer, fallback) {
            ErrorOutcome::Redirect(to) => Some(to),
            ErrorOutcome::Inline(message) => {
                self.error = Some(message);
                None
            }
        }
    }
}

/// Patient schedule form. `doctors_failed` switches the doctor picker to a
/// free-text id field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScheduleForm {
    pub doctor_id: String,
    pub appointment_date: String,
    pub reason: String,
    pub doctors: Vec<DoctorSummary>,
    pub doctors_failed: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl ScheduleForm {
    pub fn set_doctors(&mut self, result: Result<Vec<DoctorSummary>, ApiError>) {
        match result {
            Ok(doctors) => {
                self.doctors = doctors;
                self.doctors_failed = false;
            }
            Err(err) => {
                leptos::logging::warn!("appointments: doctor list unavailable: {err}");
                self.doctors.clear();
                self.doctors_failed = true;
            }
        }
    }

    pub fn reset(&mut self) {
        self.doctor_id.clear();
        self.appointment_date.clear();
        self.reason.clear();
        self.error = None;
    }

    /// Build the request body, or the inline message to show instead.
    ///
    /// # Errors
    ///
    /// See [`validate_schedule`].
    pub fn to_request(&self, patient_id: &str, now: DateTime<Utc>) -> Result<NewAppointment, &'static str> {
        validate_schedule(&self.doctor_id, &self.appointment_date, &self.reason, patient_id, now)
    }
}

/// Validate the schedule form locally, before any network call.
///
/// # Errors
///
/// [`MISSING_FIELDS`] when any field is blank, [`INVALID_DATE`] when the date
/// does not parse, [`DATE_NOT_IN_FUTURE`] unless the date is after `now`.
pub fn validate_schedule(
    doctor_id: &str,
    appointment_date: &str,
    reason: &str,
    patient_id: &str,
    now: DateTime<Utc>,
) -> Result<NewAppointment, &'static str> {
    let (doctor_id, appointment_date, reason) = (doctor_id.trim(), appointment_date.trim(), reason.trim());
    if doctor_id.is_empty() || appointment_date.is_empty() || reason.is_empty() || patient_id.is_empty() {
        return Err(MISSING_FIELDS);
    }
    let at = datetime::parse_utc(appointment_date).ok_or(INVALID_DATE)?;
    if at <= now {
        return Err(DATE_NOT_IN_FUTURE);
    }
    Ok(NewAppointment {
        patient_id: patient_id.to_owned(),
        doctor_id: doctor_id.to_owned(),
        appointment_date: datetime::to_iso_utc(at),
        reason: reason.to_owned(),
    })
}
