//! Wire schema for the appointment backend's REST payloads.
//!
//! Field names follow the backend's camelCase JSON. Every response type is
//! lenient (`#[serde(default)]`) because prototype backends omit fields freely.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// ROLE
// =============================================================================

/// The two account audiences. Doubles as the login audience.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Patient,
    Doctor,
}

impl Role {
    /// Case-insensitive parse of a role name; unknown names are `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "patient" => Some(Self::Patient),
            "doctor" => Some(Self::Doctor),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "Patient",
            Self::Doctor => "Doctor",
        }
    }

    /// Lowercase collection segment used by the backend (`patients`, `doctors`).
    #[must_use]
    pub fn collection(self) -> &'static str {
        match self {
            Self::Patient => "patients",
            Self::Doctor => "doctors",
        }
    }

    #[must_use]
    pub fn login_path(self) -> &'static str {
        match self {
            Self::Patient => "/patient/login",
            Self::Doctor => "/doctor/login",
        }
    }

    #[must_use]
    pub fn register_path(self) -> &'static str {
        match self {
            Self::Patient => "/patient/register",
            Self::Doctor => "/doctor/register",
        }
    }

    #[must_use]
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Patient => "/patient/dashboard",
            Self::Doctor => "/doctor/dashboard",
        }
    }

    #[must_use]
    pub fn profile_path(self) -> &'static str {
        match self {
            Self::Patient => "/patient/profile",
            Self::Doctor => "/doctor/profile",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Account summary some backend versions return next to the token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountSummary {
    #[serde(deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub token: String,
    pub user: Option<AccountSummary>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRegistration {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRegistration {
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

// =============================================================================
// PROFILES
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientProfile {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub email: String,
    pub phone_number: String,
}

impl PatientProfile {
    /// `YYYY-MM-DD` prefix of the birth date for `<input type="date">`.
    #[must_use]
    pub fn date_of_birth_input(&self) -> &str {
        date_prefix(&self.date_of_birth)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DoctorProfile {
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub email: String,
    pub phone_number: String,
}

/// Doctor entry in the scheduling picker.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DoctorSummary {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
}

impl DoctorSummary {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {} - {}", self.first_name, self.last_name, self.specialization)
    }
}

// =============================================================================
// APPOINTMENTS
// =============================================================================

/// Closed status set: `0=Scheduled, 1=Completed, 2=Cancelled`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StatusWire", into = "u8")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl From<AppointmentStatus> for u8 {
    fn from(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Scheduled => 0,
            AppointmentStatus::Completed => 1,
            AppointmentStatus::Cancelled => 2,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StatusWire {
    Code(u8),
    Name(String),
}

impl TryFrom<StatusWire> for AppointmentStatus {
    type Error = String;

    fn try_from(wire: StatusWire) -> Result<Self, Self::Error> {
        match wire {
            StatusWire::Code(0) => Ok(Self::Scheduled),
            StatusWire::Code(1) => Ok(Self::Completed),
            StatusWire::Code(2) => Ok(Self::Cancelled),
            StatusWire::Code(other) => Err(format!("unknown appointment status code {other}")),
            StatusWire::Name(name) => match name.to_ascii_lowercase().as_str() {
                "scheduled" => Ok(Self::Scheduled),
                "completed" => Ok(Self::Completed),
                "cancelled" | "canceled" => Ok(Self::Cancelled),
                _ => Err(format!("unknown appointment status {name:?}")),
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonName {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Appointment {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "opt_string_or_number")]
    pub patient_id: Option<String>,
    #[serde(deserialize_with = "opt_string_or_number")]
    pub doctor_id: Option<String>,
    pub appointment_date: String,
    pub reason: String,
    pub status: AppointmentStatus,
    pub doctor_name: Option<String>,
    pub doctor_specialization: Option<String>,
    pub patient_name: Option<String>,
    pub doctor: Option<PersonName>,
    pub patient: Option<PersonName>,
}

impl Appointment {
    #[must_use]
    pub fn doctor_label(&self) -> String {
        self.doctor_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.doctor.as_ref().map(full_name))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn patient_label(&self) -> String {
        self.patient_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.patient.as_ref().map(full_name))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.status == AppointmentStatus::Scheduled
    }
}

/// `POST /api/appointments` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient_id: String,
    pub doctor_id: String,
    /// ISO-8601 UTC, e.g. `2030-01-02T09:30:00.000Z`.
    pub appointment_date: String,
    pub reason: String,
}

// =============================================================================
// HELPERS
// =============================================================================

fn full_name(name: &PersonName) -> String {
    format!("{} {}", name.first_name, name.last_name).trim().to_owned()
}

fn date_prefix(raw: &str) -> &str {
    raw.get(..10).unwrap_or(raw)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::Text(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    StringOrNumber::deserialize(de).map(String::from)
}

fn opt_string_or_number<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<StringOrNumber>::deserialize(de)?.map(String::from))
}
