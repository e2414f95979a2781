use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::error::AppError;

/// Raw booking form input: `YYYY-MM-DD`, `HH:MM`, free text.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    pub date: String,
    pub time: String,
    pub reason: String,
}

impl BookingForm {
    /// Validates the form against `today` and builds the request body.
    /// Bookings open from tomorrow.
    pub fn to_request(&self, doctor_id: i64, today: NaiveDate) -> Result<BookAppointmentRequest, BookingError> {
        let reason = self.reason.trim();
        if reason.is_empty() {
            return Err(BookingError::MissingReason);
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| BookingError::InvalidDate(self.date.clone()))?;

        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(self.time.trim(), "%H:%M:%S"))
            .map_err(|_| BookingError::InvalidTime(self.time.clone()))?;

        if date <= today {
            return Err(BookingError::DateNotInFuture);
        }

        Ok(BookAppointmentRequest {
            doctor_id,
            appointment_datetime: date.and_time(time),
            reason: reason.to_string(),
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Please give a reason for the appointment.")]
    MissingReason,

    #[error("Invalid appointment date: {0}")]
    InvalidDate(String),

    #[error("Invalid appointment time: {0}")]
    InvalidTime(String),

    #[error("Appointments can be booked from tomorrow onwards.")]
    DateNotInFuture,
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError::Validation(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookAppointmentRequest {
    pub doctor_id: i64,
    pub appointment_datetime: NaiveDateTime,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientAppointment {
    pub id: i64,
    pub doctor_id: i64,
    pub doctor_name: String,
    pub appointment_datetime: NaiveDateTime,
    pub reason: String,
    #[serde(rename = "isCompleted", default)]
    pub is_completed: bool,
    #[serde(default)]
    pub feedback: Option<String>,
    /// Set locally when cancelled from this dashboard.
    #[serde(skip)]
    pub is_cancelled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientAppointments {
    #[serde(default)]
    pub upcoming: Vec<PatientAppointment>,
    #[serde(default)]
    pub past: Vec<PatientAppointment>,
    #[serde(default)]
    pub cancelled: Vec<PatientAppointment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorAppointment {
    pub id: i64,
    pub patient_name: String,
    pub appointment_datetime: NaiveDateTime,
    pub reason: String,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(skip)]
    pub is_cancelled: bool,
    #[serde(skip)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorAppointments {
    #[serde(default)]
    pub upcoming: Vec<DoctorAppointment>,
    #[serde(default)]
    pub completed: Vec<DoctorAppointment>,
    #[serde(default)]
    pub cancelled: Vec<DoctorAppointment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackSummary {
    pub summary: String,
}

/// `{"message": ...}` acknowledgement returned by status changes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub message: String,
}
