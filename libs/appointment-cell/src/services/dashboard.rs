use std::collections::{HashMap, HashSet};

use tracing::{error, info, warn};

use shared_models::error::AppError;

use crate::models::{DoctorAppointments, PatientAppointments};
use crate::services::lifecycle::AppointmentService;

pub const FEEDBACK_SUMMARY_UNAVAILABLE: &str = "Unable to generate feedback summary at this time.";

/// Patient dashboard state. A failed call never discards what is shown.
#[derive(Debug, Default)]
pub struct PatientDashboard {
    appointments: PatientAppointments,
    drafts: HashMap<i64, String>,
    submitted: HashSet<i64>,
}

impl PatientDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn appointments(&self) -> &PatientAppointments {
        &self.appointments
    }

    pub async fn load(&mut self, service: &AppointmentService, auth_token: &str) -> Result<(), AppError> {
        let appointments = service.patient_appointments(auth_token).await.map_err(|e| {
            error!("Error fetching appointments: {}", e);
            e
        })?;

        info!(
            "Loaded {} upcoming, {} past, {} cancelled appointments",
            appointments.upcoming.len(),
            appointments.past.len(),
            appointments.cancelled.len()
        );
        self.appointments = appointments;
        Ok(())
    }

    /// Cancels an upcoming appointment and moves it to the cancelled list.
    pub async fn cancel(
        &mut self,
        service: &AppointmentService,
        auth_token: &str,
        appointment_id: i64,
    ) -> Result<(), AppError> {
        service.cancel_as_patient(auth_token, appointment_id).await.map_err(|e| {
            error!("Error cancelling appointment {}: {}", appointment_id, e);
            e
        })?;

        let upcoming = &mut self.appointments.upcoming;
        if let Some(pos) = upcoming.iter().position(|a| a.id == appointment_id) {
            let mut cancelled = upcoming.remove(pos);
            cancelled.is_cancelled = true;
            self.appointments.cancelled.push(cancelled);
        }

        Ok(())
    }

    pub fn set_feedback_draft(&mut self, appointment_id: i64, text: impl Into<String>) {
        self.drafts.insert(appointment_id, text.into());
    }

    pub fn feedback_draft(&self, appointment_id: i64) -> Option<&str> {
        self.drafts.get(&appointment_id).map(String::as_str)
    }

    pub fn has_submitted_feedback(&self, appointment_id: i64) -> bool {
        self.submitted.contains(&appointment_id)
    }

    /// Sends the drafted feedback for a past appointment.
    pub async fn submit_feedback(
        &mut self,
        service: &AppointmentService,
        auth_token: &str,
        appointment_id: i64,
    ) -> Result<(), AppError> {
        let feedback = self
            .drafts
            .get(&appointment_id)
            .map(|draft| draft.trim().to_string())
            .filter(|draft| !draft.is_empty())
            .ok_or_else(|| AppError::Validation("Please write your feedback before submitting.".to_string()))?;

        service
            .submit_feedback(auth_token, appointment_id, &feedback)
            .await
            .map_err(|e| {
                error!("Error submitting feedback for {}: {}", appointment_id, e);
                e
            })?;

        if let Some(appointment) = self
            .appointments
            .past
            .iter_mut()
            .find(|a| a.id == appointment_id)
        {
            appointment.feedback = Some(feedback);
        }
        self.submitted.insert(appointment_id);

        Ok(())
    }
}

/// Doctor dashboard state: appointment lists plus the feedback summary.
#[derive(Debug, Default)]
pub struct DoctorDashboard {
    appointments: DoctorAppointments,
    feedback_summary: String,
}

impl DoctorDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn appointments(&self) -> &DoctorAppointments {
        &self.appointments
    }

    pub fn feedback_summary(&self) -> &str {
        &self.feedback_summary
    }

    /// Fetches appointments and the summary concurrently. A summary failure
    /// degrades to fallback text; an appointments failure is returned after
    /// the summary has been applied.
    pub async fn load(&mut self, service: &AppointmentService, auth_token: &str) -> Result<(), AppError> {
        let (appointments, summary) = futures::join!(
            service.doctor_appointments(auth_token),
            service.feedback_summary(auth_token)
        );

        self.feedback_summary = summary.unwrap_or_else(|e| {
            warn!("Error fetching feedback summary: {}", e);
            FEEDBACK_SUMMARY_UNAVAILABLE.to_string()
        });

        match appointments {
            Ok(appointments) => {
                self.appointments = appointments;
                Ok(())
            }
            Err(e) => {
                error!("Error fetching appointments: {}", e);
                Err(e)
            }
        }
    }

    pub async fn cancel(
        &mut self,
        service: &AppointmentService,
        auth_token: &str,
        appointment_id: i64,
    ) -> Result<(), AppError> {
        service.cancel_as_doctor(auth_token, appointment_id).await.map_err(|e| {
            error!("Error cancelling appointment {}: {}", appointment_id, e);
            e
        })?;

        let upcoming = &mut self.appointments.upcoming;
        if let Some(pos) = upcoming.iter().position(|a| a.id == appointment_id) {
            let mut cancelled = upcoming.remove(pos);
            cancelled.is_cancelled = true;
            self.appointments.cancelled.push(cancelled);
        }

        Ok(())
    }

    pub async fn complete(
        &mut self,
        service: &AppointmentService,
        auth_token: &str,
        appointment_id: i64,
    ) -> Result<(), AppError> {
        service.complete(auth_token, appointment_id).await.map_err(|e| {
            error!("Error marking appointment {} as completed: {}", appointment_id, e);
            e
        })?;

        let upcoming = &mut self.appointments.upcoming;
        if let Some(pos) = upcoming.iter().position(|a| a.id == appointment_id) {
            let mut completed = upcoming.remove(pos);
            completed.is_completed = true;
            self.appointments.completed.push(completed);
        }

        Ok(())
    }
}
