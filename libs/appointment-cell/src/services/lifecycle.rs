// libs/appointment-cell/src/services/lifecycle.rs
use serde_json::json;
use tracing::debug;

use shared_api::ApiClient;
use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{ActionResponse, DoctorAppointments, FeedbackSummary, PatientAppointments};

/// Dashboard reads and appointment status changes. Every call needs the
/// session's bearer token.
pub struct AppointmentService {
    api: ApiClient,
}

impl AppointmentService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(ApiClient::new(config))
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    /// Patient view: upcoming, past (completed) and cancelled.
    pub async fn patient_appointments(&self, auth_token: &str) -> Result<PatientAppointments, AppError> {
        debug!("Fetching patient appointments");
        self.api.get("/dashboard/appointments", Some(auth_token)).await
    }

    /// Doctor view: upcoming, completed and cancelled.
    pub async fn doctor_appointments(&self, auth_token: &str) -> Result<DoctorAppointments, AppError> {
        debug!("Fetching doctor appointments");
        self.api.get("/doctor/appointments", Some(auth_token)).await
    }

    pub async fn cancel_as_patient(&self, auth_token: &str, appointment_id: i64) -> Result<ActionResponse, AppError> {
        debug!("Patient cancelling appointment {}", appointment_id);
        self.api
            .put_json(&format!("/appointments/{}/cancel", appointment_id), Some(auth_token), json!({}))
            .await
    }

    pub async fn cancel_as_doctor(&self, auth_token: &str, appointment_id: i64) -> Result<ActionResponse, AppError> {
        debug!("Doctor cancelling appointment {}", appointment_id);
        self.api
            .patch_json(&format!("/appointments/{}/cancel", appointment_id), Some(auth_token), json!({}))
            .await
    }

    pub async fn complete(&self, auth_token: &str, appointment_id: i64) -> Result<ActionResponse, AppError> {
        debug!("Marking appointment {} as completed", appointment_id);
        self.api
            .patch_json(&format!("/appointments/{}/complete", appointment_id), Some(auth_token), json!({}))
            .await
    }

    pub async fn submit_feedback(
        &self,
        auth_token: &str,
        appointment_id: i64,
        feedback: &str,
    ) -> Result<serde_json::Value, AppError> {
        debug!("Submitting feedback for appointment {}", appointment_id);
        self.api
            .put_json(
                &format!("/appointments/{}/feedback", appointment_id),
                Some(auth_token),
                json!({ "feedback": feedback }),
            )
            .await
    }

    /// AI-generated summary of the signed-in doctor's feedback.
    pub async fn feedback_summary(&self, auth_token: &str) -> Result<String, AppError> {
        debug!("Fetching feedback summary");
        let response: FeedbackSummary = self.api.get("/doctor/feedback-summary", Some(auth_token)).await?;
        Ok(response.summary)
    }
}
