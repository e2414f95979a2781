// libs/appointment-cell/src/services/booking.rs
use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, info};

use shared_api::ApiClient;
use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{BookAppointmentRequest, BookingForm};

pub struct BookingService {
    api: ApiClient,
}

impl BookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(ApiClient::new(config))
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    /// Book an appointment with the doctor whose user id is `doctor_id`.
    /// The form is validated before anything is sent.
    pub async fn book(
        &self,
        auth_token: &str,
        doctor_id: i64,
        form: &BookingForm,
        today: NaiveDate,
    ) -> Result<BookAppointmentRequest, AppError> {
        let request = form.to_request(doctor_id, today)?;
        debug!(
            "Booking appointment with doctor {} at {}",
            doctor_id, request.appointment_datetime
        );

        let body = serde_json::to_value(&request)?;
        let _: Value = self.api.post_json("/appointment", Some(auth_token), body).await?;

        info!("Appointment booked with doctor {}", doctor_id);
        Ok(request)
    }
}
