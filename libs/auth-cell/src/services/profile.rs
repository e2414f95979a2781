use serde_json::{json, Value};
use tracing::debug;

use shared_api::ApiClient;
use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{DoctorProfileForm, PatientProfileForm};
use crate::router::Route;

const MISSING_USER_ID: &str = "User ID is missing. Please register first.";

/// Completes registration with the role-specific profile.
pub struct ProfileService {
    api: ApiClient,
}

impl ProfileService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(ApiClient::new(config))
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    /// On success the user is sent to sign in.
    pub async fn submit_patient_profile(
        &self,
        user_id: Option<i64>,
        form: &PatientProfileForm,
    ) -> Result<Route, AppError> {
        let user_id = user_id.ok_or_else(|| AppError::Validation(MISSING_USER_ID.to_string()))?;
        debug!("Submitting patient profile for user {}", user_id);

        let body = json!({
            "user_id": user_id,
            "age": form.age,
            "gender": form.gender,
            "address": form.address,
        });

        let _: Value = self.api.post_json("/patient-profile", None, body).await?;
        Ok(Route::Login)
    }

    pub async fn submit_doctor_profile(
        &self,
        user_id: Option<i64>,
        form: &DoctorProfileForm,
    ) -> Result<Route, AppError> {
        let user_id = user_id.ok_or_else(|| AppError::Validation(MISSING_USER_ID.to_string()))?;
        debug!("Submitting doctor profile for user {}", user_id);

        let body = json!({
            "user_id": user_id,
            "specialization": form.specialization,
            "experience": form.experience,
            "qualification": form.qualification,
            "address": form.address,
        });

        let _: Value = self.api.post_json("/doctor-profile", None, body).await?;
        Ok(Route::Login)
    }
}
