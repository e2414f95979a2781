use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use shared_api::ApiClient;
use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{DoctorDetail, DoctorFeedback, DoctorRecord, RecommendationResponse};
use crate::services::directory::DoctorSource;

pub struct DoctorService {
    api: ApiClient,
}

impl DoctorService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(ApiClient::new(config))
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    /// Get every listed doctor
    pub async fn list_doctors(&self) -> Result<Vec<DoctorRecord>, AppError> {
        debug!("Fetching doctor list");
        self.api.get("/doctors", None).await
    }

    /// Get doctor by user id
    pub async fn get_doctor(&self, doctor_id: i64) -> Result<DoctorRecord, AppError> {
        debug!("Fetching doctor profile: {}", doctor_id);
        self.api.get(&format!("/doctors/{}", doctor_id), None).await
    }

    /// Get feedback patients left for a doctor
    pub async fn get_feedbacks(&self, doctor_id: i64) -> Result<Vec<DoctorFeedback>, AppError> {
        debug!("Fetching feedbacks for doctor: {}", doctor_id);
        self.api
            .get(&format!("/api/doctors/{}/feedbacks", doctor_id), None)
            .await
    }

    /// Fetches the doctor and their feedback concurrently. Missing feedback
    /// does not fail the page.
    pub async fn get_detail(&self, doctor_id: i64) -> Result<DoctorDetail, AppError> {
        let (doctor, feedbacks) =
            futures::join!(self.get_doctor(doctor_id), self.get_feedbacks(doctor_id));

        let feedbacks = feedbacks.unwrap_or_else(|e| {
            warn!("Error fetching feedbacks for doctor {}: {}", doctor_id, e);
            Vec::new()
        });

        Ok(DoctorDetail {
            doctor: doctor?,
            feedbacks,
        })
    }

    /// Ask the recommendation endpoint which doctors fit the symptoms
    pub async fn recommend_doctors(&self, symptoms: &str) -> Result<Vec<DoctorRecord>, AppError> {
        if symptoms.trim().is_empty() {
            return Err(AppError::Validation(
                "Please describe your symptoms first.".to_string(),
            ));
        }

        debug!("Requesting doctor recommendation");
        let response: RecommendationResponse = self
            .api
            .post_json("/recommend-doctor", None, json!({ "symptoms": symptoms }))
            .await?;

        Ok(response.doctors)
    }
}

#[async_trait]
impl DoctorSource for DoctorService {
    async fn fetch_doctors(&self) -> Result<Vec<DoctorRecord>, AppError> {
        self.list_doctors().await
    }

    async fn recommend(&self, symptoms: &str) -> Result<Vec<DoctorRecord>, AppError> {
        self.recommend_doctors(symptoms).await
    }
}
