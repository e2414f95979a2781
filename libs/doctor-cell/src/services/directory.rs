use async_trait::async_trait;
use tracing::{debug, error, info};

use shared_models::error::AppError;

use crate::models::{DoctorRecord, RefinementCriteria, SortOption};
use crate::services::refinement::refine;

pub const RECOMMENDATION_FAILED: &str = "Failed to get a recommendation. Please try again later.";

/// Text shown when a recommendation fails. Only local validation (blank
/// symptoms) gets its own message; every remote failure reads the same.
pub fn recommendation_failure_message(err: &AppError) -> String {
    error!("Recommendation failed: {}", err);
    match err {
        AppError::Validation(msg) if !msg.is_empty() => msg.clone(),
        _ => RECOMMENDATION_FAILED.to_string(),
    }
}

/// Where the directory gets its doctors from.
#[async_trait]
pub trait DoctorSource: Send + Sync {
    async fn fetch_doctors(&self) -> Result<Vec<DoctorRecord>, AppError>;
    async fn recommend(&self, symptoms: &str) -> Result<Vec<DoctorRecord>, AppError>;
}

/// Doctor list state: the full list fetched once, the user's refinement
/// criteria, and what is currently displayed.
///
/// The displayed list is either `refine(full_list, criteria)` or, right after a
/// successful recommendation, the recommendation result verbatim. Changing any
/// criterion drops the recommendation and re-derives from the full list.
#[derive(Debug, Default)]
pub struct DoctorDirectory {
    full_list: Vec<DoctorRecord>,
    criteria: RefinementCriteria,
    displayed: Vec<DoctorRecord>,
    recommendation_active: bool,
}

impl DoctorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the directory with an already fetched list.
    pub fn with_doctors(full_list: Vec<DoctorRecord>) -> Self {
        let mut directory = Self {
            full_list,
            ..Self::default()
        };
        directory.recompute();
        directory
    }

    /// Fetches the full list once. On failure the directory stays empty and
    /// the error is returned; there is no retry.
    pub async fn load<S: DoctorSource + ?Sized>(&mut self, source: &S) -> Result<(), AppError> {
        match source.fetch_doctors().await {
            Ok(doctors) => {
                info!("Loaded {} doctors", doctors.len());
                self.full_list = doctors;
                self.recompute();
                Ok(())
            }
            Err(e) => {
                error!("Error fetching doctors: {}", e);
                Err(e)
            }
        }
    }

    pub fn full_list(&self) -> &[DoctorRecord] {
        &self.full_list
    }

    pub fn displayed(&self) -> &[DoctorRecord] {
        &self.displayed
    }

    pub fn criteria(&self) -> &RefinementCriteria {
        &self.criteria
    }

    pub fn is_recommendation_active(&self) -> bool {
        self.recommendation_active
    }

    pub fn heading(&self) -> &'static str {
        if self.recommendation_active {
            "AI Recommended Doctors"
        } else {
            "Available Doctors"
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.criteria.search_query = query.into();
        self.recompute();
    }

    pub fn set_specialization(&mut self, specialization: impl Into<String>) {
        self.criteria.specialization = specialization.into();
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.criteria.sort = sort;
        self.recompute();
    }

    /// Replaces the displayed list wholesale with a recommendation result.
    pub fn apply_recommendation(&mut self, recommended: Vec<DoctorRecord>) {
        debug!("Showing {} recommended doctors", recommended.len());
        self.displayed = recommended;
        self.recommendation_active = true;
    }

    /// Asks the source for a recommendation. A failure leaves the displayed
    /// list untouched.
    pub async fn recommend<S: DoctorSource + ?Sized>(
        &mut self,
        source: &S,
        symptoms: &str,
    ) -> Result<(), AppError> {
        let recommended = source.recommend(symptoms).await.map_err(|e| {
            error!("Error fetching recommendation: {}", e);
            e
        })?;

        self.apply_recommendation(recommended);
        Ok(())
    }

    fn recompute(&mut self) {
        self.recommendation_active = false;
        self.displayed = refine(&self.full_list, &self.criteria);
    }
}
