use std::sync::Mutex;

use assert_matches::assert_matches;
use async_trait::async_trait;

use doctor_cell::{
    recommendation_failure_message, DoctorDirectory, DoctorRecord, DoctorSource, SortOption,
    RECOMMENDATION_FAILED,
};
use shared_models::error::AppError;

fn doctor(id: i64, username: &str, specialization: &str, experience: i32) -> DoctorRecord {
    DoctorRecord {
        id,
        user_id: id + 100,
        username: username.to_string(),
        specialization: specialization.to_string(),
        experience,
        address: format!("{} Main Street", id),
        qualification: Some("MBBS".to_string()),
    }
}

fn amy() -> DoctorRecord {
    doctor(1, "amy", "Dentist", 5)
}

fn bob() -> DoctorRecord {
    doctor(2, "bob", "Cardiologist", 10)
}

/// Scripted source: returns the configured results and counts calls.
struct FakeSource {
    doctors: Result<Vec<DoctorRecord>, String>,
    recommendation: Result<Vec<DoctorRecord>, String>,
    fetches: Mutex<usize>,
}

impl FakeSource {
    fn new(doctors: Vec<DoctorRecord>, recommendation: Vec<DoctorRecord>) -> Self {
        Self {
            doctors: Ok(doctors),
            recommendation: Ok(recommendation),
            fetches: Mutex::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            doctors: Err("connection refused".to_string()),
            recommendation: Err("upstream unavailable".to_string()),
            fetches: Mutex::new(0),
        }
    }
}

#[async_trait]
impl DoctorSource for FakeSource {
    async fn fetch_doctors(&self) -> Result<Vec<DoctorRecord>, AppError> {
        *self.fetches.lock().unwrap() += 1;
        self.doctors.clone().map_err(AppError::Network)
    }

    async fn recommend(&self, _symptoms: &str) -> Result<Vec<DoctorRecord>, AppError> {
        self.recommendation
            .clone()
            .map_err(|message| AppError::Api { status: 500, message })
    }
}

#[tokio::test]
async fn test_load_displays_full_list() {
    let source = FakeSource::new(vec![amy(), bob()], vec![]);
    let mut directory = DoctorDirectory::new();

    directory.load(&source).await.unwrap();

    assert_eq!(directory.full_list(), &[amy(), bob()]);
    assert_eq!(directory.displayed(), &[amy(), bob()]);
    assert_eq!(directory.heading(), "Available Doctors");
}

#[tokio::test]
async fn test_failed_load_leaves_directory_empty_without_retry() {
    let source = FakeSource::failing();
    let mut directory = DoctorDirectory::new();

    let err = directory.load(&source).await.unwrap_err();

    assert_matches!(err, AppError::Network(_));
    assert!(directory.full_list().is_empty());
    assert!(directory.displayed().is_empty());
    assert_eq!(*source.fetches.lock().unwrap(), 1);
}

#[test]
fn test_sort_by_experience_scenario() {
    let mut directory = DoctorDirectory::with_doctors(vec![amy(), bob()]);

    directory.set_sort(SortOption::Experience);

    assert_eq!(directory.displayed(), &[bob(), amy()]);
}

#[tokio::test]
async fn test_recommendation_overrides_until_search_changes() {
    let source = FakeSource::new(vec![amy(), bob()], vec![amy()]);
    let mut directory = DoctorDirectory::new();
    directory.load(&source).await.unwrap();

    directory.recommend(&source, "tooth pain").await.unwrap();

    assert_eq!(directory.displayed(), &[amy()]);
    assert!(directory.is_recommendation_active());
    assert_eq!(directory.heading(), "AI Recommended Doctors");

    directory.set_search_query("bob");

    assert_eq!(directory.displayed(), &[bob()]);
    assert!(!directory.is_recommendation_active());
}

#[test]
fn test_recommendation_bypasses_existing_criteria() {
    let mut directory = DoctorDirectory::with_doctors(vec![amy(), bob()]);
    directory.set_specialization("Cardiologist");
    assert_eq!(directory.displayed(), &[bob()]);

    let outside_filter = doctor(9, "zed", "Dermatologist", 1);
    directory.apply_recommendation(vec![outside_filter.clone()]);
    assert_eq!(directory.displayed(), &[outside_filter]);

    // Re-selecting the same value still counts as an interaction.
    directory.set_specialization("Cardiologist");
    assert_eq!(directory.displayed(), &[bob()]);
    assert!(!directory.is_recommendation_active());
}

#[test]
fn test_sort_and_filter_changes_clear_override() {
    let mut directory = DoctorDirectory::with_doctors(vec![amy(), bob()]);

    directory.apply_recommendation(vec![amy()]);
    directory.set_sort(SortOption::Name);
    assert!(!directory.is_recommendation_active());
    assert_eq!(directory.displayed(), &[amy(), bob()]);

    directory.apply_recommendation(vec![bob()]);
    directory.set_specialization("");
    assert!(!directory.is_recommendation_active());
    assert_eq!(directory.displayed(), &[amy(), bob()]);
}

#[tokio::test]
async fn test_failed_recommendation_keeps_current_list() {
    let working = FakeSource::new(vec![amy(), bob()], vec![]);
    let mut directory = DoctorDirectory::new();
    directory.load(&working).await.unwrap();
    directory.set_sort(SortOption::Experience);

    let err = directory.recommend(&FakeSource::failing(), "fever").await.unwrap_err();

    assert_eq!(
        recommendation_failure_message(&err),
        "Failed to get a recommendation. Please try again later."
    );
    assert_eq!(directory.displayed(), &[bob(), amy()]);
    assert!(!directory.is_recommendation_active());
}

#[test]
fn test_full_list_is_never_reordered() {
    let mut directory = DoctorDirectory::with_doctors(vec![amy(), bob()]);

    directory.set_sort(SortOption::Experience);
    directory.set_search_query("o");

    assert_eq!(directory.full_list(), &[amy(), bob()]);
    assert_eq!(directory.criteria().search_query, "o");
}

#[test]
fn test_recommendation_failure_hides_server_detail() {
    let rejected = AppError::BadRequest("symptoms field too long".to_string());
    let missing = AppError::NotFound("No matching doctors".to_string());
    let blank = AppError::Validation("Please describe your symptoms first.".to_string());

    assert_eq!(recommendation_failure_message(&rejected), RECOMMENDATION_FAILED);
    assert_eq!(recommendation_failure_message(&missing), RECOMMENDATION_FAILED);
    assert_eq!(
        recommendation_failure_message(&blank),
        "Please describe your symptoms first."
    );
}
