use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use auth_cell::models::{DoctorProfileForm, PatientProfileForm};
use auth_cell::{ProfileService, Route};
use shared_models::error::AppError;
use shared_utils::test_utils::TestConfig;

fn patient_form() -> PatientProfileForm {
    PatientProfileForm {
        age: 34,
        gender: "female".to_string(),
        address: "12 Elm Road".to_string(),
    }
}

#[tokio::test]
async fn test_missing_user_id_skips_the_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/patient-profile"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let service = ProfileService::new(&TestConfig::for_server(&mock_server.uri()).to_app_config());
    let err = service.submit_patient_profile(None, &patient_form()).await.unwrap_err();

    assert_matches!(err, AppError::Validation(ref msg) if msg == "User ID is missing. Please register first.");
}

#[tokio::test]
async fn test_patient_profile_links_user_and_returns_to_login() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/patient-profile"))
        .and(body_json(json!({
            "user_id": 9,
            "age": 34,
            "gender": "female",
            "address": "12 Elm Road"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "user_id": 9, "age": 34, "gender": "female", "address": "12 Elm Road"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = ProfileService::new(&TestConfig::for_server(&mock_server.uri()).to_app_config());
    let next = service.submit_patient_profile(Some(9), &patient_form()).await.unwrap();

    assert_eq!(next, Route::Login);
}

#[tokio::test]
async fn test_doctor_profile_surfaces_server_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/doctor-profile"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Doctor profile already exists for this user"
        })))
        .mount(&mock_server)
        .await;

    let service = ProfileService::new(&TestConfig::for_server(&mock_server.uri()).to_app_config());
    let form = DoctorProfileForm {
        specialization: "Dentist".to_string(),
        experience: 4,
        qualification: "BDS".to_string(),
        address: "1 Harbour St".to_string(),
    };

    let err = service.submit_doctor_profile(Some(3), &form).await.unwrap_err();

    assert_eq!(
        err.user_message("Failed to save doctor profile."),
        "Doctor profile already exists for this user"
    );
}
