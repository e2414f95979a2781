use assert_matches::assert_matches;
use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::{BookingForm, BookingService};
use shared_models::error::AppError;
use shared_utils::test_utils::{TestConfig, TestSession};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 10).unwrap()
}

fn form(date: &str, time: &str, reason: &str) -> BookingForm {
    BookingForm {
        date: date.to_string(),
        time: time.to_string(),
        reason: reason.to_string(),
    }
}

#[tokio::test]
async fn test_book_posts_combined_datetime() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/appointment"))
        .and(header("authorization", "Bearer patient-test-token"))
        .and(body_json(json!({
            "doctor_id": 102,
            "appointment_datetime": "2030-01-15T10:30:00",
            "reason": "Chest pain"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 11 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = BookingService::new(&TestConfig::for_server(&mock_server.uri()).to_app_config());
    let request = service
        .book(TestSession::PATIENT_TOKEN, 102, &form("2030-01-15", "10:30", "Chest pain"), today())
        .await
        .unwrap();

    assert_eq!(request.doctor_id, 102);
}

#[tokio::test]
async fn test_invalid_form_is_not_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/appointment"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let service = BookingService::new(&TestConfig::for_server(&mock_server.uri()).to_app_config());
    let err = service
        .book(TestSession::PATIENT_TOKEN, 102, &form("2030-01-10", "10:30", "Chest pain"), today())
        .await
        .unwrap_err();

    assert_matches!(err, AppError::Validation(msg) if msg.contains("tomorrow"));
}

#[tokio::test]
async fn test_server_rejection_surfaces_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/appointment"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "detail": "Doctor is not available at that time" })),
        )
        .mount(&mock_server)
        .await;

    let service = BookingService::new(&TestConfig::for_server(&mock_server.uri()).to_app_config());
    let err = service
        .book(TestSession::PATIENT_TOKEN, 102, &form("2030-01-15", "10:30", "Chest pain"), today())
        .await
        .unwrap_err();

    assert_eq!(
        err.user_message("Failed to book appointment."),
        "Doctor is not available at that time"
    );
}
