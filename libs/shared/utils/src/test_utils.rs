use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::auth::{Role, Session};

pub struct TestConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            request_timeout_ms: 2000,
        }
    }
}

impl TestConfig {
    pub fn for_server(uri: &str) -> Self {
        Self {
            api_base_url: uri.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            api_base_url: self.api_base_url.clone(),
            request_timeout_ms: self.request_timeout_ms,
            ..AppConfig::default()
        }
    }
}

pub struct TestSession;

impl TestSession {
    pub const PATIENT_TOKEN: &'static str = "patient-test-token";
    pub const DOCTOR_TOKEN: &'static str = "doctor-test-token";

    pub fn patient() -> Session {
        Session::new(Self::PATIENT_TOKEN, Role::Patient)
    }

    pub fn doctor() -> Session {
        Session::new(Self::DOCTOR_TOKEN, Role::Doctor)
    }
}

/// Canned API payloads shaped like the booking server's responses.
pub struct MockApiResponses;

impl MockApiResponses {
    pub fn doctor(id: i64, username: &str, specialization: &str, experience: i32) -> Value {
        json!({
            "id": id,
            "user_id": id + 100,
            "username": username,
            "specialization": specialization,
            "experience": experience,
            "qualification": "MBBS",
            "address": format!("{} Main Street", id)
        })
    }

    pub fn doctor_list() -> Value {
        json!([
            Self::doctor(1, "amy", "Dentist", 5),
            Self::doctor(2, "bob", "Cardiologist", 10),
            Self::doctor(3, "carol", "Dentist", 7),
        ])
    }

    pub fn token_response(token: &str, role: &str) -> Value {
        json!({
            "access_token": token,
            "token_type": "bearer",
            "role": role
        })
    }

    pub fn user_response(id: i64, username: &str, role: &str) -> Value {
        json!({
            "id": id,
            "username": username,
            "email": format!("{}@example.com", username),
            "role": role
        })
    }

    pub fn patient_appointments() -> Value {
        json!({
            "upcoming": [{
                "id": 11,
                "doctor_id": 102,
                "doctor_name": "bob",
                "appointment_datetime": "2030-01-15T10:30:00",
                "reason": "Chest pain"
            }],
            "past": [{
                "id": 12,
                "doctor_id": 101,
                "doctor_name": "amy",
                "appointment_datetime": "2024-05-01T09:00:00",
                "reason": "Toothache",
                "isCompleted": true,
                "feedback": null
            }],
            "cancelled": []
        })
    }

    pub fn doctor_appointments() -> Value {
        json!({
            "upcoming": [
                {
                    "id": 21,
                    "patient_name": "dave",
                    "appointment_datetime": "2030-02-01T08:00:00",
                    "reason": "Checkup",
                    "feedback": null
                },
                {
                    "id": 22,
                    "patient_name": "erin",
                    "appointment_datetime": "2030-02-02T08:00:00",
                    "reason": "Follow-up",
                    "feedback": null
                }
            ],
            "completed": [{
                "id": 23,
                "patient_name": "frank",
                "appointment_datetime": "2024-02-01T08:00:00",
                "reason": "Cleaning",
                "feedback": "Very gentle"
            }],
            "cancelled": []
        })
    }
}
