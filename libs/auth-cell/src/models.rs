use serde::{Deserialize, Serialize};

use shared_models::auth::{Role, Session};

/// What the session file holds between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Set at registration, read when the profile form is submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl StoredSession {
    /// A session exists only when both a token and a known role are stored.
    pub fn session(&self) -> Option<Session> {
        let token = self.token.as_ref()?;
        let role: Role = self.role.as_deref()?.parse().ok()?;
        Some(Session::new(token.clone(), role))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientProfileForm {
    pub age: u32,
    pub gender: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorProfileForm {
    pub specialization: String,
    pub experience: u32,
    pub qualification: String,
    pub address: String,
}
