use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Session storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Maps a non-success HTTP response onto the taxonomy. The server reports
    /// failures as `{"detail": ...}`; `message` is accepted as well.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_detail(body).unwrap_or_else(|| body.trim().to_string());

        match status {
            401 | 403 => AppError::Auth(message),
            404 => AppError::NotFound(message),
            400 | 422 => AppError::BadRequest(message),
            _ => AppError::Api { status, message },
        }
    }

    /// Message fit to show the user, if the failure carries one. Server-side
    /// faults and transport problems never do.
    pub fn detail(&self) -> Option<&str> {
        let message = match self {
            AppError::Auth(msg)
            | AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::Validation(msg) => msg,
            AppError::Api { .. }
            | AppError::Network(_)
            | AppError::Decode(_)
            | AppError::Storage(_) => return None,
        };

        if message.is_empty() {
            None
        } else {
            Some(message)
        }
    }

    /// Logs the failure and returns the text to show in place of the result.
    pub fn user_message(&self, fallback: &str) -> String {
        tracing::error!("Error: {}", self);

        self.detail()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    ["detail", "message"]
        .iter()
        .filter_map(|key| value.get(*key))
        .find_map(|field| match field {
            Value::String(text) => Some(text.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        })
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_extracts_detail() {
        let err = AppError::from_status(401, r#"{"detail":"Invalid credentials"}"#);
        assert!(matches!(err, AppError::Auth(ref m) if m == "Invalid credentials"));

        let err = AppError::from_status(404, r#"{"detail":"Doctor not found"}"#);
        assert!(matches!(err, AppError::NotFound(_)));

        let err = AppError::from_status(500, "boom");
        assert!(matches!(err, AppError::Api { status: 500, ref message } if message == "boom"));
    }

    #[test]
    fn test_user_message_prefers_server_detail() {
        let err = AppError::from_status(400, r#"{"detail":"Username already exists."}"#);
        assert_eq!(err.user_message("Registration failed"), "Username already exists.");

        let err = AppError::Network("connection refused".to_string());
        assert_eq!(err.user_message("Login failed"), "Login failed");

        let err = AppError::from_status(500, r#"{"detail":"Failed to get a recommendation from AI."}"#);
        assert_eq!(err.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn test_message_field_is_accepted() {
        let err = AppError::from_status(400, r#"{"message":"bad input"}"#);
        assert_eq!(err.detail(), Some("bad input"));
    }
}
