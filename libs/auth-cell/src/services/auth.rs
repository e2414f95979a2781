use tracing::debug;

use shared_api::ApiClient;
use shared_config::AppConfig;
use shared_models::auth::{LoginCredentials, RegisterRequest, TokenResponse, UserResponse};
use shared_models::error::AppError;

/// Calls the API's token and registration endpoints. Token issuance itself
/// happens server side.
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(ApiClient::new(config))
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> Result<TokenResponse, AppError> {
        if credentials.username.trim().is_empty() || credentials.password.is_empty() {
            return Err(AppError::Validation(
                "Username and password are required.".to_string(),
            ));
        }

        debug!("Requesting token for {}", credentials.username);
        self.api.post_form("/token", credentials).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<UserResponse, AppError> {
        if request.username.trim().is_empty()
            || request.email.trim().is_empty()
            || request.password.is_empty()
        {
            return Err(AppError::Validation(
                "All registration fields are required.".to_string(),
            ));
        }

        debug!("Registering {} as {}", request.username, request.role);
        let body = serde_json::to_value(request)?;
        self.api.post_json("/register", None, body).await
    }
}
