// libs/assistant-cell/src/services/assistant.rs
use tracing::debug;

use shared_api::ApiClient;
use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{ChatMessage, VirtualAssistantRequest, VirtualAssistantResponse};

/// Client for the pre-appointment preparation assistant.
pub struct AssistantService {
    api: ApiClient,
}

impl AssistantService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(ApiClient::new(config))
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    /// Sends the whole conversation and returns the reply lines.
    pub async fn exchange(&self, history: &[ChatMessage]) -> Result<Vec<String>, AppError> {
        debug!("Sending {} chat messages to the assistant", history.len());

        let body = serde_json::to_value(VirtualAssistantRequest { chat_history: history })?;
        let response: VirtualAssistantResponse = self.api.post_json("/virtual-assistant", None, body).await?;

        Ok(response.suggestions)
    }
}
