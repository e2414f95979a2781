use tracing::error;

use crate::models::ChatMessage;
use crate::services::assistant::AssistantService;

pub const GREETING: &str =
    "Hi! I am your Virtual Medical Assistant. I can help you with your pre-appointment preparations?";

pub const ASSISTANT_FAILED: &str = "Sorry, I couldn't process your request. Please try again.";

/// Chat transcript. Always starts with the assistant's greeting.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
        }
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last_reply(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Appends the user's input and the assistant's reply. Blank input is
    /// ignored and returns `None`. Failures are recorded as an assistant
    /// message rather than returned.
    pub async fn send(&mut self, service: &AssistantService, input: &str) -> Option<&ChatMessage> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::user(input));

        let reply = match service.exchange(&self.messages).await {
            Ok(suggestions) => suggestions.join("\n"),
            Err(e) => {
                error!("Error fetching virtual assistant response: {}", e);
                ASSISTANT_FAILED.to_string()
            }
        };

        self.messages.push(ChatMessage::assistant(reply));
        self.messages.last()
    }
}
