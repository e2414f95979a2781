use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }

    /// Content with the server's `<strong>` emphasis markup removed.
    pub fn plain_text(&self) -> String {
        self.content.replace("<strong>", "").replace("</strong>", "")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VirtualAssistantRequest<'a> {
    #[serde(rename = "chatHistory")]
    pub chat_history: &'a [ChatMessage],
}

#[derive(Debug, Clone, Deserialize)]
pub struct VirtualAssistantResponse {
    #[serde(default)]
    pub suggestions: Vec<String>,
}
