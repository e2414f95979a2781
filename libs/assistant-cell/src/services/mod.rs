pub mod assistant;
pub mod conversation;

pub use assistant::AssistantService;
pub use conversation::{Conversation, ASSISTANT_FAILED, GREETING};
