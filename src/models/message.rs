use serde::{Deserialize, Serialize};

use super::content::{ContentPart, MessageContent};
use super::role::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A message sent to the chat completion endpoint
pub struct ChatMessage {
    pub role: Role,
    pub content: MessageContent,
}

impl ChatMessage {
    /// Create a system message holding `text` verbatim
    pub fn system<S: Into<String>>(text: S) -> Self {
        ChatMessage {
            role: Role::System,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Create an empty multimodal user message
    pub fn user() -> Self {
        ChatMessage {
            role: Role::User,
            content: MessageContent::Parts(Vec::new()),
        }
    }

    pub fn assistant<S: Into<String>>(text: S) -> Self {
        ChatMessage {
            role: Role::Assistant,
            content: MessageContent::Text(text.into()),
        }
    }

    /// Append a part, keeping earlier parts in order
    pub fn with_part(mut self, part: ContentPart) -> Self {
        self.content = match self.content {
            MessageContent::Text(text) => MessageContent::Parts(vec![ContentPart::text(text), part]),
            MessageContent::Parts(mut parts) => {
                parts.push(part);
                MessageContent::Parts(parts)
            }
        };
        self
    }

    pub fn with_text<S: Into<String>>(self, text: S) -> Self {
        self.with_part(ContentPart::text(text))
    }

    pub fn with_image_url<S: Into<String>>(self, url: S) -> Self {
        self.with_part(ContentPart::image_url(url))
    }

    pub fn text(&self) -> Option<String> {
        self.content.text()
    }
}
