use serde::{Deserialize, Deserializer, Serialize};

use super::content::MessageContent;
use super::message::ChatMessage;

/// A validated chat completion request.
///
/// Only [`crate::payload::build_request`] creates one, so fields are read-only
/// once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

impl ChatRequest {
    pub(crate) fn new(model: String, messages: Vec<ChatMessage>, max_tokens: u32) -> Self {
        Self {
            model,
            messages,
            max_tokens,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
    pub total_tokens: Option<u32>,
}

impl Usage {
    /// Total tokens, summing prompt and completion when the server omits it
    pub fn total(&self) -> Option<u32> {
        self.total_tokens
            .or_else(|| match (self.prompt_tokens, self.completion_tokens) {
                (Some(input), Some(output)) => input.checked_add(output),
                _ => None,
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMessage {
    /// Kept as a string; servers may answer with roles requests never use
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<MessageContent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub message: Option<ResponseMessage>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// The parsed body of a chat completion response
pub struct ChatResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Choice>, D::Error> {
    Ok(Option::<Vec<Choice>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ChatResponse {
    /// A single-choice assistant reply
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        ChatResponse {
            choices: vec![Choice {
                index: 0,
                message: Some(ResponseMessage {
                    role: Some("assistant".to_string()),
                    content: Some(MessageContent::Text(text.into())),
                }),
                finish_reason: Some("stop".to_string()),
            }],
            usage: None,
        }
    }
}
