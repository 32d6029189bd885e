use anyhow::Result;

use crate::models::chat::{ChatRequest, ChatResponse};

/// A chat completion endpoint the request is handed to.
///
/// Implementations own transport concerns: serialization, authentication,
/// timeouts. Any failure comes back as an opaque error.
pub trait Provider: Send + Sync {
    fn complete(&self, request: &ChatRequest) -> Result<ChatResponse>;
}
