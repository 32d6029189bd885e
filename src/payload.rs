use crate::errors::{PromptError, PromptResult};
use crate::mime::ImageMime;
use crate::models::chat::{ChatRequest, ChatResponse};
use crate::models::message::ChatMessage;

pub const DEFAULT_SYSTEM_PROMPT: &str = concat!(
    "You are a helpful assistant capable of accessing external functions and engaging in casual chat.\n",
    "Engage in a friendly manner to enhance the chat experience.\n",
    "Answer in a phrase which start with 'This image is ' and do not make multiple sentences.",
);
pub const DEFAULT_USER_TEXT: &str = "What is in the image?";
pub const DEFAULT_MODEL: &str = "llama-3";
pub const DEFAULT_MAX_TOKENS: i32 = 128;

/// Format `data:<mime>;base64,<payload>`
pub fn data_uri(mime: ImageMime, base64_image: &str) -> String {
    format!("data:{};base64,{}", mime, base64_image)
}

/// Assemble a system message plus one user message of `[text, image]`.
///
/// The text part always precedes the image part; some backends only look at
/// the image when it follows the question.
pub fn build_request(
    base64_image: &str,
    mime_type: &str,
    system_prompt: &str,
    user_text: &str,
    model: &str,
    max_tokens: i32,
) -> PromptResult<ChatRequest> {
    if base64_image.is_empty() {
        return Err(PromptError::invalid("base64 image must not be empty"));
    }
    let mime: ImageMime = mime_type.parse()?;
    let max_tokens = u32::try_from(max_tokens)
        .ok()
        .filter(|tokens| *tokens > 0)
        .ok_or_else(|| {
            PromptError::invalid(format!("max_tokens must be positive, got {}", max_tokens))
        })?;

    let messages = vec![
        ChatMessage::system(system_prompt),
        ChatMessage::user()
            .with_text(user_text)
            .with_image_url(data_uri(mime, base64_image)),
    ];

    Ok(ChatRequest::new(model.to_string(), messages, max_tokens))
}

/// Text of the first choice's message.
pub fn extract_reply_text(response: &ChatResponse) -> PromptResult<String> {
    let choice = response
        .choices
        .first()
        .ok_or_else(|| PromptError::malformed("response contains no choices"))?;

    choice
        .message
        .as_ref()
        .and_then(|message| message.content.as_ref())
        .and_then(|content| content.text())
        .ok_or_else(|| PromptError::malformed("first choice carries no text content"))
}
