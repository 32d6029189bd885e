//! The full image question flow: encode, build, send, extract.
//!
//! The provider is always passed in by the caller; nothing here owns a client.
use crate::encoder::{encode, ImageSource};
use crate::errors::{PromptError, PromptResult};
use crate::mime::ImageMime;
use crate::models::chat::ChatRequest;
use crate::payload::{
    build_request, extract_reply_text, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT,
    DEFAULT_USER_TEXT,
};
use crate::providers::base::Provider;

/// Everything about the question besides the image itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePrompt {
    /// Guessed from the file extension when `None` and the source is a path
    pub mime_type: Option<String>,
    pub system_prompt: String,
    pub user_text: String,
    pub model: String,
    pub max_tokens: i32,
}

impl Default for ImagePrompt {
    fn default() -> Self {
        Self {
            mime_type: None,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            user_text: DEFAULT_USER_TEXT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Hand `request` to `provider` once and return the reply text.
pub fn send_request<P: Provider + ?Sized>(provider: &P, request: &ChatRequest) -> PromptResult<String> {
    let response = provider
        .complete(request)
        .map_err(|e| PromptError::Provider(e.into()))?;
    extract_reply_text(&response)
}

pub fn describe_image<P: Provider + ?Sized>(
    provider: &P,
    source: &ImageSource,
    prompt: &ImagePrompt,
) -> PromptResult<String> {
    let mime = resolve_mime(source, prompt.mime_type.as_deref())?;
    let base64_image = encode(source)?;
    let request = build_request(
        &base64_image,
        mime.as_str(),
        &prompt.system_prompt,
        &prompt.user_text,
        &prompt.model,
        prompt.max_tokens,
    )?;
    send_request(provider, &request)
}

fn resolve_mime(source: &ImageSource, mime_type: Option<&str>) -> PromptResult<ImageMime> {
    match (mime_type, source) {
        (Some(mime_type), _) => mime_type.parse(),
        (None, ImageSource::Path(path)) => ImageMime::from_path(path),
        (None, ImageSource::Bytes(_)) => Err(PromptError::invalid(
            "a MIME type is required for in-memory images",
        )),
    }
}
