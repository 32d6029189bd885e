use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPart {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePart {
    pub image_url: ImageUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// One typed entry of a multimodal message
pub enum ContentPart {
    Text(TextPart),
    ImageUrl(ImagePart),
    /// Any part type this crate does not model, such as `refusal`
    #[serde(other)]
    Unknown,
}

impl ContentPart {
    pub fn text<S: Into<String>>(text: S) -> Self {
        ContentPart::Text(TextPart { text: text.into() })
    }

    pub fn image_url<S: Into<String>>(url: S) -> Self {
        ContentPart::ImageUrl(ImagePart {
            image_url: ImageUrl { url: url.into() },
        })
    }

    /// Get the text if this is a Text part
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentPart::Text(part) => Some(&part.text),
            _ => None,
        }
    }

    /// Get the URL if this is an ImageUrl part
    pub fn as_image_url(&self) -> Option<&str> {
        match self {
            ContentPart::ImageUrl(part) => Some(&part.image_url.url),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
/// Message content is either a bare string or an ordered list of parts
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
    /// Content of any other shape a server sent back
    Other(Value),
}

impl MessageContent {
    /// Text carried by this content. Parts are joined with newlines, images skipped.
    pub fn text(&self) -> Option<String> {
        match self {
            MessageContent::Text(text) => Some(text.clone()),
            MessageContent::Parts(parts) => {
                let texts: Vec<&str> = parts.iter().filter_map(ContentPart::as_text).collect();
                if texts.is_empty() {
                    None
                } else {
                    Some(texts.join("\n"))
                }
            }
            MessageContent::Other(_) => None,
        }
    }

    pub fn parts(&self) -> &[ContentPart] {
        match self {
            MessageContent::Text(_) | MessageContent::Other(_) => &[],
            MessageContent::Parts(parts) => parts,
        }
    }
}
