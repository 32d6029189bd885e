//! Wire models for OpenAI-style chat completions with image content.
//!
//! Requests are built by [`crate::payload`] and serialize directly into the JSON
//! body of `POST /v1/chat/completions`. Responses deserialize from the body the
//! endpoint returns; unknown fields are ignored so compatible servers with
//! extra metadata still parse.
pub mod chat;
pub mod content;
pub mod message;
pub mod role;
