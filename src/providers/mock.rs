use anyhow::{anyhow, Result};
use std::sync::{Arc, Mutex};

use crate::models::chat::{ChatRequest, ChatResponse};
use crate::providers::base::Provider;

/// A mock provider that returns pre-configured responses and records what it was sent
pub struct MockProvider {
    responses: Arc<Mutex<Vec<Result<ChatResponse, String>>>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockProvider {
    /// Create a new mock provider with a sequence of responses
    pub fn new(responses: Vec<ChatResponse>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into_iter().map(Ok).collect())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider whose next call fails with `message`
    pub fn failing<S: Into<String>>(message: S) -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![Err(message.into())])),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Provider for MockProvider {
    fn complete(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // No choices once the scripted responses run out
            Ok(ChatResponse::default())
        } else {
            responses.remove(0).map_err(|message| anyhow!(message))
        }
    }
}
