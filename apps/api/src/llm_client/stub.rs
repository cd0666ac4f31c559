//! Deterministic generator used by tests in place of the network service.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{LlmError, TextGenerator};

enum Reply {
    Text(String),
    Failure,
}

/// Replays a fixed reply and records every prompt it receives.
#[derive(Clone)]
pub struct StubGenerator {
    reply: Arc<Reply>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StubGenerator {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Arc::new(Reply::Text(text.into())),
            prompts: Arc::new(Mutex::new(vec![])),
        }
    }

    /// A generator whose every call fails like an unreachable service.
    pub fn failing() -> Self {
        Self {
            reply: Arc::new(Reply::Failure),
            prompts: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.reply.as_ref() {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Failure => Err(LlmError::Api {
                status: 503,
                message: "stubbed outage".to_string(),
            }),
        }
    }
}
