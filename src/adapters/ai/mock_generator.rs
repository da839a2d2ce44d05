//! Mock TextGenerator for tests.
//!
//! Returns a scripted reply (or failure) and records every request it sees,
//! so tests can assert on prompts and sampling parameters.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{GenerationError, GenerationRequest, TextGenerator};

enum Behavior {
    Reply(String),
    Fail,
    Panic,
}

/// Scripted generator.
pub struct MockTextGenerator {
    behavior: Behavior,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockTextGenerator {
    /// Always replies with the given text.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Reply(text.into()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always fails with an unavailability error.
    pub fn failing() -> Self {
        Self {
            behavior: Behavior::Fail,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Panics if called; for asserting a code path never reaches the model.
    pub fn panicking() -> Self {
        Self {
            behavior: Behavior::Panic,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the recorded requests.
    pub fn recorded_requests(&self) -> Arc<Mutex<Vec<GenerationRequest>>> {
        self.requests.clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        self.requests.lock().unwrap().push(request);
        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::Fail => Err(GenerationError::Unavailable(
                "scripted failure".to_string(),
            )),
            Behavior::Panic => panic!("generator was not supposed to be called"),
        }
    }
}
