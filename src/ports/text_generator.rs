//! TextGenerator port - Interface for hosted LLM text generation.
//!
//! The categorization assistant is the only consumer, so the surface is a
//! single non-streaming call: prompt in, text out.

use async_trait::async_trait;
use thiserror::Error;

/// A single-shot generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Sampling temperature; categorization pins this to 0.0 so repeated
    /// calls on the same description agree.
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationRequest {
    /// Creates a deterministic (temperature 0) request.
    pub fn deterministic(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: 0.0,
            max_output_tokens: 64,
        }
    }
}

/// Failures from the generation provider.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation provider rejected credentials")]
    AuthenticationFailed,

    #[error("generation provider rate limited the request")]
    RateLimited,

    #[error("generation request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("generation provider unavailable: {0}")]
    Unavailable(String),

    #[error("generation transport error: {0}")]
    Network(String),

    #[error("generation reply was malformed: {0}")]
    MalformedReply(String),
}

/// Port for LLM providers.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a completion for the request and returns its text.
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError>;
}
