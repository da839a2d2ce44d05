//! AI adapters - TextGenerator implementations.

mod gemini_generator;
mod mock_generator;

pub use gemini_generator::{GeminiConfig, GeminiTextGenerator};
pub use mock_generator::MockTextGenerator;
