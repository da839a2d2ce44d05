//! CategorizeTransactionHandler - LLM-assisted category labeling.
//!
//! A total function from description to one member of the closed category
//! set: the model's reply is validated against the set and every failure
//! mode (transport error, rate limit, off-list reply) collapses to `Other`.
//! Callers never see an error.

use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::warn;

use crate::domain::ledger::{Category, ALL_CATEGORIES};
use crate::ports::{GenerationRequest, TextGenerator};

/// Comma-separated category labels, rendered once.
static CATEGORY_LIST: Lazy<String> = Lazy::new(|| {
    ALL_CATEGORIES
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ")
});

/// Handler for categorization requests.
pub struct CategorizeTransactionHandler {
    generator: Arc<dyn TextGenerator>,
}

impl CategorizeTransactionHandler {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Labels a transaction description.
    ///
    /// Sampling is pinned to temperature 0 so the same description gets the
    /// same label on every call.
    pub async fn handle(&self, description: &str) -> Category {
        let description = description.trim();
        if description.is_empty() {
            return Category::Other;
        }

        let prompt = format!(
            "Categorize the following transaction: \"{}\". \
             Respond with exactly one of the following categories: {}.",
            description, *CATEGORY_LIST
        );

        match self.generator.generate(GenerationRequest::deterministic(prompt)).await {
            Ok(reply) => Category::parse_or_other(&reply),
            Err(err) => {
                warn!(error = %err, "categorization call failed, falling back to Other");
                Category::Other
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockTextGenerator;

    fn handler(generator: MockTextGenerator) -> CategorizeTransactionHandler {
        CategorizeTransactionHandler::new(Arc::new(generator))
    }

    #[tokio::test]
    async fn maps_model_reply_onto_closed_set() {
        let handler = handler(MockTextGenerator::replying("Transport"));
        let category = handler.handle("Uber to the airport").await;
        assert_eq!(category, Category::Transport);
    }

    #[tokio::test]
    async fn tolerates_decorated_replies() {
        let handler = handler(MockTextGenerator::replying("  Personal Care.\n"));
        let category = handler.handle("haircut downtown").await;
        assert_eq!(category, Category::PersonalCare);
    }

    #[tokio::test]
    async fn off_list_reply_falls_back_to_other() {
        let handler = handler(MockTextGenerator::replying(
            "That sounds like a grocery purchase!",
        ));
        let category = handler.handle("supermarket run").await;
        assert_eq!(category, Category::Other);
    }

    #[tokio::test]
    async fn upstream_failure_falls_back_to_other() {
        let handler = handler(MockTextGenerator::failing());
        let category = handler.handle("rent for march").await;
        assert_eq!(category, Category::Other);
    }

    #[tokio::test]
    async fn blank_description_short_circuits_to_other() {
        // The generator would panic if called; a blank description must not
        // reach it.
        let handler = handler(MockTextGenerator::panicking());
        let category = handler.handle("   ").await;
        assert_eq!(category, Category::Other);
    }

    #[tokio::test]
    async fn request_is_deterministic() {
        let generator = MockTextGenerator::replying("Food");
        let recorded = generator.recorded_requests();
        let handler = handler(generator);

        handler.handle("lunch with client").await;

        let requests = recorded.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].temperature, 0.0);
        assert!(requests[0].prompt.contains("lunch with client"));
        assert!(requests[0].prompt.contains("Personal Care"));
    }
}
