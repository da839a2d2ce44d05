//! HTTP adapters - REST API surface.
//!
//! Each domain module has its own router/handlers/DTOs; this module holds
//! the shared application state and assembles the full API router.

pub mod agenda;
pub mod auth;
pub mod billing;
pub mod categorize;
pub mod error;
pub mod ledger;

use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use crate::application::handlers::agenda::{
    CreateTaskHandler, ListTasksHandler, RemoveTaskHandler, UpdateTaskStatusHandler,
};
use crate::application::handlers::billing::{GetEntitlementHandler, HandlePaymentWebhookHandler};
use crate::application::handlers::categorize::CategorizeTransactionHandler;
use crate::application::handlers::ledger::{
    AddTransactionHandler, GetMonthlySummaryHandler, ImportTransactionsHandler,
    ListTransactionsHandler, RemoveTransactionHandler, UpdateTransactionHandler,
};
use crate::domain::billing::WebhookVerifier;
use crate::ports::{ProfileRepository, TaskRepository, TextGenerator, TransactionRepository};

pub use auth::AuthenticatedUser;
pub use error::{ApiError, ErrorResponse};

/// Shared application state: Arc-wrapped ports plus the webhook signing
/// secret. Cloned per request; command handlers are built on demand.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<dyn ProfileRepository>,
    pub transactions: Arc<dyn TransactionRepository>,
    pub tasks: Arc<dyn TaskRepository>,
    pub generator: Arc<dyn TextGenerator>,
    pub webhook_secret: String,
}

impl AppState {
    pub fn payment_webhook_handler(&self) -> HandlePaymentWebhookHandler {
        HandlePaymentWebhookHandler::new(
            WebhookVerifier::new(self.webhook_secret.clone()),
            self.profiles.clone(),
        )
    }

    pub fn entitlement_handler(&self) -> GetEntitlementHandler {
        GetEntitlementHandler::new(self.profiles.clone())
    }

    pub fn categorize_handler(&self) -> CategorizeTransactionHandler {
        CategorizeTransactionHandler::new(self.generator.clone())
    }

    pub fn add_transaction_handler(&self) -> AddTransactionHandler {
        AddTransactionHandler::new(self.transactions.clone(), self.profiles.clone())
    }

    pub fn list_transactions_handler(&self) -> ListTransactionsHandler {
        ListTransactionsHandler::new(self.transactions.clone())
    }

    pub fn update_transaction_handler(&self) -> UpdateTransactionHandler {
        UpdateTransactionHandler::new(self.transactions.clone())
    }

    pub fn remove_transaction_handler(&self) -> RemoveTransactionHandler {
        RemoveTransactionHandler::new(self.transactions.clone())
    }

    pub fn import_transactions_handler(&self) -> ImportTransactionsHandler {
        ImportTransactionsHandler::new(self.transactions.clone(), self.profiles.clone())
    }

    pub fn monthly_summary_handler(&self) -> GetMonthlySummaryHandler {
        GetMonthlySummaryHandler::new(self.transactions.clone())
    }

    pub fn create_task_handler(&self) -> CreateTaskHandler {
        CreateTaskHandler::new(self.tasks.clone())
    }

    pub fn list_tasks_handler(&self) -> ListTasksHandler {
        ListTasksHandler::new(self.tasks.clone())
    }

    pub fn update_task_status_handler(&self) -> UpdateTaskStatusHandler {
        UpdateTaskStatusHandler::new(self.tasks.clone())
    }

    pub fn remove_task_handler(&self) -> RemoveTaskHandler {
        RemoveTaskHandler::new(self.tasks.clone())
    }
}

/// Assembles the full API router over the given state.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/billing", billing::billing_routes())
        .nest("/api/webhooks", billing::webhook_routes())
        .nest("/api/categorize", categorize::categorize_routes())
        .nest("/api/transactions", ledger::ledger_routes())
        .nest("/api/tasks", agenda::agenda_routes())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    service: &'static str,
    version: &'static str,
}

/// GET /health - liveness probe.
async fn health(State(_): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
