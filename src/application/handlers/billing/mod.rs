//! Billing command and query handlers.

mod get_entitlement;
mod handle_payment_webhook;

pub use get_entitlement::{EntitlementView, GetEntitlementHandler, GetEntitlementQuery};
pub use handle_payment_webhook::{
    HandlePaymentWebhookCommand, HandlePaymentWebhookHandler, HandlePaymentWebhookResult,
};
