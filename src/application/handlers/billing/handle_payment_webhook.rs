//! HandlePaymentWebhookHandler - Command handler for payment provider webhooks.
//!
//! The entitlement state machine lives here: `Free --[verified completed
//! checkout for this profile's email]--> Pro`, with `Pro` terminal. The
//! processing order is load-bearing:
//!
//! 1. authenticate the raw body against the signature header
//! 2. filter by event type (only completed checkouts transition)
//! 3. resolve the purchaser email to exactly one profile
//! 4. apply the upgrade as one atomic row update keyed by profile id
//!
//! A forged request must fail at step 1; redelivery of a genuine event may
//! re-run steps 2-4 at any time because the update is idempotent.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::billing::{
    CheckoutSession, StripeEvent, StripeEventType, WebhookError, WebhookVerifier,
};
use crate::domain::foundation::EmailAddress;
use crate::ports::ProfileRepository;

/// Command carrying one webhook delivery.
#[derive(Debug, Clone)]
pub struct HandlePaymentWebhookCommand {
    /// Raw request body, exactly as received; signature verification runs
    /// over these bytes, so they must not be parsed or re-encoded first.
    pub payload: Vec<u8>,
    /// `Stripe-Signature` header, if the request carried one.
    pub signature: Option<String>,
}

/// Outcome of webhook processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlePaymentWebhookResult {
    /// A completed checkout upgraded a profile to Pro.
    Upgraded {
        profile_id: String,
        customer_ref: Option<String>,
    },
    /// The event was genuine but carries no transition; acknowledged so the
    /// provider stops redelivering it.
    Acknowledged { event_type: String },
}

/// Handler for inbound payment webhooks.
pub struct HandlePaymentWebhookHandler {
    verifier: WebhookVerifier,
    profiles: Arc<dyn ProfileRepository>,
}

impl HandlePaymentWebhookHandler {
    pub fn new(verifier: WebhookVerifier, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { verifier, profiles }
    }

    pub async fn handle(
        &self,
        cmd: HandlePaymentWebhookCommand,
    ) -> Result<HandlePaymentWebhookResult, WebhookError> {
        // 1. Authenticate. A missing header is indistinguishable from a bad
        //    one as far as the caller is concerned.
        let signature = cmd.signature.as_deref().ok_or_else(|| {
            warn!("webhook delivery without signature header");
            WebhookError::InvalidSignature
        })?;

        let event = self.verifier.verify_and_parse(&cmd.payload, signature)?;

        // 2. Filter by event type.
        match event.parsed_type() {
            StripeEventType::CheckoutSessionCompleted => self.apply_upgrade(&event).await,
            StripeEventType::Other(event_type) => {
                info!(%event_type, event_id = %event.id, "ignoring verified event type");
                Ok(HandlePaymentWebhookResult::Acknowledged { event_type })
            }
        }
    }

    async fn apply_upgrade(
        &self,
        event: &StripeEvent,
    ) -> Result<HandlePaymentWebhookResult, WebhookError> {
        let session: CheckoutSession = event
            .deserialize_object()
            .map_err(|e| WebhookError::ParseError(e.to_string()))?;

        // 3. Resolve the purchaser to exactly one profile.
        let email = session
            .purchaser_email()
            .ok_or(WebhookError::MissingIdentity)?;
        let email = EmailAddress::new(email).map_err(|_| WebhookError::MissingIdentity)?;

        let matches = self
            .profiles
            .find_by_email(&email)
            .await
            .map_err(|e| WebhookError::Store(e.to_string()))?;

        let profile = match matches.as_slice() {
            [] => {
                warn!(
                    event_id = %event.id,
                    %email,
                    "completed checkout references unknown purchaser"
                );
                return Err(WebhookError::UserNotFound);
            }
            [profile] => profile,
            _ => {
                warn!(
                    event_id = %event.id,
                    %email,
                    match_count = matches.len(),
                    "multiple profiles match purchaser email, refusing to guess"
                );
                return Err(WebhookError::AmbiguousIdentity);
            }
        };

        // 4. Apply the transition keyed by id, not email. Re-applying the
        //    same values on redelivery is a no-op in effect.
        let customer_ref = session.customer.clone();
        self.profiles
            .upgrade_to_pro(&profile.id, customer_ref.as_deref())
            .await
            .map_err(|e| WebhookError::Store(e.to_string()))?;

        info!(
            event_id = %event.id,
            profile_id = %profile.id,
            customer_ref = customer_ref.as_deref().unwrap_or("-"),
            "profile upgraded to Pro"
        );

        Ok(HandlePaymentWebhookResult::Upgraded {
            profile_id: profile.id.to_string(),
            customer_ref,
        })
    }
}
