//! Stripe webhook event types.
//!
//! Only the fields this system actually reads are modeled; the rest of
//! Stripe's event schema is carried opaquely in `data.object`.

use serde::{Deserialize, Serialize};

/// A verified Stripe webhook event envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StripeEvent {
    /// Unique identifier for the event (evt_xxx).
    pub id: String,

    /// Event type string (e.g. "checkout.session.completed").
    #[serde(rename = "type")]
    pub event_type: String,

    /// Unix timestamp at which the provider created the event.
    pub created: i64,

    /// Event-specific payload.
    pub data: StripeEventData,

    /// Whether this is a live-mode event.
    #[serde(default)]
    pub livemode: bool,
}

/// Container for the event-specific object.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StripeEventData {
    /// The object that triggered the event, polymorphic on event type.
    pub object: serde_json::Value,
}

impl StripeEvent {
    /// Parses the event type into a known variant.
    pub fn parsed_type(&self) -> StripeEventType {
        StripeEventType::from_type_str(&self.event_type)
    }

    /// Deserializes `data.object` as the given payload type.
    pub fn deserialize_object<T: serde::de::DeserializeOwned>(
        &self,
    ) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.object.clone())
    }
}

/// Event types this system distinguishes.
///
/// Only completed checkouts drive a state transition; everything else that
/// passes signature verification is acknowledged so the provider stops
/// redelivering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripeEventType {
    /// Checkout session completed successfully - the upgrade trigger.
    CheckoutSessionCompleted,
    /// Any other event type, acknowledged and ignored.
    Other(String),
}

impl StripeEventType {
    /// Parses an event type from its wire string.
    pub fn from_type_str(s: &str) -> Self {
        match s {
            "checkout.session.completed" => Self::CheckoutSessionCompleted,
            other => Self::Other(other.to_string()),
        }
    }
}

/// The slice of a checkout session object the upgrade needs.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    /// Payment-provider customer reference ("cus_xxx"); may be absent for
    /// checkouts that never created a customer object.
    pub customer: Option<String>,

    /// Details the purchaser entered at checkout.
    #[serde(default)]
    pub customer_details: Option<CustomerDetails>,
}

/// Purchaser details attached to a checkout session.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerDetails {
    pub email: Option<String>,
}

impl CheckoutSession {
    /// Returns the purchaser's email, if the session carries one.
    pub fn purchaser_email(&self) -> Option<&str> {
        self.customer_details
            .as_ref()
            .and_then(|d| d.email.as_deref())
    }
}
