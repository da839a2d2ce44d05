//! User profile aggregate carrying the Pro entitlement.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmailAddress, ProfileId, Timestamp};

/// A user profile row.
///
/// Created at registration with `is_pro = false`. Within this system the only
/// mutation is the entitlement upgrade applied by the payment webhook; there
/// is no downgrade path, so `Pro` is terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: ProfileId,
    /// Join key between a checkout session and this profile. Mutable in the
    /// identity service, which is why entitlement writes are keyed by `id`.
    pub email: EmailAddress,
    pub is_pro: bool,
    /// Payment-provider customer reference, set on first successful upgrade.
    /// Re-applying the same upgrade may overwrite it; that is harmless.
    pub payment_customer_ref: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserProfile {
    /// Creates a fresh free-plan profile, as registration does.
    pub fn register(id: ProfileId, email: EmailAddress) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            email,
            is_pro: false,
            payment_customer_ref: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the Free -> Pro transition.
    ///
    /// Idempotent: applying the same upgrade twice leaves the profile in the
    /// same state. An upgrade without a customer ref keeps any previously
    /// stored ref.
    pub fn apply_pro_upgrade(&mut self, customer_ref: Option<String>) {
        self.is_pro = true;
        if customer_ref.is_some() {
            self.payment_customer_ref = customer_ref;
        }
        self.updated_at = Timestamp::now();
    }
}
