//! ProfileRepository port - Interface to the identity/profile store.

use async_trait::async_trait;

use crate::domain::billing::UserProfile;
use crate::domain::foundation::{DomainError, EmailAddress, ProfileId};

/// Port for reading and mutating user profiles.
///
/// The email lookup is the administrative query the webhook uses to join a
/// checkout session to a profile; everything else in the system addresses
/// profiles by id.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Inserts a freshly registered profile.
    async fn create(&self, profile: &UserProfile) -> Result<(), DomainError>;

    /// Point lookup by id.
    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<UserProfile>, DomainError>;

    /// Administrative lookup by email.
    ///
    /// Email is not unique by construction, so this returns every match and
    /// leaves the ambiguity decision to the caller.
    async fn find_by_email(&self, email: &EmailAddress)
        -> Result<Vec<UserProfile>, DomainError>;

    /// Applies the Pro upgrade as a single atomic one-row update keyed by id:
    /// sets `is_pro = true` and stores the customer ref (an absent ref keeps
    /// any previously stored value). Idempotent by construction.
    ///
    /// Fails with `ProfileNotFound` if the row vanished between lookup and
    /// update.
    async fn upgrade_to_pro(
        &self,
        id: &ProfileId,
        customer_ref: Option<&str>,
    ) -> Result<(), DomainError>;
}
