//! GetEntitlementHandler - Query handler for the current entitlement.
//!
//! The UI polls this to notice an upgrade after checkout; the webhook itself
//! knows nothing about who is watching.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId};
use crate::ports::ProfileRepository;

/// Query for a user's entitlement.
#[derive(Debug, Clone)]
pub struct GetEntitlementQuery {
    pub user_id: ProfileId,
}

/// Current entitlement snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitlementView {
    pub is_pro: bool,
}

/// Handler for entitlement queries.
pub struct GetEntitlementHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl GetEntitlementHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, query: GetEntitlementQuery) -> Result<EntitlementView, DomainError> {
        let profile = self
            .profiles
            .find_by_id(&query.user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "profile not found"))?;

        Ok(EntitlementView {
            is_pro: profile.is_pro,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::UserProfile;
    use crate::domain::foundation::EmailAddress;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockProfileRepository {
        profiles: Mutex<Vec<UserProfile>>,
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepository {
        async fn create(&self, profile: &UserProfile) -> Result<(), DomainError> {
            self.profiles.lock().unwrap().push(profile.clone());
            Ok(())
        }

        async fn find_by_id(&self, id: &ProfileId) -> Result<Option<UserProfile>, DomainError> {
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .find(|p| &p.id == id)
                .cloned())
        }

        async fn find_by_email(
            &self,
            email: &EmailAddress,
        ) -> Result<Vec<UserProfile>, DomainError> {
            Ok(self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .filter(|p| &p.email == email)
                .cloned()
                .collect())
        }

        async fn upgrade_to_pro(
            &self,
            id: &ProfileId,
            customer_ref: Option<&str>,
        ) -> Result<(), DomainError> {
            let mut profiles = self.profiles.lock().unwrap();
            if let Some(p) = profiles.iter_mut().find(|p| &p.id == id) {
                p.apply_pro_upgrade(customer_ref.map(String::from));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn reports_free_then_pro_after_upgrade() {
        let profile = UserProfile::register(
            ProfileId::new(),
            EmailAddress::new("a@b.com").unwrap(),
        );
        let user_id = profile.id;
        let repo = Arc::new(MockProfileRepository {
            profiles: Mutex::new(vec![profile]),
        });
        let handler = GetEntitlementHandler::new(repo.clone());

        let before = handler
            .handle(GetEntitlementQuery { user_id })
            .await
            .unwrap();
        assert!(!before.is_pro);

        repo.upgrade_to_pro(&user_id, Some("cus_1")).await.unwrap();

        let after = handler
            .handle(GetEntitlementQuery { user_id })
            .await
            .unwrap();
        assert!(after.is_pro);
    }

    #[tokio::test]
    async fn unknown_profile_is_an_error() {
        let repo = Arc::new(MockProfileRepository {
            profiles: Mutex::new(vec![]),
        });
        let handler = GetEntitlementHandler::new(repo);

        let result = handler
            .handle(GetEntitlementQuery {
                user_id: ProfileId::new(),
            })
            .await;

        assert!(matches!(
            result,
            Err(DomainError {
                code: ErrorCode::ProfileNotFound,
                ..
            })
        ));
    }
}
