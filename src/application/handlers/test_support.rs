//! In-memory port implementations shared by handler unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Datelike;

use crate::domain::agenda::{AgendaTask, TaskStatus};
use crate::domain::billing::UserProfile;
use crate::domain::foundation::{
    DomainError, EmailAddress, ErrorCode, ProfileId, TaskId, TransactionId,
};
use crate::domain::ledger::{Transaction, TransactionKind};
use crate::ports::{
    ProfileRepository, TaskRepository, TransactionFilter, TransactionRepository,
};

/// In-memory profile store.
pub struct InMemoryProfiles {
    profiles: Mutex<Vec<UserProfile>>,
}

impl InMemoryProfiles {
    pub fn with_free_user(email: &str) -> Self {
        Self {
            profiles: Mutex::new(vec![UserProfile::register(
                ProfileId::new(),
                EmailAddress::new(email).unwrap(),
            )]),
        }
    }

    pub fn with_pro_user(email: &str) -> Self {
        let mut profile =
            UserProfile::register(ProfileId::new(), EmailAddress::new(email).unwrap());
        profile.apply_pro_upgrade(Some("cus_test".to_string()));
        Self {
            profiles: Mutex::new(vec![profile]),
        }
    }

    /// Id of the single seeded profile.
    pub fn only_user_id(&self) -> ProfileId {
        self.profiles.lock().unwrap()[0].id
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
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

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Vec<UserProfile>, DomainError> {
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
        let profile = profiles
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| DomainError::new(ErrorCode::ProfileNotFound, "profile not found"))?;
        profile.apply_pro_upgrade(customer_ref.map(String::from));
        Ok(())
    }
}

/// In-memory transaction store.
pub struct InMemoryTransactions {
    transactions: Arc<Mutex<Vec<Transaction>>>,
}

impl InMemoryTransactions {
    pub fn new() -> Self {
        Self::with(Vec::new())
    }

    pub fn with(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Arc::new(Mutex::new(transactions)),
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.lock().unwrap().len()
    }

    pub fn snapshot(&self) -> Vec<Transaction> {
        self.transactions.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactions {
    async fn save(&self, transaction: &Transaction) -> Result<(), DomainError> {
        self.transactions.lock().unwrap().push(transaction.clone());
        Ok(())
    }

    async fn save_all(&self, transactions: &[Transaction]) -> Result<(), DomainError> {
        self.transactions
            .lock()
            .unwrap()
            .extend_from_slice(transactions);
        Ok(())
    }

    async fn update(&self, transaction: &Transaction) -> Result<(), DomainError> {
        let mut transactions = self.transactions.lock().unwrap();
        let existing = transactions
            .iter_mut()
            .find(|t| t.id == transaction.id && t.user_id == transaction.user_id)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::TransactionNotFound, "transaction not found")
            })?;
        *existing = transaction.clone();
        Ok(())
    }

    async fn delete(&self, user_id: &ProfileId, id: &TransactionId) -> Result<(), DomainError> {
        let mut transactions = self.transactions.lock().unwrap();
        let before = transactions.len();
        transactions.retain(|t| !(t.id == *id && t.user_id == *user_id));
        if transactions.len() == before {
            return Err(DomainError::new(
                ErrorCode::TransactionNotFound,
                "transaction not found",
            ));
        }
        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &ProfileId,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, DomainError> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| &t.user_id == user_id)
            .filter(|t| filter.month.map_or(true, |m| t.date.month() == m))
            .filter(|t| filter.year.map_or(true, |y| t.date.year() == y))
            .cloned()
            .collect())
    }

    async fn count_by_kind(
        &self,
        user_id: &ProfileId,
        kind: TransactionKind,
    ) -> Result<u32, DomainError> {
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| &t.user_id == user_id && t.kind == kind)
            .count() as u32)
    }
}

/// In-memory task store.
pub struct InMemoryTasks {
    tasks: Mutex<Vec<AgendaTask>>,
}

impl InMemoryTasks {
    pub fn new() -> Self {
        Self::with(Vec::new())
    }

    pub fn with(tasks: Vec<AgendaTask>) -> Self {
        Self {
            tasks: Mutex::new(tasks),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.lock().unwrap().len()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTasks {
    async fn save(&self, task: &AgendaTask) -> Result<(), DomainError> {
        self.tasks.lock().unwrap().push(task.clone());
        Ok(())
    }

    async fn list_for_user(&self, user_id: &ProfileId) -> Result<Vec<AgendaTask>, DomainError> {
        let mut tasks: Vec<AgendaTask> = self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .filter(|t| &t.user_id == user_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| t.date);
        Ok(tasks)
    }

    async fn update_status(
        &self,
        user_id: &ProfileId,
        id: &TaskId,
        status: TaskStatus,
    ) -> Result<AgendaTask, DomainError> {
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks
            .iter_mut()
            .find(|t| &t.id == id && &t.user_id == user_id)
            .ok_or_else(|| DomainError::new(ErrorCode::TaskNotFound, "task not found"))?;
        task.set_status(status);
        Ok(task.clone())
    }

    async fn delete(&self, user_id: &ProfileId, id: &TaskId) -> Result<(), DomainError> {
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|t| !(t.id == *id && t.user_id == *user_id));
        if tasks.len() == before {
            return Err(DomainError::new(ErrorCode::TaskNotFound, "task not found"));
        }
        Ok(())
    }
}
