//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct UserTable {
    rows: BTreeMap<UserId, User>,
    /// Unique index: username -> user ID
    username_index: HashMap<String, UserId>,
    last_id: i64,
}

/// In-memory implementation of UserRepository.
///
/// Every write runs under a single write guard, so a failed insert leaves the
/// table and its index untouched.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        if table.username_index.contains_key(&user.username) {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                user.username
            )));
        }

        table.last_id += 1;
        let user = user.into_user(UserId::new(table.last_id));

        table
            .username_index
            .insert(user.username().to_string(), user.id());
        table.rows.insert(user.id(), user.clone());

        Ok(user)
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;

        Ok(table
            .username_index
            .get(username)
            .and_then(|id| table.rows.get(id))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.table.read().await.rows.len())
    }
}
