//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::user::{NewUser, User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::storage::{is_unique_violation, storage_error};

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(storage_error("Failed to begin transaction"))?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::conflict(format!("Username '{}' already exists", user.username))
            } else {
                DomainError::storage(format!("Failed to create user: {}", e))
            }
        })?;

        tx.commit()
            .await
            .map_err(storage_error("Failed to commit user"))?;

        Ok(user.into_user(UserId::new(id)))
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error("Failed to get user by username"))?;

        Ok(row.map(|row| row_to_user(&row)))
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query("SELECT id, username, password_hash FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error("Failed to list users"))?;

        Ok(rows.iter().map(row_to_user).collect())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error("Failed to count users"))?;

        Ok(count as usize)
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> User {
    User::new(
        UserId::new(row.get("id")),
        row.get::<String, _>("username"),
        row.get::<String, _>("password_hash"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::TestDatabase;

    #[tokio::test]
    #[ignore = "Requires running PostgreSQL"]
    async fn test_list_empty_table() {
        let db = TestDatabase::new().await;
        let repo = PostgresUserRepository::new(db.pool.clone());

        assert!(repo.list().await.unwrap().is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);

        db.cleanup().await;
    }

    #[tokio::test]
    #[ignore = "Requires running PostgreSQL"]
    async fn test_create_and_lookup() {
        let db = TestDatabase::new().await;
        let repo = PostgresUserRepository::new(db.pool.clone());

        let created = repo.create(NewUser::new("alice", "hash")).await.unwrap();
        let found = repo.get_by_username("alice").await.unwrap().unwrap();

        assert_eq!(found.id(), created.id());
        assert_eq!(found.password_hash(), "hash");
        assert!(repo.get_by_username("bob").await.unwrap().is_none());

        db.cleanup().await;
    }

    #[tokio::test]
    #[ignore = "Requires running PostgreSQL"]
    async fn test_duplicate_username_is_conflict() {
        let db = TestDatabase::new().await;
        let repo = PostgresUserRepository::new(db.pool.clone());

        repo.create(NewUser::new("alice", "hash")).await.unwrap();
        let result = repo.create(NewUser::new("alice", "other")).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        assert_eq!(repo.count().await.unwrap(), 1);

        db.cleanup().await;
    }
}
