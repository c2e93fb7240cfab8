//! Account service for registration and login

use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{NewUser, User, UserRepository};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Message returned for any failed login, whichever factor was wrong
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Request for registering a new account
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Account service for registration and authentication
#[derive(Debug)]
pub struct AccountService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> AccountService<R, H> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new user; the password is stored only as a salted hash
    pub async fn register(&self, request: RegisterRequest) -> Result<User, DomainError> {
        let password_hash = self.hasher.hash(&request.password)?;

        let user = self
            .repository
            .create(NewUser::new(request.username, password_hash))
            .await?;

        debug!(user_id = %user.id(), "Registered user");
        Ok(user)
    }

    /// Authenticate with username and password.
    ///
    /// Unknown usernames and wrong passwords both yield the same
    /// `Unauthorized` error.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, DomainError> {
        let user = self
            .repository
            .get_by_username(username)
            .await?
            .ok_or_else(|| DomainError::unauthorized(INVALID_CREDENTIALS))?;

        if !self.hasher.verify(password, user.password_hash()) {
            return Err(DomainError::unauthorized(INVALID_CREDENTIALS));
        }

        debug!(user_id = %user.id(), "User logged in");
        Ok(user)
    }

    /// List all users
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    /// Count users
    pub async fn count_users(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}
