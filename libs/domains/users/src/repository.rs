use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{Role, User, UserFilter};

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user, enforcing email uniqueness
    async fn create(&self, user: User) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// List users matching the filter, returning the page and the total
    /// number of matches before pagination
    async fn list(&self, filter: UserFilter) -> UserResult<(Vec<User>, usize)>;

    /// Replace an existing user record
    async fn update(&self, user: User) -> UserResult<User>;

    /// Remove a user by ID, returning the removed record
    async fn delete(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Check if an email is already taken (case-insensitive)
    async fn email_exists(&self, email: &str) -> UserResult<bool>;
}

/// In-memory implementation of UserRepository.
///
/// Records live in a `Vec` so list pages come back in insertion order, and
/// every mutation runs under the write lock so the email-uniqueness check and
/// the matching insert cannot interleave with another mutation.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Build a repository pre-populated with a small demo data set.
    pub fn with_seed_users() -> Self {
        let seed = vec![
            User::new(
                "Alice Hong".to_string(),
                "alice@example.com".to_string(),
                Role::Admin,
            ),
            User::new(
                "Ben Kim".to_string(),
                "ben@example.com".to_string(),
                Role::User,
            ),
        ];

        Self {
            users: Arc::new(RwLock::new(seed)),
        }
    }

    fn matches_search(user: &User, search: &str) -> bool {
        let needle = search.to_lowercase();
        user.name.to_lowercase().contains(&needle) || user.email.to_lowercase().contains(&needle)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        // Check for duplicate email
        let email_exists = users
            .iter()
            .any(|u| u.email.to_lowercase() == user.email.to_lowercase());

        if email_exists {
            return Err(UserError::DuplicateEmail(user.email));
        }

        users.push(user.clone());

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self, filter: UserFilter) -> UserResult<(Vec<User>, usize)> {
        let users = self.users.read().await;

        let matching: Vec<&User> = users
            .iter()
            .filter(|u| {
                filter
                    .search
                    .as_deref()
                    .is_none_or(|s| Self::matches_search(u, s))
            })
            .collect();

        let total = matching.len();

        // Stable insertion-order pagination; pages past the end are empty
        let items: Vec<User> = matching
            .into_iter()
            .skip(filter.page.saturating_sub(1).saturating_mul(filter.limit))
            .take(filter.limit)
            .cloned()
            .collect();

        Ok((items, total))
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        let Some(index) = users.iter().position(|u| u.id == user.id) else {
            return Err(UserError::NotFound(user.id));
        };

        // Check for duplicate email (excluding the record itself)
        let email_exists = users
            .iter()
            .any(|u| u.id != user.id && u.email.to_lowercase() == user.email.to_lowercase());

        if email_exists {
            return Err(UserError::DuplicateEmail(user.email));
        }

        users[index] = user.clone();

        tracing::info!(user_id = %user.id, "Updated user");
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> UserResult<Option<User>> {
        let mut users = self.users.write().await;

        let Some(index) = users.iter().position(|u| u.id == id) else {
            return Ok(None);
        };

        let removed = users.remove(index);

        tracing::info!(user_id = %id, "Deleted user");
        Ok(Some(removed))
    }

    async fn email_exists(&self, email: &str) -> UserResult<bool> {
        let users = self.users.read().await;
        let exists = users
            .iter()
            .any(|u| u.email.to_lowercase() == email.to_lowercase());
        Ok(exists)
    }
}
