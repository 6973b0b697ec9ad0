use std::sync::Arc;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::invalidation::{
    CacheInvalidator, LoggingInvalidator, MutationEvent, invalidation_for,
};
use crate::models::{CreateUser, UpdateUser, User, UserFilter};
use crate::repository::UserRepository;

/// Service layer for User business logic.
///
/// Sits between the HTTP handlers and the repository: validates input,
/// assigns identity and timestamps, and reports the cache invalidation
/// targets of every completed mutation to the injected [`CacheInvalidator`].
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    invalidator: Arc<dyn CacheInvalidator>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self::with_invalidator(repository, Arc::new(LoggingInvalidator))
    }

    pub fn with_invalidator(repository: R, invalidator: Arc<dyn CacheInvalidator>) -> Self {
        Self {
            repository: Arc::new(repository),
            invalidator,
        }
    }

    /// Create a new user
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        validate_not_blank(&input.name, "name")?;
        validate_not_blank(&input.email, "email")?;

        let user = User::new(input.name, input.email, input.role.unwrap_or_default());

        let created = self.repository.create(user).await?;

        self.invalidator
            .invalidate(&invalidation_for(&MutationEvent::Created));
        Ok(created)
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: Uuid) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// List users, returning the requested page and the pre-pagination total
    pub async fn list_users(&self, filter: UserFilter) -> UserResult<(Vec<User>, usize)> {
        if filter.page < 1 {
            return Err(UserError::Validation("page must be at least 1".to_string()));
        }
        if filter.limit < 1 {
            return Err(UserError::Validation(
                "limit must be at least 1".to_string(),
            ));
        }

        self.repository.list(filter).await
    }

    /// Update a user with a partial patch
    pub async fn update_user(&self, id: Uuid, input: UpdateUser) -> UserResult<User> {
        if let Some(ref name) = input.name {
            validate_not_blank(name, "name")?;
        }
        if let Some(ref email) = input.email {
            validate_not_blank(email, "email")?;
        }

        let mut user = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        // Check for duplicate email only when the email actually changes
        if let Some(ref new_email) = input.email {
            if new_email.to_lowercase() != user.email.to_lowercase()
                && self.repository.email_exists(new_email).await?
            {
                return Err(UserError::DuplicateEmail(new_email.clone()));
            }
        }

        user.apply_update(input);

        let updated = self.repository.update(user).await?;

        self.invalidator
            .invalidate(&invalidation_for(&MutationEvent::Updated(id)));
        Ok(updated)
    }

    /// Delete a user, returning the removed record
    pub async fn delete_user(&self, id: Uuid) -> UserResult<User> {
        let removed = self
            .repository
            .delete(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        self.invalidator
            .invalidate(&invalidation_for(&MutationEvent::Deleted(id)));
        Ok(removed)
    }
}

fn validate_not_blank(value: &str, field: &str) -> UserResult<()> {
    if value.trim().is_empty() {
        return Err(UserError::Validation(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}
