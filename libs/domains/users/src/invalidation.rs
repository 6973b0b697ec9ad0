//! Cache invalidation policy for user mutations.
//!
//! Completed mutations map to a fixed set of logical cache tags and display
//! paths. The mapping is pure; whoever owns a cache decides what dropping a
//! tag actually means. The [`CacheInvalidator`] seam carries the result to
//! that owner.

use uuid::Uuid;

/// Tag grouping every cached read that involves users.
pub const USERS_TAG: &str = "users";

/// Tag for cached list views.
pub const USERS_LIST_TAG: &str = "users-list";

/// Display path of the user list view.
pub const USERS_LIST_PATH: &str = "/api/users";

/// Entity tag for a single user.
pub fn user_tag(id: Uuid) -> String {
    format!("user-{}", id)
}

/// Display path of a single user's detail view.
pub fn user_detail_path(id: Uuid) -> String {
    format!("{}/{}", USERS_LIST_PATH, id)
}

/// A completed repository mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationEvent {
    Created,
    Updated(Uuid),
    Deleted(Uuid),
}

/// Ordered invalidation targets produced for one mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invalidation {
    pub tags: Vec<String>,
    pub paths: Vec<String>,
}

/// Map a mutation event to the tags and paths that must be invalidated.
///
/// | Event        | Tags                               | Paths                  |
/// |--------------|------------------------------------|------------------------|
/// | `Created`    | `users`, `users-list`              | list view              |
/// | `Updated(id)`| `users`, `users-list`, `user-<id>` | list view, detail view |
/// | `Deleted(id)`| `users`, `users-list`, `user-<id>` | list view              |
pub fn invalidation_for(event: &MutationEvent) -> Invalidation {
    match event {
        MutationEvent::Created => Invalidation {
            tags: vec![USERS_TAG.to_string(), USERS_LIST_TAG.to_string()],
            paths: vec![USERS_LIST_PATH.to_string()],
        },
        MutationEvent::Updated(id) => Invalidation {
            tags: vec![
                USERS_TAG.to_string(),
                USERS_LIST_TAG.to_string(),
                user_tag(*id),
            ],
            paths: vec![USERS_LIST_PATH.to_string(), user_detail_path(*id)],
        },
        MutationEvent::Deleted(id) => Invalidation {
            tags: vec![
                USERS_TAG.to_string(),
                USERS_LIST_TAG.to_string(),
                user_tag(*id),
            ],
            paths: vec![USERS_LIST_PATH.to_string()],
        },
    }
}

/// Seam towards whatever cache sits in front of the API.
///
/// The service invokes this after every successful mutation. Implementations
/// must not fail: invalidation targets are advisory and the mutation has
/// already been committed.
pub trait CacheInvalidator: Send + Sync {
    fn invalidate(&self, invalidation: &Invalidation);
}

/// Default invalidator: records the produced targets in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingInvalidator;

impl CacheInvalidator for LoggingInvalidator {
    fn invalidate(&self, invalidation: &Invalidation) {
        tracing::debug!(
            tags = ?invalidation.tags,
            paths = ?invalidation.paths,
            "cache invalidation"
        );
    }
}
