//! Users Domain
//!
//! This module provides a complete domain implementation for user management
//! with cache invalidation tagging.
//!
//! # Features
//!
//! - User CRUD operations over an in-memory, insertion-ordered store
//! - Case-insensitive email uniqueness
//! - Paginated listing with substring search
//! - Pure invalidation policy mapping mutations to cache tags and paths
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌──────────────┐
//! │   Service   │ ──▶ │ Invalidation │  ← mutation → cache tags/paths
//! └──────┬──────┘     └──────────────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     handlers,
//!     repository::InMemoryUserRepository,
//!     service::UserService,
//! };
//!
//! // Create repository and service
//! let repository = InMemoryUserRepository::with_seed_users();
//! let service = UserService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod invalidation;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use invalidation::{
    CacheInvalidator, Invalidation, LoggingInvalidator, MutationEvent, invalidation_for,
};
pub use models::{CreateUser, Role, UpdateUser, User, UserFilter};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
