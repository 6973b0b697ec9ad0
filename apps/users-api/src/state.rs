//! Application state management

use domain_users::InMemoryUserRepository;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub users: InMemoryUserRepository,
}
