//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and only see domain
//! ports, so they can be exercised against any implementation.

use std::sync::Arc;

use crate::domain::UsersService;
use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read use-cases.
    pub users: Arc<dyn UsersQuery>,
    /// Write use-cases.
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(users: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users,
            users_command,
        }
    }

    /// Serve both ports from one [`UsersService`].
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_registry::domain::UsersService;
    /// use user_registry::inbound::http::state::HttpState;
    /// use user_registry::outbound::memory::InMemoryUserRepository;
    ///
    /// let service = UsersService::new(Arc::new(InMemoryUserRepository::seeded()));
    /// let state = HttpState::from_service(service);
    /// let _users = state.users.clone();
    /// ```
    pub fn from_service(service: UsersService) -> Self {
        let service = Arc::new(service);
        Self::new(service.clone(), service)
    }
}
