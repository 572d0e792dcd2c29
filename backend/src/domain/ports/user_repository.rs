//! Driven port for user record storage.
//!
//! Adapters own the collection. Every operation either completes or fails
//! before any mutation is observable; lookups that find nothing return
//! `None` and leave the not-found policy to the domain.

use async_trait::async_trait;

use crate::domain::{NewUser, Role, User, UserId, UserPatch};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// The record violates the store's field constraints.
        Validation { message: String } => "{message}",
        /// The store cannot serve requests (for example a poisoned lock).
        Unavailable { message: String } => "user store unavailable: {message}",
        /// No identifier is left to assign.
        IdsExhausted => "user identifier space exhausted",
    }
}

/// Port for user record storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return records in insertion order, narrowed to `role` when given.
    async fn list(&self, role: Option<Role>) -> Result<Vec<User>, UserRepositoryError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Assign an identifier, append the record and return it.
    async fn insert(&self, fields: NewUser) -> Result<User, UserRepositoryError>;

    /// Merge `patch` into the record in place and return the result, or
    /// `None` when no record has `id`.
    async fn update(
        &self,
        id: UserId,
        patch: UserPatch,
    ) -> Result<Option<User>, UserRepositoryError>;

    /// Remove the record and return it as it was, or `None` when absent.
    async fn delete(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;
}
