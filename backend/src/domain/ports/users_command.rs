//! Driving port for user write use-cases.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId, UserPatch};

/// Domain use-case port for creating, patching and removing users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Create a user and return it with its assigned id.
    async fn create_user(&self, fields: NewUser) -> Result<User, Error>;

    /// Apply a partial update and return the updated user.
    async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User, Error>;

    /// Remove a user and return the record as it was before removal.
    async fn delete_user(&self, id: UserId) -> Result<User, Error>;
}
