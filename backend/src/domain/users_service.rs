//! User directory use-cases.
//!
//! [`UsersService`] owns the not-found policy: the repository reports
//! absence as `None` or an empty list, and the service decides which of
//! those are failures. A filtered listing with no match fails while an
//! unfiltered listing of an empty store does not.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::ports::{UserRepository, UserRepositoryError, UsersCommand, UsersQuery};
use super::{Error, NewUser, Role, User, UserId, UserPatch};

/// Message used when a role filter matches nobody.
pub const ROLE_NOT_FOUND_MESSAGE: &str = "User Role Not Found";
/// Message used when no user has the requested id.
pub const USER_NOT_FOUND_MESSAGE: &str = "User Not Found";

/// Query and command implementation over a [`UserRepository`].
#[derive(Clone)]
pub struct UsersService {
    repository: Arc<dyn UserRepository>,
}

impl UsersService {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Validation { message } => Error::validation_failed(message),
        UserRepositoryError::Unavailable { .. } | UserRepositoryError::IdsExhausted => {
            Error::internal(error.to_string())
        }
    }
}

fn user_not_found(id: UserId) -> Error {
    debug!(user_id = %id, "user lookup missed");
    Error::not_found(USER_NOT_FOUND_MESSAGE)
}

#[async_trait]
impl UsersQuery for UsersService {
    async fn list_users(&self, role: Option<Role>) -> Result<Vec<User>, Error> {
        let users = self
            .repository
            .list(role)
            .await
            .map_err(map_repository_error)?;
        if role.is_some() && users.is_empty() {
            return Err(Error::not_found(ROLE_NOT_FOUND_MESSAGE));
        }
        Ok(users)
    }

    async fn find_user(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| user_not_found(id))
    }
}

#[async_trait]
impl UsersCommand for UsersService {
    async fn create_user(&self, fields: NewUser) -> Result<User, Error> {
        let user = self
            .repository
            .insert(fields)
            .await
            .map_err(map_repository_error)?;
        debug!(user_id = %user.id(), role = %user.role(), "user created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User, Error> {
        self.repository
            .update(id, patch)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| user_not_found(id))
    }

    async fn delete_user(&self, id: UserId) -> Result<User, Error> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| user_not_found(id))?;
        debug!(user_id = %id, "user deleted");
        Ok(removed)
    }
}
