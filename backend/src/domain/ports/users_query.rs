//! Driving port for user read use-cases.

use async_trait::async_trait;

use crate::domain::{Error, Role, User, UserId};

/// Domain use-case port for reading users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// List every user, or only those with `role`.
    ///
    /// An unfiltered listing never fails for lack of records; a filtered one
    /// fails with [`ErrorCode::NotFound`](crate::domain::ErrorCode::NotFound)
    /// when nothing matches.
    async fn list_users(&self, role: Option<Role>) -> Result<Vec<User>, Error>;

    /// Fetch one user.
    async fn find_user(&self, id: UserId) -> Result<User, Error>;
}
