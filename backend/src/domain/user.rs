//! User data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Identifiers start at one.
    #[error("id must be a positive integer")]
    NonPositiveId,
}

/// Store-assigned user identifier.
///
/// ## Invariants
/// - Always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct UserId(u32);

impl UserId {
    /// Identifier given to the first record of an empty store.
    pub const FIRST: Self = Self(1);

    /// Validate and construct a [`UserId`].
    ///
    /// # Examples
    /// ```
    /// use user_registry::domain::UserId;
    ///
    /// assert_eq!(UserId::new(7).map(UserId::get), Ok(7));
    /// assert!(UserId::new(0).is_err());
    /// ```
    pub const fn new(raw: u32) -> Result<Self, UserValidationError> {
        if raw == 0 {
            return Err(UserValidationError::NonPositiveId);
        }
        Ok(Self(raw))
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The identifier immediately after this one, or `None` once the id space
    /// is exhausted.
    #[must_use]
    pub fn successor(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for u32 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<u32> for UserId {
    type Error = UserValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Role assigned to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Intern.
    Intern,
    /// Engineer.
    Engineer,
    /// Administrator.
    Admin,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Self; 3] = [Self::Intern, Self::Engineer, Self::Admin];

    /// Wire representation of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intern => "INTERN",
            Self::Engineer => "ENGINEER",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| RoleParseError(s.to_owned()))
    }
}

/// Fields supplied when creating a user; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Full name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Assigned role.
    pub role: Role,
}

/// Partial update applied field by field. The id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement email address.
    pub email: Option<String>,
    /// Replacement role.
    pub role: Option<Role>,
}

/// A user record.
///
/// ## Invariants
/// - `id` is assigned by the store and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(value_type = u32, example = 1)]
    id: UserId,
    #[schema(example = "Alice Johnson")]
    name: String,
    #[schema(example = "alice.johnson@example.com")]
    email: String,
    role: Role,
}

impl User {
    /// Build a record from an assigned id and creation fields.
    pub fn new(id: UserId, fields: NewUser) -> Self {
        let NewUser { name, email, role } = fields;
        Self {
            id,
            name,
            email,
            role,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Full name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Assigned role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Return a copy with the patch merged over the current fields.
    ///
    /// # Examples
    /// ```
    /// use user_registry::domain::{NewUser, Role, User, UserId, UserPatch};
    ///
    /// let user = User::new(
    ///     UserId::FIRST,
    ///     NewUser { name: "Ada".into(), email: "ada@example.com".into(), role: Role::Admin },
    /// );
    /// let patched = user.patched(&UserPatch { name: Some("X".into()), ..UserPatch::default() });
    /// assert_eq!(patched.name(), "X");
    /// assert_eq!(patched.email(), "ada@example.com");
    /// assert_eq!(patched.id(), user.id());
    /// ```
    #[must_use]
    pub fn patched(&self, patch: &UserPatch) -> Self {
        Self {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            email: patch.email.clone().unwrap_or_else(|| self.email.clone()),
            role: patch.role.unwrap_or(self.role),
        }
    }
}

#[cfg(test)]
mod tests;
