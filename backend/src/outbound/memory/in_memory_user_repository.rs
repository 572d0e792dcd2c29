//! Process-local `UserRepository` adapter.
//!
//! Records live in a `Vec` in insertion order behind a single mutex, so
//! operations from concurrent actix workers are serialised. The guard is
//! never held across an `.await`.
//!
//! New ids are the current maximum plus one. Removing the highest record
//! therefore frees its id for the next insert.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{NewUser, Role, User, UserId, UserPatch};

use super::record_validation::{Operation, validate_record};
use super::seed::demo_roster;

/// In-memory user store. Contents reset when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `users` in the given order.
    ///
    /// Callers are responsible for the ids being unique.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    /// Create a store holding the [`demo_roster`].
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_users(demo_roster())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<User>>, UserRepositoryError> {
        self.users.lock().map_err(|error| {
            warn!(%error, "user store lock poisoned");
            UserRepositoryError::unavailable(error.to_string())
        })
    }
}

fn next_id(users: &[User]) -> Result<UserId, UserRepositoryError> {
    match users.iter().map(User::id).max() {
        None => Ok(UserId::FIRST),
        Some(max) => max.successor().ok_or(UserRepositoryError::IdsExhausted),
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self, role: Option<Role>) -> Result<Vec<User>, UserRepositoryError> {
        let users = self.lock()?;
        Ok(match role {
            Some(role) => users
                .iter()
                .filter(|user| user.role() == role)
                .cloned()
                .collect(),
            None => users.clone(),
        })
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let users = self.lock()?;
        Ok(users.iter().find(|user| user.id() == id).cloned())
    }

    async fn insert(&self, fields: NewUser) -> Result<User, UserRepositoryError> {
        let mut users = self.lock()?;
        let user = User::new(next_id(&users)?, fields);
        validate_record(Operation::Create, &user)?;
        users.push(user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        id: UserId,
        patch: UserPatch,
    ) -> Result<Option<User>, UserRepositoryError> {
        let mut users = self.lock()?;
        let Some(slot) = users.iter_mut().find(|user| user.id() == id) else {
            return Ok(None);
        };
        let updated = slot.patched(&patch);
        validate_record(Operation::Update, &updated)?;
        *slot = updated.clone();
        Ok(Some(updated))
    }

    async fn delete(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut users = self.lock()?;
        let Some(position) = users.iter().position(|user| user.id() == id) else {
            return Ok(None);
        };
        Ok(Some(users.remove(position)))
    }
}

#[cfg(test)]
mod tests {
    //! Store semantics: id assignment, ordering and all-or-nothing writes.

    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryUserRepository {
        InMemoryUserRepository::seeded()
    }

    fn id(raw: u32) -> UserId {
        UserId::new(raw).expect("fixture ids are positive")
    }

    fn new_user(name: &str, email: &str, role: Role) -> NewUser {
        NewUser {
            name: name.to_owned(),
            email: email.to_owned(),
            role,
        }
    }

    fn ids(users: &[User]) -> Vec<u32> {
        users.iter().map(|user| user.id().get()).collect()
    }

    #[rstest]
    #[tokio::test]
    async fn list_without_filter_returns_everything_in_order(store: InMemoryUserRepository) {
        let users = store.list(None).await.expect("list");
        assert_eq!(ids(&users), (1..=10).collect::<Vec<_>>());
    }

    #[rstest]
    #[tokio::test]
    async fn list_with_filter_preserves_relative_order(store: InMemoryUserRepository) {
        let interns = store.list(Some(Role::Intern)).await.expect("list");
        assert_eq!(ids(&interns), vec![3, 6, 9]);
    }

    #[rstest]
    #[tokio::test]
    async fn first_insert_into_empty_store_gets_id_one() {
        let store = InMemoryUserRepository::new();
        let user = store
            .insert(new_user("Z", "z@x.com", Role::Admin))
            .await
            .expect("insert");
        assert_eq!(user.id(), UserId::FIRST);
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_max_plus_one_and_appends(store: InMemoryUserRepository) {
        let created = store
            .insert(new_user("Z", "z@x.com", Role::Admin))
            .await
            .expect("insert");
        assert_eq!(created.id().get(), 11);

        let users = store.list(None).await.expect("list");
        assert_eq!(users.last(), Some(&created));
    }

    #[rstest]
    #[tokio::test]
    async fn inserted_record_is_found_by_its_id(store: InMemoryUserRepository) {
        let created = store
            .insert(new_user("Z", "z@x.com", Role::Engineer))
            .await
            .expect("insert");

        let found = store.find_by_id(created.id()).await.expect("find");

        assert_eq!(found, Some(created));
    }

    #[rstest]
    #[tokio::test]
    async fn deleting_the_highest_record_frees_its_id(store: InMemoryUserRepository) {
        let first = store
            .insert(new_user("Z", "z@x.com", Role::Admin))
            .await
            .expect("insert");
        store.delete(first.id()).await.expect("delete");

        let second = store
            .insert(new_user("Y", "y@x.com", Role::Admin))
            .await
            .expect("insert");
        assert_eq!(second.id(), first.id());
    }

    #[rstest]
    #[tokio::test]
    async fn ids_below_the_maximum_are_not_reused(store: InMemoryUserRepository) {
        store.delete(id(4)).await.expect("delete");
        let created = store
            .insert(new_user("Z", "z@x.com", Role::Admin))
            .await
            .expect("insert");
        assert_eq!(created.id().get(), 11);
    }

    #[rstest]
    #[tokio::test]
    async fn insert_fails_when_ids_run_out() {
        let last = User::new(
            id(u32::MAX),
            new_user("Last", "last@example.com", Role::Admin),
        );
        let store = InMemoryUserRepository::with_users(vec![last]);

        let result = store.insert(new_user("Z", "z@x.com", Role::Admin)).await;
        assert_eq!(result, Err(UserRepositoryError::IdsExhausted));
    }

    #[rstest]
    #[tokio::test]
    async fn update_replaces_in_place(store: InMemoryUserRepository) {
        let patch = UserPatch {
            role: Some(Role::Admin),
            ..UserPatch::default()
        };
        let updated = store
            .update(id(2), patch)
            .await
            .expect("update")
            .expect("present");
        assert_eq!(updated.role(), Role::Admin);
        assert_eq!(updated.name(), "Bob Smith");

        let users = store.list(None).await.expect("list");
        assert_eq!(users.get(1), Some(&updated));
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_missing_record_changes_nothing(store: InMemoryUserRepository) {
        let before = store.list(None).await.expect("list");
        let result = store
            .update(id(999), UserPatch::default())
            .await
            .expect("update");
        assert!(result.is_none());
        assert_eq!(store.list(None).await.expect("list"), before);
    }

    #[rstest]
    #[tokio::test]
    async fn rejected_insert_leaves_store_untouched(store: InMemoryUserRepository) {
        let result = store
            .insert(new_user("Z", "not-an-email", Role::Admin))
            .await;
        assert!(matches!(result, Err(UserRepositoryError::Validation { .. })));
        assert_eq!(store.list(None).await.expect("list").len(), 10);
    }

    #[rstest]
    #[tokio::test]
    async fn rejected_update_leaves_record_untouched(store: InMemoryUserRepository) {
        let before = store.find_by_id(id(5)).await.expect("find");
        let patch = UserPatch {
            name: Some("Renamed".to_owned()),
            email: Some("broken".to_owned()),
            role: None,
        };

        let result = store.update(id(5), patch).await;

        assert!(matches!(result, Err(UserRepositoryError::Validation { .. })));
        assert_eq!(store.find_by_id(id(5)).await.expect("find"), before);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_returns_record_as_it_was(store: InMemoryUserRepository) {
        let before = store.find_by_id(id(7)).await.expect("find");
        let removed = store.delete(id(7)).await.expect("delete");
        assert_eq!(removed, before);
        assert!(store.find_by_id(id(7)).await.expect("find").is_none());
        assert!(store.delete(id(7)).await.expect("delete").is_none());
    }
}
