//! Tests for the user record model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn user() -> User {
    User::new(
        UserId::FIRST,
        NewUser {
            name: "Alice Johnson".to_owned(),
            email: "alice.johnson@example.com".to_owned(),
            role: Role::Admin,
        },
    )
}

#[rstest]
fn user_id_rejects_zero() {
    assert_eq!(UserId::new(0), Err(UserValidationError::NonPositiveId));
}

#[rstest]
fn successor_stops_at_the_end_of_the_id_space() {
    let last = UserId::new(u32::MAX).expect("non-zero id");
    assert!(last.successor().is_none());
    assert_eq!(UserId::FIRST.successor().map(UserId::get), Some(2));
}

#[rstest]
#[case("INTERN", Role::Intern)]
#[case("ENGINEER", Role::Engineer)]
#[case("ADMIN", Role::Admin)]
fn roles_parse_from_wire_names(#[case] raw: &str, #[case] expected: Role) {
    assert_eq!(raw.parse::<Role>(), Ok(expected));
}

#[rstest]
#[case("admin")]
#[case("MANAGER")]
#[case("")]
fn unknown_roles_are_rejected(#[case] raw: &str) {
    assert_eq!(raw.parse::<Role>(), Err(RoleParseError(raw.to_owned())));
}

#[rstest]
fn user_serialises_to_flat_json(user: User) {
    let value = serde_json::to_value(&user).expect("serialises");
    assert_eq!(
        value,
        json!({
            "id": 1,
            "name": "Alice Johnson",
            "email": "alice.johnson@example.com",
            "role": "ADMIN"
        })
    );
}

#[rstest]
fn user_with_zero_id_fails_to_deserialise() {
    let result = serde_json::from_value::<User>(json!({
        "id": 0,
        "name": "Nobody",
        "email": "nobody@example.com",
        "role": "INTERN"
    }));
    assert!(result.is_err());
}

#[rstest]
fn patch_only_replaces_supplied_fields(user: User) {
    let patch = UserPatch {
        name: Some("X".to_owned()),
        ..UserPatch::default()
    };

    let patched = user.patched(&patch);

    assert_eq!(patched.id(), user.id());
    assert_eq!(patched.name(), "X");
    assert_eq!(patched.email(), user.email());
    assert_eq!(patched.role(), user.role());
}

#[rstest]
fn empty_patch_is_identity(user: User) {
    assert_eq!(user.patched(&UserPatch::default()), user);
}
