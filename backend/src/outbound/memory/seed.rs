//! Demo roster loaded at startup.

use std::iter;

use crate::domain::{NewUser, Role, User, UserId};

const ROSTER: [(&str, &str, Role); 10] = [
    ("Alice Johnson", "alice.johnson@example.com", Role::Admin),
    ("Bob Smith", "bob.smith@example.com", Role::Engineer),
    ("Charlie Brown", "charlie.brown@example.com", Role::Intern),
    ("Diana Prince", "diana.prince@example.com", Role::Admin),
    ("Evan Davis", "evan.davis@example.com", Role::Engineer),
    ("Fiona White", "fiona.white@example.com", Role::Intern),
    ("George Martin", "george.martin@example.com", Role::Engineer),
    ("Hannah Lee", "hannah.lee@example.com", Role::Admin),
    ("Ian Clarke", "ian.clarke@example.com", Role::Intern),
    ("Jasmine Taylor", "jasmine.taylor@example.com", Role::Engineer),
];

/// The ten demo users, with ids 1 through 10 in insertion order.
#[must_use]
pub fn demo_roster() -> Vec<User> {
    iter::successors(Some(UserId::FIRST), |id| id.successor())
        .zip(ROSTER)
        .map(|(id, (name, email, role))| {
            User::new(
                id,
                NewUser {
                    name: name.to_owned(),
                    email: email.to_owned(),
                    role,
                },
            )
        })
        .collect()
}
