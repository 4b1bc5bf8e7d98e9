//! Credential check against the built-in demo users.
//!
//! Passwords are compared in plaintext. There is no hashing, lockout or
//! rate limiting: the user list is a fixed demo set.

use almacen_core::{Role, User};

/// Users accepted by the login form.
pub const DEMO_USERS: &[User] = &[
    User {
        username: "admin",
        password: "1234",
        role: Role::Administrador,
    },
    User {
        username: "empleado1",
        password: "abcd",
        role: Role::Empleado,
    },
];

/// Look up the demo user matching `username` and `password`.
///
/// Both inputs are trimmed before comparison.
#[must_use]
pub fn authenticate(username: &str, password: &str) -> Option<&'static User> {
    authenticate_against(DEMO_USERS, username, password)
}

/// Exact-match scan over `users`; the first match wins.
#[must_use]
pub fn authenticate_against<'a>(
    users: &'a [User],
    username: &str,
    password: &str,
) -> Option<&'a User> {
    let (username, password) = (username.trim(), password.trim());
    users
        .iter()
        .find(|user| user.username == username && user.password == password)
}
