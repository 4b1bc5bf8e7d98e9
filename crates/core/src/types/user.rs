//! Users and session identity.

use serde::{Deserialize, Serialize};

/// Role of a panel user.
///
/// Serialized with the Spanish labels shown in the panel header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Store administrator.
    Administrador,
    /// Regular staff account.
    Empleado,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Administrador => write!(f, "Administrador"),
            Self::Empleado => write!(f, "Empleado"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Administrador" => Ok(Self::Administrador),
            "Empleado" => Ok(Self::Empleado),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

/// A known user of the panel.
///
/// Users are fixed at process start and never persisted; only the
/// [`CurrentUser`] derived from one is written to the session key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    /// Login name.
    pub username: &'static str,
    /// Plaintext demo password.
    pub password: &'static str,
    /// Permission level.
    pub role: Role,
}

/// Session-stored user identity.
///
/// Records written by older clients also carry a `password` field; it is
/// ignored on decode and never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Login name.
    pub username: String,
    /// Permission level.
    #[serde(rename = "rol")]
    pub role: Role,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.to_string(),
            role: user.role,
        }
    }
}

impl std::fmt::Display for CurrentUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.username, self.role)
    }
}
