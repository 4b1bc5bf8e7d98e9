//! Employee records.

use serde::{Deserialize, Serialize};

use super::Identified;

/// A staff member. The collection is append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "puesto")]
    pub position: String,
}

impl Identified for Employee {
    fn id(&self) -> &str {
        &self.id
    }
}
