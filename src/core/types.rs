use serde::{Deserialize, Serialize};

/// A single row of the `employees` table.
///
/// Fields missing from a JSON payload decode to their zero value so that
/// the validator reports them instead of the decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Employee {
    /// Caller-assigned primary key.
    pub id: i64,
    pub name: String,
    pub position: String,
    pub salary: f64,
}

impl Employee {
    pub fn new(id: i64, name: &str, position: &str, salary: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            position: position.to_string(),
            salary,
        }
    }
}
