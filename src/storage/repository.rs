use crate::core::{Employee, Result};
use async_trait::async_trait;

/// Persistence operations over the `employees` table.
///
/// Each call is a single round-trip to the backing store, except `update`
/// and `delete` which look the row up first. Implementations are shared
/// across requests behind an `Arc` and must be safe to call concurrently.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Create the backing table if it does not exist yet.
    async fn init(&self) -> Result<()>;

    /// Insert a new row. Fails with `StoreError::Conflict` on a duplicate id.
    async fn insert(&self, employee: &Employee) -> Result<()>;

    /// Overwrite name, position and salary of an existing row.
    async fn update(&self, employee: &Employee) -> Result<()>;

    async fn delete(&self, id: i64) -> Result<()>;

    /// Point lookup by id.
    async fn get(&self, id: i64) -> Result<Employee>;

    /// Range lookup ordered by ascending id. Out-of-range pages are empty.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Employee>>;

    /// Cheapest possible round-trip, used by readiness checks.
    async fn ping(&self) -> Result<()>;
}
