use super::repository::EmployeeRepository;
use crate::connection::{StoreConfig, connect};
use crate::core::{Employee, Result, StoreError};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    position TEXT NOT NULL,
    salary REAL NOT NULL
)
"#;

/// SQLite-backed [`EmployeeRepository`].
///
/// Cloning is cheap and shares the underlying pool.
#[derive(Clone)]
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl std::fmt::Debug for SqliteEmployeeRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteEmployeeRepository")
            .finish_non_exhaustive()
    }
}

impl SqliteEmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool from `config` and wrap it.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        Ok(Self::new(connect(config).await?))
    }

    /// Private in-memory store with the schema already created.
    pub async fn in_memory() -> Result<Self> {
        let repo = Self::connect(&StoreConfig::in_memory()).await?;
        repo.init().await?;
        Ok(repo)
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn init(&self) -> Result<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        debug!("employees table ready");
        Ok(())
    }

    async fn insert(&self, employee: &Employee) -> Result<()> {
        sqlx::query("INSERT INTO employees (id, name, position, salary) VALUES (?, ?, ?, ?)")
            .bind(employee.id)
            .bind(&employee.name)
            .bind(&employee.position)
            .bind(employee.salary)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from_insert)?;
        Ok(())
    }

    async fn update(&self, employee: &Employee) -> Result<()> {
        self.get(employee.id).await?;

        let result =
            sqlx::query("UPDATE employees SET name = ?, position = ?, salary = ? WHERE id = ?")
                .bind(&employee.name)
                .bind(&employee.position)
                .bind(employee.salary)
                .bind(employee.id)
                .execute(&self.pool)
                .await?;

        // The row may have been deleted since the lookup.
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(employee.id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.get(id).await?;

        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn get(&self, id: i64) -> Result<Employee> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, name, position, salary FROM employees WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, name, position, salary FROM employees ORDER BY id ASC LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
