//! Persistence for designations and employees.
//!
//! Provides a SQLite-backed [`Store`] and one repository per table. Decimal
//! columns are stored as TEXT so values round-trip exactly, and the
//! employee-to-designation foreign key refuses deletes of referenced rows.

mod designation;
mod employee;

pub use designation::DesignationRepository;
pub use employee::{EmployeeFilter, EmployeeRepository};

use rust_decimal::Decimal;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::Designation;

/// URL of a private in-memory database.
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

const SCHEMA: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS designation (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        basic_salary TEXT,
        hra_percent TEXT,
        da_percent TEXT,
        ta_percent TEXT,
        bonus TEXT
    )",
    "CREATE TABLE IF NOT EXISTS employee (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        contact TEXT,
        overtime_hours INTEGER NOT NULL DEFAULT 0 CHECK (overtime_hours >= 0),
        designation_id INTEGER REFERENCES designation(id) ON DELETE RESTRICT
    )",
    "CREATE INDEX IF NOT EXISTS employee_designation_id_idx ON employee(designation_id)",
];

/// Shared handle to the database.
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens the database described by `config` and creates missing tables.
    ///
    /// In-memory URLs are limited to a single long-lived connection, since
    /// every SQLite connection to `:memory:` sees its own database.
    pub async fn connect(config: &DatabaseConfig) -> PayrollResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let in_memory = config.url.contains(":memory:") || config.url.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        let store = Self { pool };
        store.ensure_schema().await?;

        debug!(url = %config.url, in_memory, "Database ready");
        Ok(store)
    }

    /// Opens a fresh, empty in-memory database.
    pub async fn in_memory() -> PayrollResult<Self> {
        Self::connect(&DatabaseConfig {
            url: IN_MEMORY_URL.to_string(),
            max_connections: 1,
        })
        .await
    }

    async fn ensure_schema(&self) -> PayrollResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Returns the designation repository.
    pub fn designations(&self) -> DesignationRepository {
        DesignationRepository::new(self.pool.clone())
    }

    /// Returns the employee repository.
    pub fn employees(&self) -> EmployeeRepository {
        EmployeeRepository::new(self.pool.clone())
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Returns true when the error is a foreign key constraint failure.
fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}

/// Reads an optional TEXT column holding a decimal.
fn decimal_column(row: &SqliteRow, table: &str, column: &str) -> PayrollResult<Option<Decimal>> {
    let raw: Option<String> = row.try_get(column)?;
    raw.map(|text| {
        Decimal::from_str(&text).map_err(|e| PayrollError::InvalidRecord {
            table: table.to_string(),
            message: format!("column '{}' holds '{}': {}", column, text, e),
        })
    })
    .transpose()
}

/// Decodes a designation whose columns are named `{prefix}id`, `{prefix}name`, ...
fn designation_from_row(row: &SqliteRow, prefix: &str) -> PayrollResult<Designation> {
    let column = |name: &str| format!("{}{}", prefix, name);

    Ok(Designation {
        id: row.try_get(column("id").as_str())?,
        name: row.try_get(column("name").as_str())?,
        basic_salary: decimal_column(row, "designation", &column("basic_salary"))?,
        hra_percent: decimal_column(row, "designation", &column("hra_percent"))?,
        da_percent: decimal_column(row, "designation", &column("da_percent"))?,
        ta_percent: decimal_column(row, "designation", &column("ta_percent"))?,
        bonus: decimal_column(row, "designation", &column("bonus"))?,
    })
}
