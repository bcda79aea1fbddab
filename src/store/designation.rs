//! Designation repository.

use sqlx::sqlite::{SqliteConnection, SqlitePool};
use tracing::info;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Designation, NewDesignation};

use super::{designation_from_row, is_foreign_key_violation};

const SELECT_DESIGNATION: &str =
    "SELECT id, name, basic_salary, hra_percent, da_percent, ta_percent, bonus FROM designation";

/// CRUD access to the `designation` table.
#[derive(Debug, Clone)]
pub struct DesignationRepository {
    pool: SqlitePool,
}

impl DesignationRepository {
    /// Creates a repository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Looks up a designation by id.
    pub async fn find(&self, id: i64) -> PayrollResult<Option<Designation>> {
        let mut conn = self.pool.acquire().await?;
        fetch_designation(&mut conn, id).await
    }

    /// Returns every designation, ordered by id.
    pub async fn list(&self) -> PayrollResult<Vec<Designation>> {
        let rows = sqlx::query(&format!("{} ORDER BY id", SELECT_DESIGNATION))
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| designation_from_row(row, ""))
            .collect()
    }

    /// Returns the number of stored designations.
    pub async fn count(&self) -> PayrollResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM designation")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.unsigned_abs())
    }

    /// Validates and stores a new designation.
    pub async fn create(&self, new: NewDesignation) -> PayrollResult<Designation> {
        new.validate()?;

        let mut conn = self.pool.acquire().await?;
        let id = insert_designation(&mut conn, &new).await?;

        Ok(new.into_designation(id))
    }

    /// Deletes a designation that no employee references.
    ///
    /// The reference count and the delete run in one transaction. Returns
    /// `DesignationNotFound` when no such row exists and `DesignationInUse`
    /// when employees still point at it.
    pub async fn delete(&self, id: i64) -> PayrollResult<()> {
        let mut tx = self.pool.begin().await?;

        if fetch_designation(&mut tx, id).await?.is_none() {
            return Err(PayrollError::DesignationNotFound { id });
        }

        let employees: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM employee WHERE designation_id = ?")
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if employees > 0 {
            return Err(PayrollError::DesignationInUse {
                id,
                employees: employees.unsigned_abs(),
            });
        }

        sqlx::query("DELETE FROM designation WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    PayrollError::DesignationInUse { id, employees: 1 }
                } else {
                    e.into()
                }
            })?;

        tx.commit().await?;
        Ok(())
    }

    /// Inserts the given designations when the table is empty.
    ///
    /// Returns how many rows were inserted; zero when designations already
    /// exist. Every seed is validated before anything is written.
    pub async fn seed(&self, designations: &[NewDesignation]) -> PayrollResult<usize> {
        for designation in designations {
            designation.validate()?;
        }

        let mut tx = self.pool.begin().await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM designation")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            return Ok(0);
        }

        for designation in designations {
            insert_designation(&mut tx, designation).await?;
        }

        tx.commit().await?;
        info!(count = designations.len(), "Seeded designations");
        Ok(designations.len())
    }
}

/// Fetches one designation on an existing connection or transaction.
pub(super) async fn fetch_designation(
    conn: &mut SqliteConnection,
    id: i64,
) -> PayrollResult<Option<Designation>> {
    let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_DESIGNATION))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    row.map(|row| designation_from_row(&row, "")).transpose()
}

async fn insert_designation(
    conn: &mut SqliteConnection,
    new: &NewDesignation,
) -> PayrollResult<i64> {
    let result = sqlx::query(
        "INSERT INTO designation (name, basic_salary, hra_percent, da_percent, ta_percent, bonus)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(new.name.clone())
    .bind(new.basic_salary.map(|d| d.to_string()))
    .bind(new.hra_percent.map(|d| d.to_string()))
    .bind(new.da_percent.map(|d| d.to_string()))
    .bind(new.ta_percent.map(|d| d.to_string()))
    .bind(new.bonus.map(|d| d.to_string()))
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}
