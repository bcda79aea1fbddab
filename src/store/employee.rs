//! Employee repository.

use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqliteRow};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, NewEmployee};

use super::designation::fetch_designation;
use super::{designation_from_row, is_foreign_key_violation};

const SELECT_EMPLOYEE: &str = "SELECT e.id, e.name, e.contact, e.overtime_hours, e.designation_id,
        d.name AS designation_name,
        d.basic_salary AS designation_basic_salary,
        d.hra_percent AS designation_hra_percent,
        d.da_percent AS designation_da_percent,
        d.ta_percent AS designation_ta_percent,
        d.bonus AS designation_bonus
    FROM employee e
    LEFT JOIN designation d ON d.id = e.designation_id";

/// Criteria for listing employees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    /// Only employees linked to this designation.
    pub designation_id: Option<i64>,
}

impl EmployeeFilter {
    /// Matches every employee.
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches employees linked to the given designation.
    pub fn by_designation(designation_id: i64) -> Self {
        Self {
            designation_id: Some(designation_id),
        }
    }
}

/// CRUD access to the `employee` table.
///
/// Employees are always read with their designation joined in, so the
/// salary calculator can run on the result directly.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    /// Creates a repository over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Looks up an employee by id.
    pub async fn find(&self, id: i64) -> PayrollResult<Option<Employee>> {
        let row = sqlx::query(&format!("{} WHERE e.id = ?", SELECT_EMPLOYEE))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| employee_from_row(&row)).transpose()
    }

    /// Returns the employees matching `filter`, ordered by id.
    pub async fn list(&self, filter: EmployeeFilter) -> PayrollResult<Vec<Employee>> {
        let rows = match filter.designation_id {
            Some(designation_id) => {
                sqlx::query(&format!(
                    "{} WHERE e.designation_id = ? ORDER BY e.id",
                    SELECT_EMPLOYEE
                ))
                .bind(designation_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!("{} ORDER BY e.id", SELECT_EMPLOYEE))
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.iter().map(employee_from_row).collect()
    }

    /// Returns the number of stored employees.
    pub async fn count(&self) -> PayrollResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.unsigned_abs())
    }

    /// Validates and stores a new employee linked to an existing designation.
    ///
    /// The designation lookup and the insert share one transaction, and the
    /// foreign key rejects the insert if the designation vanished in
    /// between. Either way a missing designation yields
    /// `DesignationNotFound` and no row is written.
    pub async fn create(&self, new: NewEmployee) -> PayrollResult<Employee> {
        new.validate()?;

        let designation_id = new.designation_id;
        let mut tx = self.pool.begin().await?;

        let Some(designation) = fetch_designation(&mut tx, designation_id).await? else {
            return Err(PayrollError::DesignationNotFound { id: designation_id });
        };

        let result = sqlx::query(
            "INSERT INTO employee (name, contact, overtime_hours, designation_id)
             VALUES (?, ?, ?, ?)",
        )
        .bind(new.name.clone())
        .bind(new.contact.clone())
        .bind(i64::from(new.overtime_hours))
        .bind(designation_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                PayrollError::DesignationNotFound { id: designation_id }
            } else {
                e.into()
            }
        })?;

        tx.commit().await?;

        Ok(Employee {
            id: result.last_insert_rowid(),
            name: new.name,
            contact: new.contact,
            overtime_hours: new.overtime_hours,
            designation: Some(designation),
        })
    }
}

fn employee_from_row(row: &SqliteRow) -> PayrollResult<Employee> {
    let overtime_hours: i64 = row.try_get("overtime_hours")?;
    let overtime_hours = u32::try_from(overtime_hours).map_err(|_| PayrollError::InvalidRecord {
        table: "employee".to_string(),
        message: format!("overtime_hours out of range: {}", overtime_hours),
    })?;

    let designation_id: Option<i64> = row.try_get("designation_id")?;
    let designation = match designation_id {
        Some(_) => Some(designation_from_row(row, "designation_")?),
        None => None,
    };

    Ok(Employee {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        contact: row.try_get("contact")?,
        overtime_hours,
        designation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Designation, NewDesignation};
    use crate::store::Store;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    async fn create_designation(store: &Store, name: &str, basic: &str) -> Designation {
        store
            .designations()
            .create(NewDesignation {
                name: Some(name.to_string()),
                basic_salary: Some(dec(basic)),
                hra_percent: Some(dec("10")),
                da_percent: Some(dec("5")),
                ta_percent: Some(Decimal::ZERO),
                bonus: Some(dec("50.00")),
            })
            .await
            .unwrap()
    }

    fn new_employee(name: &str, designation_id: i64, overtime_hours: u32) -> NewEmployee {
        NewEmployee {
            name: Some(name.to_string()),
            contact: Some("555-0100".to_string()),
            overtime_hours,
            designation_id,
        }
    }

    #[tokio::test]
    async fn test_create_returns_employee_with_designation() {
        let store = Store::in_memory().await.unwrap();
        let manager = create_designation(&store, "Manager", "1000.00").await;

        let employee = store
            .employees()
            .create(new_employee("Asha", manager.id, 2))
            .await
            .unwrap();

        assert_eq!(employee.name.as_deref(), Some("Asha"));
        assert_eq!(employee.overtime_hours, 2);
        assert_eq!(employee.designation, Some(manager));
    }

    #[tokio::test]
    async fn test_find_reads_back_joined_designation() {
        let store = Store::in_memory().await.unwrap();
        let manager = create_designation(&store, "Manager", "1000.00").await;
        let created = store
            .employees()
            .create(new_employee("Asha", manager.id, 3))
            .await
            .unwrap();

        let found = store.employees().find(created.id).await.unwrap().unwrap();

        assert_eq!(found, created);
        assert_eq!(found.designation_id(), Some(manager.id));
    }

    #[tokio::test]
    async fn test_create_with_unknown_designation_writes_nothing() {
        let store = Store::in_memory().await.unwrap();

        let result = store.employees().create(new_employee("Ghost", 77, 0)).await;

        match result {
            Err(PayrollError::DesignationNotFound { id }) => assert_eq!(id, 77),
            other => panic!("Expected DesignationNotFound, got {:?}", other),
        }
        assert_eq!(store.employees().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_long_name() {
        let store = Store::in_memory().await.unwrap();
        let manager = create_designation(&store, "Manager", "1000.00").await;

        let result = store
            .employees()
            .create(new_employee(&"n".repeat(101), manager.id, 0))
            .await;

        assert!(matches!(result, Err(PayrollError::InvalidEmployee { .. })));
        assert_eq!(store.employees().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_without_filter_returns_all() {
        let store = Store::in_memory().await.unwrap();
        let manager = create_designation(&store, "Manager", "1000.00").await;
        let clerk = create_designation(&store, "Clerk", "500.00").await;
        let repo = store.employees();

        repo.create(new_employee("Asha", manager.id, 0)).await.unwrap();
        repo.create(new_employee("Ravi", clerk.id, 0)).await.unwrap();
        repo.create(new_employee("Meera", manager.id, 0)).await.unwrap();

        let employees = repo.list(EmployeeFilter::all()).await.unwrap();
        let names: Vec<_> = employees.iter().filter_map(|e| e.name.as_deref()).collect();
        assert_eq!(names, vec!["Asha", "Ravi", "Meera"]);
    }

    #[tokio::test]
    async fn test_list_with_filter_returns_only_matching() {
        let store = Store::in_memory().await.unwrap();
        let manager = create_designation(&store, "Manager", "1000.00").await;
        let clerk = create_designation(&store, "Clerk", "500.00").await;
        let repo = store.employees();

        repo.create(new_employee("Asha", manager.id, 0)).await.unwrap();
        repo.create(new_employee("Ravi", clerk.id, 0)).await.unwrap();
        repo.create(new_employee("Meera", manager.id, 0)).await.unwrap();

        let employees = repo
            .list(EmployeeFilter::by_designation(manager.id))
            .await
            .unwrap();

        assert_eq!(employees.len(), 2);
        assert!(employees.iter().all(|e| e.designation_id() == Some(manager.id)));
    }

    #[tokio::test]
    async fn test_list_with_unmatched_filter_is_empty() {
        let store = Store::in_memory().await.unwrap();
        let manager = create_designation(&store, "Manager", "1000.00").await;
        store
            .employees()
            .create(new_employee("Asha", manager.id, 0))
            .await
            .unwrap();

        let employees = store
            .employees()
            .list(EmployeeFilter::by_designation(manager.id + 100))
            .await
            .unwrap();

        assert!(employees.is_empty());
    }

    #[tokio::test]
    async fn test_row_without_designation_reads_as_unlinked() {
        let store = Store::in_memory().await.unwrap();
        sqlx::query("INSERT INTO employee (name, overtime_hours) VALUES ('Loose', 4)")
            .execute(&store.employees().pool)
            .await
            .unwrap();

        let employees = store.employees().list(EmployeeFilter::all()).await.unwrap();

        assert_eq!(employees.len(), 1);
        assert!(employees[0].designation.is_none());
        assert_eq!(employees[0].overtime_hours, 4);
    }
}
