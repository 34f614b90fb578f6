//! Employee model
//!
//! Child rows of an employer. `phone_number` is nullable; the staffing
//! demo removes phone-less employees with an IS NULL filter.

use rusqlite::types::Value;
use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::query::{self, Assignments, Filter};
use crate::db::schema::EMPLOYEE;
use crate::db::DbResult;

/// An employee row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub job: String,
}

/// Data for creating a new employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub employer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub job: String,
}

/// Partial update for an employee. `phone_number` is doubly optional:
/// `Some(None)` clears it to NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub job: Option<String>,
}

impl EmployeeChanges {
    fn to_assignments(&self) -> Assignments {
        let mut a = Assignments::new();
        if let Some(ref v) = self.first_name {
            a = a.set("first_name", v.clone());
        }
        if let Some(ref v) = self.last_name {
            a = a.set("last_name", v.clone());
        }
        if let Some(ref v) = self.phone_number {
            a = match v {
                Some(v) => a.set("phone_number", v.clone()),
                None => a.set_null("phone_number"),
            };
        }
        if let Some(ref v) = self.job {
            a = a.set("job", v.clone());
        }
        a
    }
}

impl Employee {
    /// Create an Employee from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            employer_id: row.get("employer_id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            phone_number: row.get("phone_number")?,
            job: row.get("job")?,
        })
    }

    /// Insert a new employee, returning its assigned id. The referenced
    /// employer must exist.
    pub fn insert(conn: &Connection, data: &EmployeeCreate) -> DbResult<i64> {
        query::insert(
            conn,
            &EMPLOYEE,
            &[
                Value::from(data.employer_id),
                Value::from(data.first_name.clone()),
                Value::from(data.last_name.clone()),
                Value::from(data.phone_number.clone()),
                Value::from(data.job.clone()),
            ],
        )
    }

    /// All employees
    pub fn all(conn: &Connection) -> DbResult<Vec<Self>> {
        query::select_all_mapped(conn, &EMPLOYEE, Self::from_row)
    }

    /// Employees matching the filter
    pub fn find(conn: &Connection, filter: &Filter) -> DbResult<Vec<Self>> {
        query::select_where_mapped(conn, &EMPLOYEE, filter, Self::from_row)
    }

    /// Apply a partial update to one employee. Returns the number of rows
    /// changed, 0 when the id does not exist.
    pub fn update(conn: &Connection, id: i64, changes: &EmployeeChanges) -> DbResult<usize> {
        query::update(conn, &EMPLOYEE, id, &changes.to_assignments())
    }

    /// Remove the employees matching the filter. Returns the number removed.
    pub fn delete_where(conn: &Connection, filter: &Filter) -> DbResult<usize> {
        query::delete_where(conn, &EMPLOYEE, filter)
    }

    /// Remove every employee
    pub fn delete_all(conn: &Connection) -> DbResult<usize> {
        query::delete_all(conn, &EMPLOYEE)
    }
}
