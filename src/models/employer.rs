//! Employer model

use rusqlite::types::Value;
use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::query::{self, Filter};
use crate::db::schema::EMPLOYER;
use crate::db::DbResult;

/// An employer row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub company: String,
}

/// Data for creating a new employer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerCreate {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub company: String,
}

impl Employer {
    /// Create an Employer from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            phone_number: row.get("phone_number")?,
            company: row.get("company")?,
        })
    }

    /// Insert a new employer, returning its assigned id
    pub fn insert(conn: &Connection, data: &EmployerCreate) -> DbResult<i64> {
        query::insert(
            conn,
            &EMPLOYER,
            &[
                Value::from(data.first_name.clone()),
                Value::from(data.last_name.clone()),
                Value::from(data.phone_number.clone()),
                Value::from(data.company.clone()),
            ],
        )
    }

    /// All employers
    pub fn all(conn: &Connection) -> DbResult<Vec<Self>> {
        query::select_all_mapped(conn, &EMPLOYER, Self::from_row)
    }

    /// Employers matching the filter
    pub fn find(conn: &Connection, filter: &Filter) -> DbResult<Vec<Self>> {
        query::select_where_mapped(conn, &EMPLOYER, filter, Self::from_row)
    }
}
