//! Project model

use rusqlite::types::Value;
use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::query::{self, Filter};
use crate::db::schema::PROJECTS;
use crate::db::DbResult;

/// A project row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub nazwa: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Data for creating a new project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub nazwa: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl Project {
    /// Create a Project from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            nazwa: row.get("nazwa")?,
            start_date: row.get("start_date")?,
            end_date: row.get("end_date")?,
        })
    }

    /// Insert a new project, returning its assigned id
    pub fn insert(conn: &Connection, data: &ProjectCreate) -> DbResult<i64> {
        query::insert(
            conn,
            &PROJECTS,
            &[
                Value::from(data.nazwa.clone()),
                Value::from(data.start_date.clone()),
                Value::from(data.end_date.clone()),
            ],
        )
    }

    /// All projects
    pub fn all(conn: &Connection) -> DbResult<Vec<Self>> {
        query::select_all_mapped(conn, &PROJECTS, Self::from_row)
    }

    /// Projects matching the filter
    pub fn find(conn: &Connection, filter: &Filter) -> DbResult<Vec<Self>> {
        query::select_where_mapped(conn, &PROJECTS, filter, Self::from_row)
    }
}
