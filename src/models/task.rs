//! Task model
//!
//! Child rows of a project. `status` is free-form text; the demo sequence
//! uses "not started", "started" and "ended".

use rusqlite::types::Value;
use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::query::{self, Assignments, Filter};
use crate::db::schema::TASKS;
use crate::db::DbResult;

/// A task row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub nazwa: String,
    pub opis: Option<String>,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
}

/// Data for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCreate {
    pub project_id: i64,
    pub nazwa: String,
    pub opis: Option<String>,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
}

/// Partial update for a task. `opis` is doubly optional: the outer level
/// selects the column, `Some(None)` clears it to NULL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskChanges {
    pub nazwa: Option<String>,
    pub opis: Option<Option<String>>,
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl TaskChanges {
    fn to_assignments(&self) -> Assignments {
        let mut a = Assignments::new();
        if let Some(ref v) = self.nazwa {
            a = a.set("nazwa", v.clone());
        }
        if let Some(ref v) = self.opis {
            a = match v {
                Some(v) => a.set("opis", v.clone()),
                None => a.set_null("opis"),
            };
        }
        if let Some(ref v) = self.status {
            a = a.set("status", v.clone());
        }
        if let Some(ref v) = self.start_date {
            a = a.set("start_date", v.clone());
        }
        if let Some(ref v) = self.end_date {
            a = a.set("end_date", v.clone());
        }
        a
    }
}

impl Task {
    /// Create a Task from a database row
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            project_id: row.get("project_id")?,
            nazwa: row.get("nazwa")?,
            opis: row.get("opis")?,
            status: row.get("status")?,
            start_date: row.get("start_date")?,
            end_date: row.get("end_date")?,
        })
    }

    /// Insert a new task, returning its assigned id. The referenced project
    /// must exist; foreign keys are enforced on every connection.
    pub fn insert(conn: &Connection, data: &TaskCreate) -> DbResult<i64> {
        query::insert(
            conn,
            &TASKS,
            &[
                Value::from(data.project_id),
                Value::from(data.nazwa.clone()),
                Value::from(data.opis.clone()),
                Value::from(data.status.clone()),
                Value::from(data.start_date.clone()),
                Value::from(data.end_date.clone()),
            ],
        )
    }

    /// All tasks
    pub fn all(conn: &Connection) -> DbResult<Vec<Self>> {
        query::select_all_mapped(conn, &TASKS, Self::from_row)
    }

    /// Tasks matching the filter
    pub fn find(conn: &Connection, filter: &Filter) -> DbResult<Vec<Self>> {
        query::select_where_mapped(conn, &TASKS, filter, Self::from_row)
    }

    /// Apply a partial update to one task. Returns the number of rows
    /// changed, 0 when the id does not exist.
    pub fn update(conn: &Connection, id: i64, changes: &TaskChanges) -> DbResult<usize> {
        query::update(conn, &TASKS, id, &changes.to_assignments())
    }

    /// Remove the tasks matching the filter. Returns the number removed.
    pub fn delete_where(conn: &Connection, filter: &Filter) -> DbResult<usize> {
        query::delete_where(conn, &TASKS, filter)
    }

    /// Remove every task
    pub fn delete_all(conn: &Connection) -> DbResult<usize> {
        query::delete_all(conn, &TASKS)
    }
}
