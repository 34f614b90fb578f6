//! Schema setup
//!
//! Raw DDL for the two table pairs, plus the table descriptors the query
//! layer generates its statements from.

use rusqlite::Connection;

use super::connection::DbResult;

/// Ordered column list for one table.
///
/// Every statement in the query layer is generated from one of these
/// descriptors; a field name outside `columns` is rejected before any SQL
/// is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    /// Columns in declared order. The first is the integer primary key.
    pub columns: &'static [&'static str],
}

impl TableSchema {
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| *c == name)
    }

    /// Name of the primary key column.
    pub fn id_column(&self) -> &'static str {
        self.columns[0]
    }
}

pub static PROJECTS: TableSchema = TableSchema {
    name: "projects",
    columns: &["id", "nazwa", "start_date", "end_date"],
};

pub static TASKS: TableSchema = TableSchema {
    name: "tasks",
    columns: &[
        "id",
        "project_id",
        "nazwa",
        "opis",
        "status",
        "start_date",
        "end_date",
    ],
};

pub static EMPLOYER: TableSchema = TableSchema {
    name: "employer",
    columns: &["id", "first_name", "last_name", "phone_number", "company"],
};

pub static EMPLOYEE: TableSchema = TableSchema {
    name: "employee",
    columns: &[
        "id",
        "employer_id",
        "first_name",
        "last_name",
        "phone_number",
        "job",
    ],
};

const CREATE_PROJECTS: &str = "CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY,
    nazwa TEXT NOT NULL,
    start_date TEXT,
    end_date TEXT
)";

const CREATE_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY,
    project_id INTEGER NOT NULL,
    nazwa VARCHAR(250) NOT NULL,
    opis TEXT,
    status VARCHAR(15) NOT NULL,
    start_date TEXT NOT NULL,
    end_date TEXT NOT NULL,
    FOREIGN KEY (project_id) REFERENCES projects (id)
)";

const CREATE_EMPLOYER: &str = "CREATE TABLE IF NOT EXISTS employer (
    id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    phone_number TEXT NOT NULL,
    company TEXT NOT NULL
)";

const CREATE_EMPLOYEE: &str = "CREATE TABLE IF NOT EXISTS employee (
    id INTEGER PRIMARY KEY,
    employer_id INTEGER NOT NULL,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    phone_number TEXT,
    job TEXT NOT NULL,
    FOREIGN KEY (employer_id) REFERENCES employer (id)
)";

/// Apply a single raw DDL statement.
pub fn execute_ddl(conn: &Connection, sql: &str) -> DbResult<()> {
    conn.execute(sql, [])?;
    Ok(())
}

/// Create the projects/tasks pair. Parent table first, so the foreign key
/// target exists. Re-running against an initialized store is a no-op.
pub fn init_project_schema(conn: &Connection) -> DbResult<()> {
    execute_ddl(conn, CREATE_PROJECTS)?;
    execute_ddl(conn, CREATE_TASKS)?;
    Ok(())
}

/// Create the employer/employee pair. Same re-run guarantee as
/// [`init_project_schema`].
pub fn init_staffing_schema(conn: &Connection) -> DbResult<()> {
    execute_ddl(conn, CREATE_EMPLOYER)?;
    execute_ddl(conn, CREATE_EMPLOYEE)?;
    Ok(())
}
