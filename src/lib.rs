//! trackdb
//!
//! Embedded SQLite data-access layer for two parent/child table pairs:
//! projects/tasks and employer/employee.

pub mod db;
pub mod models;
