//! Database module
//!
//! Connection handling, schema setup and the generic query layer.

pub mod connection;
pub mod query;
pub mod schema;

pub use connection::{open, probe_in_memory, DbError, DbResult};
