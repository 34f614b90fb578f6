//! Generic data-access layer
//!
//! Descriptor-driven statement building: conjunctive equality filters, SET
//! lists, and the insert/select/update/delete operations shared by every
//! entity. All parameters are bound, never inlined.

use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};

use super::connection::{DbError, DbResult};
use super::schema::TableSchema;

/// How a null-valued equality term is rendered.
///
/// Both variants are kept on purpose, until a single policy is chosen:
/// `IsNull` rewrites the term to `col IS NULL`, while `SqlEquality` binds a
/// literal NULL into `col = ?`, which under three-valued logic matches no
/// row at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullMatch {
    IsNull,
    SqlEquality,
}

#[derive(Debug, Clone)]
enum Term {
    Eq(String, Value),
    IsNull(String),
}

/// Conjunctive equality filter over a table's columns.
///
/// Terms combine with AND in insertion order. An empty filter is rejected
/// at execution time rather than silently matching every row.
#[derive(Debug, Clone)]
pub struct Filter {
    null_match: NullMatch,
    terms: Vec<Term>,
}

impl Filter {
    pub fn new(null_match: NullMatch) -> Self {
        Self {
            null_match,
            terms: Vec::new(),
        }
    }

    /// Require `field = value`.
    pub fn eq<V: Into<Value>>(mut self, field: &str, value: V) -> Self {
        self.terms.push(Term::Eq(field.to_string(), value.into()));
        self
    }

    /// Require equality against an optional value. A `None` is rendered
    /// according to the filter's [`NullMatch`] policy.
    pub fn eq_opt<V: Into<Value>>(mut self, field: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.eq(field, v),
            None => {
                let term = match self.null_match {
                    NullMatch::IsNull => Term::IsNull(field.to_string()),
                    NullMatch::SqlEquality => Term::Eq(field.to_string(), Value::Null),
                };
                self.terms.push(term);
                self
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Render the WHERE body and collect the bind values. Placeholders are
    /// numbered from `first_param`.
    fn where_clause(
        &self,
        table: &TableSchema,
        first_param: usize,
    ) -> DbResult<(String, Vec<Value>)> {
        if self.terms.is_empty() {
            return Err(DbError::EmptyFilter);
        }

        let mut clauses = Vec::with_capacity(self.terms.len());
        let mut values = Vec::new();
        let mut n = first_param;
        for term in &self.terms {
            let field = match term {
                Term::Eq(f, _) | Term::IsNull(f) => f,
            };
            if !table.has_column(field) {
                return Err(DbError::UnknownColumn {
                    table: table.name,
                    column: field.clone(),
                });
            }
            match term {
                Term::Eq(f, v) => {
                    clauses.push(format!("{f} = ?{n}"));
                    values.push(v.clone());
                    n += 1;
                }
                Term::IsNull(f) => clauses.push(format!("{f} IS NULL")),
            }
        }
        Ok((clauses.join(" AND "), values))
    }
}

/// SET list for an update, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Assignments {
    sets: Vec<(String, Value)>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `field = value`.
    pub fn set<V: Into<Value>>(mut self, field: &str, value: V) -> Self {
        self.sets.push((field.to_string(), value.into()));
        self
    }

    /// Assign SQL NULL to a nullable column.
    pub fn set_null(mut self, field: &str) -> Self {
        self.sets.push((field.to_string(), Value::Null));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

fn column_list(table: &TableSchema) -> String {
    table.columns.join(", ")
}

/// Insert one row. `values` bind the non-id columns in declared order; the
/// primary key is auto-assigned by the engine and returned.
pub fn insert(conn: &Connection, table: &TableSchema, values: &[Value]) -> DbResult<i64> {
    let cols = &table.columns[1..];
    if values.len() != cols.len() {
        return Err(DbError::ColumnCount {
            table: table.name,
            expected: cols.len(),
            got: values.len(),
        });
    }

    let placeholders: Vec<String> = (1..=values.len()).map(|n| format!("?{n}")).collect();
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.name,
        cols.join(", "),
        placeholders.join(", ")
    );
    conn.execute(&sql, params_from_iter(values.iter().cloned()))?;
    Ok(conn.last_insert_rowid())
}

/// Every row of the table as dynamic values, columns in declared order.
pub fn select_all(conn: &Connection, table: &TableSchema) -> DbResult<Vec<Vec<Value>>> {
    let width = table.columns.len();
    select_all_mapped(conn, table, move |row| values_from_row(row, width))
}

/// Rows matching the filter as dynamic values, columns in declared order.
pub fn select_where(
    conn: &Connection,
    table: &TableSchema,
    filter: &Filter,
) -> DbResult<Vec<Vec<Value>>> {
    let width = table.columns.len();
    select_where_mapped(conn, table, filter, move |row| values_from_row(row, width))
}

/// Every row of the table, mapped through `f`.
pub fn select_all_mapped<T, F>(conn: &Connection, table: &TableSchema, f: F) -> DbResult<Vec<T>>
where
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let sql = format!("SELECT {} FROM {}", column_list(table), table.name);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], f)?.collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Rows matching the filter, mapped through `f`.
pub fn select_where_mapped<T, F>(
    conn: &Connection,
    table: &TableSchema,
    filter: &Filter,
    f: F,
) -> DbResult<Vec<T>>
where
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let (where_sql, values) = filter.where_clause(table, 1)?;
    let sql = format!(
        "SELECT {} FROM {} WHERE {}",
        column_list(table),
        table.name,
        where_sql
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(values), f)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Update the row with the given primary key. Returns the number of rows
/// changed, 0 when the id does not exist.
pub fn update(
    conn: &Connection,
    table: &TableSchema,
    id: i64,
    assignments: &Assignments,
) -> DbResult<usize> {
    if assignments.sets.is_empty() {
        return Err(DbError::EmptyAssignments);
    }

    let mut clauses = Vec::with_capacity(assignments.sets.len());
    let mut values = Vec::with_capacity(assignments.sets.len() + 1);
    for (n, (field, value)) in assignments.sets.iter().enumerate() {
        if !table.has_column(field) {
            return Err(DbError::UnknownColumn {
                table: table.name,
                column: field.clone(),
            });
        }
        clauses.push(format!("{field} = ?{}", n + 1));
        values.push(value.clone());
    }

    let sql = format!(
        "UPDATE {} SET {} WHERE {} = ?{}",
        table.name,
        clauses.join(", "),
        table.id_column(),
        values.len() + 1
    );
    values.push(Value::Integer(id));
    Ok(conn.execute(&sql, params_from_iter(values))?)
}

/// Remove the rows matching the filter. Returns the number removed.
pub fn delete_where(conn: &Connection, table: &TableSchema, filter: &Filter) -> DbResult<usize> {
    let (where_sql, values) = filter.where_clause(table, 1)?;
    let sql = format!("DELETE FROM {} WHERE {}", table.name, where_sql);
    Ok(conn.execute(&sql, params_from_iter(values))?)
}

/// Remove every row of the table. The only unfiltered mutation; clearing a
/// table is always this explicit call, never an empty filter.
pub fn delete_all(conn: &Connection, table: &TableSchema) -> DbResult<usize> {
    let sql = format!("DELETE FROM {}", table.name);
    Ok(conn.execute(&sql, [])?)
}

fn values_from_row(row: &Row<'_>, width: usize) -> rusqlite::Result<Vec<Value>> {
    (0..width).map(|i| row.get(i)).collect()
}
