//! End-to-end checks for the employer/employee pair, including the two
//! null-filter behaviors side by side.

use rusqlite::Connection;
use tempfile::TempDir;

use trackdb::db::query::{Filter, NullMatch};
use trackdb::db::{self, schema};
use trackdb::models::{Employee, EmployeeCreate, Employer, EmployerCreate};

fn open_scratch(dir: &TempDir) -> Connection {
    let conn = db::open(dir.path().join("staffing.db")).unwrap();
    schema::init_staffing_schema(&conn).unwrap();
    conn
}

fn aero_inc(conn: &Connection) -> i64 {
    Employer::insert(
        conn,
        &EmployerCreate {
            first_name: "Wyatt".to_string(),
            last_name: "Black".to_string(),
            phone_number: "+44555444333".to_string(),
            company: "Aero Inc.".to_string(),
        },
    )
    .unwrap()
}

fn employee(
    employer_id: i64,
    first: &str,
    last: &str,
    phone: Option<&str>,
    job: &str,
) -> EmployeeCreate {
    EmployeeCreate {
        employer_id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        phone_number: phone.map(str::to_string),
        job: job.to_string(),
    }
}

#[test]
fn architect_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_scratch(&dir);

    let aero = aero_inc(&conn);
    assert_eq!(aero, 1);

    let maya = Employee::insert(
        &conn,
        &employee(aero, "Maya", "Johnson", Some("+44000111222"), "Architect"),
    )
    .unwrap();

    let architects = Employee::find(
        &conn,
        &Filter::new(NullMatch::IsNull).eq("job", "Architect".to_string()),
    )
    .unwrap();
    assert_eq!(
        architects,
        vec![Employee {
            id: maya,
            employer_id: aero,
            first_name: "Maya".to_string(),
            last_name: "Johnson".to_string(),
            phone_number: Some("+44000111222".to_string()),
            job: "Architect".to_string(),
        }]
    );
}

#[test]
fn deleting_phone_less_employees_spares_the_others() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_scratch(&dir);

    let aero = aero_inc(&conn);
    Employee::insert(
        &conn,
        &employee(aero, "Maya", "Johnson", Some("+44000111222"), "Architect"),
    )
    .unwrap();
    Employee::insert(&conn, &employee(aero, "Liam", "Moore", None, "Engineer")).unwrap();
    Employee::insert(&conn, &employee(aero, "Ava", "Reyes", None, "Technician")).unwrap();

    let removed = Employee::delete_where(
        &conn,
        &Filter::new(NullMatch::IsNull).eq_opt("phone_number", None::<String>),
    )
    .unwrap();
    assert_eq!(removed, 2);

    let remaining = Employee::all(&conn).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].first_name, "Maya");
}

#[test]
fn the_equality_variant_never_matches_null_phones() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_scratch(&dir);

    let aero = aero_inc(&conn);
    Employee::insert(&conn, &employee(aero, "Liam", "Moore", None, "Engineer")).unwrap();

    let removed = Employee::delete_where(
        &conn,
        &Filter::new(NullMatch::SqlEquality).eq_opt("phone_number", None::<String>),
    )
    .unwrap();
    assert_eq!(removed, 0);
    assert_eq!(Employee::all(&conn).unwrap().len(), 1);
}

#[test]
fn employee_insert_requires_an_existing_employer() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_scratch(&dir);

    let result = Employee::insert(
        &conn,
        &employee(7, "Maya", "Johnson", Some("+44000111222"), "Architect"),
    );
    assert!(result.is_err());
}

#[test]
fn conjunctive_filters_require_every_term() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_scratch(&dir);

    let aero = aero_inc(&conn);
    Employee::insert(
        &conn,
        &employee(aero, "Maya", "Johnson", Some("+44000111222"), "Architect"),
    )
    .unwrap();
    Employee::insert(
        &conn,
        &employee(aero, "Noah", "Johnson", Some("+44999888777"), "Engineer"),
    )
    .unwrap();

    let matches = Employee::find(
        &conn,
        &Filter::new(NullMatch::IsNull)
            .eq("last_name", "Johnson".to_string())
            .eq("job", "Engineer".to_string()),
    )
    .unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].first_name, "Noah");
}
