//! Staffing demo
//!
//! Near-duplicate of the project tracker demo, run against the
//! employer/employee pair. This is the script variant with null handling:
//! its filters route a null value to an IS NULL predicate.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use trackdb::db::query::{Filter, NullMatch};
use trackdb::db::{self, schema};
use trackdb::models::{Employee, EmployeeCreate, Employer, EmployerCreate};

/// Get the database path from environment or use a default next to the
/// executable
fn get_database_path() -> PathBuf {
    std::env::var("STAFFING_DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));
            path.push("staffing.db");
            path
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("trackdb=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let version = db::probe_in_memory()?;
    tracing::info!("sqlite engine {version}");

    let db_path = get_database_path();
    eprintln!("Database path: {}", db_path.display());

    let conn = db::open(&db_path)?;
    schema::init_staffing_schema(&conn)?;

    let aero = Employer::insert(
        &conn,
        &EmployerCreate {
            first_name: "Wyatt".to_string(),
            last_name: "Black".to_string(),
            phone_number: "+44555444333".to_string(),
            company: "Aero Inc.".to_string(),
        },
    )?;

    Employee::insert(
        &conn,
        &EmployeeCreate {
            employer_id: aero,
            first_name: "Maya".to_string(),
            last_name: "Johnson".to_string(),
            phone_number: Some("+44000111222".to_string()),
            job: "Architect".to_string(),
        },
    )?;
    Employee::insert(
        &conn,
        &EmployeeCreate {
            employer_id: aero,
            first_name: "Liam".to_string(),
            last_name: "Moore".to_string(),
            phone_number: None,
            job: "Engineer".to_string(),
        },
    )?;

    let architects = Employee::find(
        &conn,
        &Filter::new(NullMatch::IsNull).eq("job", "Architect".to_string()),
    )?;
    println!("Architects:");
    println!("{}", serde_json::to_string_pretty(&architects)?);

    let removed = Employee::delete_where(
        &conn,
        &Filter::new(NullMatch::IsNull).eq_opt("phone_number", None::<String>),
    )?;
    println!("Deleted {removed} employee(s) without a phone number");

    println!("Remaining employees:");
    println!("{}", serde_json::to_string_pretty(&Employee::all(&conn)?)?);

    Ok(())
}
