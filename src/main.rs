//! Project tracker demo
//!
//! Opens the project database, sets up the schema and runs a fixed
//! insert/update/delete/select sequence against sample data. This is the
//! script variant without null handling in its filters: every filter here
//! uses plain SQL equality.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use trackdb::db::query::{Filter, NullMatch};
use trackdb::db::{self, schema};
use trackdb::models::{Project, ProjectCreate, Task, TaskChanges, TaskCreate};

/// Get the database path from environment or use a default next to the
/// executable
fn get_database_path() -> PathBuf {
    std::env::var("TRACKDB_DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));
            path.push("trackdb.db");
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
    schema::init_project_schema(&conn)?;

    let home = Project::insert(
        &conn,
        &ProjectCreate {
            nazwa: "Home chores".to_string(),
            start_date: None,
            end_date: None,
        },
    )?;
    let other = Project::insert(
        &conn,
        &ProjectCreate {
            nazwa: "Other duties".to_string(),
            start_date: None,
            end_date: Some("20.09.2024".to_string()),
        },
    )?;

    Task::insert(
        &conn,
        &TaskCreate {
            project_id: home,
            nazwa: "Take out trash".to_string(),
            opis: None,
            status: "not started".to_string(),
            start_date: "17.09.2024".to_string(),
            end_date: "17.09.2024".to_string(),
        },
    )?;
    let dishes = Task::insert(
        &conn,
        &TaskCreate {
            project_id: home,
            nazwa: "Wash the dishes".to_string(),
            opis: None,
            status: "started".to_string(),
            start_date: "17.09.2024".to_string(),
            end_date: "17.09.2024".to_string(),
        },
    )?;
    Task::insert(
        &conn,
        &TaskCreate {
            project_id: other,
            nazwa: "Go to the gym".to_string(),
            opis: Some("Leg workout".to_string()),
            status: "not started".to_string(),
            start_date: "17.09.2024".to_string(),
            end_date: "18.09.2024".to_string(),
        },
    )?;
    Task::insert(
        &conn,
        &TaskCreate {
            project_id: other,
            nazwa: "Book a doctor's appointment".to_string(),
            opis: Some("Call +48 000 000 000".to_string()),
            status: "ended".to_string(),
            start_date: "17.09.2024".to_string(),
            end_date: "19.09.2024".to_string(),
        },
    )?;

    let changed = Task::update(
        &conn,
        dishes,
        &TaskChanges {
            status: Some("ended".to_string()),
            ..Default::default()
        },
    )?;
    println!("Updated {changed} task(s)");

    let removed = Task::delete_where(
        &conn,
        &Filter::new(NullMatch::SqlEquality).eq("status", "ended".to_string()),
    )?;
    println!("Deleted {removed} ended task(s)");

    println!("Still in progress:");
    print_tasks(&Task::find(
        &conn,
        &Filter::new(NullMatch::SqlEquality).eq("status", "started".to_string()),
    )?);

    println!("Not yet started:");
    print_tasks(&Task::find(
        &conn,
        &Filter::new(NullMatch::SqlEquality).eq("status", "not started".to_string()),
    )?);

    Ok(())
}

fn print_tasks(tasks: &[Task]) {
    for task in tasks {
        println!(
            "  #{} {} ({} - {})",
            task.id, task.nazwa, task.start_date, task.end_date
        );
    }
}
