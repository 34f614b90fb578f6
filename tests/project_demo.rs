//! End-to-end checks for the projects/tasks pair, run against file-backed
//! databases the way the demo binary uses them.

use rusqlite::Connection;
use tempfile::TempDir;

use trackdb::db::query::{Filter, NullMatch};
use trackdb::db::{self, schema};
use trackdb::models::{Project, ProjectCreate, Task, TaskChanges, TaskCreate};

fn open_scratch(dir: &TempDir) -> Connection {
    let conn = db::open(dir.path().join("projects.db")).unwrap();
    schema::init_project_schema(&conn).unwrap();
    conn
}

fn project(nazwa: &str, end_date: Option<&str>) -> ProjectCreate {
    ProjectCreate {
        nazwa: nazwa.to_string(),
        start_date: None,
        end_date: end_date.map(str::to_string),
    }
}

fn task(project_id: i64, nazwa: &str, opis: Option<&str>, status: &str, dates: (&str, &str)) -> TaskCreate {
    TaskCreate {
        project_id,
        nazwa: nazwa.to_string(),
        opis: opis.map(str::to_string),
        status: status.to_string(),
        start_date: dates.0.to_string(),
        end_date: dates.1.to_string(),
    }
}

#[test]
fn home_chores_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_scratch(&dir);

    let home = Project::insert(&conn, &project("Home chores", None)).unwrap();
    assert_eq!(home, 1);

    let trash = Task::insert(
        &conn,
        &task(home, "Take out trash", None, "not started", ("17.09.2024", "17.09.2024")),
    )
    .unwrap();

    let not_started = Task::find(
        &conn,
        &Filter::new(NullMatch::SqlEquality).eq("status", "not started".to_string()),
    )
    .unwrap();
    assert_eq!(
        not_started,
        vec![Task {
            id: trash,
            project_id: home,
            nazwa: "Take out trash".to_string(),
            opis: None,
            status: "not started".to_string(),
            start_date: "17.09.2024".to_string(),
            end_date: "17.09.2024".to_string(),
        }]
    );
}

#[test]
fn full_demo_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_scratch(&dir);

    let home = Project::insert(&conn, &project("Home chores", None)).unwrap();
    let other = Project::insert(&conn, &project("Other duties", Some("20.09.2024"))).unwrap();

    Task::insert(
        &conn,
        &task(home, "Take out trash", None, "not started", ("17.09.2024", "17.09.2024")),
    )
    .unwrap();
    let dishes = Task::insert(
        &conn,
        &task(home, "Wash the dishes", None, "started", ("17.09.2024", "17.09.2024")),
    )
    .unwrap();
    Task::insert(
        &conn,
        &task(other, "Go to the gym", Some("Leg workout"), "not started", ("17.09.2024", "18.09.2024")),
    )
    .unwrap();
    Task::insert(
        &conn,
        &task(
            other,
            "Book a doctor's appointment",
            Some("Call +48 000 000 000"),
            "ended",
            ("17.09.2024", "19.09.2024"),
        ),
    )
    .unwrap();

    let changed = Task::update(
        &conn,
        dishes,
        &TaskChanges {
            status: Some("ended".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(changed, 1);

    let removed = Task::delete_where(
        &conn,
        &Filter::new(NullMatch::SqlEquality).eq("status", "ended".to_string()),
    )
    .unwrap();
    assert_eq!(removed, 2);

    let started = Task::find(
        &conn,
        &Filter::new(NullMatch::SqlEquality).eq("status", "started".to_string()),
    )
    .unwrap();
    assert!(started.is_empty());

    let not_started = Task::find(
        &conn,
        &Filter::new(NullMatch::SqlEquality).eq("status", "not started".to_string()),
    )
    .unwrap();
    let names: Vec<&str> = not_started.iter().map(|t| t.nazwa.as_str()).collect();
    assert_eq!(names, ["Take out trash", "Go to the gym"]);
}

#[test]
fn reinitializing_the_schema_preserves_rows() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_scratch(&dir);

    let home = Project::insert(&conn, &project("Home chores", None)).unwrap();
    Task::insert(
        &conn,
        &task(home, "Take out trash", None, "not started", ("17.09.2024", "17.09.2024")),
    )
    .unwrap();

    schema::init_project_schema(&conn).unwrap();
    drop(conn);

    // A fresh connection to the same file sees the same rows.
    let conn = open_scratch(&dir);
    assert_eq!(Project::all(&conn).unwrap().len(), 1);
    assert_eq!(Task::all(&conn).unwrap().len(), 1);
}

#[test]
fn select_all_after_delete_all_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let conn = open_scratch(&dir);

    let home = Project::insert(&conn, &project("Home chores", None)).unwrap();
    Task::insert(
        &conn,
        &task(home, "Take out trash", None, "not started", ("17.09.2024", "17.09.2024")),
    )
    .unwrap();
    Task::insert(
        &conn,
        &task(home, "Wash the dishes", None, "started", ("17.09.2024", "17.09.2024")),
    )
    .unwrap();

    Task::delete_all(&conn).unwrap();
    assert!(Task::all(&conn).unwrap().is_empty());
}
