use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use rust_datastore::{dataset, Database, Event, Value};

fn count_employees(db: &mut Database, sql: &str, args: &[Value]) -> i64 {
    let count = Rc::new(RefCell::new(None));
    let out = Rc::clone(&count);
    db.query(sql, args).then(move |event| {
        if let Event::Statement { rows, .. } = event {
            *out.borrow_mut() = Some(rows.row(0).unwrap()["n"].clone());
        }
    });
    db.run_pending();
    let value = count.borrow().clone().expect("count query did not resolve");
    match value {
        Value::Integer(n) => n,
        other => panic!("unexpected count value: {other:?}"),
    }
}

#[test]
fn demo_roster_shape() {
    let employees = dataset::demo_employees();
    assert_eq!(employees.len(), 100);

    let first = &employees[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.name, "조진우");
    assert_eq!(first.city, "울산");
    assert_eq!(first.joined_on, "1995-02-26");

    let last = &employees[99];
    assert_eq!(last.id, 100);
    assert_eq!(last.name, "고동철");

    assert!(employees.iter().all(|e| e.age > 0));
}

#[test]
fn employee_serializes_round_trip() -> Result<()> {
    let employees = dataset::demo_employees();
    let json = serde_json::to_string(&employees[0])?;
    let back: dataset::Employee = serde_json::from_str(&json)?;
    assert_eq!(back, employees[0]);
    Ok(())
}

#[test]
fn seed_loads_the_full_roster() {
    let mut db = Database::in_memory().unwrap();
    dataset::seed(&mut db);
    // Connection-ready, schema, and the insert batch.
    assert_eq!(db.run_pending(), 3);

    let total = count_employees(&mut db, "select count(*) as n from employees", &[]);
    assert_eq!(total, 100);

    let expected = dataset::demo_employees()
        .iter()
        .filter(|e| e.department == "인사팀")
        .count() as i64;
    let in_department = count_employees(
        &mut db,
        "select count(*) as n from employees where department = ?",
        &["인사팀".into()],
    );
    assert_eq!(in_department, expected);
}

#[test]
fn seeded_database_persists_across_reopen() -> Result<()> {
    let tmp = tempfile::NamedTempFile::new()?;
    let path = tmp.path().to_str().unwrap().to_string();

    {
        let mut db = Database::open(&path)?;
        dataset::seed(&mut db);
        db.run_pending();
    }

    let mut db = Database::open(&path)?;
    let total = count_employees(&mut db, "select count(*) as n from employees", &[]);
    assert_eq!(total, 100);
    Ok(())
}
