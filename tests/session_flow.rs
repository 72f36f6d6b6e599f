// End-to-end session scenario driven against the library surface, the
// same way the UI layer drives it.

use ewaste_cli::inventory::{Role, Session};

#[test]
fn admin_session_add_sort_recycle_report() {
    let mut session = Session::new();

    let user = session.login("admin", "admin123").unwrap();
    assert_eq!(user.role, Role::Admin);

    session.add_item("OldPhone", "Phone", 5);
    session.add_item("Laptop1", "Laptop", 2);

    session.sort_by_years();
    let names: Vec<&str> = session.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Laptop1", "OldPhone"]);
    assert_eq!(session.items()[0].years_in_use, 2);
    assert_eq!(session.items()[1].years_in_use, 5);

    session.recycle("Laptop1").unwrap();

    let report = session.report().unwrap();
    assert_eq!(report.total, 2);
    assert_eq!(report.recycled, 1);
    assert_eq!(report.pending, 1);
}

#[test]
fn standard_login_binds_limited_role() {
    let mut session = Session::new();
    let user = session.login("user", "user123").unwrap();
    assert_eq!(user.role, Role::Standard);
}

#[test]
fn schedule_then_reschedule_keeps_latest_date() {
    let mut session = Session::new();
    session.login("admin", "admin123").unwrap();

    session.add_item("CRT-TV", "Display", 12);
    session.schedule("crt-tv", "2026-08-20").unwrap();
    session.schedule("CRT-TV", "2026-09-05").unwrap();
    assert_eq!(session.items()[0].collection_date, "2026-09-05");
}
