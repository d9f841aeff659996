//! Record builders shared by unit tests.

use crate::domain::{Employee, EmployeeFields, EmployeeId, EmployeeStatus};
use chrono::{DateTime, NaiveDate, Utc};

pub(crate) fn fields(employee_id: &str, department: &str) -> EmployeeFields {
    EmployeeFields {
        employee_id: employee_id.to_string(),
        first_name: "Test".to_string(),
        last_name: "Person".to_string(),
        email: format!("{}@example.com", employee_id.to_lowercase()),
        phone: None,
        department: department.to_string(),
        position: "Engineer".to_string(),
        hire_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        salary: None,
        status: EmployeeStatus::Active,
        address: None,
        city: None,
        state: None,
        zip_code: None,
        emergency_contact_name: None,
        emergency_contact_phone: None,
        notes: None,
        profile_picture_url: None,
    }
}

pub(crate) fn employee_created_at(employee_id: &str, secs: i64) -> Employee {
    let created_at = DateTime::<Utc>::from_timestamp(1_700_000_000 + secs, 0).unwrap();
    Employee::from_fields(EmployeeId::generate(), fields(employee_id, "Engineering"), "admin", created_at)
}

pub(crate) fn employee(
    employee_id: &str,
    first: &str,
    last: &str,
    department: &str,
    status: EmployeeStatus,
) -> Employee {
    let mut record = employee_created_at(employee_id, 0);
    record.first_name = first.to_string();
    record.last_name = last.to_string();
    record.email = format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase());
    record.department = department.to_string();
    record.status = status;
    record
}

/// Ten employees, four of them in Engineering, newest first.
pub(crate) fn sample_directory() -> Vec<Employee> {
    use EmployeeStatus::{Active, Inactive, OnLeave};

    let rows = [
        ("E-010", "Ada", "Lovelace", "Engineering", Active),
        ("E-009", "Grace", "Hopper", "Engineering", Active),
        ("E-008", "Alan", "Turing", "Research", OnLeave),
        ("E-007", "Edsger", "Dijkstra", "Engineering", Inactive),
        ("E-006", "Barbara", "Liskov", "Research", Active),
        ("E-005", "Ken", "Thompson", "Operations", Active),
        ("E-004", "Margaret", "Hamilton", "Engineering", Active),
        ("E-003", "Donald", "Knuth", "Publishing", OnLeave),
        ("E-002", "Frances", "Allen", "Sales", Active),
        ("E-001", "John", "Backus", "Sales", Inactive),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (id, first, last, department, status))| {
            let mut record = employee(id, first, last, department, *status);
            record.created_at = DateTime::<Utc>::from_timestamp(1_700_000_000 - i as i64 * 60, 0).unwrap();
            record
        })
        .collect()
}
