//! Shared fixtures for the directory integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, NaiveDate, Utc};
use employee_directory::domain::EmployeeFields;
use employee_directory::storage::{EmployeeStore, MemoryStorage, OrderBy};
use employee_directory::worker::DirectoryWorker;
use employee_directory::{
    initialize, Config, Directory, Employee, EmployeeDraft, EmployeeId, EmployeeStatus, Result, Role,
    Session,
};

/// In-memory store the test keeps a handle to while the worker owns a clone.
#[derive(Clone, Default)]
pub struct SharedStore(Arc<Mutex<MemoryStorage>>);

impl SharedStore {
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self(Arc::new(Mutex::new(MemoryStorage::with_employees(employees))))
    }

    pub fn lock(&self) -> MutexGuard<'_, MemoryStorage> {
        self.0.lock().unwrap()
    }
}

impl EmployeeStore for SharedStore {
    fn list_employees(&self, order: OrderBy) -> Result<Vec<Employee>> {
        self.lock().list_employees(order)
    }

    fn get_employee(&self, id: EmployeeId) -> Result<Employee> {
        self.lock().get_employee(id)
    }

    fn create_employee(&mut self, fields: EmployeeFields, created_by: &str) -> Result<Employee> {
        self.lock().create_employee(fields, created_by)
    }

    fn update_employee(&mut self, id: EmployeeId, fields: EmployeeFields) -> Result<Employee> {
        self.lock().update_employee(id, fields)
    }

    fn delete_employee(&mut self, id: EmployeeId) -> Result<()> {
        self.lock().delete_employee(id)
    }
}

pub fn fields(employee_id: &str, first: &str, last: &str, department: &str, status: EmployeeStatus) -> EmployeeFields {
    EmployeeFields {
        employee_id: employee_id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        phone: None,
        department: department.to_string(),
        position: "Engineer".to_string(),
        hire_date: NaiveDate::from_ymd_opt(2023, 6, 12).unwrap(),
        salary: Some(85_000.0),
        status,
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

/// Ten employees, four in Engineering, newest first.
pub fn ten_employees() -> Vec<Employee> {
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
            let created_at = DateTime::<Utc>::from_timestamp(1_750_000_000 - i as i64 * 3_600, 0).unwrap();
            Employee::from_fields(
                EmployeeId::generate(),
                fields(id, first, last, department, *status),
                "admin-1",
                created_at,
            )
        })
        .collect()
}

/// A directory session over `store`, without a blob store.
pub fn directory(store: &SharedStore, role: Role) -> Directory {
    let state = initialize(&Config::default(), Session::new("admin-1", role));
    Directory::new(state, DirectoryWorker::new(Box::new(store.clone())))
}

/// Admin session over the ten-employee fixture, already loaded.
pub fn loaded_admin() -> (SharedStore, Directory) {
    let store = SharedStore::with_employees(ten_employees());
    let mut dir = directory(&store, Role::Admin);
    dir.load();
    (store, dir)
}

pub fn valid_draft(employee_id: &str) -> EmployeeDraft {
    EmployeeDraft {
        employee_id: employee_id.to_string(),
        first_name: "Radia".to_string(),
        last_name: "Perlman".to_string(),
        email: "radia.perlman@example.com".to_string(),
        department: "Networking".to_string(),
        position: "Architect".to_string(),
        hire_date: "2024-01-15".to_string(),
        salary: "120000".to_string(),
        status: EmployeeStatus::Active,
        ..EmployeeDraft::default()
    }
}
