use crate::domain::error::{DirectoryError, Result};
use crate::domain::{Employee, EmployeeFields, EmployeeId};
use crate::storage::backend::{ensure_unique_employee_id, EmployeeStore, OrderBy};
use crate::storage::sort::sort_employees;
use chrono::{DateTime, Duration, Utc};

/// In-memory record store.
///
/// Keeps rows in insertion order. Failure injection flags let tests exercise
/// the directory's error paths without a real remote store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    employees: Vec<Employee>,
    fail_reads: bool,
    fail_writes: bool,
    /// Creation timestamps handed out by `create_employee` strictly increase.
    last_created_at: Option<DateTime<Utc>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing records, keeping their metadata.
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        let last_created_at = employees.iter().map(|e| e.created_at).max();
        Self {
            employees,
            last_created_at,
            ..Self::default()
        }
    }

    /// Makes list and get fail as if the store were unreachable.
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Makes create, update, and delete fail with a storage error.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Removes a record behind the directory's back (another client deleting).
    pub fn remove_silently(&mut self, id: EmployeeId) {
        self.employees.retain(|e| e.id != id);
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    fn check_writes(&self) -> Result<()> {
        if self.fail_writes {
            return Err(DirectoryError::Storage("Simulated write error".to_string()));
        }
        Ok(())
    }

    fn position(&self, id: EmployeeId) -> Result<usize> {
        self.employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))
    }

    fn next_created_at(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let created_at = match self.last_created_at {
            Some(last) if last >= now => last + Duration::milliseconds(1),
            _ => now,
        };
        self.last_created_at = Some(created_at);
        created_at
    }
}

impl EmployeeStore for MemoryStorage {
    fn list_employees(&self, order: OrderBy) -> Result<Vec<Employee>> {
        if self.fail_reads {
            return Err(DirectoryError::Fetch("Simulated store outage".to_string()));
        }
        let mut employees = self.employees.clone();
        sort_employees(&mut employees, order);
        Ok(employees)
    }

    fn get_employee(&self, id: EmployeeId) -> Result<Employee> {
        if self.fail_reads {
            return Err(DirectoryError::Fetch("Simulated store outage".to_string()));
        }
        Ok(self.employees[self.position(id)?].clone())
    }

    fn create_employee(&mut self, fields: EmployeeFields, created_by: &str) -> Result<Employee> {
        self.check_writes()?;
        ensure_unique_employee_id(&self.employees, &fields, None)?;

        let created_at = self.next_created_at();
        let employee = Employee::from_fields(EmployeeId::generate(), fields, created_by, created_at);
        self.employees.push(employee.clone());
        Ok(employee)
    }

    fn update_employee(&mut self, id: EmployeeId, fields: EmployeeFields) -> Result<Employee> {
        self.check_writes()?;
        let index = self.position(id)?;
        ensure_unique_employee_id(&self.employees, &fields, Some(id))?;

        let updated = self.employees[index].with_fields(fields);
        self.employees[index] = updated.clone();
        Ok(updated)
    }

    fn delete_employee(&mut self, id: EmployeeId) -> Result<()> {
        self.check_writes()?;
        let index = self.position(id)?;
        self.employees.remove(index);
        Ok(())
    }
}
