//! JSON file-based record store.
//!
//! This module provides a simple, human-readable store implementation using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(n) - list clones and sorts the in-memory rows
//! - **Write**: O(n) - serializes and writes the entire dataset
//! - **Best for**: directories of a few thousand employees

use crate::domain::error::{DirectoryError, Result};
use crate::domain::{Employee, EmployeeFields, EmployeeId};
use crate::storage::backend::{ensure_unique_employee_id, EmployeeStore, OrderBy};
use crate::storage::models::EmployeeRecord;
use crate::storage::sort::sort_employees;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk. Rows are kept in
/// insertion order, which breaks `created_at` ties when listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// All stored rows in insertion order.
    #[serde(default)]
    employees: Vec<EmployeeRecord>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            employees: Vec::new(),
        }
    }
}

/// JSON file record store.
///
/// Stores employee rows in a human-readable JSON file with atomic writes.
/// The entire dataset is kept in memory and persisted on every modification.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It is owned by a single
/// [`DirectoryWorker`](crate::worker::DirectoryWorker).
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "employees": [
///     {
///       "id": "0b3c6a2e-4f1d-4c55-9d7e-5d9d2f8e1a10",
///       "employee_id": "E-001",
///       "first_name": "Ada",
///       "last_name": "Lovelace",
///       "email": "ada@example.com",
///       "department": "Engineering",
///       "position": "Analyst",
///       "hire_date": "2024-03-01",
///       "status": "active",
///       "created_by": "admin",
///       "created_at": "2024-03-01T09:00:00Z"
///     }
///   ]
/// }
/// ```
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: StorageData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonStorage {
    /// Creates or opens a JSON store.
    ///
    /// If the file exists, loads existing data. Otherwise creates a new empty store.
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            tracing::debug!("loading existing data");
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(employee_count = data.employees.len(), "storage initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| DirectoryError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            employees = data.employees.len(),
            "loaded storage data"
        );

        Ok(data)
    }

    /// Saves storage data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then atomically renames it to the target path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename fails.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| DirectoryError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "storage saved");
        Ok(())
    }

    /// Converts every row, skipping rows that violate domain invariants.
    fn valid_employees(&self) -> Vec<Employee> {
        self.data
            .employees
            .iter()
            .cloned()
            .filter_map(|record| {
                let id = record.id;
                Employee::try_from(record)
                    .map_err(|e| tracing::warn!(employee = %id, error = %e, "skipping invalid row"))
                    .ok()
            })
            .collect()
    }

    fn position(&self, id: EmployeeId) -> Result<usize> {
        self.data
            .employees
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| DirectoryError::NotFound(id.to_string()))
    }
}

impl EmployeeStore for JsonStorage {
    fn list_employees(&self, order: OrderBy) -> Result<Vec<Employee>> {
        let _span = tracing::debug_span!("json_list_employees", order = ?order).entered();

        let mut employees = self.valid_employees();
        sort_employees(&mut employees, order);

        tracing::debug!(count = employees.len(), "retrieved employees");
        Ok(employees)
    }

    fn get_employee(&self, id: EmployeeId) -> Result<Employee> {
        let _span = tracing::debug_span!("json_get_employee", employee = %id).entered();

        let record = self.data.employees[self.position(id)?].clone();
        Employee::try_from(record)
    }

    fn create_employee(&mut self, fields: EmployeeFields, created_by: &str) -> Result<Employee> {
        let _span = tracing::debug_span!("json_create_employee",
            employee_id = %fields.employee_id
        ).entered();

        ensure_unique_employee_id(&self.valid_employees(), &fields, None)?;

        let employee = Employee::from_fields(EmployeeId::generate(), fields, created_by, chrono::Utc::now());
        self.data.employees.push(EmployeeRecord::from(&employee));

        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!(employee = %employee.id, "employee inserted");
        Ok(employee)
    }

    fn update_employee(&mut self, id: EmployeeId, fields: EmployeeFields) -> Result<Employee> {
        let _span = tracing::debug_span!("json_update_employee", employee = %id).entered();

        let index = self.position(id)?;
        ensure_unique_employee_id(&self.valid_employees(), &fields, Some(id))?;

        let existing = Employee::try_from(self.data.employees[index].clone())?;
        let updated = existing.with_fields(fields);
        self.data.employees[index] = EmployeeRecord::from(&updated);

        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!("employee updated");
        Ok(updated)
    }

    fn delete_employee(&mut self, id: EmployeeId) -> Result<()> {
        let _span = tracing::debug_span!("json_delete_employee", employee = %id).entered();

        let index = self.position(id)?;
        self.data.employees.remove(index);

        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!(remaining = self.data.employees.len(), "employee deleted");
        Ok(())
    }
}

impl Drop for JsonStorage {
    /// Ensures data is saved on drop if an earlier save failed.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
