//! Record store abstraction.
//!
//! This module defines the [`EmployeeStore`] trait that abstracts over the
//! collection store holding employee records. This allows switching between
//! storage implementations without changing the directory logic.
//!
//! # Design Philosophy
//!
//! The trait mirrors the five query verbs the directory actually issues
//! (list, get, create, update, delete), not a generic ORM. Each method maps
//! directly to one worker message.

use crate::domain::error::{DirectoryError, Result};
use crate::domain::{Employee, EmployeeFields, EmployeeId};
use serde::{Deserialize, Serialize};

/// Ordering applied by [`EmployeeStore::list_employees`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderBy {
    /// Newest records first (`created_at desc`). Used by the directory.
    #[default]
    CreatedAtDesc,
    /// Oldest records first (`created_at asc`).
    CreatedAtAsc,
}

/// Abstraction over the employee collection store.
///
/// Implementations assign `id`, `created_by`, and `created_at` on insert and
/// keep them unchanged across updates.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes
/// - [`MemoryStorage`](crate::storage::MemoryStorage): in-memory, for tests
///
/// # Examples
///
/// ```no_run
/// use employee_directory::storage::{EmployeeStore, JsonStorage, OrderBy};
/// use std::path::PathBuf;
///
/// let storage = JsonStorage::new(PathBuf::from("/tmp/employees.json"))?;
/// let employees = storage.list_employees(OrderBy::CreatedAtDesc)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait EmployeeStore: Send {
    /// Retrieves every record in the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Fetch`] if the store cannot be queried.
    fn list_employees(&self, order: OrderBy) -> Result<Vec<Employee>>;

    /// Retrieves a single record by key.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] if no record has this key.
    fn get_employee(&self, id: EmployeeId) -> Result<Employee>;

    /// Inserts a new record, assigning its key and creation metadata.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] if the business identifier is
    /// already taken, or a storage error if the write fails.
    fn create_employee(&mut self, fields: EmployeeFields, created_by: &str) -> Result<Employee>;

    /// Replaces the full field set of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] if the record is gone, or
    /// [`DirectoryError::Validation`] if the new business identifier collides.
    fn update_employee(&mut self, id: EmployeeId, fields: EmployeeFields) -> Result<Employee>;

    /// Removes a record.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::NotFound`] if the record is already gone.
    fn delete_employee(&mut self, id: EmployeeId) -> Result<()>;
}

/// Rejects `fields` if another record (other than `except`) already uses its
/// business identifier.
///
/// # Errors
///
/// Returns [`DirectoryError::Validation`] on collision.
pub fn ensure_unique_employee_id<'a>(
    existing: impl IntoIterator<Item = &'a Employee>,
    fields: &EmployeeFields,
    except: Option<EmployeeId>,
) -> Result<()> {
    let taken = existing
        .into_iter()
        .any(|e| Some(e.id) != except && e.employee_id == fields.employee_id);
    if taken {
        return Err(DirectoryError::validation(
            "employee_id",
            format!("Employee ID {} already exists", fields.employee_id),
        ));
    }
    Ok(())
}
