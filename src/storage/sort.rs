//! `created_at` ordering for list queries.
//!
//! Records created within the same instant are ordered by insertion: for
//! newest-first ordering the later insert comes first.

use super::backend::OrderBy;
use crate::domain::Employee;

/// Sorts records stored in insertion order according to `order`.
///
/// # Examples
///
/// ```
/// use employee_directory::storage::{sort_employees, OrderBy};
///
/// let mut employees = Vec::new();
/// sort_employees(&mut employees, OrderBy::CreatedAtDesc);
/// assert!(employees.is_empty());
/// ```
pub fn sort_employees(records: &mut [Employee], order: OrderBy) {
    match order {
        OrderBy::CreatedAtAsc => records.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        OrderBy::CreatedAtDesc => {
            records.reverse();
            records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
    }
}
