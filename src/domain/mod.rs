//! Domain layer for the employee directory.
//!
//! This module contains the core domain types of the directory, independent of
//! the storage backend, the worker protocol, or any rendering layer. Business
//! rules that belong to a single record (status values, form validation,
//! display names) live here; rules that span the whole record set live in
//! [`crate::app`].
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`employee`]: Employee record, identifiers, status, and form drafts
//! - [`role`]: Session identity and role supplied by the external auth layer
//!
//! # Examples
//!
//! ```
//! use employee_directory::domain::{EmployeeDraft, Result};
//!
//! fn check(draft: &EmployeeDraft) -> Result<()> {
//!     draft.validate()?;
//!     Ok(())
//! }
//! ```

pub mod employee;
pub mod error;
pub mod role;

pub use employee::{Employee, EmployeeDraft, EmployeeFields, EmployeeId, EmployeeStatus};
pub use error::{DirectoryError, ErrorKind, Result};
pub use role::{Role, Session};
