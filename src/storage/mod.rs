//! Storage layer: the record store adapter and profile picture blob storage.
//!
//! This module provides the storage abstraction the directory consumes through
//! the worker. It holds no business logic beyond what a collection store
//! enforces itself (key assignment, ordering, unique business identifiers).
//!
//! # Modules
//!
//! - `backend`: [`EmployeeStore`] trait with the five store verbs
//! - `json`: JSON file-based store with atomic writes
//! - `memory`: in-memory store with failure injection, used by tests and demos
//! - `models`: storage record types separate from domain models
//! - `sort`: `created_at` ordering applied by list queries
//! - `blob`: [`BlobStore`] trait and filesystem implementation for profile pictures

pub mod backend;
pub mod blob;
pub mod json;
pub mod memory;
pub mod models;
pub mod sort;

pub use backend::{EmployeeStore, OrderBy};
pub use blob::{BlobStore, FsBlobStore, PictureUpload, MAX_PICTURE_BYTES};
pub use json::JsonStorage;
pub use memory::MemoryStorage;
pub use models::EmployeeRecord;
pub use sort::sort_employees;
