//! Application layer: controller state, pure engines, events, and actions.
//!
//! This layer sits between the front end and the store worker. It owns the
//! full employee snapshot and everything derived from it.
//!
//! # Architecture
//!
//! ```text
//! User Intent → Events → Event Handler → State Mutations → Actions → Side Effects
//!                            ↑                                  ↓
//!                            └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`filter`]: search and categorical filtering (pure)
//! - [`pagination`]: fixed-size page pointer (pure)
//! - [`export`]: CSV serialization of the filtered view (pure)
//! - [`deletion`]: two-step delete confirmation state machine
//! - [`stats`]: dashboard counters
//! - [`modes`]: load and detail-view state types
//! - [`state`]: [`AppState`] and view model computation
//! - [`handler`]: event processing and state transition coordinator
//! - [`actions`]: side effect commands emitted by the handler

pub mod actions;
pub mod deletion;
pub mod export;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod pagination;
pub mod state;
pub mod stats;

pub use actions::Action;
pub use deletion::{DeletionState, DeletionWorkflow};
pub use export::{ExportArtifact, EXPORT_FILE_NAME};
pub use filter::{DepartmentFilter, FilterCriteria, StatusFilter};
pub use handler::{error_notification, handle_event, Event};
pub use modes::{DetailView, LoadState};
pub use pagination::{Pagination, DEFAULT_PAGE_SIZE};
pub use state::AppState;
pub use stats::DirectoryStats;
