//! Presentation layer: view models computed from application state.
//!
//! Rendering itself happens outside this crate. The directory exposes
//! display-ready view models so any front end (web, terminal, test harness)
//! can draw them without re-deriving business rules.
//!
//! ```text
//! AppState → compute_viewmodel → DirectoryViewModel → front end
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types for the directory, detail, and dashboard pages
//! - [`helpers`]: Date, currency, and text formatting

pub mod helpers;
pub mod viewmodel;

pub use viewmodel::{
    BadgeVariant, DashboardViewModel, DeleteDialog, DirectoryViewModel, EmployeeCard,
    EmployeeDetail, EmptyState, FilterBar, HeaderInfo, Notification, NotificationLevel,
    PaginationBar, SelectOption, StatCard,
};
