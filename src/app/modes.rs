//! Load and detail-view state types for the controller.
//!
//! # State Machine
//!
//! The directory list moves through [`LoadState`]:
//!
//! ```text
//! NotLoaded ──load──▶ Loading ──latest response──▶ Loaded | Failed
//!                        ▲                             │
//!                        └──────────── load ───────────┘
//! ```
//!
//! Only the response to the most recently requested load leaves `Loading`.
//! The detail view is tracked separately by [`DetailView`].

use crate::domain::{Employee, EmployeeId};
use crate::worker::Seq;

/// Progress of the full-set load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No load has been requested yet.
    #[default]
    NotLoaded,

    /// A load is in flight. Previously loaded records stay visible.
    Loading,

    /// The latest load succeeded.
    Loaded,

    /// The latest load failed. The previous snapshot is kept.
    Failed {
        /// Message shown to the user.
        message: String,
    },
}

impl LoadState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// State of the single-employee detail view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailView {
    #[default]
    Closed,

    /// A get request for `id` is in flight.
    Loading {
        id: EmployeeId,
        seq: Seq,
    },

    /// The record is shown.
    Open(Box<Employee>),
}

impl DetailView {
    /// Record the view is about, whether loading or open.
    #[must_use]
    pub fn employee_id(&self) -> Option<EmployeeId> {
        match self {
            Self::Closed => None,
            Self::Loading { id, .. } => Some(*id),
            Self::Open(employee) => Some(employee.id),
        }
    }
}
