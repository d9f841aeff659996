//! Worker message types for controller/store communication.
//!
//! This module defines the request and response protocol between the directory
//! controller and the worker that owns the record store and blob store. Every
//! request carries a sequence number assigned by the controller; the matching
//! response echoes it so stale responses can be recognized and dropped.

use crate::domain::{Employee, EmployeeFields, EmployeeId, ErrorKind};
use crate::storage::{OrderBy, PictureUpload};
use serde::{Deserialize, Serialize};

/// Controller-assigned request number. Strictly increasing per session.
pub type Seq = u64;

/// Macro to generate builder methods for `WorkerMessage` variants.
///
/// Generates convenience constructors that take the request sequence number
/// first, followed by the variant's payload fields.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message tagged with `seq`")]
                #[must_use]
                pub fn $builder_name(seq: Seq, $($field: $ty),*) -> Self {
                    Self::$variant {
                        seq,
                        $($field,)*
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    list_employees(ListEmployees { order: OrderBy }),
    get_employee(GetEmployee { id: EmployeeId }),
    save_employee(SaveEmployee {
        id: Option<EmployeeId>,
        fields: EmployeeFields,
        created_by: String,
        picture: Option<PictureUpload>,
    }),
    delete_employee(DeleteEmployee { id: EmployeeId }),
}

/// Requests sent from the controller to the worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Fetch the full employee set.
    ListEmployees {
        seq: Seq,
        order: OrderBy,
    },

    /// Fetch one record for the detail view.
    GetEmployee {
        seq: Seq,
        id: EmployeeId,
    },

    /// Create (`id == None`) or replace the fields of an existing record,
    /// uploading `picture` first when present.
    SaveEmployee {
        seq: Seq,
        id: Option<EmployeeId>,
        fields: EmployeeFields,
        /// Session user recorded as `created_by` on create.
        created_by: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        picture: Option<PictureUpload>,
    },

    /// Delete one record by its key.
    DeleteEmployee {
        seq: Seq,
        id: EmployeeId,
    },
}

impl WorkerMessage {
    #[must_use]
    pub const fn seq(&self) -> Seq {
        match self {
            Self::ListEmployees { seq, .. }
            | Self::GetEmployee { seq, .. }
            | Self::SaveEmployee { seq, .. }
            | Self::DeleteEmployee { seq, .. } => *seq,
        }
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::ListEmployees { .. } => Operation::List,
            Self::GetEmployee { .. } => Operation::Get,
            Self::SaveEmployee { .. } => Operation::Save,
            Self::DeleteEmployee { .. } => Operation::Delete,
        }
    }
}

/// Store operation a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    List,
    Get,
    Save,
    Delete,
}

/// Responses sent from the worker back to the controller.
///
/// Each variant corresponds to the completion of one request, either with its
/// result data or with an error classified by [`ErrorKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The full employee set, newest first.
    EmployeesLoaded {
        seq: Seq,
        employees: Vec<Employee>,
    },

    /// A single record for the detail view.
    EmployeeLoaded {
        seq: Seq,
        employee: Employee,
    },

    /// A create or update succeeded.
    EmployeeSaved {
        seq: Seq,
        employee: Employee,
        /// `true` for create, `false` for update.
        created: bool,
        /// Set when the picture upload failed and the previous URL was kept.
        #[serde(skip_serializing_if = "Option::is_none")]
        upload_error: Option<String>,
    },

    /// The record was removed from the store.
    EmployeeDeleted {
        seq: Seq,
        id: EmployeeId,
    },

    /// The request failed.
    Error {
        seq: Seq,
        operation: Operation,
        /// Record targeted by a get, update, or delete.
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<EmployeeId>,
        kind: ErrorKind,
        /// Human-readable error message.
        message: String,
    },
}

impl WorkerResponse {
    #[must_use]
    pub const fn seq(&self) -> Seq {
        match self {
            Self::EmployeesLoaded { seq, .. }
            | Self::EmployeeLoaded { seq, .. }
            | Self::EmployeeSaved { seq, .. }
            | Self::EmployeeDeleted { seq, .. }
            | Self::Error { seq, .. } => *seq,
        }
    }
}
