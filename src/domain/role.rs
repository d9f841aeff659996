//! Session identity supplied by the external authentication layer.
//!
//! Authentication and role determination happen outside this crate. The
//! directory only needs to know who is acting (for `created_by`) and whether
//! they may mutate records.

use serde::{Deserialize, Serialize};

/// Role of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// May create, update, and delete employee records.
    Admin,
    /// Read-only access: view, search, page, and export.
    #[default]
    User,
}

/// The authenticated user driving a directory session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    /// Identity recorded as `created_by` on new records.
    pub user_id: String,
    pub role: Role,
}

impl Session {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
