//! Dashboard counters derived from the snapshot.

use crate::domain::{Employee, EmployeeStatus};

/// Number of records shown in the "recent employees" list.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectoryStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub on_leave: usize,
    /// Most recently created records, newest first.
    pub recent: Vec<Employee>,
}

impl DirectoryStats {
    #[must_use]
    pub fn from_records(records: &[Employee]) -> Self {
        let count = |status| records.iter().filter(|e| e.status == status).count();

        let mut recent = records.to_vec();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(RECENT_LIMIT);

        Self {
            total: records.len(),
            active: count(EmployeeStatus::Active),
            inactive: count(EmployeeStatus::Inactive),
            on_leave: count(EmployeeStatus::OnLeave),
            recent,
        }
    }
}
