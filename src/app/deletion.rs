//! Two-step delete confirmation.
//!
//! ```text
//! Idle ──request──▶ PendingConfirmation ──confirm──▶ Deleting ──complete/fail──▶ Idle
//!                          │
//!                          └──cancel──▶ Idle
//! ```
//!
//! At most one deletion is pending at a time. No store call happens until the
//! pending deletion is confirmed.

use crate::domain::EmployeeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletionState {
    #[default]
    Idle,
    /// The confirmation dialog is open for this record.
    PendingConfirmation(EmployeeId),
    /// Confirmed; the store delete is in flight.
    Deleting(EmployeeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeletionWorkflow {
    state: DeletionState,
}

impl DeletionWorkflow {
    #[must_use]
    pub const fn state(&self) -> DeletionState {
        self.state
    }

    /// Record awaiting confirmation, if the dialog is open.
    #[must_use]
    pub const fn pending(&self) -> Option<EmployeeId> {
        match self.state {
            DeletionState::PendingConfirmation(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, DeletionState::Idle)
    }

    /// Opens the confirmation dialog for `id`.
    ///
    /// Returns `false` without changing anything if another deletion is already
    /// pending or in flight.
    pub fn request(&mut self, id: EmployeeId) -> bool {
        if !self.is_idle() {
            tracing::debug!(employee = %id, state = ?self.state, "delete already pending, ignoring request");
            return false;
        }
        self.state = DeletionState::PendingConfirmation(id);
        true
    }

    /// Closes the dialog without deleting. Returns the record that was pending.
    pub fn cancel(&mut self) -> Option<EmployeeId> {
        let pending = self.pending()?;
        self.state = DeletionState::Idle;
        Some(pending)
    }

    /// Confirms the pending deletion and returns the record to delete.
    pub fn confirm(&mut self) -> Option<EmployeeId> {
        let pending = self.pending()?;
        self.state = DeletionState::Deleting(pending);
        Some(pending)
    }

    /// Returns to idle after the store answered for `id`, success or failure.
    pub fn finish(&mut self, id: EmployeeId) -> bool {
        if self.state == DeletionState::Deleting(id) {
            self.state = DeletionState::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_confirm_finish() {
        let id = EmployeeId::generate();
        let mut workflow = DeletionWorkflow::default();

        assert!(workflow.request(id));
        assert_eq!(workflow.pending(), Some(id));
        assert_eq!(workflow.confirm(), Some(id));
        assert_eq!(workflow.state(), DeletionState::Deleting(id));
        assert!(workflow.finish(id));
        assert!(workflow.is_idle());
    }

    #[test]
    fn cancel_returns_to_idle() {
        let id = EmployeeId::generate();
        let mut workflow = DeletionWorkflow::default();
        workflow.request(id);
        assert_eq!(workflow.cancel(), Some(id));
        assert!(workflow.is_idle());
        assert_eq!(workflow.confirm(), None);
    }

    #[test]
    fn second_request_while_pending_is_ignored() {
        let first = EmployeeId::generate();
        let second = EmployeeId::generate();
        let mut workflow = DeletionWorkflow::default();

        workflow.request(first);
        assert!(!workflow.request(second));
        assert_eq!(workflow.pending(), Some(first));

        workflow.confirm();
        assert!(!workflow.request(second));
        assert!(!workflow.finish(second));
    }
}
