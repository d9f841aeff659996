//! Directory controller state and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for one
//! directory session. It separates core data (the full employee snapshot) from
//! derived state (the filtered view and the page pointer) and recomputes the
//! derived state synchronously whenever its inputs change.
//!
//! # State Components
//!
//! - **Employees**: Full snapshot from the last applied load, newest first
//! - **Filtered Employees**: Subset matching the current [`FilterCriteria`]
//! - **Pagination**: Page pointer over the filtered subset
//! - **Deletion**: Two-step delete confirmation workflow
//! - **Load State**: Whether a load is in flight, done, or failed
//! - **Detail**: The single-employee view, if open
//!
//! # Load ordering
//!
//! Every worker request gets a fresh sequence number. A list response older
//! than the last applied one is dropped, and only the response to the latest
//! requested load clears the loading flag.

use super::deletion::DeletionWorkflow;
use super::export::ExportArtifact;
use super::filter::{self, DepartmentFilter, FilterCriteria, StatusFilter};
use super::modes::{DetailView, LoadState};
use super::pagination::Pagination;
use super::stats::DirectoryStats;
use crate::domain::error::{DirectoryError, Result};
use crate::domain::{Employee, EmployeeDraft, EmployeeId, Session};
use crate::storage::{OrderBy, PictureUpload};
use crate::ui::viewmodel::{
    DashboardViewModel, DeleteDialog, DirectoryViewModel, EmployeeCard, EmployeeDetail, EmptyState,
    FilterBar, HeaderInfo, PaginationBar, StatCard,
};
use crate::worker::{Seq, WorkerMessage};

/// Central controller state for one directory session.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Signed-in user; decides `created_by` and admin-only operations.
    pub session: Session,

    /// Full snapshot from the last applied load, newest first.
    ///
    /// Replaced wholesale by each accepted list response and never patched in
    /// place after a write.
    pub employees: Vec<Employee>,

    /// Records matching `criteria`, in snapshot order.
    ///
    /// Recomputed by [`AppState::recompute`].
    pub filtered_employees: Vec<Employee>,

    pub criteria: FilterCriteria,
    pub pagination: Pagination,
    pub deletion: DeletionWorkflow,
    pub load_state: LoadState,
    pub detail: DetailView,

    last_seq: Seq,
    latest_load: Option<Seq>,
    applied_load: Option<Seq>,
}

impl AppState {
    /// Creates an empty, not-yet-loaded state for `session`.
    #[must_use]
    pub fn new(session: Session, page_size: usize) -> Self {
        Self {
            session,
            employees: vec![],
            filtered_employees: vec![],
            criteria: FilterCriteria::default(),
            pagination: Pagination::new(page_size),
            deletion: DeletionWorkflow::default(),
            load_state: LoadState::NotLoaded,
            detail: DetailView::Closed,
            last_seq: 0,
            latest_load: None,
            applied_load: None,
        }
    }

    /// Hands out the next request sequence number.
    pub fn next_seq(&mut self) -> Seq {
        self.last_seq += 1;
        self.last_seq
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load_state.is_loading()
    }

    /// Fails with [`DirectoryError::PermissionDenied`] unless the session is an admin.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` for non-admin sessions.
    pub fn ensure_admin(&self, operation: &str) -> Result<()> {
        if self.session.is_admin() {
            return Ok(());
        }
        tracing::debug!(user = %self.session.user_id, operation, "operation denied for non-admin");
        Err(DirectoryError::PermissionDenied(format!(
            "Only administrators can {operation}"
        )))
    }

    /// Starts a full-set load and returns the request to post.
    ///
    /// Sets the loading flag; the current snapshot stays visible until the
    /// response arrives.
    pub fn load(&mut self) -> WorkerMessage {
        let seq = self.next_seq();
        self.latest_load = Some(seq);
        self.load_state = LoadState::Loading;
        tracing::debug!(seq, "load requested");
        WorkerMessage::list_employees(seq, OrderBy::CreatedAtDesc)
    }

    /// Applies a list response. Returns `false` if the response was stale.
    pub fn apply_loaded(&mut self, seq: Seq, employees: Vec<Employee>) -> bool {
        if self.applied_load.is_some_and(|applied| seq < applied) {
            tracing::debug!(seq, applied = ?self.applied_load, "discarding stale list response");
            return false;
        }

        tracing::debug!(seq, employee_count = employees.len(), "snapshot replaced");
        self.employees = employees;
        self.applied_load = Some(seq);
        if self.latest_load == Some(seq) {
            self.load_state = LoadState::Loaded;
        }
        self.recompute();
        true
    }

    /// Records a failed list request. The snapshot is left unchanged.
    ///
    /// Returns `true` if this was the latest load and the loading flag changed.
    pub fn load_failed(&mut self, seq: Seq, message: &str) -> bool {
        if self.latest_load != Some(seq) {
            tracing::debug!(seq, latest = ?self.latest_load, "ignoring failure of superseded load");
            return false;
        }
        self.load_state = LoadState::Failed {
            message: message.to_string(),
        };
        true
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.recompute();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.criteria.status = status;
        self.recompute();
    }

    pub fn set_department_filter(&mut self, department: DepartmentFilter) {
        self.criteria.department = department;
        self.recompute();
    }

    /// Re-filters the snapshot and moves back to page 1.
    pub fn recompute(&mut self) {
        let _span = tracing::debug_span!("recompute",
            total_employees = self.employees.len(),
            query_len = self.criteria.query.len(),
            status = self.criteria.status.value(),
            department = self.criteria.department.value()
        )
        .entered();

        self.filtered_employees = filter::filter_employees(
            &self.employees,
            &self.criteria.query,
            self.criteria.status,
            &self.criteria.department,
        );
        self.pagination.reset(self.filtered_employees.len());

        tracing::debug!(
            filtered_count = self.filtered_employees.len(),
            total_pages = self.pagination.total_pages(),
            "filters applied"
        );
    }

    /// Records on the current page.
    #[must_use]
    pub fn current_page_records(&self) -> &[Employee] {
        self.pagination.page(&self.filtered_employees)
    }

    /// Distinct departments of the full snapshot, in first-seen order.
    #[must_use]
    pub fn department_options(&self) -> Vec<String> {
        filter::department_options(&self.employees)
    }

    pub fn next_page(&mut self) -> bool {
        self.pagination.next()
    }

    pub fn previous_page(&mut self) -> bool {
        self.pagination.previous()
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.pagination.go_to(page)
    }

    /// Serializes the whole filtered view (every page) to CSV.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Export`] if serialization fails.
    pub fn export_current_view(&self) -> Result<ExportArtifact> {
        ExportArtifact::csv(&self.filtered_employees)
    }

    /// Opens the delete confirmation for `id`.
    ///
    /// Returns `Ok(false)` if another deletion is already pending.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` for non-admin sessions.
    pub fn request_delete(&mut self, id: EmployeeId) -> Result<bool> {
        self.ensure_admin("delete employees")?;
        Ok(self.deletion.request(id))
    }

    pub fn cancel_delete(&mut self) -> Option<EmployeeId> {
        self.deletion.cancel()
    }

    /// Confirms the pending deletion and returns the delete request to post.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` for non-admin sessions.
    pub fn confirm_delete(&mut self) -> Result<Option<WorkerMessage>> {
        self.ensure_admin("delete employees")?;
        let Some(id) = self.deletion.confirm() else {
            tracing::debug!("confirm without pending deletion");
            return Ok(None);
        };
        let seq = self.next_seq();
        Ok(Some(WorkerMessage::delete_employee(seq, id)))
    }

    /// Validates a form submission and returns the save request to post.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` for non-admin sessions, or the first
    /// validation error of `draft`. Nothing is written in either case.
    pub fn save_request(
        &mut self,
        id: Option<EmployeeId>,
        draft: &EmployeeDraft,
        picture: Option<PictureUpload>,
    ) -> Result<WorkerMessage> {
        self.ensure_admin(if id.is_some() { "update employees" } else { "create employees" })?;
        let fields = draft.validate()?;
        let seq = self.next_seq();
        Ok(WorkerMessage::save_employee(
            seq,
            id,
            fields,
            self.session.user_id.clone(),
            picture,
        ))
    }

    /// Opens the detail view for `id` and returns the get request to post.
    pub fn open_employee(&mut self, id: EmployeeId) -> WorkerMessage {
        let seq = self.next_seq();
        self.detail = DetailView::Loading { id, seq };
        WorkerMessage::get_employee(seq, id)
    }

    /// Shows a fetched record if it answers the pending detail request.
    pub fn apply_detail(&mut self, seq: Seq, employee: Employee) -> bool {
        match self.detail {
            DetailView::Loading { seq: pending, .. } if pending == seq => {
                self.detail = DetailView::Open(Box::new(employee));
                true
            }
            _ => {
                tracing::debug!(seq, "discarding stale detail response");
                false
            }
        }
    }

    /// Closes the detail view if the failed request was the pending one.
    pub fn detail_failed(&mut self, seq: Seq) -> bool {
        match self.detail {
            DetailView::Loading { seq: pending, .. } if pending == seq => {
                self.detail = DetailView::Closed;
                true
            }
            _ => false,
        }
    }

    pub fn close_employee(&mut self) {
        self.detail = DetailView::Closed;
    }

    /// Keeps an open detail view in sync with a saved record.
    pub fn apply_saved(&mut self, employee: &Employee) {
        if let DetailView::Open(shown) = &mut self.detail {
            if shown.id == employee.id {
                **shown = employee.clone();
            }
        }
    }

    /// Closes the detail view if it shows a record that no longer exists.
    pub fn forget_employee(&mut self, id: EmployeeId) {
        if self.detail.employee_id() == Some(id) {
            self.detail = DetailView::Closed;
        }
    }

    #[must_use]
    pub fn stats(&self) -> DirectoryStats {
        DirectoryStats::from_records(&self.employees)
    }

    /// Computes the directory page view model.
    #[must_use]
    pub fn compute_viewmodel(&self) -> DirectoryViewModel {
        let is_admin = self.session.is_admin();
        let loading = self.is_loading();
        let total_pages = self.pagination.total_pages();

        DirectoryViewModel {
            header: HeaderInfo::for_count(self.filtered_employees.len()),
            filters: FilterBar {
                query: self.criteria.query.clone(),
                status: self.criteria.status.value().to_string(),
                department: self.criteria.department.value().to_string(),
                status_options: FilterBar::status_options(),
                department_options: FilterBar::department_options(&self.department_options()),
            },
            cards: self.current_page_records().iter().map(EmployeeCard::from).collect(),
            pagination: (total_pages > 1).then(|| PaginationBar {
                current_page: self.pagination.current_page(),
                total_pages,
                pages: (1..=total_pages).collect(),
                has_previous: self.pagination.has_previous(),
                has_next: self.pagination.has_next(),
            }),
            empty_state: (!loading && self.filtered_employees.is_empty()).then(|| EmptyState {
                message: "No employees found".to_string(),
                show_add_button: is_admin,
            }),
            loading,
            delete_dialog: self.deletion.pending().map(DeleteDialog::for_employee),
            can_edit: is_admin,
        }
    }

    /// Detail page view model, once the record has arrived.
    #[must_use]
    pub fn compute_detail(&self) -> Option<EmployeeDetail> {
        match &self.detail {
            DetailView::Open(employee) => Some(EmployeeDetail::new(employee, self.session.is_admin())),
            _ => None,
        }
    }

    #[must_use]
    pub fn compute_dashboard(&self) -> DashboardViewModel {
        let stats = self.stats();
        let card = |title: &str, value, description: &str| StatCard {
            title: title.to_string(),
            value,
            description: description.to_string(),
        };

        DashboardViewModel {
            stats: vec![
                card("Total Employees", stats.total, "All registered employees"),
                card("Active", stats.active, "Currently working"),
                card("On Leave", stats.on_leave, "Employees on leave"),
                card("Inactive", stats.inactive, "Not currently employed"),
            ],
            recent: stats.recent.iter().map(EmployeeCard::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmployeeStatus, Role};
    use crate::test_utils::sample_directory;

    fn admin_state() -> AppState {
        AppState::new(Session::new("admin-1", Role::Admin), 9)
    }

    fn loaded(records: Vec<Employee>) -> AppState {
        let mut state = admin_state();
        let WorkerMessage::ListEmployees { seq, .. } = state.load() else {
            unreachable!()
        };
        assert!(state.apply_loaded(seq, records));
        state
    }

    #[test]
    fn load_sets_and_clears_loading() {
        let mut state = admin_state();
        state.load();
        assert!(state.is_loading());
        assert!(state.compute_viewmodel().empty_state.is_none());

        let state = loaded(sample_directory());
        assert_eq!(state.load_state, LoadState::Loaded);
        assert_eq!(state.filtered_employees.len(), 10);
        assert_eq!(state.pagination.total_pages(), 2);
    }

    #[test]
    fn stale_list_response_is_discarded() {
        let mut state = admin_state();
        let first = state.load().seq();
        let second = state.load().seq();

        let fresh = sample_directory();
        assert!(state.apply_loaded(second, fresh.clone()));
        assert!(!state.apply_loaded(first, vec![]));
        assert_eq!(state.employees, fresh);
        assert!(!state.is_loading());
    }

    #[test]
    fn only_latest_load_clears_loading() {
        let mut state = admin_state();
        let first = state.load().seq();
        let second = state.load().seq();

        assert!(state.apply_loaded(first, sample_directory()));
        assert!(state.is_loading());
        assert!(!state.load_failed(first, "late failure"));
        assert!(state.load_failed(second, "Fetch error: offline"));
        assert_eq!(state.employees.len(), 10);
    }

    #[test]
    fn changing_filters_resets_to_first_page() {
        let mut state = loaded(sample_directory());
        state.next_page();
        assert_eq!(state.current_page_records().len(), 1);

        state.set_status_filter(StatusFilter::Only(EmployeeStatus::Active));
        assert_eq!(state.pagination.current_page(), 1);
        assert!(state.filtered_employees.iter().all(|e| e.status == EmployeeStatus::Active));
    }

    #[test]
    fn non_admin_cannot_delete_or_save() {
        let mut state = AppState::new(Session::new("viewer", Role::User), 9);
        let id = EmployeeId::generate();
        assert!(matches!(state.request_delete(id), Err(DirectoryError::PermissionDenied(_))));
        assert!(state.deletion.is_idle());
        assert!(matches!(
            state.save_request(None, &EmployeeDraft::default(), None),
            Err(DirectoryError::PermissionDenied(_))
        ));
    }

    #[test]
    fn invalid_draft_produces_no_request() {
        let mut state = admin_state();
        let before = state.next_seq();
        let result = state.save_request(None, &EmployeeDraft::default(), None);
        assert!(matches!(result, Err(DirectoryError::Validation { .. })));
        assert_eq!(state.next_seq(), before + 1);
    }

    #[test]
    fn viewmodel_shows_current_page_and_dialog() {
        let mut state = loaded(sample_directory());
        let target = state.employees[0].id;
        state.request_delete(target).unwrap();

        let vm = state.compute_viewmodel();
        assert_eq!(vm.cards.len(), 9);
        assert_eq!(vm.header.subtitle, "10 employees found");
        assert_eq!(vm.pagination.as_ref().unwrap().pages, vec![1, 2]);
        assert_eq!(vm.delete_dialog.unwrap().employee, target);
        assert_eq!(vm.filters.department_options[0].label, "All Departments");
    }

    #[test]
    fn department_options_come_from_full_snapshot() {
        let mut state = loaded(sample_directory());
        state.set_department_filter(DepartmentFilter::Only("Sales".into()));
        state.set_status_filter(StatusFilter::Only(EmployeeStatus::Inactive));

        assert!(state.filtered_employees.len() < state.employees.len());
        assert_eq!(
            state.department_options(),
            ["Engineering", "Research", "Operations", "Publishing", "Sales"]
        );
    }

    #[test]
    fn dashboard_lists_counters_in_order() {
        let state = loaded(sample_directory());
        let dashboard = state.compute_dashboard();
        let titles: Vec<_> = dashboard.stats.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Total Employees", "Active", "On Leave", "Inactive"]);
        assert_eq!(dashboard.stats[0].value, 10);
        assert_eq!(dashboard.recent.len(), 5);
    }
}
