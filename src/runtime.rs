//! Synchronous driver for one directory session.
//!
//! [`Directory`] owns the controller state and the store worker and runs the
//! event loop a front end would otherwise run:
//!
//! ```text
//! Event → handle_event → Actions ─┬─ PostToWorker → DirectoryWorker → Event::WorkerResponse ─┐
//!   ▲                             ├─ Notify       → notification queue                        │
//!   │                             └─ OfferDownload → employees.csv in the export directory    │
//!   └─────────────────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors returned by the handler never escape: they are logged and turned
//! into notifications, so the state always stays last-known-good.
//!
//! The worker can be paused. While paused, requests are queued instead of
//! executed, and the caller decides when and in which order they complete.
//! This is how overlapping loads are exercised.

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::app::filter::{DepartmentFilter, StatusFilter};
use crate::app::{error_notification, handle_event, Action, AppState, DirectoryStats, Event, ExportArtifact};
use crate::domain::{DirectoryError, Employee, EmployeeDraft, EmployeeId, Result, Session};
use crate::storage::{FsBlobStore, JsonStorage, PictureUpload};
use crate::ui::{DashboardViewModel, DirectoryViewModel, EmployeeDetail, Notification};
use crate::worker::{DirectoryWorker, WorkerMessage};
use crate::Config;

/// One signed-in directory session.
pub struct Directory {
    state: AppState,
    worker: DirectoryWorker,
    notifications: Vec<Notification>,
    downloads: Vec<ExportArtifact>,
    export_dir: Option<PathBuf>,
    paused: bool,
    pending: Vec<WorkerMessage>,
}

impl Directory {
    /// Creates a session that keeps downloads in memory only.
    pub fn new(state: AppState, worker: DirectoryWorker) -> Self {
        Self {
            state,
            worker,
            notifications: Vec::new(),
            downloads: Vec::new(),
            export_dir: None,
            paused: false,
            pending: Vec::new(),
        }
    }

    /// Opens a session backed by the JSON store and filesystem blob store
    /// configured in `config`. Exports are written to the export directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the store file cannot be created or read.
    pub fn open(config: &Config, session: Session) -> Result<Self> {
        let _span = tracing::debug_span!("directory_open", user = %session.user_id).entered();

        let store = JsonStorage::new(config.store_path())?;
        let blobs = FsBlobStore::new(config.blob_path());
        let worker = DirectoryWorker::new(Box::new(store)).with_blob_store(Box::new(blobs));

        tracing::info!(
            store = %config.store_path().display(),
            exports = %config.export_path().display(),
            "directory session opened"
        );

        Ok(Self::new(crate::initialize(config, session), worker).with_export_dir(config.export_path()))
    }

    /// Writes offered downloads into `dir`.
    #[must_use]
    pub fn with_export_dir(mut self, dir: PathBuf) -> Self {
        self.export_dir = Some(dir);
        self
    }

    /// Processes `event` and everything it triggers until the loop is idle.
    ///
    /// Returns `true` if any step changed what should be rendered.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let mut queue = VecDeque::from([event]);
        let mut render = false;

        while let Some(event) = queue.pop_front() {
            let _span = tracing::debug_span!("dispatch", event = event.name()).entered();

            match handle_event(&mut self.state, &event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(action_count = actions.len(), should_render, "event handled");
                    render |= should_render;
                    self.execute_actions(actions, &mut queue);
                }
                Err(e) => {
                    tracing::warn!(event = event.name(), error = %e, "event rejected");
                    self.notifications.push(error_notification(&e));
                    render = true;
                }
            }
        }

        render
    }

    fn execute_actions(&mut self, actions: Vec<Action>, queue: &mut VecDeque<Event>) {
        for action in actions {
            match action {
                Action::PostToWorker(message) => {
                    if self.paused {
                        tracing::debug!(seq = message.seq(), "worker paused, queueing request");
                        self.pending.push(message);
                    } else {
                        let response = self.worker.handle_message(message);
                        queue.push_back(Event::WorkerResponse(response));
                    }
                }
                Action::Notify(notification) => {
                    tracing::debug!(title = %notification.title, level = ?notification.level, "notification");
                    self.notifications.push(notification);
                }
                Action::OfferDownload(artifact) => {
                    // A failed write drops the rest of this event's actions,
                    // including the success notification.
                    if let Err(e) = self.save_download(&artifact) {
                        tracing::warn!(error = %e, file_name = %artifact.file_name, "failed to write download");
                        self.notifications.push(error_notification(&e));
                        return;
                    }
                    self.downloads.push(artifact);
                }
            }
        }
    }

    fn save_download(&self, artifact: &ExportArtifact) -> Result<()> {
        let Some(dir) = &self.export_dir else {
            return Ok(());
        };
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&artifact.file_name);
        std::fs::write(&path, artifact.contents.as_bytes())
            .map_err(|e| DirectoryError::Export(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), bytes = artifact.contents.len(), "download written");
        Ok(())
    }

    /// Stops executing worker requests; new ones are queued.
    pub fn pause_worker(&mut self) {
        self.paused = true;
    }

    /// Executes queued requests in submission order and resumes normal
    /// operation.
    pub fn resume_worker(&mut self) -> bool {
        self.paused = false;
        let pending = std::mem::take(&mut self.pending);
        let mut render = false;
        for message in pending {
            render |= self.complete(message);
        }
        render
    }

    /// Requests waiting on a paused worker, oldest first.
    pub fn pending_requests(&self) -> &[WorkerMessage] {
        &self.pending
    }

    /// Executes the queued request at `index` and delivers its response.
    ///
    /// Returns `false` if there is no such request.
    pub fn run_pending_at(&mut self, index: usize) -> bool {
        if index >= self.pending.len() {
            return false;
        }
        let message = self.pending.remove(index);
        self.complete(message)
    }

    fn complete(&mut self, message: WorkerMessage) -> bool {
        let response = self.worker.handle_message(message);
        self.dispatch(Event::WorkerResponse(response))
    }

    pub fn load(&mut self) -> bool {
        self.dispatch(Event::Load)
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        self.dispatch(Event::SetQuery(query.into()))
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) -> bool {
        self.dispatch(Event::SetStatusFilter(status))
    }

    pub fn set_department_filter(&mut self, department: DepartmentFilter) -> bool {
        self.dispatch(Event::SetDepartmentFilter(department))
    }

    pub fn next_page(&mut self) -> bool {
        self.dispatch(Event::NextPage)
    }

    pub fn previous_page(&mut self) -> bool {
        self.dispatch(Event::PreviousPage)
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.dispatch(Event::GoToPage(page))
    }

    pub fn export_current_view(&mut self) -> bool {
        self.dispatch(Event::Export)
    }

    pub fn request_delete(&mut self, id: EmployeeId) -> bool {
        self.dispatch(Event::RequestDelete(id))
    }

    pub fn cancel_delete(&mut self) -> bool {
        self.dispatch(Event::CancelDelete)
    }

    pub fn confirm_delete(&mut self) -> bool {
        self.dispatch(Event::ConfirmDelete)
    }

    pub fn open_employee(&mut self, id: EmployeeId) -> bool {
        self.dispatch(Event::OpenEmployee(id))
    }

    pub fn close_employee(&mut self) -> bool {
        self.dispatch(Event::CloseEmployee)
    }

    /// Submits the employee form. `id` is `None` to create a record.
    pub fn save_employee(
        &mut self,
        id: Option<EmployeeId>,
        draft: EmployeeDraft,
        picture: Option<PictureUpload>,
    ) -> bool {
        self.dispatch(Event::SaveEmployee { id, draft, picture })
    }

    /// Records on the current page.
    pub fn current_page_records(&self) -> &[Employee] {
        self.state.current_page_records()
    }

    /// The whole filtered view, in snapshot order.
    pub fn filtered_records(&self) -> &[Employee] {
        &self.state.filtered_employees
    }

    pub fn department_options(&self) -> Vec<String> {
        self.state.department_options()
    }

    pub fn view_model(&self) -> DirectoryViewModel {
        self.state.compute_viewmodel()
    }

    pub fn detail(&self) -> Option<EmployeeDetail> {
        self.state.compute_detail()
    }

    pub fn dashboard(&self) -> DashboardViewModel {
        self.state.compute_dashboard()
    }

    pub fn stats(&self) -> DirectoryStats {
        self.state.stats()
    }

    /// Drains the notifications raised since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Artifacts offered for download, oldest first.
    pub fn downloads(&self) -> &[ExportArtifact] {
        &self.downloads
    }

    pub const fn state(&self) -> &AppState {
        &self.state
    }

    pub fn worker_mut(&mut self) -> &mut DirectoryWorker {
        &mut self.worker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use crate::storage::MemoryStorage;
    use crate::test_utils::sample_directory;
    use crate::ui::NotificationLevel;

    fn directory(role: Role) -> Directory {
        let state = AppState::new(Session::new("admin-1", role), 9);
        let worker = DirectoryWorker::new(Box::new(MemoryStorage::with_employees(sample_directory())));
        Directory::new(state, worker)
    }

    #[test]
    fn load_runs_worker_round_trip() {
        let mut dir = directory(Role::Admin);
        assert!(dir.load());
        assert_eq!(dir.filtered_records().len(), 10);
        assert_eq!(dir.current_page_records().len(), 9);
        assert!(!dir.state().is_loading());
        assert!(dir.take_notifications().is_empty());
    }

    #[test]
    fn rejected_events_become_notifications() {
        let mut dir = directory(Role::User);
        dir.load();
        let id = dir.filtered_records()[0].id;

        dir.request_delete(id);
        let notes = dir.take_notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Access Denied");
        assert_eq!(notes[0].level, NotificationLevel::Error);
        assert!(dir.state().deletion.is_idle());
    }

    #[test]
    fn paused_requests_run_on_demand() {
        let mut dir = directory(Role::Admin);
        dir.pause_worker();
        dir.load();
        assert!(dir.state().is_loading());
        assert_eq!(dir.pending_requests().len(), 1);

        assert!(!dir.run_pending_at(3));
        assert!(dir.run_pending_at(0));
        assert!(!dir.state().is_loading());
        assert_eq!(dir.filtered_records().len(), 10);
    }

    #[test]
    fn export_is_written_to_export_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let mut dir = directory(Role::User).with_export_dir(tmp.path().join("exports"));
        dir.load();

        dir.export_current_view();
        let written = std::fs::read_to_string(tmp.path().join("exports").join("employees.csv")).unwrap();
        assert_eq!(written.lines().count(), 11);
        assert_eq!(dir.downloads().len(), 1);
        assert_eq!(dir.take_notifications()[0].description, "Employee data exported successfully");
    }

    #[test]
    fn failed_download_write_suppresses_success() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();

        let mut dir = directory(Role::User).with_export_dir(blocker);
        dir.load();
        dir.export_current_view();

        let notes = dir.take_notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].level, NotificationLevel::Error);
        assert!(dir.downloads().is_empty());
    }
}
