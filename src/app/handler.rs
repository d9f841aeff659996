//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user intents and
//! worker responses, translating them into state changes and action
//! sequences. It is the only place where store outcomes become user-visible
//! notifications.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the front end or from the worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Example
//!
//! ```rust
//! use employee_directory::app::{handle_event, Action, AppState, Event};
//! use employee_directory::domain::{Role, Session};
//!
//! let mut state = AppState::new(Session::new("admin-1", Role::Admin), 9);
//! let (render, actions) = handle_event(&mut state, &Event::Load)?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::PostToWorker(_)));
//! # Ok::<(), employee_directory::DirectoryError>(())
//! ```

use crate::app::filter::{DepartmentFilter, StatusFilter};
use crate::app::{Action, AppState};
use crate::domain::error::{DirectoryError, ErrorKind, Result};
use crate::domain::{EmployeeDraft, EmployeeId};
use crate::storage::PictureUpload;
use crate::ui::Notification;
use crate::worker::{Operation, WorkerResponse};

/// User intents and worker responses.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Fetches the full employee set.
    Load,
    SetQuery(String),
    SetStatusFilter(StatusFilter),
    SetDepartmentFilter(DepartmentFilter),
    NextPage,
    PreviousPage,
    GoToPage(usize),
    /// Exports the whole filtered view as CSV.
    Export,
    RequestDelete(EmployeeId),
    CancelDelete,
    ConfirmDelete,
    /// Opens the read-only detail view.
    OpenEmployee(EmployeeId),
    CloseEmployee,
    /// Submits the employee form; `id` is `None` for a new record.
    ///
    /// An oversize picture is dropped with a "File too large" notice, but
    /// only once the form passes validation. A rejected form reports its
    /// validation error alone.
    SaveEmployee {
        id: Option<EmployeeId>,
        draft: EmployeeDraft,
        picture: Option<PictureUpload>,
    },
    /// Wraps a response from the store worker.
    WorkerResponse(WorkerResponse),
}

impl Event {
    /// Short name used in log spans.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::SetQuery(_) => "set_query",
            Self::SetStatusFilter(_) => "set_status_filter",
            Self::SetDepartmentFilter(_) => "set_department_filter",
            Self::NextPage => "next_page",
            Self::PreviousPage => "previous_page",
            Self::GoToPage(_) => "go_to_page",
            Self::Export => "export",
            Self::RequestDelete(_) => "request_delete",
            Self::CancelDelete => "cancel_delete",
            Self::ConfirmDelete => "confirm_delete",
            Self::OpenEmployee(_) => "open_employee",
            Self::CloseEmployee => "close_employee",
            Self::SaveEmployee { .. } => "save_employee",
            Self::WorkerResponse(_) => "worker_response",
        }
    }
}

/// Notification title for an error of `kind`.
#[must_use]
pub const fn error_title(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Validation => "Validation Error",
        ErrorKind::Upload => "Upload Error",
        ErrorKind::PermissionDenied => "Access Denied",
        _ => "Error",
    }
}

/// Converts an error into the notification shown to the user.
#[must_use]
pub fn error_notification(error: &DirectoryError) -> Notification {
    Notification::error(error_title(error.kind()), error.to_string())
}

fn notify_failure(kind: ErrorKind, message: &str) -> Action {
    Action::Notify(Notification::error(error_title(kind), message))
}

/// Processes an event, mutates state, and returns `(needs_render, actions)`.
///
/// Store failures arrive as [`WorkerResponse::Error`] and are turned into
/// notifications here; a `NotFound` additionally schedules a reload so the
/// stale record disappears.
///
/// # Errors
///
/// Returns the error of a rejected synchronous operation: `PermissionDenied`
/// for non-admin mutations, `Validation` for an invalid form, `Export` if CSV
/// serialization fails. No state changes and no store calls happen in these
/// cases.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event = event.name()).entered();

    match event {
        Event::Load => Ok((true, vec![Action::PostToWorker(state.load())])),
        Event::SetQuery(query) => {
            tracing::trace!(query = %query, "search query updated");
            state.set_query(query.clone());
            Ok((true, vec![]))
        }
        Event::SetStatusFilter(status) => {
            state.set_status_filter(*status);
            Ok((true, vec![]))
        }
        Event::SetDepartmentFilter(department) => {
            state.set_department_filter(department.clone());
            Ok((true, vec![]))
        }
        Event::NextPage => Ok((state.next_page(), vec![])),
        Event::PreviousPage => Ok((state.previous_page(), vec![])),
        Event::GoToPage(page) => Ok((state.go_to_page(*page), vec![])),
        Event::Export => {
            let artifact = state.export_current_view()?;
            tracing::debug!(
                rows = state.filtered_employees.len(),
                file_name = %artifact.file_name,
                "current view exported"
            );
            Ok((
                false,
                vec![
                    Action::OfferDownload(artifact),
                    Action::Notify(Notification::success("Employee data exported successfully")),
                ],
            ))
        }
        Event::RequestDelete(id) => Ok((state.request_delete(*id)?, vec![])),
        Event::CancelDelete => Ok((state.cancel_delete().is_some(), vec![])),
        Event::ConfirmDelete => {
            let actions = state
                .confirm_delete()?
                .map(Action::PostToWorker)
                .into_iter()
                .collect();
            Ok((true, actions))
        }
        Event::OpenEmployee(id) => Ok((true, vec![Action::PostToWorker(state.open_employee(*id))])),
        Event::CloseEmployee => {
            state.close_employee();
            Ok((true, vec![]))
        }
        Event::SaveEmployee { id, draft, picture } => {
            let (picture, too_large) = match picture {
                Some(p) => match p.check_size() {
                    Ok(()) => (Some(p.clone()), None),
                    Err(e) => {
                        tracing::debug!(size = p.bytes.len(), "picture too large, dropping it");
                        let description = match e {
                            DirectoryError::Upload(message) => message,
                            other => other.to_string(),
                        };
                        (None, Some(description))
                    }
                },
                None => (None, None),
            };

            // Access and form errors win over the oversize notice.
            let request = state.save_request(*id, draft, picture)?;
            let mut actions: Vec<Action> = too_large
                .map(|description| Action::Notify(Notification::error("File too large", description)))
                .into_iter()
                .collect();
            actions.push(Action::PostToWorker(request));
            Ok((false, actions))
        }
        Event::WorkerResponse(response) => Ok(handle_worker_response(state, response)),
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::EmployeesLoaded { seq, employees } => {
            (state.apply_loaded(*seq, employees.clone()), vec![])
        }
        WorkerResponse::EmployeeLoaded { seq, employee } => {
            (state.apply_detail(*seq, employee.clone()), vec![])
        }
        WorkerResponse::EmployeeSaved {
            employee,
            created,
            upload_error,
            ..
        } => {
            let mut actions = vec![];
            if let Some(message) = upload_error {
                actions.push(notify_failure(ErrorKind::Upload, message));
            }
            let verb = if *created { "created" } else { "updated" };
            tracing::debug!(employee = %employee.id, verb, "save confirmed, reloading");
            actions.push(Action::Notify(Notification::success(format!(
                "Employee {verb} successfully"
            ))));
            state.apply_saved(employee);
            actions.push(Action::PostToWorker(state.load()));
            (true, actions)
        }
        WorkerResponse::EmployeeDeleted { id, .. } => {
            state.deletion.finish(*id);
            state.forget_employee(*id);
            (
                true,
                vec![
                    Action::Notify(Notification::success("Employee deleted successfully")),
                    Action::PostToWorker(state.load()),
                ],
            )
        }
        WorkerResponse::Error {
            seq,
            operation,
            id,
            kind,
            message,
        } => {
            tracing::debug!(seq, operation = ?operation, kind = ?kind, message = %message, "worker reported failure");

            let mut actions = vec![];
            let render = match operation {
                Operation::List => {
                    state.load_failed(*seq, message);
                    actions.push(notify_failure(*kind, message));
                    true
                }
                Operation::Get => {
                    if !state.detail_failed(*seq) {
                        return (false, vec![]);
                    }
                    actions.push(notify_failure(*kind, message));
                    true
                }
                Operation::Save => {
                    actions.push(notify_failure(*kind, message));
                    false
                }
                Operation::Delete => {
                    if let Some(id) = id {
                        state.deletion.finish(*id);
                    }
                    actions.push(notify_failure(*kind, message));
                    true
                }
            };

            if *kind == ErrorKind::NotFound && *operation != Operation::List {
                if let Some(id) = id {
                    state.forget_employee(*id);
                }
                actions.push(Action::PostToWorker(state.load()));
            }

            (render, actions)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::deletion::DeletionState;
    use crate::app::modes::{DetailView, LoadState};
    use crate::domain::{Role, Session};
    use crate::test_utils::sample_directory;
    use crate::worker::WorkerMessage;

    fn admin() -> AppState {
        AppState::new(Session::new("admin-1", Role::Admin), 9)
    }

    fn posted(actions: &[Action]) -> Vec<&WorkerMessage> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::PostToWorker(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    fn notifications(actions: &[Action]) -> Vec<&Notification> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::Notify(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn confirm_delete_posts_exactly_one_request() {
        let mut state = admin();
        let id = EmployeeId::generate();

        let (_, actions) = handle_event(&mut state, &Event::RequestDelete(id)).unwrap();
        assert!(actions.is_empty());

        let (_, actions) = handle_event(&mut state, &Event::ConfirmDelete).unwrap();
        assert_eq!(posted(&actions).len(), 1);
        assert!(matches!(posted(&actions)[0], WorkerMessage::DeleteEmployee { id: got, .. } if *got == id));

        let (_, actions) = handle_event(&mut state, &Event::ConfirmDelete).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn cancel_delete_makes_no_request() {
        let mut state = admin();
        handle_event(&mut state, &Event::RequestDelete(EmployeeId::generate())).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::CancelDelete).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.deletion.state(), DeletionState::Idle);
    }

    #[test]
    fn failed_delete_returns_to_idle_and_notifies() {
        let mut state = admin();
        let id = EmployeeId::generate();
        handle_event(&mut state, &Event::RequestDelete(id)).unwrap();
        handle_event(&mut state, &Event::ConfirmDelete).unwrap();

        let response = WorkerResponse::Error {
            seq: 1,
            operation: Operation::Delete,
            id: Some(id),
            kind: ErrorKind::Storage,
            message: "Storage error: Simulated write error".to_string(),
        };
        let (_, actions) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        assert!(state.deletion.is_idle());
        assert_eq!(notifications(&actions)[0].title, "Error");
        assert!(posted(&actions).is_empty());
    }

    #[test]
    fn not_found_triggers_refetch() {
        let mut state = admin();
        let id = EmployeeId::generate();
        let response = WorkerResponse::Error {
            seq: 3,
            operation: Operation::Save,
            id: Some(id),
            kind: ErrorKind::NotFound,
            message: format!("Employee not found: {id}"),
        };
        let (_, actions) = handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        assert!(matches!(posted(&actions)[..], [WorkerMessage::ListEmployees { .. }]));
        assert!(state.is_loading());
    }

    #[test]
    fn list_failure_keeps_snapshot() {
        let mut state = admin();
        let (_, actions) = handle_event(&mut state, &Event::Load).unwrap();
        let seq = posted(&actions)[0].seq();
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::EmployeesLoaded {
                seq,
                employees: sample_directory(),
            }),
        )
        .unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Load).unwrap();
        let seq = posted(&actions)[0].seq();
        let (_, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Error {
                seq,
                operation: Operation::List,
                id: None,
                kind: ErrorKind::Fetch,
                message: "Fetch error: offline".to_string(),
            }),
        )
        .unwrap();

        assert_eq!(state.employees.len(), 10);
        assert!(matches!(state.load_state, LoadState::Failed { .. }));
        assert_eq!(notifications(&actions)[0].description, "Fetch error: offline");
    }

    #[test]
    fn oversized_picture_is_dropped_with_notification() {
        let mut state = admin();
        let draft = EmployeeDraft {
            employee_id: "E-1".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            department: "Engineering".into(),
            position: "Analyst".into(),
            hire_date: "2024-03-01".into(),
            ..Default::default()
        };
        let picture = PictureUpload::new("big.png", vec![0; crate::storage::MAX_PICTURE_BYTES + 1]);

        let (_, actions) = handle_event(
            &mut state,
            &Event::SaveEmployee {
                id: None,
                draft,
                picture: Some(picture),
            },
        )
        .unwrap();

        assert_eq!(notifications(&actions)[0].title, "File too large");
        assert!(matches!(posted(&actions)[0], WorkerMessage::SaveEmployee { picture: None, .. }));
    }

    #[test]
    fn invalid_form_with_oversized_picture_reports_validation() {
        let mut state = admin();
        let draft = EmployeeDraft {
            employee_id: "E-1".into(),
            first_name: "A".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            department: "Engineering".into(),
            position: "Analyst".into(),
            hire_date: "2024-03-01".into(),
            ..Default::default()
        };
        let picture = PictureUpload::new("big.png", vec![0; crate::storage::MAX_PICTURE_BYTES + 1]);

        let err = handle_event(
            &mut state,
            &Event::SaveEmployee {
                id: None,
                draft,
                picture: Some(picture),
            },
        )
        .unwrap_err();
        assert!(matches!(err, DirectoryError::Validation { .. }));
        assert_eq!(error_notification(&err).title, "Validation Error");
    }

    #[test]
    fn validation_failure_is_an_error_without_request() {
        let mut state = admin();
        let err = handle_event(
            &mut state,
            &Event::SaveEmployee {
                id: None,
                draft: EmployeeDraft::default(),
                picture: None,
            },
        )
        .unwrap_err();
        assert_eq!(error_notification(&err).title, "Validation Error");
        assert_eq!(err.to_string(), "Employee ID is required");
    }

    #[test]
    fn detail_not_found_closes_view_and_reloads() {
        let mut state = admin();
        let id = EmployeeId::generate();
        let (_, actions) = handle_event(&mut state, &Event::OpenEmployee(id)).unwrap();
        let seq = posted(&actions)[0].seq();

        let (_, actions) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Error {
                seq,
                operation: Operation::Get,
                id: Some(id),
                kind: ErrorKind::NotFound,
                message: format!("Employee not found: {id}"),
            }),
        )
        .unwrap();

        assert_eq!(state.detail, DetailView::Closed);
        assert_eq!(posted(&actions).len(), 1);
    }
}
