//! Worker implementation that owns the record store and blob store.
//!
//! The worker executes one [`WorkerMessage`] at a time against its stores and
//! answers with a [`WorkerResponse`]. It never touches controller state; all
//! decisions about what to show the user are made by the event handler.

use crate::domain::error::{DirectoryError, Result};
use crate::domain::{EmployeeFields, EmployeeId};
use crate::storage::{BlobStore, EmployeeStore, OrderBy, PictureUpload};
use crate::worker::messages::{Operation, Seq};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Store worker.
///
/// The blob store is optional; without one, picture uploads fail with an
/// upload error and the save goes ahead with the previous picture URL.
pub struct DirectoryWorker {
    store: Box<dyn EmployeeStore>,
    blobs: Option<Box<dyn BlobStore>>,
}

impl DirectoryWorker {
    pub fn new(store: Box<dyn EmployeeStore>) -> Self {
        Self { store, blobs: None }
    }

    #[must_use]
    pub fn with_blob_store(mut self, blobs: Box<dyn BlobStore>) -> Self {
        self.blobs = Some(blobs);
        self
    }

    /// Direct access to the record store, e.g. for seeding.
    pub fn store_mut(&mut self) -> &mut dyn EmployeeStore {
        self.store.as_mut()
    }

    /// Helper for handling store results with consistent logging.
    ///
    /// Failures are flattened into [`WorkerResponse::Error`] carrying the
    /// error's kind so the controller can pick the right notification.
    fn handle_db_result<T, F>(
        seq: Seq,
        operation: Operation,
        id: Option<EmployeeId>,
        result: Result<T>,
        on_success: F,
    ) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(seq, operation = ?operation, "store operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(seq, operation = ?operation, error = %e, "store operation failed");
                WorkerResponse::Error {
                    seq,
                    operation,
                    id,
                    kind: e.kind(),
                    message: e.to_string(),
                }
            }
        }
    }

    fn handle_list_employees(&self, seq: Seq, order: OrderBy) -> WorkerResponse {
        Self::handle_db_result(
            seq,
            Operation::List,
            None,
            self.store.list_employees(order),
            |employees| {
                tracing::debug!(employee_count = employees.len(), "employees loaded from store");
                WorkerResponse::EmployeesLoaded { seq, employees }
            },
        )
    }

    fn handle_get_employee(&self, seq: Seq, id: EmployeeId) -> WorkerResponse {
        Self::handle_db_result(
            seq,
            Operation::Get,
            Some(id),
            self.store.get_employee(id),
            |employee| WorkerResponse::EmployeeLoaded { seq, employee },
        )
    }

    /// Uploads `picture` and returns its public URL.
    fn upload_picture(&mut self, picture: &PictureUpload) -> Result<String> {
        picture.check_size()?;
        let blobs = self
            .blobs
            .as_mut()
            .ok_or_else(|| DirectoryError::Upload("No blob store configured".to_string()))?;
        blobs.upload(&picture.object_path(), &picture.bytes)
    }

    /// Handles `SaveEmployee`: optional upload, then create or update.
    ///
    /// An upload failure is reported alongside the saved record and never
    /// aborts the write.
    fn handle_save_employee(
        &mut self,
        seq: Seq,
        id: Option<EmployeeId>,
        mut fields: EmployeeFields,
        created_by: &str,
        picture: Option<PictureUpload>,
    ) -> WorkerResponse {
        let mut upload_error = None;
        if let Some(picture) = picture {
            match self.upload_picture(&picture) {
                Ok(url) => {
                    tracing::debug!(url = %url, "profile picture uploaded");
                    fields.profile_picture_url = Some(url);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "profile picture upload failed, keeping previous URL");
                    upload_error = Some(e.to_string());
                }
            }
        }

        let created = id.is_none();
        let result = match id {
            Some(id) => self.store.update_employee(id, fields),
            None => self.store.create_employee(fields, created_by),
        };

        Self::handle_db_result(seq, Operation::Save, id, result, |employee| {
            tracing::debug!(employee = %employee.id, created, "employee saved");
            WorkerResponse::EmployeeSaved {
                seq,
                employee,
                created,
                upload_error,
            }
        })
    }

    fn handle_delete_employee(&mut self, seq: Seq, id: EmployeeId) -> WorkerResponse {
        Self::handle_db_result(
            seq,
            Operation::Delete,
            Some(id),
            self.store.delete_employee(id),
            |()| WorkerResponse::EmployeeDeleted { seq, id },
        )
    }

    /// Processes a worker message and returns the response.
    ///
    /// This is the main message handling entry point, dispatching to specific
    /// handlers based on the message variant inside a debug span.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _span = tracing::debug_span!("worker_handle_message",
            seq = message.seq(),
            operation = ?message.operation()
        )
        .entered();

        match message {
            WorkerMessage::ListEmployees { seq, order } => self.handle_list_employees(seq, order),
            WorkerMessage::GetEmployee { seq, id } => self.handle_get_employee(seq, id),
            WorkerMessage::SaveEmployee {
                seq,
                id,
                fields,
                created_by,
                picture,
            } => self.handle_save_employee(seq, id, fields, &created_by, picture),
            WorkerMessage::DeleteEmployee { seq, id } => self.handle_delete_employee(seq, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use crate::storage::MemoryStorage;
    use crate::test_utils::fields;

    struct FailingBlobs;

    impl BlobStore for FailingBlobs {
        fn upload(&mut self, _path: &str, _bytes: &[u8]) -> Result<String> {
            Err(DirectoryError::Upload("bucket unavailable".to_string()))
        }
    }

    struct RecordingBlobs;

    impl BlobStore for RecordingBlobs {
        fn upload(&mut self, path: &str, _bytes: &[u8]) -> Result<String> {
            Ok(format!("https://cdn.example.com/employee-profiles/{path}"))
        }
    }

    #[test]
    fn list_echoes_sequence_number() {
        let mut worker = DirectoryWorker::new(Box::new(MemoryStorage::new()));
        let response = worker.handle_message(WorkerMessage::list_employees(4, OrderBy::CreatedAtDesc));
        assert_eq!(response, WorkerResponse::EmployeesLoaded { seq: 4, employees: vec![] });
    }

    #[test]
    fn upload_failure_keeps_previous_url_and_saves() {
        let mut worker =
            DirectoryWorker::new(Box::new(MemoryStorage::new())).with_blob_store(Box::new(FailingBlobs));
        let mut record = fields("E-1", "Engineering");
        record.profile_picture_url = Some("https://old.example.com/a.png".to_string());

        let response = worker.handle_message(WorkerMessage::save_employee(
            1,
            None,
            record,
            "admin".to_string(),
            Some(PictureUpload::new("me.png", vec![1, 2, 3])),
        ));

        match response {
            WorkerResponse::EmployeeSaved { employee, created, upload_error, .. } => {
                assert!(created);
                assert_eq!(employee.profile_picture_url.as_deref(), Some("https://old.example.com/a.png"));
                assert_eq!(employee.created_by, "admin");
                assert!(upload_error.unwrap().contains("bucket unavailable"));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn successful_upload_sets_picture_url() {
        let mut worker =
            DirectoryWorker::new(Box::new(MemoryStorage::new())).with_blob_store(Box::new(RecordingBlobs));
        let response = worker.handle_message(WorkerMessage::save_employee(
            1,
            None,
            fields("E-1", "Engineering"),
            "admin".to_string(),
            Some(PictureUpload::new("me.png", vec![1])),
        ));

        let WorkerResponse::EmployeeSaved { employee, upload_error, .. } = response else {
            panic!("expected saved response");
        };
        assert!(upload_error.is_none());
        let url = employee.profile_picture_url.unwrap();
        assert!(url.starts_with("https://cdn.example.com/employee-profiles/"));
        assert!(url.ends_with(".png"));
    }

    #[test]
    fn deleting_missing_record_reports_not_found() {
        let mut worker = DirectoryWorker::new(Box::new(MemoryStorage::new()));
        let id = EmployeeId::generate();
        let response = worker.handle_message(WorkerMessage::delete_employee(9, id));
        assert!(matches!(
            response,
            WorkerResponse::Error { seq: 9, operation: Operation::Delete, kind: ErrorKind::NotFound, id: Some(got), .. } if got == id
        ));
    }
}
