//! Actions representing side effects to be executed by the directory runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event, so
//! several side effects can be queued at once. The runtime executes them in
//! order: worker requests go to the [`DirectoryWorker`](crate::worker::DirectoryWorker),
//! notifications and downloads go to the front end.

use crate::app::export::ExportArtifact;
use crate::ui::Notification;
use crate::worker::WorkerMessage;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Posts a request to the store worker.
    ///
    /// The response comes back as an
    /// [`Event::WorkerResponse`](crate::app::Event::WorkerResponse).
    PostToWorker(WorkerMessage),

    /// Shows a toast to the user.
    Notify(Notification),

    /// Offers a generated file for download.
    OfferDownload(ExportArtifact),
}
