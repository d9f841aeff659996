//! Store worker for record and picture I/O.
//!
//! All store access goes through the worker so the controller stays a pure
//! state machine. Requests and responses are plain serializable values tagged
//! with a sequence number.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with sequence tagging
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::DirectoryWorker;
pub use messages::{Operation, Seq, WorkerMessage, WorkerResponse};
