//! Structured logging to a rotating file.
//!
//! Every layer of the crate logs through `tracing` spans and events. This
//! module installs the subscriber that writes them out:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFileWriter → employee-directory.log
//! ```
//!
//! # Features
//!
//! - **File Output**: `<data_dir>/employee-directory.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Level Control**: `RUST_LOG`, then `trace_level` config, then `info`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
pub mod init;

pub use file_writer::RotatingFileWriter;
pub use init::{init_tracing, LOG_FILE_NAME};
