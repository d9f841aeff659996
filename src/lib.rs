//! Employee directory: the query and view engine behind an HR employee list.
//!
//! The crate keeps a full snapshot of employee records fetched from a record
//! store and derives everything the directory page shows from it:
//! - Case-insensitive search plus status and department filters
//! - Fixed-size pagination (9 cards per page) that resets on every change
//! - CSV export of the whole filtered view
//! - Two-step, admin-only delete confirmation
//! - Create and update with form validation and profile picture upload
//! - Detail view and dashboard counters

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (runtime.rs)                               │  ← Drives events/actions
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Filter, pagination, export, deletion engines     │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - View models │   │ - JSON store  │   │ - Seq-tagged  │
//! │ - Formatting  │   │ - Blob store  │   │   requests    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory paths (infrastructure/)           │
//! │  - Error types (domain/error)                       │
//! │  - Employee model and validation (domain/employee)  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```toml
//! # directory.toml
//! data_dir = "~/.local/share/employee-directory"
//! store_file = "employees.json"
//! page_size = 9
//! trace_level = "info"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use employee_directory::runtime::Directory;
//! use employee_directory::storage::MemoryStorage;
//! use employee_directory::worker::DirectoryWorker;
//! use employee_directory::{initialize, Config, Role, Session};
//!
//! let state = initialize(&Config::default(), Session::new("admin-1", Role::Admin));
//! let worker = DirectoryWorker::new(Box::new(MemoryStorage::new()));
//! let mut directory = Directory::new(state, worker);
//!
//! directory.load();
//! assert!(directory.view_model().cards.is_empty());
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod runtime;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{DirectoryError, Employee, EmployeeDraft, EmployeeId, EmployeeStatus, Result, Role, Session};
pub use runtime::Directory;

use app::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default name of the JSON store file inside the data directory.
pub const DEFAULT_STORE_FILE: &str = "employees.json";

/// Directory configuration.
///
/// Loaded from a flat string map (as handed over by a host application) or
/// from a TOML file. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root for the store, pictures, exports, and logs.
    ///
    /// Tilde-expanded. Default: [`infrastructure::get_data_dir`].
    pub data_dir: Option<String>,

    /// JSON store file name, relative to the data directory.
    pub store_file: String,

    /// Where profile pictures are stored. Default: `<data_dir>/employee-profiles`.
    pub blob_dir: Option<String>,

    /// Where exported files are written. Default: the data directory.
    pub export_dir: Option<String>,

    /// Cards per page. Zero falls back to 9.
    pub page_size: usize,

    /// Tracing level: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            store_file: DEFAULT_STORE_FILE.to_string(),
            blob_dir: None,
            export_dir: None,
            page_size: DEFAULT_PAGE_SIZE,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Unknown keys are ignored; unparsable or empty values fall back to
    /// their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use employee_directory::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "12".to_string());
    /// map.insert("store_file".to_string(), "staff.json".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 12);
    /// assert_eq!(config.store_file, "staff.json");
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let page_size = config
            .get("page_size")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            data_dir: text("data_dir"),
            store_file: text("store_file").unwrap_or_else(|| DEFAULT_STORE_FILE.to_string()),
            blob_dir: text("blob_dir"),
            export_dir: text("export_dir"),
            page_size,
            trace_level: text("trace_level"),
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Config`] if the text is not valid TOML for
    /// this structure.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| DirectoryError::Config(e.to_string()))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// [`DirectoryError::Config`] if it cannot be parsed.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Resolved data directory.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map_or_else(infrastructure::get_data_dir, |d| {
                PathBuf::from(infrastructure::expand_tilde(d))
            })
    }

    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.data_path().join(&self.store_file)
    }

    #[must_use]
    pub fn blob_path(&self) -> PathBuf {
        self.blob_dir.as_deref().map_or_else(
            || self.data_path().join("employee-profiles"),
            |d| PathBuf::from(infrastructure::expand_tilde(d)),
        )
    }

    #[must_use]
    pub fn export_path(&self) -> PathBuf {
        self.export_dir
            .as_deref()
            .map_or_else(|| self.data_path(), |d| PathBuf::from(infrastructure::expand_tilde(d)))
    }

    /// Page size with the zero fallback applied.
    #[must_use]
    pub const fn effective_page_size(&self) -> usize {
        if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }
}

/// Creates the controller state for a signed-in session.
///
/// The state starts empty and not loaded; post [`Event::Load`] to fetch the
/// snapshot.
#[must_use]
pub fn initialize(config: &Config, session: Session) -> AppState {
    tracing::debug!(
        user = %session.user_id,
        role = ?session.role,
        page_size = config.effective_page_size(),
        "initializing employee directory"
    );
    AppState::new(session, config.effective_page_size())
}
