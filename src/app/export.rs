//! CSV export of the current filtered view.
//!
//! The export covers the whole filtered set, not just the visible page. Fields
//! are quoted only when they contain a comma, a quote, or a line break.

use crate::domain::error::{DirectoryError, Result};
use crate::domain::employee::DATE_FORMAT;
use crate::domain::Employee;

/// Suggested file name for the download.
pub const EXPORT_FILE_NAME: &str = "employees.csv";

/// MIME type of the download.
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// Column headers, in output order.
pub const EXPORT_HEADERS: [&str; 7] = [
    "Employee ID",
    "Name",
    "Email",
    "Department",
    "Position",
    "Status",
    "Hire Date",
];

/// A generated file offered to the user for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
}

impl ExportArtifact {
    /// Serializes `employees` into an `employees.csv` artifact.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Export`] if CSV serialization fails.
    pub fn csv(employees: &[Employee]) -> Result<Self> {
        Ok(Self {
            file_name: EXPORT_FILE_NAME.to_string(),
            mime_type: EXPORT_MIME_TYPE.to_string(),
            contents: serialize_employees(employees)?,
        })
    }
}

/// Serializes `employees` as CSV: one header line plus one line per record.
///
/// Every line, including the last, ends with `\n`.
///
/// # Errors
///
/// Returns [`DirectoryError::Export`] if a row cannot be written.
pub fn serialize_employees(employees: &[Employee]) -> Result<String> {
    let _span = tracing::debug_span!("serialize_employees", rows = employees.len()).entered();

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(vec![]);

    writer.write_record(EXPORT_HEADERS)?;
    for employee in employees {
        let hire_date = employee.hire_date.format(DATE_FORMAT).to_string();
        writer.write_record([
            employee.employee_id.as_str(),
            employee.full_name().as_str(),
            employee.email.as_str(),
            employee.department.as_str(),
            employee.position.as_str(),
            employee.status.as_str(),
            hire_date.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DirectoryError::Export(e.to_string()))?;
    let contents = String::from_utf8(bytes).map_err(|e| DirectoryError::Export(e.to_string()))?;

    tracing::debug!(bytes = contents.len(), "employees serialized to CSV");
    Ok(contents)
}
