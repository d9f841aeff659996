//! Employee domain model and form drafts.
//!
//! This module defines the [`Employee`] record held in the directory snapshot,
//! the [`EmployeeFields`] set replaced wholesale by create and update, and the
//! [`EmployeeDraft`] raw form input that validates into fields.

use super::error::{DirectoryError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Format used for hire dates in drafts, storage, and exports.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Opaque, store-assigned record key.
///
/// Assigned once when the record is inserted and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmployeeId {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| DirectoryError::validation("id", format!("invalid employee id {s}: {e}")))
    }
}

/// Employment status. No other value is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
    OnLeave,
}

impl EmployeeStatus {
    /// Every valid status, in display order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::OnLeave];

    /// Wire and export representation (`active`, `inactive`, `on_leave`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::OnLeave => "on_leave",
        }
    }

    /// Badge text shown on cards (`on leave` rather than `on_leave`).
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::OnLeave => "on leave",
        }
    }

    /// Label used by the status filter control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::OnLeave => "On Leave",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeStatus {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "on_leave" => Ok(Self::OnLeave),
            other => Err(DirectoryError::validation(
                "status",
                format!("Invalid status: {other}"),
            )),
        }
    }
}

/// The full, validated field set written by create and update.
///
/// Update replaces every field; there is no partial patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFields {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub position: String,
    pub hire_date: NaiveDate,
    pub salary: Option<f64>,
    pub status: EmployeeStatus,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub notes: Option<String>,
    pub profile_picture_url: Option<String>,
}

/// An employee record as held in the directory snapshot.
///
/// `id`, `created_by`, and `created_at` are assigned by the store on insert and
/// survive updates unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub position: String,
    pub hire_date: NaiveDate,
    pub salary: Option<f64>,
    pub status: EmployeeStatus,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub notes: Option<String>,
    pub profile_picture_url: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Builds a record from validated fields plus store-assigned metadata.
    #[must_use]
    pub fn from_fields(
        id: EmployeeId,
        fields: EmployeeFields,
        created_by: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let EmployeeFields {
            employee_id,
            first_name,
            last_name,
            email,
            phone,
            department,
            position,
            hire_date,
            salary,
            status,
            address,
            city,
            state,
            zip_code,
            emergency_contact_name,
            emergency_contact_phone,
            notes,
            profile_picture_url,
        } = fields;

        Self {
            id,
            employee_id,
            first_name,
            last_name,
            email,
            phone,
            department,
            position,
            hire_date,
            salary,
            status,
            address,
            city,
            state,
            zip_code,
            emergency_contact_name,
            emergency_contact_phone,
            notes,
            profile_picture_url,
            created_by: created_by.into(),
            created_at,
        }
    }

    /// Replaces the full field set, keeping `id`, `created_by`, and `created_at`.
    #[must_use]
    pub fn with_fields(&self, fields: EmployeeFields) -> Self {
        Self::from_fields(self.id, fields, self.created_by.clone(), self.created_at)
    }

    /// Returns the mutable field set of this record.
    #[must_use]
    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            employee_id: self.employee_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            department: self.department.clone(),
            position: self.position.clone(),
            hire_date: self.hire_date,
            salary: self.salary,
            status: self.status,
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
            emergency_contact_name: self.emergency_contact_name.clone(),
            emergency_contact_phone: self.emergency_contact_phone.clone(),
            notes: self.notes.clone(),
            profile_picture_url: self.profile_picture_url.clone(),
        }
    }

    /// First and last name joined by a single space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Avatar initials: first character of each name.
    #[must_use]
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }
}

/// Raw form input for creating or editing an employee.
///
/// Every field is the text the user typed. [`EmployeeDraft::validate`] turns it
/// into [`EmployeeFields`] or reports the first failing field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub hire_date: String,
    pub salary: String,
    pub status: EmployeeStatus,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub notes: String,
    pub profile_picture_url: String,
}

impl EmployeeDraft {
    /// Prefills a draft from an existing record for editing.
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            employee_id: employee.employee_id.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: text(&employee.phone),
            department: employee.department.clone(),
            position: employee.position.clone(),
            hire_date: employee.hire_date.format(DATE_FORMAT).to_string(),
            salary: employee.salary.map(|s| s.to_string()).unwrap_or_default(),
            status: employee.status,
            address: text(&employee.address),
            city: text(&employee.city),
            state: text(&employee.state),
            zip_code: text(&employee.zip_code),
            emergency_contact_name: text(&employee.emergency_contact_name),
            emergency_contact_phone: text(&employee.emergency_contact_phone),
            notes: text(&employee.notes),
            profile_picture_url: text(&employee.profile_picture_url),
        }
    }

    /// Validates the draft, returning the first failing field's error.
    ///
    /// Fields are checked in form order: employee ID, first name, last name,
    /// email, department, position, hire date, salary. Surrounding whitespace is
    /// trimmed and empty optional fields become `None`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] for the first field that fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_directory::domain::EmployeeDraft;
    ///
    /// let draft = EmployeeDraft {
    ///     employee_id: "E-001".into(),
    ///     first_name: "A".into(),
    ///     ..Default::default()
    /// };
    /// let err = draft.validate().unwrap_err();
    /// assert_eq!(err.to_string(), "First name must be at least 2 characters");
    /// ```
    pub fn validate(&self) -> Result<EmployeeFields> {
        let employee_id = required(&self.employee_id, "employee_id", "Employee ID is required")?;
        let first_name = min_chars(&self.first_name, 2, "first_name", "First name must be at least 2 characters")?;
        let last_name = min_chars(&self.last_name, 2, "last_name", "Last name must be at least 2 characters")?;

        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(DirectoryError::validation("email", "Invalid email address"));
        }

        let department = required(&self.department, "department", "Department is required")?;
        let position = required(&self.position, "position", "Position is required")?;

        let hire_date = required(&self.hire_date, "hire_date", "Hire date is required")?;
        let hire_date = NaiveDate::parse_from_str(&hire_date, DATE_FORMAT)
            .map_err(|_| DirectoryError::validation("hire_date", "Hire date must be a valid date (YYYY-MM-DD)"))?;

        let salary = match optional(&self.salary) {
            None => None,
            Some(raw) => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
                _ => {
                    return Err(DirectoryError::validation(
                        "salary",
                        "Salary must be a non-negative number",
                    ))
                }
            },
        };

        Ok(EmployeeFields {
            employee_id,
            first_name,
            last_name,
            email: email.to_string(),
            phone: optional(&self.phone),
            department,
            position,
            hire_date,
            salary,
            status: self.status,
            address: optional(&self.address),
            city: optional(&self.city),
            state: optional(&self.state),
            zip_code: optional(&self.zip_code),
            emergency_contact_name: optional(&self.emergency_contact_name),
            emergency_contact_phone: optional(&self.emergency_contact_phone),
            notes: optional(&self.notes),
            profile_picture_url: optional(&self.profile_picture_url),
        })
    }
}

fn required(value: &str, field: &str, message: &str) -> Result<String> {
    min_chars(value, 1, field, message)
}

fn min_chars(value: &str, min: usize, field: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.chars().count() < min {
        return Err(DirectoryError::validation(field, message));
    }
    Ok(trimmed.to_string())
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Minimal address check: `local@domain.tld`, no whitespace.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    domain.contains('.') && labels.all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorKind;

    fn valid_draft() -> EmployeeDraft {
        EmployeeDraft {
            employee_id: "E-100".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            department: "Engineering".into(),
            position: "Analyst".into(),
            hire_date: "2024-03-01".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_draft_produces_fields() {
        let fields = valid_draft().validate().unwrap();
        assert_eq!(fields.first_name, "Ada");
        assert_eq!(fields.hire_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(fields.status, EmployeeStatus::Active);
        assert!(fields.phone.is_none());
        assert!(fields.salary.is_none());
    }

    #[test]
    fn reports_first_failing_field() {
        let draft = EmployeeDraft {
            first_name: "A".into(),
            email: "nope".into(),
            ..valid_draft()
        };
        match draft.validate() {
            Err(DirectoryError::Validation { field, message }) => {
                assert_eq!(field, "first_name");
                assert_eq!(message, "First name must be at least 2 characters");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_email_and_missing_hire_date() {
        let bad_email = EmployeeDraft {
            email: "ada@example".into(),
            ..valid_draft()
        };
        assert_eq!(bad_email.validate().unwrap_err().to_string(), "Invalid email address");

        let no_date = EmployeeDraft {
            hire_date: "  ".into(),
            ..valid_draft()
        };
        assert_eq!(no_date.validate().unwrap_err().to_string(), "Hire date is required");
    }

    #[test]
    fn salary_must_be_non_negative() {
        let negative = EmployeeDraft {
            salary: "-5".into(),
            ..valid_draft()
        };
        assert!(matches!(
            negative.validate(),
            Err(DirectoryError::Validation { ref field, .. }) if field == "salary"
        ));

        let ok = EmployeeDraft {
            salary: "85000.50".into(),
            ..valid_draft()
        };
        assert_eq!(ok.validate().unwrap().salary, Some(85000.50));
    }

    #[test]
    fn malformed_id_is_a_validation_error() {
        let id = EmployeeId::generate();
        assert_eq!(id.to_string().parse::<EmployeeId>().unwrap(), id);

        let err = "not-a-uuid".parse::<EmployeeId>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(matches!(err, DirectoryError::Validation { ref field, .. } if field == "id"));
    }

    #[test]
    fn status_parses_only_known_values() {
        assert_eq!("on_leave".parse::<EmployeeStatus>().unwrap(), EmployeeStatus::OnLeave);
        assert!("retired".parse::<EmployeeStatus>().is_err());
        assert_eq!(EmployeeStatus::OnLeave.badge(), "on leave");
    }

    #[test]
    fn draft_round_trips_through_employee() {
        let fields = valid_draft().validate().unwrap();
        let employee = Employee::from_fields(EmployeeId::generate(), fields.clone(), "admin", Utc::now());
        assert_eq!(employee.full_name(), "Ada Lovelace");
        assert_eq!(employee.initials(), "AL");
        assert_eq!(EmployeeDraft::from_employee(&employee).validate().unwrap(), fields);
    }
}
