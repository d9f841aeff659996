//! Storage record models for the persistence layer.
//!
//! This module defines the raw row type written to the collection store. It is
//! kept separate from the domain [`Employee`] so that rows written by other
//! clients (free-text status, unparsable dates) are detected at the storage
//! boundary instead of leaking invalid values into the directory snapshot.

use crate::domain::employee::DATE_FORMAT;
use crate::domain::error::{DirectoryError, Result};
use crate::domain::{Employee, EmployeeId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Represents an employee row in storage.
///
/// Enumerated and date columns are stored as text, the way a remote table
/// exposes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub department: String,
    pub position: String,
    /// Hire date as `YYYY-MM-DD`.
    pub hire_date: String,
    #[serde(default)]
    pub salary: Option<f64>,
    /// One of `active`, `inactive`, `on_leave`.
    pub status: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub emergency_contact_name: Option<String>,
    #[serde(default)]
    pub emergency_contact_phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Employee> for EmployeeRecord {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            employee_id: employee.employee_id.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            department: employee.department.clone(),
            position: employee.position.clone(),
            hire_date: employee.hire_date.format(DATE_FORMAT).to_string(),
            salary: employee.salary,
            status: employee.status.as_str().to_string(),
            address: employee.address.clone(),
            city: employee.city.clone(),
            state: employee.state.clone(),
            zip_code: employee.zip_code.clone(),
            emergency_contact_name: employee.emergency_contact_name.clone(),
            emergency_contact_phone: employee.emergency_contact_phone.clone(),
            notes: employee.notes.clone(),
            profile_picture_url: employee.profile_picture_url.clone(),
            created_by: employee.created_by.clone(),
            created_at: employee.created_at,
        }
    }
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = DirectoryError;

    fn try_from(record: EmployeeRecord) -> Result<Self> {
        let status = record.status.parse().map_err(|_| {
            DirectoryError::Storage(format!(
                "record {} has invalid status {:?}",
                record.id, record.status
            ))
        })?;
        let hire_date = NaiveDate::parse_from_str(&record.hire_date, DATE_FORMAT).map_err(|e| {
            DirectoryError::Storage(format!(
                "record {} has invalid hire date {:?}: {e}",
                record.id, record.hire_date
            ))
        })?;

        Ok(Self {
            id: record.id,
            employee_id: record.employee_id,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            phone: record.phone,
            department: record.department,
            position: record.position,
            hire_date,
            salary: record.salary,
            status,
            address: record.address,
            city: record.city,
            state: record.state,
            zip_code: record.zip_code,
            emergency_contact_name: record.emergency_contact_name,
            emergency_contact_phone: record.emergency_contact_phone,
            notes: record.notes,
            profile_picture_url: record.profile_picture_url,
            created_by: record.created_by,
            created_at: record.created_at,
        })
    }
}
