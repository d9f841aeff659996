//! Search and categorical filtering of the employee snapshot.
//!
//! Filtering is a pure function of the full record set and the current
//! [`FilterCriteria`]. It keeps no cache: callers re-run it whenever the
//! records or any criterion changes.

use crate::domain::error::Result;
use crate::domain::{Employee, EmployeeStatus};

/// Value used by filter controls to disable a filter.
pub const ALL: &str = "all";

/// Status filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(EmployeeStatus),
}

impl StatusFilter {
    /// Parses a control value: `all` or a status such as `on_leave`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for unknown status values.
    pub fn from_value(value: &str) -> Result<Self> {
        if value == ALL {
            Ok(Self::All)
        } else {
            value.parse().map(Self::Only)
        }
    }

    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::All => ALL,
            Self::Only(status) => status.as_str(),
        }
    }

    #[must_use]
    pub fn matches(&self, status: EmployeeStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

/// Department filter selection.
///
/// Departments are free text, so matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DepartmentFilter {
    #[default]
    All,
    Only(String),
}

impl DepartmentFilter {
    /// Parses a control value: `all` or a department name.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(department) => department,
        }
    }

    #[must_use]
    pub fn matches(&self, department: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == department,
        }
    }
}

/// Current search text and filter selections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub query: String,
    pub status: StatusFilter,
    pub department: DepartmentFilter,
}

impl FilterCriteria {
    /// Returns `true` if `employee` satisfies all three predicates.
    ///
    /// The query is matched case-insensitively as a substring of first name,
    /// last name, email, employee ID, department, or position; any one field
    /// suffices. An empty query matches every record.
    #[must_use]
    pub fn matches(&self, employee: &Employee) -> bool {
        self.status.matches(employee.status)
            && self.department.matches(&employee.department)
            && query_matches(&self.query.to_lowercase(), employee)
    }
}

fn query_matches(needle: &str, employee: &Employee) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        &employee.first_name,
        &employee.last_name,
        &employee.email,
        &employee.employee_id,
        &employee.department,
        &employee.position,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Reduces `records` to those matching `query`, `status`, and `department`.
///
/// The result is a subsequence of `records` in the original order.
///
/// # Examples
///
/// ```
/// use employee_directory::app::filter::{filter_employees, DepartmentFilter, StatusFilter};
///
/// let filtered = filter_employees(&[], "ada", StatusFilter::All, &DepartmentFilter::All);
/// assert!(filtered.is_empty());
/// ```
#[must_use]
pub fn filter_employees(
    records: &[Employee],
    query: &str,
    status: StatusFilter,
    department: &DepartmentFilter,
) -> Vec<Employee> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|e| {
            status.matches(e.status) && department.matches(&e.department) && query_matches(&needle, e)
        })
        .cloned()
        .collect()
}

/// Distinct departments of `records` in first-seen order.
#[must_use]
pub fn department_options(records: &[Employee]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    records
        .iter()
        .filter(|e| seen.insert(e.department.as_str()))
        .map(|e| e.department.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{employee, sample_directory};

    #[test]
    fn department_filter_selects_exact_department() {
        let records = sample_directory();
        let filtered = filter_employees(
            &records,
            "",
            StatusFilter::All,
            &DepartmentFilter::Only("Engineering".to_string()),
        );
        assert_eq!(filtered.len(), 4);
        assert!(filtered.iter().all(|e| e.department == "Engineering"));

        let lowercase = filter_employees(
            &records,
            "",
            StatusFilter::All,
            &DepartmentFilter::Only("engineering".to_string()),
        );
        assert!(lowercase.is_empty());
    }

    #[test]
    fn query_is_case_insensitive_across_fields() {
        let records = vec![
            employee("E-1", "Ada", "Lovelace", "Engineering", EmployeeStatus::Active),
            employee("E-2", "Grace", "Hopper", "Navy", EmployeeStatus::Active),
            employee("X-9", "Alan", "Turing", "Research", EmployeeStatus::Inactive),
        ];

        let by_name = filter_employees(&records, "LOVE", StatusFilter::All, &DepartmentFilter::All);
        assert_eq!(by_name.len(), 1);

        let by_employee_id = filter_employees(&records, "x-9", StatusFilter::All, &DepartmentFilter::All);
        assert_eq!(by_employee_id[0].first_name, "Alan");

        let by_department = filter_employees(&records, "nav", StatusFilter::All, &DepartmentFilter::All);
        assert_eq!(by_department[0].first_name, "Grace");

        let by_email = filter_employees(&records, "@example.com", StatusFilter::All, &DepartmentFilter::All);
        assert_eq!(by_email.len(), 3);
    }

    #[test]
    fn predicates_combine_with_and_and_preserve_order() {
        let records = sample_directory();
        let criteria = FilterCriteria {
            query: "e".to_string(),
            status: StatusFilter::Only(EmployeeStatus::Active),
            department: DepartmentFilter::Only("Engineering".to_string()),
        };

        let filtered = filter_employees(&records, &criteria.query, criteria.status, &criteria.department);
        let expected: Vec<_> = records.iter().filter(|e| criteria.matches(e)).cloned().collect();
        assert_eq!(filtered, expected);

        let positions: Vec<_> = filtered
            .iter()
            .map(|f| records.iter().position(|r| r.id == f.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn control_values_parse() {
        assert_eq!(StatusFilter::from_value("all").unwrap(), StatusFilter::All);
        assert_eq!(
            StatusFilter::from_value("on_leave").unwrap(),
            StatusFilter::Only(EmployeeStatus::OnLeave)
        );
        assert!(StatusFilter::from_value("fired").is_err());
        assert_eq!(DepartmentFilter::from_value("Sales").value(), "Sales");
    }

    #[test]
    fn department_options_are_distinct_in_first_seen_order() {
        let records = vec![
            employee("E-1", "Ada", "Lovelace", "Engineering", EmployeeStatus::Active),
            employee("E-2", "Grace", "Hopper", "Sales", EmployeeStatus::Active),
            employee("E-3", "Alan", "Turing", "Engineering", EmployeeStatus::Active),
            employee("E-4", "Edsger", "Dijkstra", "Research", EmployeeStatus::Active),
        ];
        assert_eq!(department_options(&records), ["Engineering", "Sales", "Research"]);
    }
}
