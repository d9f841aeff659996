//! View model types representing renderable directory state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) and contain
//! only display-ready data: formatted dates and currency, badge text, page
//! numbers. They contain no business logic and are cheap to compare in tests.

use crate::domain::{Employee, EmployeeId, EmployeeStatus};
use crate::ui::helpers::{format_currency, format_long_date, or_na, pluralize};

/// Complete view model for the directory page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryViewModel {
    pub header: HeaderInfo,
    pub filters: FilterBar,
    /// Cards for the current page only.
    pub cards: Vec<EmployeeCard>,
    /// Present only when there is more than one page.
    pub pagination: Option<PaginationBar>,
    /// Present when the filtered view is empty and nothing is loading.
    pub empty_state: Option<EmptyState>,
    pub loading: bool,
    pub delete_dialog: Option<DeleteDialog>,
    /// Whether add/edit/delete controls are shown.
    pub can_edit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// e.g. `10 employees found`.
    pub subtitle: String,
}

impl HeaderInfo {
    #[must_use]
    pub fn for_count(count: usize) -> Self {
        Self {
            title: "Employees".to_string(),
            subtitle: format!("{count} {} found", pluralize(count, "employee", "employees")),
        }
    }
}

/// A select control option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Search box and the two filter selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBar {
    pub query: String,
    pub status: String,
    pub department: String,
    pub status_options: Vec<SelectOption>,
    pub department_options: Vec<SelectOption>,
}

impl FilterBar {
    /// Status options: `All Status` followed by every status label.
    #[must_use]
    pub fn status_options() -> Vec<SelectOption> {
        std::iter::once(SelectOption::new("all", "All Status"))
            .chain(
                EmployeeStatus::ALL
                    .iter()
                    .map(|s| SelectOption::new(s.as_str(), s.label())),
            )
            .collect()
    }

    /// Department options: `All Departments` followed by `departments`.
    #[must_use]
    pub fn department_options(departments: &[String]) -> Vec<SelectOption> {
        std::iter::once(SelectOption::new("all", "All Departments"))
            .chain(departments.iter().map(|d| SelectOption::new(d.as_str(), d.as_str())))
            .collect()
    }
}

/// Badge styling for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
}

impl From<EmployeeStatus> for BadgeVariant {
    fn from(status: EmployeeStatus) -> Self {
        match status {
            EmployeeStatus::Active => Self::Default,
            EmployeeStatus::OnLeave => Self::Secondary,
            EmployeeStatus::Inactive => Self::Outline,
        }
    }
}

/// One card in the directory grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeCard {
    pub id: EmployeeId,
    pub initials: String,
    pub full_name: String,
    pub employee_id: String,
    pub status_badge: String,
    pub badge_variant: BadgeVariant,
    pub position: String,
    pub department: String,
    pub email: String,
    pub profile_picture_url: Option<String>,
}

impl From<&Employee> for EmployeeCard {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            initials: employee.initials(),
            full_name: employee.full_name(),
            employee_id: employee.employee_id.clone(),
            status_badge: employee.status.badge().to_string(),
            badge_variant: employee.status.into(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            email: employee.email.clone(),
            profile_picture_url: employee.profile_picture_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationBar {
    pub current_page: usize,
    pub total_pages: usize,
    /// Every page number, `1..=total_pages`.
    pub pages: Vec<usize>,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    /// Only admins get the "Add your first employee" button.
    pub show_add_button: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDialog {
    pub employee: EmployeeId,
    pub title: String,
    pub description: String,
}

impl DeleteDialog {
    #[must_use]
    pub fn for_employee(employee: EmployeeId) -> Self {
        Self {
            employee,
            title: "Are you sure?".to_string(),
            description: "This action cannot be undone. This will permanently delete the employee record."
                .to_string(),
        }
    }
}

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A toast shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            description: description.into(),
            level: NotificationLevel::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: NotificationLevel::Error,
        }
    }
}

/// Read-only detail page for one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetail {
    pub id: EmployeeId,
    pub full_name: String,
    pub initials: String,
    pub employee_id: String,
    pub status_badge: String,
    pub badge_variant: BadgeVariant,
    pub profile_picture_url: Option<String>,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    /// e.g. `March 1st, 2024`.
    pub hire_date: String,
    /// e.g. `$85,000.00`, or `N/A`.
    pub salary: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub notes: Option<String>,
    pub can_edit: bool,
}

impl EmployeeDetail {
    #[must_use]
    pub fn new(employee: &Employee, can_edit: bool) -> Self {
        Self {
            id: employee.id,
            full_name: employee.full_name(),
            initials: employee.initials(),
            employee_id: employee.employee_id.clone(),
            status_badge: employee.status.badge().to_string(),
            badge_variant: employee.status.into(),
            profile_picture_url: employee.profile_picture_url.clone(),
            email: employee.email.clone(),
            phone: or_na(employee.phone.as_deref()),
            department: employee.department.clone(),
            position: employee.position.clone(),
            hire_date: format_long_date(employee.hire_date),
            salary: employee
                .salary
                .map_or_else(|| "N/A".to_string(), format_currency),
            address: or_na(employee.address.as_deref()),
            city: or_na(employee.city.as_deref()),
            state: or_na(employee.state.as_deref()),
            zip_code: or_na(employee.zip_code.as_deref()),
            emergency_contact_name: or_na(employee.emergency_contact_name.as_deref()),
            emergency_contact_phone: or_na(employee.emergency_contact_phone.as_deref()),
            notes: employee.notes.clone(),
            can_edit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: String,
    pub value: usize,
    pub description: String,
}

/// Dashboard: four counters and the most recent hires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardViewModel {
    pub stats: Vec<StatCard>,
    pub recent: Vec<EmployeeCard>,
}
