//! Employee records
//!
//! A single record type covers plain staff and managers. Managers carry a
//! [`Management`] block holding their role and the subordinates they own.

use super::role::ManagerRole;
use super::types::{DepartmentId, EmployeeId};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Fields supplied by a loader when adding a record
///
/// Missing names are empty strings; they sort first and never match a
/// search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub email: String,
    pub salary: f64,
    pub position: String,
    pub job_title: String,
    pub employer: String,
    /// Set for records produced by synthetic generation
    pub generated: bool,
}

impl NewEmployee {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        NewEmployee {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = job_title.into();
        self
    }

    pub fn with_salary(mut self, salary: f64) -> Self {
        self.salary = salary;
        self
    }
}

/// Manager-only state
#[derive(Debug, Clone, Serialize)]
pub struct Management {
    pub role: ManagerRole,

    /// `MGR` followed by the employee code
    pub manager_code: String,

    /// Remaining spend authority, used by roles that approve budgets
    pub budget: f64,

    pub(crate) subordinates: IndexSet<EmployeeId>,
}

impl Management {
    pub(crate) fn new(role: ManagerRole, employee_code: &str) -> Self {
        Management {
            role,
            manager_code: format!("MGR{}", employee_code),
            budget: 0.0,
            subordinates: IndexSet::new(),
        }
    }

    /// Subordinates in the order they were added
    pub fn subordinates(&self) -> impl Iterator<Item = EmployeeId> + '_ {
        self.subordinates.iter().copied()
    }

    pub fn subordinate_count(&self) -> usize {
        self.subordinates.len()
    }

    pub fn manages(&self, employee: EmployeeId) -> bool {
        self.subordinates.contains(&employee)
    }
}

/// A roster entry
///
/// Department and manager references are read-only from outside the
/// registry; [`RosterStore`](crate::registry::RosterStore) is the only writer so
/// both sides of each relationship stay in agreement.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: EmployeeId,

    /// Generated display code, not guaranteed unique
    pub code: String,

    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub email: String,
    pub salary: f64,

    /// Free-text band (senior, middle, junior, ...)
    pub position: String,

    pub job_title: String,
    pub employer: String,
    pub generated: bool,

    pub(crate) department: Option<DepartmentId>,
    pub(crate) manager: Option<EmployeeId>,
    pub(crate) management: Option<Management>,
}

impl Employee {
    pub(crate) fn new(id: EmployeeId, code: String, record: NewEmployee) -> Self {
        Employee {
            id,
            code,
            first_name: record.first_name,
            last_name: record.last_name,
            gender: record.gender,
            email: record.email,
            salary: record.salary,
            position: record.position,
            job_title: record.job_title,
            employer: record.employer,
            generated: record.generated,
            department: None,
            manager: None,
            management: None,
        }
    }

    /// "First Last", trimmed
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim()).trim().to_string()
    }

    pub fn department(&self) -> Option<DepartmentId> {
        self.department
    }

    pub fn manager(&self) -> Option<EmployeeId> {
        self.manager
    }

    pub fn management(&self) -> Option<&Management> {
        self.management.as_ref()
    }

    pub fn role(&self) -> Option<ManagerRole> {
        self.management.as_ref().map(|m| m.role)
    }

    pub fn is_manager(&self) -> bool {
        self.management.is_some()
    }

    pub fn has_role(&self, role: ManagerRole) -> bool {
        self.role() == Some(role)
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}

impl std::hash::Hash for Employee {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
