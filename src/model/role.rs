//! Management roles
//!
//! Every manager carries exactly one [`ManagerRole`]. Role-specific behavior is
//! keyed on the variant rather than on a record subtype.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a role must be unique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleScope {
    /// At most one holder across the whole registry
    SchoolWide,
    /// At most one holder per department
    PerDepartment,
}

/// Closed set of management roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ManagerRole {
    Principal,
    VicePrincipal,
    DeputyPrincipal,
    Dean,
    AcademicCoordinator,
    DepartmentHead,
    HeadManager,
    SeniorManager,
    Manager,
    AssistantManager,
    TeamLead,
}

impl ManagerRole {
    /// Every role, in declaration order
    pub const ALL: [ManagerRole; 11] = [
        ManagerRole::Principal,
        ManagerRole::VicePrincipal,
        ManagerRole::DeputyPrincipal,
        ManagerRole::Dean,
        ManagerRole::AcademicCoordinator,
        ManagerRole::DepartmentHead,
        ManagerRole::HeadManager,
        ManagerRole::SeniorManager,
        ManagerRole::Manager,
        ManagerRole::AssistantManager,
        ManagerRole::TeamLead,
    ];

    /// Human-readable name used in listings and role lookups
    pub fn display_name(&self) -> &'static str {
        match self {
            ManagerRole::Principal => "Principal",
            ManagerRole::VicePrincipal => "Vice Principal",
            ManagerRole::DeputyPrincipal => "Deputy Principal",
            ManagerRole::Dean => "Dean",
            ManagerRole::AcademicCoordinator => "Academic Coordinator",
            ManagerRole::DepartmentHead => "Department Head",
            ManagerRole::HeadManager => "Head Manager",
            ManagerRole::SeniorManager => "Senior Manager",
            ManagerRole::Manager => "Manager",
            ManagerRole::AssistantManager => "Assistant Manager",
            ManagerRole::TeamLead => "Team Lead",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ManagerRole::Principal => "Overall school leadership",
            ManagerRole::VicePrincipal => "Assists the principal, handles discipline and events",
            ManagerRole::DeputyPrincipal => "Deputises for the principal",
            ManagerRole::Dean => "Oversees student affairs",
            ManagerRole::AcademicCoordinator => "Coordinates curriculum across departments",
            ManagerRole::DepartmentHead => "Manages a department and its curriculum",
            ManagerRole::HeadManager => "Senior leadership position",
            ManagerRole::SeniorManager => "Experienced management role",
            ManagerRole::Manager => "Standard management position",
            ManagerRole::AssistantManager => "Assists senior managers",
            ManagerRole::TeamLead => "Leads a specific team or project",
        }
    }

    /// Case-insensitive lookup by display name
    pub fn from_display_name(name: &str) -> Option<ManagerRole> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.display_name().eq_ignore_ascii_case(name))
    }

    pub fn scope(&self) -> RoleScope {
        match self {
            ManagerRole::Principal
            | ManagerRole::VicePrincipal
            | ManagerRole::DeputyPrincipal
            | ManagerRole::Dean
            | ManagerRole::AcademicCoordinator => RoleScope::SchoolWide,
            ManagerRole::DepartmentHead
            | ManagerRole::HeadManager
            | ManagerRole::SeniorManager
            | ManagerRole::Manager
            | ManagerRole::AssistantManager
            | ManagerRole::TeamLead => RoleScope::PerDepartment,
        }
    }

    /// Salary given to a manager created by the resolver
    pub fn default_salary(&self) -> f64 {
        match self {
            ManagerRole::Principal => 80_000.0,
            ManagerRole::VicePrincipal | ManagerRole::DeputyPrincipal => 70_000.0,
            ManagerRole::Dean => 65_000.0,
            ManagerRole::AcademicCoordinator
            | ManagerRole::DepartmentHead
            | ManagerRole::HeadManager => 60_000.0,
            ManagerRole::SeniorManager => 55_000.0,
            ManagerRole::Manager => 50_000.0,
            ManagerRole::AssistantManager | ManagerRole::TeamLead => 45_000.0,
        }
    }

    /// Job title given to a manager created by the resolver
    pub fn default_job_title(&self, department: &str) -> String {
        match self {
            ManagerRole::Dean => "Dean of Students".to_string(),
            ManagerRole::DepartmentHead => format!("Department Head of {}", department),
            other => other.display_name().to_string(),
        }
    }

    /// Only the principal holds a spending budget
    pub fn can_approve_budget(&self) -> bool {
        matches!(self, ManagerRole::Principal)
    }
}

impl fmt::Display for ManagerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Outcome of a budget approval request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum BudgetDecision {
    Approved { remaining: f64 },
    Denied { requested: f64, available: f64 },
    /// Non-positive amount, or a role without budget authority
    Invalid,
}
