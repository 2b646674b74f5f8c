//! Organization resolution
//!
//! Find-or-create for departments and management roles, plus default
//! manager assignment for staff that report to nobody.

pub mod resolver;

pub use resolver::OrgResolver;

use crate::model::{DepartmentKind, ManagerRole};
use serde::{Deserialize, Serialize};

/// A first/last name pair from the manager name pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub first_name: String,
    pub last_name: String,
}

impl PersonName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        PersonName {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Settings for [`OrgResolver`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Department that holds school-wide management and records with no department
    pub catch_all_department: String,

    /// Kind given to departments whose name matches no known kind
    pub default_kind: DepartmentKind,

    /// Domain used when generating manager emails
    pub email_domain: String,

    pub employer: String,

    /// Roles created by `ensure_core_management`
    pub core_roles: Vec<ManagerRole>,

    /// Names handed out to generated managers, in order
    pub manager_names: Vec<PersonName>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        let manager_names = [
            ("Helen", "Marsh"),
            ("Owen", "Tate"),
            ("Priya", "Nair"),
            ("Tomas", "Varga"),
            ("Grace", "Okafor"),
            ("Liam", "Byrne"),
            ("Mei", "Tanaka"),
            ("Sara", "Lindqvist"),
            ("Jonah", "Reyes"),
            ("Ines", "Costa"),
            ("Felix", "Brandt"),
            ("Nadia", "Haddad"),
        ]
        .into_iter()
        .map(|(first, last)| PersonName::new(first, last))
        .collect();

        ResolverConfig {
            catch_all_department: "Senior Management".to_string(),
            default_kind: DepartmentKind::ComputerScience,
            email_domain: "school.local".to_string(),
            employer: "School".to_string(),
            core_roles: vec![
                ManagerRole::Principal,
                ManagerRole::VicePrincipal,
                ManagerRole::Dean,
                ManagerRole::AcademicCoordinator,
            ],
            manager_names,
        }
    }
}
