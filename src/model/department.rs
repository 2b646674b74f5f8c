//! Departments and their classifications

use super::types::{DepartmentId, EmployeeId};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting group a department belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentCategory {
    Academic,
    ArtsAndPerformance,
    StudentSupport,
    AdministrativeAndOperations,
}

impl DepartmentCategory {
    pub const ALL: [DepartmentCategory; 4] = [
        DepartmentCategory::Academic,
        DepartmentCategory::ArtsAndPerformance,
        DepartmentCategory::StudentSupport,
        DepartmentCategory::AdministrativeAndOperations,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DepartmentCategory::Academic => "Academic Departments",
            DepartmentCategory::ArtsAndPerformance => "Arts & Performance Departments",
            DepartmentCategory::StudentSupport => "Student Support Services",
            DepartmentCategory::AdministrativeAndOperations => "Administrative & Operations",
        }
    }
}

impl fmt::Display for DepartmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Known department classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentKind {
    // Academic
    SlayerStudies,
    MagicComputation,
    Mathematics,
    Science,
    English,
    ModernLanguages,
    Geography,
    History,
    ComputerScience,
    PhysicalEducation,
    // Arts and performance
    PerformingArts,
    Drama,
    Music,
    Art,
    // Student support
    Library,
    Guidance,
    StudentSupport,
    Nursing,
    // Administration
    SeniorManagement,
    FinanceAdministration,
    Reception,
    Legal,
    // Facilities and operations
    Facilities,
    Security,
    ItSupport,
    Mechanics,
    Canteen,
}

impl DepartmentKind {
    pub const ALL: [DepartmentKind; 27] = [
        DepartmentKind::SlayerStudies,
        DepartmentKind::MagicComputation,
        DepartmentKind::Mathematics,
        DepartmentKind::Science,
        DepartmentKind::English,
        DepartmentKind::ModernLanguages,
        DepartmentKind::Geography,
        DepartmentKind::History,
        DepartmentKind::ComputerScience,
        DepartmentKind::PhysicalEducation,
        DepartmentKind::PerformingArts,
        DepartmentKind::Drama,
        DepartmentKind::Music,
        DepartmentKind::Art,
        DepartmentKind::Library,
        DepartmentKind::Guidance,
        DepartmentKind::StudentSupport,
        DepartmentKind::Nursing,
        DepartmentKind::SeniorManagement,
        DepartmentKind::FinanceAdministration,
        DepartmentKind::Reception,
        DepartmentKind::Legal,
        DepartmentKind::Facilities,
        DepartmentKind::Security,
        DepartmentKind::ItSupport,
        DepartmentKind::Mechanics,
        DepartmentKind::Canteen,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DepartmentKind::SlayerStudies => "Slayer Studies",
            DepartmentKind::MagicComputation => "Magic & Computation",
            DepartmentKind::Mathematics => "Mathematics",
            DepartmentKind::Science => "Science",
            DepartmentKind::English => "English",
            DepartmentKind::ModernLanguages => "Modern Languages",
            DepartmentKind::Geography => "Geography",
            DepartmentKind::History => "History",
            DepartmentKind::ComputerScience => "Computer Science",
            DepartmentKind::PhysicalEducation => "Physical Education",
            DepartmentKind::PerformingArts => "Performing Arts",
            DepartmentKind::Drama => "Drama",
            DepartmentKind::Music => "Music",
            DepartmentKind::Art => "Art",
            DepartmentKind::Library => "Library",
            DepartmentKind::Guidance => "Guidance",
            DepartmentKind::StudentSupport => "Student Support",
            DepartmentKind::Nursing => "Nursing",
            DepartmentKind::SeniorManagement => "Senior Management",
            DepartmentKind::FinanceAdministration => "Finance and Administration",
            DepartmentKind::Reception => "Reception",
            DepartmentKind::Legal => "Legal",
            DepartmentKind::Facilities => "Facilities",
            DepartmentKind::Security => "Security",
            DepartmentKind::ItSupport => "IT Support",
            DepartmentKind::Mechanics => "Mechanics",
            DepartmentKind::Canteen => "Canteen",
        }
    }

    /// Case-insensitive lookup by display name
    pub fn from_display_name(name: &str) -> Option<DepartmentKind> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(name))
    }

    pub fn category(&self) -> DepartmentCategory {
        use DepartmentKind::*;
        match self {
            SlayerStudies | MagicComputation | Mathematics | Science | English
            | ModernLanguages | Geography | History | ComputerScience | PhysicalEducation => {
                DepartmentCategory::Academic
            }
            PerformingArts | Drama | Music | Art => DepartmentCategory::ArtsAndPerformance,
            Library | Guidance | StudentSupport | Nursing => DepartmentCategory::StudentSupport,
            SeniorManagement | FinanceAdministration | Reception | Legal | Facilities
            | Security | ItSupport | Mechanics | Canteen => {
                DepartmentCategory::AdministrativeAndOperations
            }
        }
    }
}

impl fmt::Display for DepartmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A department and the staff assigned to it
///
/// The staff set is only changed through
/// [`RosterStore::assign_department`](crate::registry::RosterStore::assign_department),
/// which keeps it in agreement with each employee's department reference.
#[derive(Debug, Clone, Serialize)]
pub struct Department {
    pub id: DepartmentId,

    /// Generated display code, not guaranteed unique
    pub code: String,

    pub name: String,

    pub kind: DepartmentKind,

    pub(crate) head: Option<EmployeeId>,

    pub(crate) staff: IndexSet<EmployeeId>,
}

impl Department {
    pub(crate) fn new(id: DepartmentId, code: String, name: impl Into<String>, kind: DepartmentKind) -> Self {
        Department {
            id,
            code,
            name: name.into(),
            kind,
            head: None,
            staff: IndexSet::new(),
        }
    }

    pub fn head(&self) -> Option<EmployeeId> {
        self.head
    }

    /// Staff in the order they joined
    pub fn staff(&self) -> impl Iterator<Item = EmployeeId> + '_ {
        self.staff.iter().copied()
    }

    pub fn staff_count(&self) -> usize {
        self.staff.len()
    }

    pub fn has_staff(&self, employee: EmployeeId) -> bool {
        self.staff.contains(&employee)
    }

    pub fn category(&self) -> DepartmentCategory {
        self.kind.category()
    }
}

impl PartialEq for Department {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Department {}
