//! Department statistics
//!
//! Read-only summaries over a [`RosterStore`], grouped by
//! [`DepartmentCategory`]. Every type here serializes for display sinks.

use crate::model::{DepartmentCategory, DepartmentId, DepartmentKind};
use crate::registry::RosterStore;
use serde::Serialize;

/// One department and its head count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentCount {
    pub id: DepartmentId,
    pub name: String,
    pub kind: DepartmentKind,
    pub staff_count: usize,
}

/// Departments belonging to one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStatistics {
    pub category: DepartmentCategory,
    pub departments: Vec<DepartmentCount>,
    pub staff_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentStatistics {
    /// One entry per category, in [`DepartmentCategory::ALL`] order
    pub categories: Vec<CategoryStatistics>,
    pub department_count: usize,
    pub employee_count: usize,
    /// Whole employees per department, rounded down; 0 with no departments
    pub average_staff: usize,
    /// First department with the most staff; `None` if every department is empty
    pub largest: Option<DepartmentCount>,
}

impl DepartmentStatistics {
    pub fn collect(store: &RosterStore) -> Self {
        let counts: Vec<DepartmentCount> = store
            .departments()
            .iter()
            .map(|d| DepartmentCount {
                id: d.id,
                name: d.name.clone(),
                kind: d.kind,
                staff_count: d.staff_count(),
            })
            .collect();

        let categories = DepartmentCategory::ALL
            .iter()
            .map(|&category| {
                let departments: Vec<DepartmentCount> = counts
                    .iter()
                    .filter(|c| c.kind.category() == category)
                    .cloned()
                    .collect();
                CategoryStatistics {
                    category,
                    staff_count: departments.iter().map(|d| d.staff_count).sum(),
                    departments,
                }
            })
            .collect();

        let mut largest: Option<&DepartmentCount> = None;
        for count in counts.iter().filter(|c| c.staff_count > 0) {
            if largest.map_or(true, |best| count.staff_count > best.staff_count) {
                largest = Some(count);
            }
        }

        let employee_count = store.employee_count();
        DepartmentStatistics {
            categories,
            department_count: counts.len(),
            employee_count,
            average_staff: employee_count.checked_div(counts.len()).unwrap_or(0),
            largest: largest.cloned(),
        }
    }

    pub fn category(&self, category: DepartmentCategory) -> Option<&CategoryStatistics> {
        self.categories.iter().find(|c| c.category == category)
    }
}
