//! Rank-ordered hierarchy tree
//!
//! Records are fed into a [`LevelOrderTree`] in two passes:
//! 1. each configured [`RankTier`] in order, keeping input order inside a tier
//! 2. every record not yet inserted, in input order
//!
//! The tree shape comes purely from insertion order, so the highest ranked
//! records land nearest the root.

use crate::model::{Employee, EmployeeId, ManagerRole};
use crate::registry::RosterStore;
use roster_algorithms::LevelOrderTree;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A named group of roles inserted together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankTier {
    pub label: String,
    pub roles: Vec<ManagerRole>,
}

impl RankTier {
    pub fn new(label: impl Into<String>, roles: impl IntoIterator<Item = ManagerRole>) -> Self {
        RankTier {
            label: label.into(),
            roles: roles.into_iter().collect(),
        }
    }

    pub fn contains(&self, employee: &Employee) -> bool {
        employee.role().map_or(false, |role| self.roles.contains(&role))
    }
}

/// Tier list used by [`HierarchyBuilder`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    pub tiers: Vec<RankTier>,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        HierarchyConfig {
            tiers: vec![
                RankTier::new("executive", [ManagerRole::Principal]),
                RankTier::new("deputy", [ManagerRole::VicePrincipal, ManagerRole::DeputyPrincipal]),
                RankTier::new(
                    "department head",
                    [
                        ManagerRole::DepartmentHead,
                        ManagerRole::Dean,
                        ManagerRole::AcademicCoordinator,
                    ],
                ),
            ],
        }
    }
}

/// Builds [`HierarchyTree`]s from registry records
#[derive(Debug, Clone, Default)]
pub struct HierarchyBuilder {
    config: HierarchyConfig,
}

impl HierarchyBuilder {
    pub fn new(config: HierarchyConfig) -> Self {
        HierarchyBuilder { config }
    }

    pub fn config(&self) -> &HierarchyConfig {
        &self.config
    }

    /// Build over every record in the store, in registration order
    pub fn build<'a>(&self, store: &'a RosterStore) -> HierarchyTree<'a> {
        self.build_from(store, store.employees())
    }

    /// Build over a caller-chosen sequence of records from `store`
    pub fn build_from<'a, I>(&self, store: &'a RosterStore, records: I) -> HierarchyTree<'a>
    where
        I: IntoIterator<Item = &'a Employee>,
    {
        let records: Vec<&'a Employee> = records.into_iter().collect();
        let mut inserted = vec![false; records.len()];
        let mut tree = LevelOrderTree::with_capacity(records.len());

        for tier in &self.config.tiers {
            let before = tree.len();
            for (i, employee) in records.iter().enumerate() {
                if !inserted[i] && tier.contains(employee) {
                    tree.insert(*employee);
                    inserted[i] = true;
                }
            }
            debug!("Tier '{}' placed {} records", tier.label, tree.len() - before);
        }

        for (i, employee) in records.iter().enumerate() {
            if !inserted[i] {
                tree.insert(*employee);
            }
        }

        info!("Built hierarchy of {} records, height {}", tree.len(), tree.height());
        HierarchyTree { tree, store }
    }
}

/// One node's printable content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyEntry {
    pub employee: EmployeeId,
    pub name: String,
    pub role: Option<ManagerRole>,
    pub department: Option<String>,
}

impl HierarchyEntry {
    pub fn role_label(&self) -> Option<&'static str> {
        self.role.map(|r| r.display_name())
    }
}

/// All entries at one depth. `level` starts at 1 for the root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyLevel {
    pub level: usize,
    pub entries: Vec<HierarchyEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HierarchySummary {
    pub node_count: usize,
    pub height: isize,
}

/// Level-order tree over borrowed records
#[derive(Debug)]
pub struct HierarchyTree<'a> {
    tree: LevelOrderTree<&'a Employee>,
    store: &'a RosterStore,
}

impl<'a> HierarchyTree<'a> {
    pub fn root(&self) -> Option<&'a Employee> {
        self.tree.root().and_then(|idx| self.tree.value(idx)).copied()
    }

    /// Breadth-first levels, top first, produced one level at a time
    pub fn levels(&self) -> impl Iterator<Item = HierarchyLevel> + '_ {
        self.tree.levels().enumerate().map(move |(depth, nodes)| HierarchyLevel {
            level: depth + 1,
            entries: nodes.into_iter().map(|e| self.entry(e)).collect(),
        })
    }

    /// -1 when empty, 0 for a single record
    pub fn height(&self) -> isize {
        self.tree.height()
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn summary(&self) -> HierarchySummary {
        HierarchySummary {
            node_count: self.len(),
            height: self.height(),
        }
    }

    /// Underlying tree, for shape inspection
    pub fn tree(&self) -> &LevelOrderTree<&'a Employee> {
        &self.tree
    }

    fn entry(&self, employee: &Employee) -> HierarchyEntry {
        HierarchyEntry {
            employee: employee.id,
            name: employee.full_name(),
            role: employee.role(),
            department: self.store.department_name_of(employee.id).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DepartmentKind, NewEmployee};

    fn names(level: &HierarchyLevel) -> Vec<&str> {
        level.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_empty_store() {
        let store = RosterStore::new();
        let tree = HierarchyBuilder::default().build(&store);
        assert!(tree.is_empty());
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.levels().count(), 0);
        assert!(tree.root().is_none());
    }

    #[test]
    fn test_executive_first_then_plain_records() {
        let mut store = RosterStore::new();
        for name in ["A", "B", "C", "D"] {
            store.add_employee(NewEmployee::new(name, "Staff"));
        }
        let principal = store.add_manager(NewEmployee::new("Pat", "Head"), ManagerRole::Principal);

        let tree = HierarchyBuilder::default().build(&store);
        let levels: Vec<HierarchyLevel> = tree.levels().collect();

        assert_eq!(tree.root().map(|e| e.id), Some(principal));
        assert_eq!(levels.len(), 3);
        assert_eq!(names(&levels[1]), vec!["A Staff", "B Staff"]);
        assert_eq!(names(&levels[2]), vec!["C Staff", "D Staff"]);
        assert_eq!(tree.summary(), HierarchySummary { node_count: 5, height: 2 });
    }

    #[test]
    fn test_tier_order_and_unranked_managers() {
        let mut store = RosterStore::new();
        let lead = store.add_manager(NewEmployee::new("Tara", "Lead"), ManagerRole::TeamLead);
        let head = store.add_manager(NewEmployee::new("Rupert", "Head"), ManagerRole::DepartmentHead);
        let vice = store.add_manager(NewEmployee::new("Robin", "Vice"), ManagerRole::VicePrincipal);
        let principal = store.add_manager(NewEmployee::new("Pat", "Top"), ManagerRole::Principal);
        let plain = store.add_employee(NewEmployee::new("Amy", "Lee"));

        let tree = HierarchyBuilder::default().build(&store);
        let order: Vec<EmployeeId> = tree.levels().flat_map(|l| l.entries.into_iter().map(|e| e.employee)).collect();

        assert_eq!(order, vec![principal, vice, head, lead, plain]);
        assert_eq!(tree.len(), store.employee_count());
    }

    #[test]
    fn test_custom_tiers() {
        let mut store = RosterStore::new();
        let plain = store.add_employee(NewEmployee::new("Amy", "Lee"));
        let lead = store.add_manager(NewEmployee::new("Tara", "Lead"), ManagerRole::TeamLead);

        let config = HierarchyConfig {
            tiers: vec![RankTier::new("leads", [ManagerRole::TeamLead])],
        };
        let tree = HierarchyBuilder::new(config).build(&store);
        assert_eq!(tree.root().map(|e| e.id), Some(lead));
        assert_eq!(tree.levels().nth(1).map(|l| l.entries[0].employee), Some(plain));
    }

    #[test]
    fn test_entries_carry_role_and_department() {
        let mut store = RosterStore::new();
        let (music, _) = store.add_department("Music", DepartmentKind::Music);
        let head = store.add_manager(NewEmployee::new("Rupert", "Giles"), ManagerRole::DepartmentHead);
        store.assign_department(head, music).unwrap();
        store.add_employee(NewEmployee::new("Amy", "Lee"));

        let tree = HierarchyBuilder::default().build(&store);
        let levels: Vec<HierarchyLevel> = tree.levels().collect();
        let root = &levels[0].entries[0];
        assert_eq!(root.role_label(), Some("Department Head"));
        assert_eq!(root.department.as_deref(), Some("Music"));

        let plain = &levels[1].entries[0];
        assert_eq!(plain.role_label(), None);
        assert_eq!(plain.department, None);
    }

    #[test]
    fn test_levels_are_lazy() {
        let mut store = RosterStore::new();
        for name in ["A", "B", "C", "D", "E", "F", "G"] {
            store.add_employee(NewEmployee::new(name, "Staff"));
        }
        let tree = HierarchyBuilder::default().build(&store);

        let mut levels = tree.levels();
        let first = levels.next().unwrap();
        assert_eq!(first.level, 1);
        assert_eq!(first.entries.len(), 1);
        assert_eq!(levels.next().map(|l| l.entries.len()), Some(2));
        assert_eq!(levels.next().map(|l| l.entries.len()), Some(4));
        assert!(levels.next().is_none());
    }

    #[test]
    fn test_build_from_subset() {
        let mut store = RosterStore::new();
        store.add_employee(NewEmployee::new("Amy", "Lee"));
        store.add_employee(NewEmployee::new("Ben", "Ng"));

        let tree = HierarchyBuilder::default().build_from(&store, store.employees().iter().skip(1));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.height(), 0);
    }
}
