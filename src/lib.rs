//! Roster
//!
//! Staff roster organization for a school: ordering, name lookup, rank-ordered
//! hierarchy trees and find-or-create resolution of departments and managers.
//!
//! # Architecture
//!
//! - [`registry`]: arena store of employees and departments; the single writer
//!   of department membership and manager links
//! - [`org`]: idempotent resolution of departments and management roles, and
//!   default manager assignment
//! - [`algo`]: sort, search and hierarchy adapters over the
//!   `roster-algorithms` crate
//! - [`report`]: department statistics
//! - [`config`]: YAML-loadable settings for all of the above
//!
//! ## Example Usage
//!
//! ```rust
//! use roster::{sort_roster, exact_match, KeyOrder, NewEmployee, OrgResolver, ResolverConfig, RosterStore};
//!
//! let mut store = RosterStore::new();
//! let config = ResolverConfig::default();
//!
//! let mut resolver = OrgResolver::new(&mut store, &config);
//! resolver.ensure_core_management().unwrap();
//! resolver.onboard(NewEmployee::new("Amy", "Lee"), "Music").unwrap();
//! resolver.onboard(NewEmployee::new("Ben", "Lee"), "Art").unwrap();
//!
//! let sorted = sort_roster(store.employees(), KeyOrder::LastThenFirst);
//! let amy = exact_match(&sorted, "Amy Lee").unwrap();
//! assert!(amy.manager().is_some());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod model;
pub mod org;
pub mod registry;
pub mod report;

// Re-export main types for convenience
pub use model::{
    BudgetDecision, Department, DepartmentCategory, DepartmentId, DepartmentKind, Employee, EmployeeId,
    Management, ManagerRole, NewEmployee, RoleScope,
};

pub use registry::{HashedIds, IdGenerator, RosterError, RosterResult, RosterStore, SequentialIds};

pub use org::{OrgResolver, PersonName, ResolverConfig};

pub use algo::{
    by_department, by_manager_role, exact_match, exact_scan, is_sorted, partial_match, sort_roster, HierarchyBuilder,
    HierarchyConfig, HierarchyEntry, HierarchyLevel, HierarchySummary, HierarchyTree, KeyOrder, RankTier,
    RosterSearch, SearchMode, SearchResult, SearchSource, SortedRoster,
};

pub use config::{ConfigError, ConfigResult, RosterConfig, SearchConfig};

pub use report::{CategoryStatistics, DepartmentCount, DepartmentStatistics};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
