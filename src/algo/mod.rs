//! Roster algorithms module
//!
//! Ordering, lookup and hierarchy building over registry records.
//! The algorithms themselves live in the `roster-algorithms` crate;
//! this module adapts employees and departments onto them.

pub mod hierarchy;
pub mod search;
pub mod sort;

pub use hierarchy::{
    HierarchyBuilder, HierarchyConfig, HierarchyEntry, HierarchyLevel, HierarchySummary, HierarchyTree,
    RankTier,
};
pub use search::{
    by_department, by_manager_role, exact_match, exact_scan, partial_match, RosterSearch, SearchMode, SearchResult,
    SearchSource,
};
pub use sort::{is_sorted, sort_roster, KeyOrder, SortKey, SortedRoster};
