//! Name lookup over a roster
//!
//! Two strategies behind one entry point:
//! - `Exact`: binary search over a [`SortedRoster`] using its own key order
//! - `Partial`: case-insensitive substring scan over first, last and full name

use super::sort::{KeyOrder, SortedRoster};
use crate::config::SearchConfig;
use crate::model::{Employee, ManagerRole};
use crate::registry::RosterStore;
use roster_algorithms::binary_search_by;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    #[default]
    Exact,
    Partial,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Exact => write!(f, "exact"),
            SearchMode::Partial => write!(f, "partial"),
        }
    }
}

/// Outcome of [`RosterSearch::find`]
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<'a> {
    Exact(Option<&'a Employee>),
    Partial(Vec<&'a Employee>),
}

impl<'a> SearchResult<'a> {
    pub fn len(&self) -> usize {
        match self {
            SearchResult::Exact(found) => usize::from(found.is_some()),
            SearchResult::Partial(matches) => matches.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<&'a Employee> {
        match self {
            SearchResult::Exact(found) => found.into_iter().collect(),
            SearchResult::Partial(matches) => matches,
        }
    }
}

/// Records a [`RosterSearch`] runs over
#[derive(Debug, Clone, Copy)]
pub enum SearchSource<'r, 'a> {
    /// Ordered view; exact lookups use binary search
    Sorted(&'r SortedRoster<'a>),
    /// Records in any order; exact lookups fall back to a linear scan
    Unsorted(&'r [&'a Employee]),
}

/// Name lookup with a configured default strategy
pub struct RosterSearch<'r, 'a> {
    source: SearchSource<'r, 'a>,
    mode: SearchMode,
}

impl<'r, 'a> RosterSearch<'r, 'a> {
    /// Exact search over a sorted view
    pub fn new(roster: &'r SortedRoster<'a>) -> Self {
        RosterSearch {
            source: SearchSource::Sorted(roster),
            mode: SearchMode::Exact,
        }
    }

    /// Partial search over records in any order, without sorting them first
    pub fn unsorted(records: &'r [&'a Employee]) -> Self {
        RosterSearch {
            source: SearchSource::Unsorted(records),
            mode: SearchMode::Partial,
        }
    }

    /// Search over a sorted view using the configured mode
    pub fn with_config(roster: &'r SortedRoster<'a>, config: &SearchConfig) -> Self {
        Self::new(roster).with_mode(config.mode)
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn source(&self) -> SearchSource<'r, 'a> {
        self.source
    }

    /// Search with the configured mode
    pub fn find(&self, query: &str) -> SearchResult<'a> {
        self.find_with(query, self.mode)
    }

    /// Search with an explicit mode
    pub fn find_with(&self, query: &str, mode: SearchMode) -> SearchResult<'a> {
        match (mode, self.source) {
            (SearchMode::Exact, SearchSource::Sorted(roster)) => SearchResult::Exact(exact_match(roster, query)),
            (SearchMode::Exact, SearchSource::Unsorted(records)) => SearchResult::Exact(exact_scan(records, query)),
            (SearchMode::Partial, SearchSource::Sorted(roster)) => {
                SearchResult::Partial(partial_match(roster.iter(), query))
            }
            (SearchMode::Partial, SearchSource::Unsorted(records)) => {
                SearchResult::Partial(partial_match(records.iter().copied(), query))
            }
        }
    }
}

/// Binary search for a record whose key equals the normalized query.
///
/// Each first/last split of the query is tried in turn, see
/// [`KeyOrder::query_keys`]. When several records share the key, the first in
/// sorted order is returned.
pub fn exact_match<'a>(roster: &SortedRoster<'a>, query: &str) -> Option<&'a Employee> {
    let order = roster.order();
    let records = roster.records();

    order.query_keys(query).into_iter().find_map(|target| {
        let mut found = binary_search_by(records, |e| order.key(e).cmp(&target))?;
        while found > 0 && order.key(records[found - 1]) == target {
            found -= 1;
        }
        Some(records[found])
    })
}

/// Linear exact lookup over records in any order; first match in input order
pub fn exact_scan<'a>(records: &[&'a Employee], query: &str) -> Option<&'a Employee> {
    let order = KeyOrder::default();
    order
        .query_keys(query)
        .into_iter()
        .find_map(|target| records.iter().copied().find(|e| order.key(e) == target))
}

/// Every record whose first, last or full name contains `query`, in input order
pub fn partial_match<'a, I>(records: I, query: &str) -> Vec<&'a Employee>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    records
        .into_iter()
        .filter(|e| {
            e.first_name.to_lowercase().contains(&needle)
                || e.last_name.to_lowercase().contains(&needle)
                || e.full_name().to_lowercase().contains(&needle)
        })
        .collect()
}

/// Staff of the named department (case-insensitive), in department order
pub fn by_department<'a>(store: &'a RosterStore, name: &str) -> Vec<&'a Employee> {
    let Some(dept) = store.find_department_by_name(name).and_then(|id| store.get_department(id)) else {
        return Vec::new();
    };
    dept.staff().filter_map(|id| store.get_employee(id)).collect()
}

/// Managers whose role display name matches `role_name` (case-insensitive)
pub fn by_manager_role<'a>(store: &'a RosterStore, role_name: &str) -> Vec<&'a Employee> {
    match ManagerRole::from_display_name(role_name) {
        Some(role) => store.managers().filter(|m| m.has_role(role)).collect(),
        None => Vec::new(),
    }
}
