//! Roster ordering
//!
//! Wraps the generic merge sort with the name key used across the crate.
//! Sorting and exact search share [`KeyOrder::key`] so a sorted view can
//! always be searched with the same comparison.

use crate::model::Employee;
use crate::registry::{RosterError, RosterResult};
use roster_algorithms::{is_sorted_by, merge_sort_by};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Lower-cased, whitespace-folded (primary, secondary) name pair
pub type SortKey = (String, String);

/// Which name field is compared first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
    #[default]
    LastThenFirst,
    FirstThenLast,
}

impl KeyOrder {
    /// Comparison key for a record
    pub fn key(&self, employee: &Employee) -> SortKey {
        self.key_of(&employee.first_name, &employee.last_name)
    }

    /// Comparison key for a first/last name pair
    pub fn key_of(&self, first_name: &str, last_name: &str) -> SortKey {
        let first = normalize(first_name);
        let last = normalize(last_name);
        match self {
            KeyOrder::LastThenFirst => (last, first),
            KeyOrder::FirstThenLast => (first, last),
        }
    }

    /// Comparison keys a free-text name query could stand for, most likely first.
    ///
    /// Queries are written "first last", but either part may hold several
    /// words ("Ana de Souza") or be missing ("Zed"). Every split of the words
    /// into a first and last name is a candidate: the usual one with the final
    /// word as the last name comes first, then shorter first names, then the
    /// whole query as a first name. Empty for a blank query.
    pub fn query_keys(&self, query: &str) -> Vec<SortKey> {
        let words: Vec<&str> = query.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }

        (0..words.len())
            .rev()
            .chain(std::iter::once(words.len()))
            .map(|split| self.key_of(&words[..split].join(" "), &words[split..].join(" ")))
            .collect()
    }
}

impl fmt::Display for KeyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyOrder::LastThenFirst => write!(f, "last name, first name"),
            KeyOrder::FirstThenLast => write!(f, "first name, last name"),
        }
    }
}

/// Lower-cased with runs of whitespace folded to one space
fn normalize(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Records in verified [`KeyOrder`] order
///
/// Only [`sort_roster`] and [`SortedRoster::from_ordered`] produce one, so
/// exact search can never run over an unordered sequence.
#[derive(Debug, Clone)]
pub struct SortedRoster<'a> {
    order: KeyOrder,
    records: Vec<&'a Employee>,
}

impl<'a> SortedRoster<'a> {
    /// Wrap records the caller already holds in order, checking that they are.
    pub fn from_ordered(records: Vec<&'a Employee>, order: KeyOrder) -> RosterResult<Self> {
        if !is_sorted(&records, order) {
            return Err(RosterError::NotSorted(order));
        }
        Ok(SortedRoster { order, records })
    }

    pub fn order(&self) -> KeyOrder {
        self.order
    }

    pub fn records(&self) -> &[&'a Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Employee> + '_ {
        self.records.iter().copied()
    }

    pub fn into_vec(self) -> Vec<&'a Employee> {
        self.records
    }
}

/// Produce an ordered view of `records`. The input is left untouched.
///
/// Stable: records with equal keys keep their input order.
pub fn sort_roster<'a, I>(records: I, order: KeyOrder) -> SortedRoster<'a>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let records: Vec<&'a Employee> = records.into_iter().collect();
    let keys: Vec<SortKey> = records.iter().map(|e| order.key(e)).collect();
    let positions: Vec<usize> = (0..records.len()).collect();

    let sorted = merge_sort_by(&positions, |&a, &b| keys[a].cmp(&keys[b]));
    debug!("Sorted {} records by {}", sorted.len(), order);

    SortedRoster {
        order,
        records: sorted.into_iter().map(|i| records[i]).collect(),
    }
}

/// Check that `records` are ordered by `order`
pub fn is_sorted(records: &[&Employee], order: KeyOrder) -> bool {
    is_sorted_by(records, |a, b| order.key(a).cmp(&order.key(b)))
}
