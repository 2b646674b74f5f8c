//! Lookup over ordered sequences

use std::cmp::Ordering;

/// Binary search driven by a probe.
///
/// `probe` reports how an element compares to the target (`Less` means the
/// element sorts before it). The slice must already be ordered consistently with
/// the probe; use [`is_sorted_by`] to check. Returns the index of a matching
/// element, or `None`.
pub fn binary_search_by<T, F>(items: &[T], mut probe: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut left = 0;
    let mut right = items.len();

    while left < right {
        // Overflow-safe midpoint over the half-open range
        let mid = left + (right - left) / 2;
        match probe(&items[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
        }
    }

    None
}

/// Check that every adjacent pair is non-decreasing under `compare`.
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_every_element() {
        let items = vec![1, 3, 5, 7, 9, 11];
        for (idx, value) in items.iter().enumerate() {
            assert_eq!(binary_search_by(&items, |x| x.cmp(value)), Some(idx));
        }
    }

    #[test]
    fn test_missing_elements() {
        let items = vec![1, 3, 5, 7];
        for missing in [0, 2, 4, 6, 8] {
            assert_eq!(binary_search_by(&items, |x| x.cmp(&missing)), None);
        }
    }

    #[test]
    fn test_empty_slice() {
        let items: Vec<i32> = Vec::new();
        assert_eq!(binary_search_by(&items, |x| x.cmp(&1)), None);
    }

    #[test]
    fn test_is_sorted_by() {
        assert!(is_sorted_by(&[1, 1, 2, 3], |a: &i32, b| a.cmp(b)));
        assert!(!is_sorted_by(&[2, 1], |a: &i32, b| a.cmp(b)));
        assert!(is_sorted_by::<i32, _>(&[], |a, b| a.cmp(b)));
    }
}
