//! Comparison sorting
//!
//! Top-down merge sort. Stable, Θ(n log n) comparisons in every case.

use std::cmp::Ordering;

/// Sort a slice with a comparator, returning a new vector.
///
/// The input is left untouched. Ties keep their original relative order: the
/// merge step takes the left element whenever `compare` does not report
/// `Greater`.
///
/// Θ(n log n) comparisons in every case, Θ(n) auxiliary space.
pub fn merge_sort_by<T, F>(items: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    if sorted.len() <= 1 {
        return sorted;
    }

    let right = sorted.len() - 1;
    let mut scratch = Vec::with_capacity(sorted.len());
    sort_range(&mut sorted, 0, right, &mut scratch, &mut compare);
    sorted
}

/// Recursively sort the inclusive range `left..=right`.
fn sort_range<T, F>(items: &mut [T], left: usize, right: usize, scratch: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if left >= right {
        return;
    }

    // Overflow-safe midpoint
    let middle = left + (right - left) / 2;

    sort_range(items, left, middle, scratch, compare);
    sort_range(items, middle + 1, right, scratch, compare);
    merge(items, left, middle, right, scratch, compare);
}

/// Merge the sorted runs `left..=middle` and `middle+1..=right`.
fn merge<T, F>(items: &mut [T], left: usize, middle: usize, right: usize, scratch: &mut Vec<T>, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    scratch.clear();

    let mut i = left;
    let mut j = middle + 1;

    while i <= middle && j <= right {
        if compare(&items[i], &items[j]) != Ordering::Greater {
            scratch.push(items[i].clone());
            i += 1;
        } else {
            scratch.push(items[j].clone());
            j += 1;
        }
    }

    // At most one of these is non-empty
    scratch.extend_from_slice(&items[i..middle + 1]);
    scratch.extend_from_slice(&items[j..right + 1]);

    items[left..right + 1].clone_from_slice(scratch);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_empty_and_single() {
        let empty: Vec<i32> = Vec::new();
        assert!(merge_sort_by(&empty, |a, b| a.cmp(b)).is_empty());
        assert_eq!(merge_sort_by(&[7], |a, b| a.cmp(b)), vec![7]);
    }

    #[test]
    fn test_sorts_integers() {
        let input = vec![5, 3, 9, 1, 1, 8, 0, -4];
        let sorted = merge_sort_by(&input, |a, b| a.cmp(b));
        assert_eq!(sorted, vec![-4, 0, 1, 1, 3, 5, 8, 9]);
        // Input untouched
        assert_eq!(input, vec![5, 3, 9, 1, 1, 8, 0, -4]);
    }

    #[test]
    fn test_stability() {
        // Sort by key only; the tag records original position
        let input = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')];
        let sorted = merge_sort_by(&input, |a, b| a.0.cmp(&b.0));
        assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c'), (2, 'e')]);
    }

    #[test]
    fn test_matches_std_stable_sort() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in [2usize, 3, 10, 31, 64, 257] {
            let input: Vec<(u8, usize)> = (0..len).map(|i| (rng.gen_range(0..8), i)).collect();

            let ours = merge_sort_by(&input, |a, b| a.0.cmp(&b.0));
            let mut expected = input.clone();
            expected.sort_by(|a, b| a.0.cmp(&b.0));

            assert_eq!(ours, expected, "length {}", len);
        }
    }

    #[test]
    fn test_idempotent() {
        let input = vec![9, 2, 7, 2, 4];
        let once = merge_sort_by(&input, |a, b| a.cmp(b));
        let twice = merge_sort_by(&once, |a, b| a.cmp(b));
        assert_eq!(once, twice);
    }
}
