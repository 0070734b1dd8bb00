//! Recursive merge sort over a positional list.
//!
//! The algorithm is expressed entirely through the list's public handle API:
//! it splits by walking elements off the front of the parent into two fresh
//! lists, recurses, and merges back by repeatedly appending the lesser front
//! element. No indices, no arrays, not in-place: each level allocates the
//! two half lists.

use crate::list::PositionalList;

/// Sorts the list in place by contents: the list identity is preserved and
/// its elements are rearranged into non-decreasing order.
///
/// Stable: elements comparing equal keep their relative order (ties between
/// the two halves are resolved in favor of the left half). O(n log n)
/// comparisons and node moves.
///
/// # Example
///
/// ```
/// use positional::{PositionalList, merge_sort};
///
/// let mut list: PositionalList<i32> = [3, 1, 2].into_iter().collect();
/// merge_sort(&mut list);
/// assert_eq!(list.to_string(), "(1, 2, 3)");
/// ```
pub fn merge_sort<T: Ord>(list: &mut PositionalList<T>) {
    let n = list.len();
    if n < 2 {
        return;
    }
    // odd lengths put the smaller half on the left
    let mid = n / 2;

    let mut left = PositionalList::new();
    let mut right = PositionalList::new();

    // walk mid elements off the front into the left half, the rest into the
    // right half; the parent is fully drained before recursing
    for _ in 0..mid {
        if let Some(element) = list.remove_first() {
            left.add_last(element);
        }
    }
    while let Some(element) = list.remove_first() {
        right.add_last(element);
    }

    merge_sort(&mut left);
    merge_sort(&mut right);
    merge(&mut left, &mut right, list);
}

/// Merges two sorted lists into `out`, which must be empty.
fn merge<T: Ord>(
    left: &mut PositionalList<T>,
    right: &mut PositionalList<T>,
    out: &mut PositionalList<T>,
) {
    debug_assert!(out.is_empty(), "merge target must start empty");
    loop {
        let take_left = match (left.front(), right.front()) {
            // ties take the left element, keeping the merge stable
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let source = if take_left { &mut *left } else { &mut *right };
        if let Some(element) = source.remove_first() {
            out.add_last(element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(input: Vec<i32>) -> Vec<i32> {
        let mut list: PositionalList<i32> = input.into_iter().collect();
        merge_sort(&mut list);
        list.into_iter().collect()
    }

    #[test]
    fn sorts_descending_by_two() {
        // 70, 68, ..., 32 -- twenty elements
        let input: Vec<i32> = (0..20).map(|i| 70 - 2 * i).collect();
        let expected: Vec<i32> = (0..20).map(|i| 32 + 2 * i).collect();
        assert_eq!(sorted(input), expected);
    }

    #[test]
    fn empty_and_singleton_are_untouched() {
        let mut empty: PositionalList<i32> = PositionalList::new();
        merge_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one: PositionalList<i32> = [5].into_iter().collect();
        merge_sort(&mut one);
        assert_eq!(one.to_string(), "(5)");
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn sorts_odd_lengths() {
        assert_eq!(sorted(vec![3, 1, 2]), vec![1, 2, 3]);
        assert_eq!(sorted(vec![5, 4, 3, 2, 1]), vec![1, 2, 3, 4, 5]);
        assert_eq!(sorted(vec![2, 1]), vec![1, 2]);
    }

    #[test]
    fn preserves_the_multiset() {
        let input = vec![4, 1, 4, 2, 2, 9, 0, 4];
        let mut expected = input.clone();
        expected.sort();

        let mut list: PositionalList<i32> = input.into_iter().collect();
        merge_sort(&mut list);
        assert_eq!(list.len(), expected.len());
        let got: Vec<i32> = list.into_iter().collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn already_sorted_input_is_unchanged() {
        let input: Vec<i32> = (0..64).collect();
        assert_eq!(sorted(input.clone()), input);
    }

    #[test]
    fn sorts_pseudo_random_input() {
        // deterministic LCG so the test needs no dev-dependency
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let input: Vec<i32> = (0..257)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                (state >> 33) as i32
            })
            .collect();
        let mut expected = input.clone();
        expected.sort();
        assert_eq!(sorted(input), expected);
    }

    /// Orders by key only; the tag records insertion order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Record {
        key: u8,
        tag: u8,
    }

    impl Ord for Record {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.key.cmp(&other.key)
        }
    }

    impl PartialOrd for Record {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    #[test]
    fn equal_keys_keep_their_relative_order() {
        let input = [
            Record { key: 2, tag: 0 },
            Record { key: 1, tag: 1 },
            Record { key: 2, tag: 2 },
            Record { key: 1, tag: 3 },
            Record { key: 2, tag: 4 },
            Record { key: 1, tag: 5 },
        ];
        let mut list: PositionalList<Record> = input.into_iter().collect();
        merge_sort(&mut list);

        let got: Vec<Record> = list.into_iter().collect();
        let tags: Vec<u8> = got.iter().map(|r| r.tag).collect();
        assert_eq!(tags, vec![1, 3, 5, 0, 2, 4]);
    }

    #[test]
    fn positions_into_sorted_list_work() {
        let mut list: PositionalList<i32> = [9, 7, 8].into_iter().collect();
        merge_sort(&mut list);

        // the sorted list is a fully functional positional list
        let first = list.first().unwrap();
        assert_eq!(list.get(first), Ok(&7));
        let second = list.after(first).unwrap().unwrap();
        list.add_before(second, 99).unwrap();
        assert_eq!(list.to_string(), "(7, 99, 8, 9)");
    }
}
