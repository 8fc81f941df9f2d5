//! The quadratic comparison sorts: bubble, comb, and insertion. All of them
//! sort a mutable slice in place by swapping elements, so they never
//! allocate and never change the multiset of elements. None of them is
//! stable, and none of them claims to be fast -- they exist as baselines to
//! measure against each other.
//!
//! # Examples
//!
//! ```
//! use treesort::sort::{bubble_sort, is_sorted};
//!
//! let mut values = vec![3, 1, 4, 1, 5, 9, 2, 6];
//! bubble_sort(&mut values);
//!
//! assert!(is_sorted(&values));
//! assert_eq!(values, [1, 1, 2, 3, 4, 5, 6, 9]);
//! ```

/// Whether the slice is in non-decreasing order.
///
/// # Examples
///
/// ```
/// use treesort::sort::is_sorted;
///
/// assert!(is_sorted(&[1, 2, 2, 3]));
/// assert!(!is_sorted(&[2, 1]));
/// assert!(is_sorted::<i32>(&[]));
/// ```
pub fn is_sorted<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Sorts the slice by repeatedly swapping adjacent out-of-order elements.
///
/// Each pass bubbles the largest unsorted element to the end of the
/// unsorted prefix. The prefix shrinks to the position of the last swap, so
/// a pass with no swaps ends the sort. Worst case `O(n^2)` comparisons.
///
/// # Examples
///
/// ```
/// use treesort::sort::bubble_sort;
///
/// let mut values = vec![5, 1, 4, 2, 8];
/// bubble_sort(&mut values);
///
/// assert_eq!(values, [1, 2, 4, 5, 8]);
/// ```
pub fn bubble_sort<T: Ord>(slice: &mut [T]) {
    let mut unsorted_len = slice.len();
    while unsorted_len > 1 {
        let mut last_swap = 0;
        for i in 1..unsorted_len {
            if slice[i - 1] > slice[i] {
                slice.swap(i - 1, i);
                last_swap = i;
            }
        }
        unsorted_len = last_swap;
    }
}

/// Sorts the slice by comparing elements a shrinking gap apart.
///
/// The gap starts at the slice length and shrinks by the usual factor of
/// 1.3 each pass until it reaches 1, at which point the algorithm finishes
/// as a bubble sort over an input with its turtles already moved forward.
///
/// # Examples
///
/// ```
/// use treesort::sort::comb_sort;
///
/// let mut values = vec![8, 4, 1, 56, 3, -44, 23, -6, 28, 0];
/// comb_sort(&mut values);
///
/// assert_eq!(values, [-44, -6, 0, 1, 3, 4, 8, 23, 28, 56]);
/// ```
pub fn comb_sort<T: Ord>(slice: &mut [T]) {
    let mut gap = slice.len();
    let mut swapped = true;
    while gap > 1 || swapped {
        gap = ((gap * 10) / 13).max(1);
        swapped = false;
        for i in gap..slice.len() {
            if slice[i - gap] > slice[i] {
                slice.swap(i - gap, i);
                swapped = true;
            }
        }
    }
}

/// Sorts the slice by growing a sorted prefix one element at a time.
///
/// Each element is sunk leftward through the sorted prefix until it meets
/// one no greater than itself. Worst case `O(n^2)`, but linear on input
/// that is already nearly sorted.
///
/// # Examples
///
/// ```
/// use treesort::sort::insertion_sort;
///
/// let mut values = vec![5, 2, 4, 6, 1, 3];
/// insertion_sort(&mut values);
///
/// assert_eq!(values, [1, 2, 3, 4, 5, 6]);
/// ```
pub fn insertion_sort<T: Ord>(slice: &mut [T]) {
    for i in 1..slice.len() {
        let mut j = i;
        while j > 0 && slice[j - 1] > slice[j] {
            slice.swap(j - 1, j);
            j -= 1;
        }
    }
}
