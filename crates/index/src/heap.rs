//! In-place heap sort.
//!
//! Used wherever a sorted index must be (re)built from an unsorted batch. The
//! guarantees are the contract, not an implementation detail: O(1) auxiliary
//! space and O(n log n) comparisons/swaps in every case, with no adaptive
//! best case. Delegating to a library sort would forfeit both, so this stays
//! hand-written.

use core::cmp::Ordering;

/// Sort `data` ascending under `cmp`.
///
/// Builds a max-heap bottom-up from the last parent (O(n)), then repeatedly
/// swaps the root with the last unsorted element and re-sifts the shrunken
/// heap (O(log n) per extraction).
pub fn heap_sort<T, F>(data: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = data.len();
    if n < 2 {
        return;
    }

    for root in (0..n / 2).rev() {
        sift_down(data, root, n, &mut cmp);
    }

    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, 0, end, &mut cmp);
    }
}

/// Restore the max-heap property for the subtree at `root`, within the heap
/// prefix `data[..end]`. Iterative: the loop walks down one branch, so no
/// call-stack growth.
fn sift_down<T, F>(data: &mut [T], mut root: usize, end: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let left = 2 * root + 1;
        if left >= end {
            return;
        }

        let mut largest = root;
        if cmp(&data[left], &data[largest]) == Ordering::Greater {
            largest = left;
        }
        let right = left + 1;
        if right < end && cmp(&data[right], &data[largest]) == Ordering::Greater {
            largest = right;
        }
        if largest == root {
            return;
        }

        data.swap(root, largest);
        root = largest;
    }
}
