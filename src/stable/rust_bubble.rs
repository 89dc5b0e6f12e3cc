use std::cmp::Ordering;

sort_impl!("rust_bubble_stable");

/// Sorts the slice in place and returns it.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n*^2) worst-case. It
/// performs no allocation.
///
/// # Current implementation
///
/// The current algorithm is a bubble sort with early exit. Each pass walks the unsorted prefix
/// left to right and swaps every adjacent pair where the left element is greater than the right
/// one. After a pass the largest remaining element has reached its final position, so the next
/// pass stops one element earlier. The sort finishes on the first pass that performs no swap,
/// which makes an already sorted slice cost exactly `len - 1` comparisons.
///
/// # Examples
///
/// ```
/// let mut v = [5, 2, 6, 3, 1, 4];
///
/// bubble_sort_rs::stable::rust_bubble::sort(&mut v);
/// assert!(v == [1, 2, 3, 4, 5, 6]);
/// ```
#[inline]
pub fn sort<T>(arr: &mut [T]) -> &mut [T]
where
    T: Ord,
{
    bubble_sort(arr, &mut |a, b| a.lt(b));
    arr
}

/// Sorts the slice in place with a comparator function and returns it.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n*^2) worst-case.
///
/// `compare(a, b)` returns [`Ordering::Greater`] if `a` sorts after `b`, only then are two
/// neighbours swapped. If the comparator does not implement a total order the resulting order is
/// unspecified, but all original elements remain in the slice and the sort still terminates after
/// at most `len * len` comparisons. If `compare` panics the panic is propagated and the slice
/// holds a permutation of its original elements.
///
/// # Examples
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
/// bubble_sort_rs::stable::rust_bubble::sort_by(&mut v, |a, b| a.cmp(b));
/// assert!(v == [1, 2, 3, 4, 5]);
///
/// // reverse sorting
/// bubble_sort_rs::stable::rust_bubble::sort_by(&mut v, |a, b| b.cmp(a));
/// assert!(v == [5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    // `bubble_sort` asks `is_less(right, left)`, flip the arguments back so the comparator always
    // sees the pair in slice order.
    bubble_sort(arr, &mut |a, b| compare(b, a) == Ordering::Greater);
    arr
}

/// Sorts the slice in place by the key `f` extracts from each element and returns it.
///
/// Equivalent to `sort_by(arr, |a, b| f(a).cmp(&f(b)))`. The key is recomputed for every
/// comparison.
#[inline]
pub fn sort_by_key<T, K, F>(arr: &mut [T], mut f: F) -> &mut [T]
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    bubble_sort(arr, &mut |a, b| f(a).lt(&f(b)));
    arr
}

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Everything at or after `end` is in its final position.
    let mut end = v.len();

    while end >= 2 {
        debug_assert!(end <= v.len());

        let mut swapped = false;

        for i in 1..end {
            // Strict comparison, equal neighbours never move relative to each other.
            if is_less(&v[i], &v[i - 1]) {
                v.swap(i - 1, i);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }

        end -= 1;
    }
}
