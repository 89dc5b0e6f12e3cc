use std::cmp::Ordering;

sort_impl!("rust_std_stable");

#[inline]
pub fn sort<T: Ord>(data: &mut [T]) {
    data.sort();
}

#[inline]
pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    data.sort_by(compare);
}
