use std::cmp::Ordering;

pub fn sort<T: Ord>(v: &mut [T]) {
    v.sort();
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], compare: F) {
    v.sort_by(compare);
}
