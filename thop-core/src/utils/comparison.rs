use crate::utils::Float;
use std::cmp::Ordering;

/// Compares floating point numbers, NaN is considered as the greatest value.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Checks whether `value` exceeds `limit` by more than `tolerance`.
#[inline]
pub fn exceeds_with_tolerance(value: Float, limit: Float, tolerance: Float) -> bool {
    compare_floats(value - tolerance, limit) == Ordering::Greater
}
