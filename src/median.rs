use crate::sample::Sample;

/// Return the 0-based positions of the values that make up the median of
/// `len` sorted values: one position for odd lengths, two for even ones
/// Example:
/// len -> positions
/// 1   -> (0, 0)
/// 4   -> (1, 2)
/// 5   -> (2, 2)
pub fn midpoint_positions(len: usize) -> (usize, usize) {
    assert!(len > 0, "Invalid length {}: no midpoint", len);
    let midpoint = len / 2;
    if len % 2 == 0 {
        (midpoint - 1, midpoint)
    } else {
        (midpoint, midpoint)
    }
}

/// Median of an ascending slice, or None if it's empty
/// Even lengths average the two middle values in f64, halving each first so
/// values near `f64::MAX` don't overflow
pub fn median<T: Sample>(sorted: &[T]) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let (lower, upper) = midpoint_positions(sorted.len());
    if lower == upper {
        Some(sorted[lower].to_f64())
    } else {
        Some(sorted[lower].to_f64() / 2. + sorted[upper].to_f64() / 2.)
    }
}
