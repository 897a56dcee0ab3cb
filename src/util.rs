/// Sorts `values` ascending and drops duplicates, giving the input shape a midpoint build needs.
pub(crate) fn sorted_unique<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    values.sort_unstable();
    values.dedup();
    values
}

/// Returns the index of the first value that is not strictly greater than its predecessor.
pub(crate) fn first_out_of_order<T: Ord>(values: &[T]) -> Option<usize> {
    values
        .windows(2)
        .position(|pair| pair[0] >= pair[1])
        .map(|i| i + 1)
}
