/// Every non-trivial contiguous split of `items`: for a sequence of length n
/// this yields n - 1 pairs, both halves non-empty, element order preserved.
pub fn all_splits<T>(items: &[T]) -> impl Iterator<Item = (&[T], &[T])> + '_ {
    (1..items.len()).map(move |i| items.split_at(i))
}
