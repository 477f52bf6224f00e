//! Filtering traits.

/// immutable, pure filter (2 successive equal inputs -> 2 equal outputs)
///
/// `detect` returns `true` for items that should be kept.
pub trait Filter<T> {
    fn detect(&self, item: T) -> bool;
}

/// Closures can be used as filters.
impl<T, F> Filter<T> for F
where
    F: Fn(T) -> bool,
{
    fn detect(&self, item: T) -> bool {
        self(item)
    }
}
