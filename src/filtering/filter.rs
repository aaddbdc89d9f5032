//! Filtering traits.
//!
//! `detect` returns `true` when the item should be kept.

/// Stateless filter: the same sentence always gets the same answer.
pub trait Filter<T>: Default {
    fn detect(&self, item: T) -> bool;
}

/// Stateful filter, whose answer depends on what it has seen before.
///
/// Named differently from [Filter::detect] so that a type can implement both.
pub trait FilterMut<T>: Default {
    fn detect_mut(&mut self, item: T) -> bool;
}
