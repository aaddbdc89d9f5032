/*! Filtering utilities

Filters operate on sentences.

Filters implement [filter::Filter], [filter::FilterMut] or both:
- [filter::Filter] is implemented for filters that do not have state (see [sentence::WordCount] for example)
- [filter::FilterMut] is implemented for filters that do have state (see [sentence::Unseen], which remembers what it already let through).
! */
mod filter;
pub mod sentence;

pub use filter::Filter;
pub use filter::FilterMut;
pub use sentence::{Unseen, WordCount};
