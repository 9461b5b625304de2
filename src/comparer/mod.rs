//! Tolerant line-by-line comparison of two text inputs.
//!
//! Both inputs are read in lock-step and every line pair is tokenized and
//! compared token by token. Numbers only need to agree within a relative
//! tolerance; everything else must match exactly. The comparison stops at
//! the first difference.

pub mod comparer;
pub mod numeric;

#[cfg(test)]
mod tests;
