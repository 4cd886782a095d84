//! Tree-walking evaluation of parsed expressions.
//!
//! The evaluator is a pure function over the tree: it never mutates the
//! nodes and keeps no state between calls. Runtime faults (division by
//! zero, zero raised to a negative power) are reported at the position of
//! the operator that caused them.

pub mod evaluator;

#[cfg(test)]
mod tests;
