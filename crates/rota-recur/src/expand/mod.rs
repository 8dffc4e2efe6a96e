//! Recurrence expansion: occurrence generation, exception filtering and
//! single-date matching.
//!
//! Everything here is a pure function of its arguments. Generation is bounded
//! by a step budget so every call terminates regardless of the rule.

mod exception;
mod generator;
mod matcher;

pub use exception::apply_exceptions;
pub use generator::{GenerateOptions, Occurrences, generate, generate_with};
pub use matcher::{matches, matches_with};
