//! Recurrence rule model.
//!
//! Plain values handed between the grammar, the generator and callers. Rules
//! are never mutated by this crate; each operation borrows the rule and
//! allocates fresh output.

mod rule;

pub use rule::{Frequency, RecurrenceRule, WeekDay, parse_until};
