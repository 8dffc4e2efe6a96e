//! Consistency checks for rule values built outside the parser.

use crate::core::{RecurrenceRule, parse_until};
use crate::error::{RuleError, RuleResult};

/// ## Summary
/// Re-checks the invariants [`crate::parse`] enforces, plus that `until`
/// names a real date.
///
/// A weekly rule with an empty `by_day` is accepted and expands on the
/// anchor's weekday. Requiring at least one day is left to the caller.
///
/// ## Errors
/// `InvalidInterval`, `InvalidCount`, `InvalidUntil` for out-of-range fields
/// (an `until` with surrounding whitespace counts as malformed),
/// `ConflictingTerminators` when both `until` and `count` are set.
pub fn validate(rule: &RecurrenceRule) -> RuleResult<()> {
    if rule.interval == 0 {
        return Err(RuleError::InvalidInterval(rule.interval.to_string()));
    }

    if let Some(count) = rule.count
        && count == 0
    {
        return Err(RuleError::InvalidCount(count.to_string()));
    }

    // Rule text trims values, so padded text would not survive a round trip.
    if let Some(until) = &rule.until
        && (until.trim() != until || parse_until(until).is_none())
    {
        return Err(RuleError::InvalidUntil(until.clone()));
    }

    if rule.until.is_some() && rule.count.is_some() {
        return Err(RuleError::ConflictingTerminators);
    }

    Ok(())
}
