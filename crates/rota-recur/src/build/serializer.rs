//! Canonical rule text writer.

use std::fmt;

use crate::core::{RecurrenceRule, WeekDay};

/// ## Summary
/// Serializes a rule in canonical field order:
/// `FREQ;INTERVAL;[BYDAY];[UNTIL|COUNT]`.
///
/// `BYDAY` is omitted when empty and `UNTIL` is written verbatim, so
/// `serialize(&parse(s)?) == s` for every `s` this function produces.
#[must_use]
pub fn serialize(rule: &RecurrenceRule) -> String {
    rule.to_string()
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FREQ={};INTERVAL={}", self.freq, self.interval)?;

        if !self.by_day.is_empty() {
            let days: Vec<_> = self.by_day.iter().copied().map(WeekDay::as_str).collect();
            write!(f, ";BYDAY={}", days.join(","))?;
        }

        if let Some(ref until) = self.until {
            write!(f, ";UNTIL={until}")?;
        }

        if let Some(count) = self.count {
            write!(f, ";COUNT={count}")?;
        }

        Ok(())
    }
}
