//! `KEY=VALUE;KEY=VALUE` rule text parser.

use std::str::FromStr;

use crate::core::{Frequency, RecurrenceRule, WeekDay};
use crate::error::{RuleError, RuleResult};

/// Splits rule text into `(key, value)` pairs.
///
/// Empty segments are skipped so a trailing `;` is harmless. A segment with
/// no `=` yields an empty value.
fn tokenize(s: &str) -> impl Iterator<Item = (&str, &str)> {
    s.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            (key.trim(), value.trim())
        })
}

/// Rule fields collected while scanning, before required-key checks.
#[derive(Debug, Default)]
struct PartialRule {
    freq: Option<Frequency>,
    interval: Option<u32>,
    by_day: Vec<WeekDay>,
    until: Option<String>,
    count: Option<u32>,
}

/// ## Summary
/// Parses rule text such as `FREQ=WEEKLY;INTERVAL=2;BYDAY=TU;COUNT=3`.
///
/// Keys are matched exactly. Unknown keys are ignored. A repeated key keeps its
/// last value. `UNTIL` is stored verbatim and only interpreted by
/// [`crate::validate`] and the generator.
///
/// ## Errors
/// - `EmptyRule` for blank input
/// - `InvalidFrequency`, `InvalidInterval`, `InvalidDay`, `InvalidCount` for a
///   recognized key with an unusable value, reported in scan order
/// - `MissingFreq`, then `MissingInterval`, when a required key is absent
/// - `ConflictingTerminators` when both `UNTIL` and `COUNT` are present
pub fn parse(s: &str) -> RuleResult<RecurrenceRule> {
    if s.trim().is_empty() {
        return Err(RuleError::EmptyRule);
    }

    let mut partial = PartialRule::default();
    for (key, value) in tokenize(s) {
        parse_part(&mut partial, key, value)?;
    }

    let freq = partial.freq.ok_or(RuleError::MissingFreq)?;
    let interval = partial.interval.ok_or(RuleError::MissingInterval)?;
    if partial.until.is_some() && partial.count.is_some() {
        return Err(RuleError::ConflictingTerminators);
    }

    let rule = RecurrenceRule {
        freq,
        interval,
        by_day: partial.by_day,
        until: partial.until,
        count: partial.count,
    };
    tracing::trace!(?rule, "Parsed recurrence rule");
    Ok(rule)
}

impl FromStr for RecurrenceRule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses a single rule key-value pair.
fn parse_part(partial: &mut PartialRule, key: &str, value: &str) -> RuleResult<()> {
    match key {
        "FREQ" => {
            partial.freq = Some(
                Frequency::parse(value)
                    .ok_or_else(|| RuleError::InvalidFrequency(value.to_string()))?,
            );
        }
        "INTERVAL" => {
            partial.interval = Some(
                parse_positive(value).ok_or_else(|| RuleError::InvalidInterval(value.to_string()))?,
            );
        }
        "BYDAY" => partial.by_day = parse_by_day(value)?,
        "UNTIL" => partial.until = Some(value.to_string()),
        "COUNT" => {
            partial.count = Some(
                parse_positive(value).ok_or_else(|| RuleError::InvalidCount(value.to_string()))?,
            );
        }
        _ => tracing::trace!(key, "Ignoring unknown rule part"),
    }
    Ok(())
}

/// Parses an integer of at least 1.
fn parse_positive(value: &str) -> Option<u32> {
    value.parse::<u32>().ok().filter(|n| *n >= 1)
}

/// Parses a comma-separated list of two-letter day codes.
///
/// An empty value is an explicitly empty list. Duplicates are kept.
fn parse_by_day(value: &str) -> RuleResult<Vec<WeekDay>> {
    if value.is_empty() {
        return Ok(Vec::new());
    }

    value
        .split(',')
        .map(|code| {
            let code = code.trim();
            WeekDay::parse(code).ok_or_else(|| RuleError::InvalidDay(code.to_string()))
        })
        .collect()
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
