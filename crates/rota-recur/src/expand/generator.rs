//! Occurrence generation from a rule and an anchor date.

use chrono::{Days, Months, NaiveDate};
use rota_core::config::SchedulingConfig;
use rota_core::constants::{DEFAULT_MAX_OCCURRENCES, MAX_CANDIDATE_STEPS, STEPS_PER_OCCURRENCE};
use serde::{Deserialize, Serialize};

use crate::core::{Frequency, RecurrenceRule, WeekDay, parse_until};

/// Options for occurrence generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Occurrence limit used when the rule has no `count`.
    pub max_count: u32,

    /// Ceiling on candidate dates examined, regardless of the rule.
    pub max_candidate_steps: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_MAX_OCCURRENCES,
            max_candidate_steps: MAX_CANDIDATE_STEPS,
        }
    }
}

impl GenerateOptions {
    /// Sets the occurrence limit for rules without `count`.
    #[must_use]
    pub fn with_max_count(mut self, max: u32) -> Self {
        self.max_count = max;
        self
    }
}

impl From<&SchedulingConfig> for GenerateOptions {
    fn from(config: &SchedulingConfig) -> Self {
        Self {
            max_count: config.default_max_occurrences,
            max_candidate_steps: config.max_candidate_steps,
        }
    }
}

/// Expanded occurrence dates, strictly ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrences {
    pub dates: Vec<NaiveDate>,
    /// Set when the candidate step budget ran out before the rule's own end.
    pub truncated: bool,
}

impl Occurrences {
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NaiveDate> {
        self.dates.iter()
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.binary_search(&date).is_ok()
    }
}

impl IntoIterator for Occurrences {
    type Item = NaiveDate;
    type IntoIter = std::vec::IntoIter<NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.into_iter()
    }
}

impl<'a> IntoIterator for &'a Occurrences {
    type Item = &'a NaiveDate;
    type IntoIter = std::slice::Iter<'a, NaiveDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

/// How the cursor moves from one candidate date to the next.
#[derive(Debug, Clone, Copy)]
enum Stride {
    /// Fixed number of days (daily, or weekly without a day list).
    Days(u64),
    /// Day by day; after each 7-day cycle skip `skip_weeks` whole weeks.
    WeekCycle { skip_weeks: u64, day_in_cycle: u8 },
    /// `n * interval` months from the anchor, so short months never shift
    /// later occurrences.
    Months { anchor: NaiveDate, interval: u32, n: u32 },
}

/// Candidate dates in ascending order, starting at the anchor.
struct Candidates {
    next: Option<NaiveDate>,
    stride: Stride,
}

impl Candidates {
    fn new(rule: &RecurrenceRule, anchor: NaiveDate) -> Self {
        let interval = u64::from(rule.interval);
        let stride = match rule.freq {
            Frequency::Daily => Stride::Days(interval),
            Frequency::Weekly if rule.by_day.is_empty() => Stride::Days(interval * 7),
            Frequency::Weekly => Stride::WeekCycle {
                skip_weeks: interval - 1,
                day_in_cycle: 0,
            },
            Frequency::Monthly => Stride::Months {
                anchor,
                interval: rule.interval,
                n: 0,
            },
        };

        Self {
            next: Some(anchor),
            stride,
        }
    }

    fn advance(&mut self, current: NaiveDate) -> Option<NaiveDate> {
        match &mut self.stride {
            Stride::Days(days) => current.checked_add_days(Days::new(*days)),
            Stride::WeekCycle {
                skip_weeks,
                day_in_cycle,
            } => {
                let next = current.checked_add_days(Days::new(1))?;
                *day_in_cycle += 1;
                if *day_in_cycle < 7 {
                    return Some(next);
                }
                *day_in_cycle = 0;
                next.checked_add_days(Days::new(*skip_weeks * 7))
            }
            Stride::Months {
                anchor,
                interval,
                n,
            } => {
                *n = n.checked_add(1)?;
                let months = n.checked_mul(*interval)?;
                anchor.checked_add_months(Months::new(months))
            }
        }
    }
}

impl Iterator for Candidates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = self.advance(current);
        Some(current)
    }
}

/// ## Summary
/// Expands `rule` from `anchor` with the default limits.
///
/// See [`generate_with`].
#[must_use]
pub fn generate(rule: &RecurrenceRule, anchor: NaiveDate) -> Occurrences {
    generate_with(rule, anchor, &GenerateOptions::default())
}

/// ## Summary
/// Expands `rule` from `anchor` into ascending occurrence dates.
///
/// Stops at the first of: `count` dates collected (or `options.max_count`
/// when the rule has no count), a candidate past `until`, or the step budget
/// of `min(limit * 10, options.max_candidate_steps)` candidates. Running out
/// of budget sets [`Occurrences::truncated`].
///
/// The anchor is always the first candidate. For weekly rules with a day list
/// it is only emitted if its weekday is listed.
///
/// The rule is expected to have passed [`crate::validate`]. A zero interval or
/// an unparseable `until` yields no occurrences.
#[must_use]
pub fn generate_with(
    rule: &RecurrenceRule,
    anchor: NaiveDate,
    options: &GenerateOptions,
) -> Occurrences {
    expand(rule, anchor, options, None)
}

/// Shared expansion loop. `horizon` tightens `until` without changing which
/// dates on or before it are produced.
pub(crate) fn expand(
    rule: &RecurrenceRule,
    anchor: NaiveDate,
    options: &GenerateOptions,
    horizon: Option<NaiveDate>,
) -> Occurrences {
    let limit = rule.count.unwrap_or(options.max_count);
    if rule.interval == 0 || limit == 0 {
        tracing::debug!(%rule, "Rule cannot produce occurrences");
        return Occurrences::default();
    }

    let until = match rule.until.as_deref() {
        None => None,
        Some(text) => {
            let Some(date) = parse_until(text) else {
                tracing::debug!(until = text, "Unparseable UNTIL, no occurrences");
                return Occurrences::default();
            };
            Some(date)
        }
    };
    let stop_after = match (until, horizon) {
        (Some(u), Some(h)) => Some(u.min(h)),
        (u, h) => u.or(h),
    };

    let step_budget = limit
        .saturating_mul(STEPS_PER_OCCURRENCE)
        .min(options.max_candidate_steps);

    let mut occurrences = Occurrences::default();
    let mut emitted = 0u32;
    let mut steps = 0u32;

    for candidate in Candidates::new(rule, anchor) {
        if stop_after.is_some_and(|end| candidate > end) {
            break;
        }
        if steps == step_budget {
            occurrences.truncated = true;
            break;
        }
        steps += 1;

        if rule.restricts_weekdays() && !rule.by_day.contains(&WeekDay::of(candidate)) {
            tracing::trace!(%candidate, "Weekday not selected");
            continue;
        }

        occurrences.dates.push(candidate);
        emitted += 1;
        if emitted == limit {
            break;
        }
    }

    if occurrences.truncated {
        tracing::warn!(
            %rule,
            %anchor,
            step_budget,
            generated = occurrences.len(),
            "Occurrence generation hit the step budget"
        );
    } else {
        tracing::debug!(%rule, %anchor, generated = occurrences.len(), steps, "Occurrences generated");
    }

    occurrences
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
