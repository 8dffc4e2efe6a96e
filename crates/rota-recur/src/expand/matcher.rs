//! Single-date membership test for a rule.

use chrono::NaiveDate;

use super::generator::{GenerateOptions, expand};
use crate::core::{RecurrenceRule, WeekDay, parse_until};

/// ## Summary
/// Returns whether `candidate` is an occurrence of `rule` expanded from
/// `anchor`, using the default limits.
///
/// See [`matches_with`].
#[must_use]
pub fn matches(rule: &RecurrenceRule, candidate: NaiveDate, anchor: NaiveDate) -> bool {
    matches_with(rule, candidate, anchor, &GenerateOptions::default())
}

/// ## Summary
/// Returns whether `candidate` is an occurrence of `rule` expanded from
/// `anchor`.
///
/// Dates before the anchor, after `until`, or on an unselected weekday are
/// rejected up front. Anything else is decided by expanding the rule, so a
/// date beyond the occurrence limit or the step budget does not match.
/// Callers matching many dates against one rule should expand once with
/// [`super::generate_with`] and test membership on the result.
#[must_use]
pub fn matches_with(
    rule: &RecurrenceRule,
    candidate: NaiveDate,
    anchor: NaiveDate,
    options: &GenerateOptions,
) -> bool {
    if candidate < anchor {
        return false;
    }

    if let Some(until) = rule.until.as_deref() {
        match parse_until(until) {
            Some(end) if candidate > end => return false,
            None => return false,
            Some(_) => {}
        }
    }

    if rule.restricts_weekdays() && !rule.by_day.contains(&WeekDay::of(candidate)) {
        return false;
    }

    expand(rule, anchor, options, Some(candidate)).dates.last() == Some(&candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn matches_daily_interval() {
        let rule = parse("FREQ=DAILY;INTERVAL=2").unwrap();
        let anchor = date(2024, 1, 1);
        assert!(matches(&rule, date(2024, 1, 1), anchor));
        assert!(matches(&rule, date(2024, 1, 31), anchor));
        assert!(!matches(&rule, date(2024, 1, 30), anchor));
    }

    #[test]
    fn rejects_before_anchor() {
        let rule = parse("FREQ=DAILY;INTERVAL=1").unwrap();
        assert!(!matches(&rule, date(2023, 12, 31), date(2024, 1, 1)));
    }

    #[test]
    fn rejects_after_until() {
        let rule = parse("FREQ=DAILY;INTERVAL=1;UNTIL=2024-01-10").unwrap();
        let anchor = date(2024, 1, 1);
        assert!(matches(&rule, date(2024, 1, 10), anchor));
        assert!(!matches(&rule, date(2024, 1, 11), anchor));
    }

    #[test]
    fn rejects_unselected_weekday() {
        let rule = parse("FREQ=WEEKLY;INTERVAL=1;BYDAY=MO,WE").unwrap();
        let anchor = date(2024, 1, 1);
        assert!(matches(&rule, date(2024, 1, 10), anchor));
        assert!(!matches(&rule, date(2024, 1, 11), anchor));
    }

    #[test]
    fn respects_week_interval() {
        let rule = parse("FREQ=WEEKLY;INTERVAL=2;BYDAY=TU").unwrap();
        let anchor = date(2024, 1, 2);
        assert!(matches(&rule, date(2024, 1, 16), anchor));
        assert!(!matches(&rule, date(2024, 1, 9), anchor));
        assert!(!matches(&rule, date(2024, 1, 23), anchor));
    }

    #[test]
    fn respects_count() {
        let rule = parse("FREQ=DAILY;INTERVAL=1;COUNT=3").unwrap();
        let anchor = date(2024, 1, 1);
        assert!(matches(&rule, date(2024, 1, 3), anchor));
        assert!(!matches(&rule, date(2024, 1, 4), anchor));
    }

    #[test]
    fn default_bound_without_count() {
        let rule = parse("FREQ=DAILY;INTERVAL=1").unwrap();
        let anchor = date(2024, 1, 1);
        // The 100th occurrence is day 99 after the anchor.
        assert!(matches(&rule, date(2024, 4, 9), anchor));
        assert!(!matches(&rule, date(2024, 4, 10), anchor));

        let wide = GenerateOptions::default().with_max_count(500);
        assert!(matches_with(&rule, date(2024, 4, 10), anchor, &wide));
    }

    #[test]
    fn monthly_clamped_date_matches() {
        let rule = parse("FREQ=MONTHLY;INTERVAL=1").unwrap();
        let anchor = date(2024, 1, 31);
        assert!(matches(&rule, date(2024, 2, 29), anchor));
        assert!(!matches(&rule, date(2024, 2, 28), anchor));
    }

    #[test]
    fn malformed_until_never_matches() {
        let rule = RecurrenceRule::daily().with_until("soon");
        assert!(!matches(&rule, date(2024, 1, 1), date(2024, 1, 1)));
    }

    #[test]
    fn agrees_with_generation() {
        let rule = parse("FREQ=WEEKLY;INTERVAL=3;BYDAY=SU,WE;COUNT=12").unwrap();
        let anchor = date(2024, 5, 15);
        let generated = crate::generate(&rule, anchor);

        let mut day = anchor;
        while day <= date(2024, 12, 31) {
            assert_eq!(
                matches(&rule, day, anchor),
                generated.contains(day),
                "{day}"
            );
            day = day.succ_opt().unwrap();
        }
    }
}
