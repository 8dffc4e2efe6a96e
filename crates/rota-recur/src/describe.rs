//! Human-readable rule summaries for previews.

use crate::core::{Frequency, RecurrenceRule, WeekDay};

/// ## Summary
/// Describes a rule in English, e.g. `"Every 2 weeks on Tuesday, 3 times"`.
///
/// Weekday names follow `by_day` order with duplicates dropped. An `until`
/// that is not a recognizable date is quoted verbatim.
#[must_use]
pub fn describe(rule: &RecurrenceRule) -> String {
    let unit = match rule.freq {
        Frequency::Daily => "day",
        Frequency::Weekly => "week",
        Frequency::Monthly => "month",
    };

    let mut text = if rule.interval == 1 {
        format!("Every {unit}")
    } else {
        format!("Every {} {unit}s", rule.interval)
    };

    if rule.restricts_weekdays() {
        let mut days: Vec<WeekDay> = Vec::with_capacity(rule.by_day.len());
        for day in &rule.by_day {
            if !days.contains(day) {
                days.push(*day);
            }
        }
        let names: Vec<&str> = days.into_iter().map(WeekDay::name).collect();
        text.push_str(" on ");
        text.push_str(&join_names(&names));
    }

    match (rule.count, rule.until.as_deref()) {
        (Some(1), _) => text.push_str(", once"),
        (Some(count), _) => text.push_str(&format!(", {count} times")),
        (None, Some(until)) => match rule.until_date() {
            Some(date) => text.push_str(&format!(" until {date}")),
            None => text.push_str(&format!(" until \"{until}\"")),
        },
        (None, None) => {}
    }

    text
}

/// Joins names as `A`, `A and B`, `A, B and C`.
fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn described(text: &str) -> String {
        describe(&parse(text).unwrap())
    }

    #[test]
    fn describes_daily() {
        assert_eq!(described("FREQ=DAILY;INTERVAL=1;COUNT=5"), "Every day, 5 times");
        assert_eq!(described("FREQ=DAILY;INTERVAL=3"), "Every 3 days");
    }

    #[test]
    fn describes_weekly_days() {
        assert_eq!(
            described("FREQ=WEEKLY;INTERVAL=1;BYDAY=MO,WE,FR;UNTIL=20240301"),
            "Every week on Monday, Wednesday and Friday until 2024-03-01"
        );
        assert_eq!(
            described("FREQ=WEEKLY;INTERVAL=2;BYDAY=TU,TU;COUNT=3"),
            "Every 2 weeks on Tuesday, 3 times"
        );
        assert_eq!(
            described("FREQ=WEEKLY;INTERVAL=1;BYDAY=SA,SU"),
            "Every week on Saturday and Sunday"
        );
    }

    #[test]
    fn describes_weekly_without_days() {
        assert_eq!(described("FREQ=WEEKLY;INTERVAL=1"), "Every week");
    }

    #[test]
    fn describes_monthly() {
        assert_eq!(described("FREQ=MONTHLY;INTERVAL=3;COUNT=1"), "Every 3 months, once");
    }

    #[test]
    fn quotes_unparseable_until() {
        assert_eq!(
            described("FREQ=DAILY;INTERVAL=1;UNTIL=someday"),
            "Every day until \"someday\""
        );
    }

    #[test]
    fn by_day_not_mentioned_for_daily() {
        assert_eq!(described("FREQ=DAILY;INTERVAL=1;BYDAY=MO"), "Every day");
    }
}
