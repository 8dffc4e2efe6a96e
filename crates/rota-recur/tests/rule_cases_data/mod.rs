use chrono::NaiveDate;
use rrule::RRuleSet;

pub struct RuleCase {
    pub name: &'static str,
    pub rule: &'static str,
    pub anchor: &'static str,
    pub exceptions: &'static [&'static str],
    pub expected: Option<&'static [&'static str]>,
    pub expected_len: Option<usize>,
    pub truncated: bool,
    /// Whether RFC 5545 expansion of the same rule yields the same dates.
    pub rfc_agrees: bool,
}

#[expect(clippy::too_many_lines)]
pub fn rule_cases() -> Vec<RuleCase> {
    vec![
        RuleCase {
            name: "daily_basic",
            rule: "FREQ=DAILY;INTERVAL=1;COUNT=5",
            anchor: "2024-01-01",
            exceptions: &[],
            expected: Some(&[
                "2024-01-01",
                "2024-01-02",
                "2024-01-03",
                "2024-01-04",
                "2024-01-05",
            ]),
            expected_len: None,
            truncated: false,
            rfc_agrees: true,
        },
        RuleCase {
            name: "daily_leap_day",
            rule: "FREQ=DAILY;INTERVAL=1;COUNT=2",
            anchor: "2024-02-28",
            exceptions: &[],
            expected: Some(&["2024-02-28", "2024-02-29"]),
            expected_len: None,
            truncated: false,
            rfc_agrees: true,
        },
        RuleCase {
            name: "daily_interval_year_end",
            rule: "FREQ=DAILY;INTERVAL=4;COUNT=3",
            anchor: "2023-12-28",
            exceptions: &[],
            expected: Some(&["2023-12-28", "2024-01-01", "2024-01-05"]),
            expected_len: None,
            truncated: false,
            rfc_agrees: true,
        },
        RuleCase {
            name: "weekly_mo_we_fr",
            rule: "FREQ=WEEKLY;INTERVAL=1;BYDAY=MO,WE,FR;COUNT=6",
            anchor: "2024-01-01",
            exceptions: &[],
            expected: Some(&[
                "2024-01-01",
                "2024-01-03",
                "2024-01-05",
                "2024-01-08",
                "2024-01-10",
                "2024-01-12",
            ]),
            expected_len: None,
            truncated: false,
            rfc_agrees: true,
        },
        RuleCase {
            name: "biweekly_tuesday",
            rule: "FREQ=WEEKLY;INTERVAL=2;BYDAY=TU;COUNT=3",
            anchor: "2024-01-02",
            exceptions: &[],
            expected: Some(&["2024-01-02", "2024-01-16", "2024-01-30"]),
            expected_len: None,
            truncated: false,
            rfc_agrees: true,
        },
        RuleCase {
            name: "biweekly_cycle_from_thursday",
            rule: "FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,TH;COUNT=4",
            anchor: "2024-01-04",
            exceptions: &[],
            expected: Some(&["2024-01-04", "2024-01-08", "2024-01-18", "2024-01-22"]),
            expected_len: None,
            truncated: false,
            // RFC weeks start on WKST, not on the anchor.
            rfc_agrees: false,
        },
        RuleCase {
            name: "weekly_no_days",
            rule: "FREQ=WEEKLY;INTERVAL=1;COUNT=3",
            anchor: "2024-02-29",
            exceptions: &[],
            expected: Some(&["2024-02-29", "2024-03-07", "2024-03-14"]),
            expected_len: None,
            truncated: false,
            rfc_agrees: true,
        },
        RuleCase {
            name: "monthly_mid_month",
            rule: "FREQ=MONTHLY;INTERVAL=1;COUNT=3",
            anchor: "2024-11-15",
            exceptions: &[],
            expected: Some(&["2024-11-15", "2024-12-15", "2025-01-15"]),
            expected_len: None,
            truncated: false,
            rfc_agrees: true,
        },
        RuleCase {
            name: "monthly_month_end_clamps",
            rule: "FREQ=MONTHLY;INTERVAL=1;COUNT=3",
            anchor: "2023-01-31",
            exceptions: &[],
            expected: Some(&["2023-01-31", "2023-02-28", "2023-03-31"]),
            expected_len: None,
            truncated: false,
            // RFC skips months that have no 31st.
            rfc_agrees: false,
        },
        RuleCase {
            name: "daily_until_with_exceptions",
            rule: "FREQ=DAILY;INTERVAL=1;UNTIL=2024-12-26",
            anchor: "2024-12-20",
            exceptions: &["2024-12-24", " 2024-12-25 "],
            expected: Some(&[
                "2024-12-20",
                "2024-12-21",
                "2024-12-22",
                "2024-12-23",
                "2024-12-26",
            ]),
            expected_len: None,
            truncated: false,
            rfc_agrees: false,
        },
        RuleCase {
            name: "unbounded_daily_default_cap",
            rule: "FREQ=DAILY;INTERVAL=1",
            anchor: "2024-01-01",
            exceptions: &[],
            expected: None,
            expected_len: Some(100),
            truncated: false,
            rfc_agrees: false,
        },
        RuleCase {
            name: "long_single_weekday_truncated",
            rule: "FREQ=WEEKLY;INTERVAL=1;BYDAY=MO;COUNT=150",
            anchor: "2024-01-01",
            exceptions: &[],
            expected: None,
            expected_len: Some(143),
            truncated: true,
            rfc_agrees: false,
        },
    ]
}

fn parse_date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|err| panic!("Failed to parse date {value}: {err}"))
}

pub fn assert_case(case: &RuleCase) {
    let rule = rota_recur::parse(case.rule)
        .unwrap_or_else(|err| panic!("Failed to parse {}: {}", case.name, err));
    rota_recur::validate(&rule)
        .unwrap_or_else(|err| panic!("Case {} failed validation: {}", case.name, err));
    assert_eq!(
        rota_recur::serialize(&rule),
        case.rule,
        "Case {} did not round-trip",
        case.name
    );

    let anchor = parse_date(case.anchor);
    let occurrences = rota_recur::generate(&rule, anchor);
    assert_eq!(
        occurrences.truncated, case.truncated,
        "Case {} truncation flag",
        case.name
    );

    let actual = rota_recur::apply_exceptions(&occurrences.dates, case.exceptions);

    if let Some(expected) = case.expected {
        let expected: Vec<NaiveDate> = expected.iter().copied().map(parse_date).collect();
        assert_eq!(actual, expected, "Case {} did not match", case.name);
    }

    if let Some(expected_len) = case.expected_len {
        assert_eq!(
            actual.len(),
            expected_len,
            "Case {} expected {} occurrences",
            case.name,
            expected_len
        );
    }

    for date in &occurrences {
        assert!(
            rota_recur::matches(&rule, *date, anchor),
            "Case {}: {date} generated but not matched",
            case.name
        );
    }

    if case.rfc_agrees {
        assert_eq!(
            occurrences.dates,
            rfc_dates(case, anchor),
            "Case {} diverged from RFC 5545 expansion",
            case.name
        );
    }
}

fn rfc_dates(case: &RuleCase, anchor: NaiveDate) -> Vec<NaiveDate> {
    let text = format!(
        "DTSTART:{}T090000Z\nRRULE:{}",
        anchor.format("%Y%m%d"),
        case.rule
    );
    let set: RRuleSet = text
        .parse()
        .unwrap_or_else(|err| panic!("rrule rejected {}: {}", case.name, err));
    set.all(1000)
        .dates
        .iter()
        .map(chrono::DateTime::date_naive)
        .collect()
}
