//! Recurrence rules for repeating shifts.
//!
//! A rule is a compact `KEY=VALUE;...` string with `FREQ` (`DAILY`, `WEEKLY`,
//! `MONTHLY`), `INTERVAL`, an optional `BYDAY` list and at most one of
//! `UNTIL` / `COUNT`. This crate parses, validates and serializes such rules,
//! expands them from an anchor date into concrete occurrence dates, filters
//! exception dates out, and tests single dates for membership.
//!
//! ```
//! use chrono::NaiveDate;
//!
//! let rule = rota_recur::parse("FREQ=WEEKLY;INTERVAL=2;BYDAY=TU;COUNT=3")?;
//! let anchor = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
//! let occurrences = rota_recur::generate(&rule, anchor);
//!
//! assert_eq!(occurrences.len(), 3);
//! assert_eq!(rota_recur::serialize(&rule), "FREQ=WEEKLY;INTERVAL=2;BYDAY=TU;COUNT=3");
//! # Ok::<(), rota_recur::RuleError>(())
//! ```

pub mod build;
pub mod core;
mod describe;
pub mod error;
pub mod expand;
pub mod parse;

pub use build::serialize;
pub use crate::core::{Frequency, RecurrenceRule, WeekDay};
pub use describe::describe;
pub use error::{RuleError, RuleResult};
pub use expand::{
    GenerateOptions, Occurrences, apply_exceptions, generate, generate_with, matches,
    matches_with,
};
pub use parse::{parse, validate};
