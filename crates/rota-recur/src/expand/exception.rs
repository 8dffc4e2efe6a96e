//! Exception-date filtering.

use std::collections::HashSet;

use chrono::NaiveDate;
use rota_core::constants::DATE_FORMAT;

/// ## Summary
/// Removes every date whose `YYYY-MM-DD` form matches one of `exceptions`
/// after trimming. Order is preserved. Exception strings that are not dates
/// simply never match.
#[must_use]
pub fn apply_exceptions<S: AsRef<str>>(dates: &[NaiveDate], exceptions: &[S]) -> Vec<NaiveDate> {
    if exceptions.is_empty() {
        return dates.to_vec();
    }

    let excluded: HashSet<&str> = exceptions.iter().map(|e| e.as_ref().trim()).collect();

    dates
        .iter()
        .filter(|date| {
            let day = date.format(DATE_FORMAT).to_string();
            let keep = !excluded.contains(day.as_str());
            if !keep {
                tracing::trace!(%day, "Occurrence removed by exception");
            }
            keep
        })
        .copied()
        .collect()
}
