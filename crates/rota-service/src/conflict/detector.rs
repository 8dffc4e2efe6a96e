//! Conflict detection for a candidate shift against existing shifts.

use chrono::TimeDelta;
use rota_core::config::SchedulingConfig;
use rota_core::constants::MIN_REST_HOURS;

use super::report::{ConflictInfo, ConflictKind, ConflictReport};
use crate::shift::{ShiftId, ShiftInterval};

const DOUBLE_BOOKING_MESSAGE: &str = "Employee is already scheduled during this time";

/// Tunables for conflict detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictPolicy {
    /// Gaps strictly shorter than this raise `InsufficientRest`.
    pub min_rest_hours: u32,
}

impl Default for ConflictPolicy {
    fn default() -> Self {
        Self {
            min_rest_hours: MIN_REST_HOURS,
        }
    }
}

impl From<&SchedulingConfig> for ConflictPolicy {
    fn from(config: &SchedulingConfig) -> Self {
        Self {
            min_rest_hours: config.min_rest_hours,
        }
    }
}

impl ConflictPolicy {
    fn min_rest(self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.min_rest_hours))
    }
}

/// ## Summary
/// Checks `candidate` against `existing` with the default minimum rest.
///
/// See [`detect_conflicts_with`].
#[must_use]
pub fn detect_conflicts(
    candidate: &ShiftInterval,
    existing: &[ShiftInterval],
    exclude: Option<ShiftId>,
) -> ConflictReport {
    detect_conflicts_with(&ConflictPolicy::default(), candidate, existing, exclude)
}

/// ## Summary
/// Reports every conflict between `candidate` and the shifts in `existing`
/// that belong to the same employee.
///
/// Shifts with the candidate's own id, or with `exclude` (the stored copy of
/// a shift being moved), are skipped. For each remaining shift, in input
/// order, an overlap yields one `DoubleBooking`; otherwise a gap shorter than
/// the policy's minimum yields one `InsufficientRest`. Never both for the same
/// pair. An unassigned candidate yields an empty report.
#[must_use]
pub fn detect_conflicts_with(
    policy: &ConflictPolicy,
    candidate: &ShiftInterval,
    existing: &[ShiftInterval],
    exclude: Option<ShiftId>,
) -> ConflictReport {
    let mut report = ConflictReport::new();

    let Some(employee_id) = candidate.employee_id else {
        return report;
    };

    let min_rest = policy.min_rest();
    let others = existing.iter().filter(|other| {
        other.employee_id == Some(employee_id)
            && other.id != candidate.id
            && exclude.is_none_or(|id| other.id != id)
    });

    for other in others {
        if candidate.overlaps(other) {
            tracing::debug!(
                candidate = %candidate.id,
                other = %other.id,
                %employee_id,
                "Double booking"
            );
            report.push(ConflictInfo::new(
                ConflictKind::DoubleBooking,
                DOUBLE_BOOKING_MESSAGE,
                other.id,
            ));
            continue;
        }

        let Some(gap) = candidate.gap_to(other) else {
            continue;
        };
        if gap < min_rest {
            let rest_hours = hours(gap);
            tracing::debug!(
                candidate = %candidate.id,
                other = %other.id,
                %employee_id,
                rest_hours,
                "Insufficient rest"
            );
            report.push(ConflictInfo::new(
                ConflictKind::InsufficientRest,
                format!(
                    "Insufficient rest period: {rest_hours:.1} hours (minimum {} hours required)",
                    policy.min_rest_hours
                ),
                other.id,
            ));
        }
    }

    report
}

/// Fractional hours of a gap, to the minute. Saturates past ~35 million hours.
fn hours(gap: TimeDelta) -> f64 {
    f64::from(i32::try_from(gap.num_minutes()).unwrap_or(i32::MAX)) / 60.0
}

#[cfg(test)]
#[path = "detector_tests.rs"]
mod tests;
