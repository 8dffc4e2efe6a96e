use chrono::NaiveDate;
use rota_core::config::SchedulingConfig;
use rota_recur::{GenerateOptions, RecurrenceRule};
use serde::{Deserialize, Serialize};

use crate::conflict::{ConflictPolicy, ConflictReport, detect_conflicts_with};
use crate::error::ServiceResult;
use crate::shift::{ShiftId, ShiftInterval, ShiftTemplate};

/// Tunables for [`materialize_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeOptions {
    pub generate: GenerateOptions,
    pub policy: ConflictPolicy,
}

impl From<&SchedulingConfig> for MaterializeOptions {
    fn from(config: &SchedulingConfig) -> Self {
        Self {
            generate: GenerateOptions::from(config),
            policy: ConflictPolicy::from(config),
        }
    }
}

/// Shifts produced from one rule, with the conflicts each of them raises.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterializedPlan {
    /// One shift per surviving occurrence, in date order.
    pub shifts: Vec<ShiftInterval>,
    /// Only shifts with a non-empty report appear here, in `shifts` order.
    pub conflicts: Vec<(ShiftId, ConflictReport)>,
    /// Occurrence generation stopped on its step budget.
    pub truncated: bool,
}

impl MaterializedPlan {
    /// True if any shift would double-book its employee.
    #[must_use]
    pub fn has_blocking_conflicts(&self) -> bool {
        self.conflicts.iter().any(|(_, report)| report.has_errors())
    }

    /// Report for one materialized shift, if it has any conflicts.
    #[must_use]
    pub fn conflicts_for(&self, id: ShiftId) -> Option<&ConflictReport> {
        self.conflicts
            .iter()
            .find_map(|(shift_id, report)| (*shift_id == id).then_some(report))
    }
}

/// ## Summary
/// Materializes with the default limits and rest policy.
///
/// ## Errors
/// See [`materialize_with`].
pub fn materialize<S: AsRef<str>>(
    template: &ShiftTemplate,
    rule: &RecurrenceRule,
    anchor: NaiveDate,
    exceptions: &[S],
    existing: &[ShiftInterval],
) -> ServiceResult<MaterializedPlan> {
    materialize_with(
        &MaterializeOptions::default(),
        template,
        rule,
        anchor,
        exceptions,
        existing,
    )
}

/// ## Summary
/// Expands `rule` from `anchor`, drops `exceptions`, places `template` on
/// every remaining date and checks each new shift for conflicts.
///
/// Each shift is checked against `existing` and against the shifts created
/// before it in the same batch, so a rule that collides with itself is
/// reported too.
///
/// ## Errors
/// Returns `ServiceError::RuleError` if the rule does not validate, and
/// `ServiceError::InvalidInterval` if the template has no duration.
pub fn materialize_with<S: AsRef<str>>(
    options: &MaterializeOptions,
    template: &ShiftTemplate,
    rule: &RecurrenceRule,
    anchor: NaiveDate,
    exceptions: &[S],
    existing: &[ShiftInterval],
) -> ServiceResult<MaterializedPlan> {
    rota_recur::validate(rule)?;

    let occurrences = rota_recur::generate_with(rule, anchor, &options.generate);
    let truncated = occurrences.truncated;
    let dates = rota_recur::apply_exceptions(&occurrences.dates, exceptions);
    tracing::debug!(
        %rule,
        %anchor,
        generated = occurrences.len(),
        kept = dates.len(),
        "Materializing shifts"
    );

    let mut known = existing.to_vec();
    known.reserve(dates.len());
    let mut plan = MaterializedPlan {
        truncated,
        ..MaterializedPlan::default()
    };

    for date in dates {
        let shift = template.on(date)?;
        let report = detect_conflicts_with(&options.policy, &shift, &known, None);
        if !report.is_empty() {
            plan.conflicts.push((shift.id, report));
        }
        known.push(shift.clone());
        plan.shifts.push(shift);
    }

    if plan.has_blocking_conflicts() {
        tracing::warn!(
            %rule,
            shifts = plan.shifts.len(),
            conflicted = plan.conflicts.len(),
            "Materialized plan double-books an employee"
        );
    }

    Ok(plan)
}
