use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};

pub type ShiftId = Uuid;
pub type EmployeeId = Uuid;

/// One concrete work assignment.
///
/// `start < end` is expected but not checked here. An interval with no
/// employee is unassigned and never conflicts with anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInterval {
    pub id: ShiftId,
    pub employee_id: Option<EmployeeId>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ShiftInterval {
    #[must_use]
    pub fn new(
        id: ShiftId,
        employee_id: Option<EmployeeId>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            employee_id,
            start,
            end,
        }
    }

    /// Half-open overlap: intervals that only touch do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Gap between two non-overlapping intervals, whichever comes first.
    ///
    /// Returns `None` when the intervals overlap.
    #[must_use]
    pub fn gap_to(&self, other: &Self) -> Option<TimeDelta> {
        if self.start >= other.end {
            Some(self.start - other.end)
        } else if other.start >= self.end {
            Some(other.start - self.end)
        } else {
            None
        }
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Wall-clock shape of a repeating shift, in UTC.
///
/// An `end_time` at or before `start_time` means the shift runs past
/// midnight into the next day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    pub employee_id: Option<EmployeeId>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl ShiftTemplate {
    /// ## Summary
    /// Places the template on `date` under a fresh id.
    ///
    /// ## Errors
    /// Returns `ServiceError::InvalidInterval` if start and end time are equal,
    /// or the end falls outside the supported calendar.
    pub fn on(&self, date: NaiveDate) -> ServiceResult<ShiftInterval> {
        if self.start_time == self.end_time {
            return Err(ServiceError::InvalidInterval(format!(
                "shift starting and ending at {} has no duration",
                self.start_time
            )));
        }

        let end_date = if self.end_time > self.start_time {
            Some(date)
        } else {
            date.checked_add_days(Days::new(1))
        };
        let end_date = end_date.ok_or_else(|| {
            ServiceError::InvalidInterval(format!("shift on {date} ends past the last supported day"))
        })?;

        Ok(ShiftInterval::new(
            Uuid::new_v4(),
            self.employee_id,
            date.and_time(self.start_time).and_utc(),
            end_date.and_time(self.end_time).and_utc(),
        ))
    }
}
