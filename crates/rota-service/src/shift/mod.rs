//! Shift intervals as seen by conflict detection.

mod interval;

pub use interval::{EmployeeId, ShiftId, ShiftInterval, ShiftTemplate};
