//! Double-booking and minimum-rest checks for one employee's shifts.

mod detector;
mod report;

pub use detector::{ConflictPolicy, detect_conflicts, detect_conflicts_with};
pub use report::{ConflictInfo, ConflictKind, ConflictReport, Severity};
