//! Shift-level scheduling on top of `rota-recur`: concrete shift intervals,
//! conflict detection between them, and materializing a recurring shift
//! into a checked batch.

pub mod conflict;
pub mod error;
pub mod schedule;
pub mod shift;

pub use conflict::{
    ConflictInfo, ConflictKind, ConflictPolicy, ConflictReport, Severity, detect_conflicts,
    detect_conflicts_with,
};
pub use error::{ServiceError, ServiceResult};
pub use schedule::{MaterializeOptions, MaterializedPlan, materialize, materialize_with};
pub use shift::{EmployeeId, ShiftId, ShiftInterval, ShiftTemplate};
