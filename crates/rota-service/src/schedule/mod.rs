//! Turning a rule and a shift template into concrete, checked shifts.

mod materialize;

pub use materialize::{MaterializeOptions, MaterializedPlan, materialize, materialize_with};
