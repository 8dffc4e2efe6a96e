//! Scheduling constants shared across crates.

/// Minimum rest between two shifts of the same employee, in hours.
pub const MIN_REST_HOURS: u32 = 8;

/// Occurrence limit applied when a rule carries no `COUNT`.
pub const DEFAULT_MAX_OCCURRENCES: u32 = 100;

/// Upper bound on candidate dates examined by a single generation.
pub const MAX_CANDIDATE_STEPS: u32 = 1000;

/// Candidate steps budgeted per requested occurrence before the generation
/// is cut short.
pub const STEPS_PER_OCCURRENCE: u32 = 10;

/// Calendar-day format used for exception dates and `UNTIL` values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
