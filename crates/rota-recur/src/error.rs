use thiserror::Error;

/// Rule grammar and validation errors.
///
/// Each recognized failure has its own variant so callers can map it to a
/// localized form message. Variants rejecting a value carry the offending text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Recurrence rule is empty")]
    EmptyRule,

    #[error("Recurrence rule is missing FREQ")]
    MissingFreq,

    #[error("Recurrence rule is missing INTERVAL")]
    MissingInterval,

    #[error("Invalid frequency: {0:?} (expected DAILY, WEEKLY or MONTHLY)")]
    InvalidFrequency(String),

    #[error("Invalid interval: {0:?} (expected an integer of at least 1)")]
    InvalidInterval(String),

    #[error("Invalid day code: {0:?}")]
    InvalidDay(String),

    #[error("Invalid count: {0:?} (expected an integer of at least 1)")]
    InvalidCount(String),

    #[error("Invalid UNTIL date: {0:?}")]
    InvalidUntil(String),

    #[error("UNTIL and COUNT are mutually exclusive")]
    ConflictingTerminators,
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
