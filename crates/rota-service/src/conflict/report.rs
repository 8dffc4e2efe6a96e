use serde::{Deserialize, Serialize};

use crate::shift::ShiftId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// The employee is already scheduled during the candidate's time.
    DoubleBooking,
    /// Too little time between the candidate and another shift.
    InsufficientRest,
}

impl ConflictKind {
    /// Fixed severity of each kind.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::DoubleBooking => Severity::Error,
            Self::InsufficientRest => Severity::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictInfo {
    pub kind: ConflictKind,
    pub message: String,
    pub conflicting_interval_id: ShiftId,
    pub severity: Severity,
}

impl ConflictInfo {
    #[must_use]
    pub fn new(kind: ConflictKind, message: impl Into<String>, conflicting_interval_id: ShiftId) -> Self {
        Self {
            kind,
            message: message.into(),
            conflicting_interval_id,
            severity: kind.severity(),
        }
    }
}

/// Conflicts found for one candidate, in the order intervals were scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConflictReport(Vec<ConflictInfo>);

impl ConflictReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, conflict: ConflictInfo) {
        self.0.push(conflict);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConflictInfo> {
        self.0.iter()
    }

    /// Whether any conflict should block the placement.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.0.iter().any(|c| c.severity == Severity::Error)
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.0.iter().any(|c| c.severity == Severity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConflictInfo> {
        self.0.iter().filter(|c| c.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConflictInfo> {
        self.0.iter().filter(|c| c.severity == Severity::Warning)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<ConflictInfo> {
        self.0
    }
}

impl IntoIterator for ConflictReport {
    type Item = ConflictInfo;
    type IntoIter = std::vec::IntoIter<ConflictInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConflictReport {
    type Item = &'a ConflictInfo;
    type IntoIter = std::slice::Iter<'a, ConflictInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
