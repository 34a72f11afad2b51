//!
//! # Violation Records & Sink
//!
//! The uniform record every checker emits, and the sink accumulating them
//! for rendering. The sink owns no check logic; checkers receive it as an
//! explicit parameter, so tests can run them against an in-memory sink with
//! no I/O attached.
//!

// Std-Lib
use std::fmt;

// Crates.io
use serde::{Deserialize, Serialize};

/// Enumerated check kinds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CheckKind {
    Width,
    Spacing,
    Enclosure,
    Density,
}
impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::Width => "WIDTH",
            Self::Spacing => "SPACING",
            Self::Enclosure => "ENCLOSURE",
            Self::Density => "DENSITY",
        };
        write!(f, "{}", s)
    }
}

/// Record status. Failing records are the norm;
/// [Status::Info] marks the optional enclosure over-coverage notes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    Fail,
    Info,
}
impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::Fail => "FAIL",
            Self::Info => "INFO",
        };
        write!(f, "{}", s)
    }
}

/// # Violation
///
/// One recorded failure of a measured quantity against a configured
/// threshold, with enough context to locate it in the layout.
///
/// The `margin` sign convention is uniform across all kinds:
/// negative always means out of compliance, so rendering and sorting never
/// special-case `kind`.
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Violation {
    pub kind: CheckKind,
    /// Layer context, e.g. `M1`, or `UNDER M1` for enclosure sides
    pub layer: String,
    /// Object identifier, e.g. `idx=3`, or the `(i,j)` shape pair
    pub object: String,
    /// Bounding-box description; `-` where no single box applies
    pub bbox: String,
    /// Rule description, e.g. `>= 2`
    pub rule: String,
    /// Measured value
    pub actual: f64,
    /// Signed compliance margin, negative when failing
    pub margin: f64,
    pub status: Status,
}
impl fmt::Display for Violation {
    /// Render the line-oriented diagnostic form
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {} bbox={} rule {} actual={} margin={}",
            self.kind, self.layer, self.object, self.bbox, self.rule, self.actual, self.margin
        )
    }
}

/// # Violation Sink
///
/// Accumulates records from all checkers, in emission order,
/// and exposes them for rendering.
///
#[derive(Debug, Default)]
pub struct Violations {
    records: Vec<Violation>,
}
impl Violations {
    /// Create a new and empty sink
    pub fn new() -> Self {
        Self::default()
    }
    /// Append a record
    pub fn push(&mut self, v: Violation) {
        self.records.push(v);
    }
    /// All accumulated records, in emission order
    pub fn records(&self) -> &[Violation] {
        &self.records
    }
    pub fn len(&self) -> usize {
        self.records.len()
    }
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
    /// Count of failing records, excluding informational notes
    pub fn fail_count(&self) -> usize {
        self.records
            .iter()
            .filter(|v| v.status == Status::Fail)
            .count()
    }
}
