//!
//! # Drc21
//!
//! Batch design-rule checking for rectangle-based integrated-circuit layout.
//!
//! A layout is a flat list of axis-aligned rectangles, each tagged with a
//! metal or via layer name. Four checks run against a technology rule table:
//!
//! * **Width/Length**: each shape's short side against `min_width`,
//!   and its long side against `max_width`
//! * **Spacing**: separation between every same-layer shape pair
//!   against `min_spacing`
//! * **Enclosure**: each via's margin inside its under- and over-metal
//!   against `min_enclose`
//! * **Density**: fractional metal coverage of fixed windows across the die
//!   against `min_density`
//!
//! Each checker is a pure function of the shape list, the [RuleTable], and
//! (for density) a die bounding box, emitting [Violation] records through an
//! injected [Violations] sink. The emission order within each checker is a
//! contract: re-running on the same inputs yields an identical sequence,
//! which downstream tabular reports rely on.
//!
//! Rendering is thin I/O around that core: see [report] for the
//! line-diagnostic and CSV table forms, and the `drc21` binary for the
//! batch driver.
//!

pub mod check;
pub mod data;
pub mod error;
pub mod geom;
pub mod parse;
pub mod report;
pub mod rules;
pub mod violation;


pub use check::{check_density, check_enclosure, check_spacing, check_width, run_all};
pub use data::{LayerIndex, Shape};
pub use error::{DrcError, DrcResult};
pub use geom::{Point, Rect};
pub use parse::{parse_layout, read_layout};
pub use rules::{DensityRule, EnclosureRule, RuleTable};
pub use violation::{CheckKind, Status, Violation, Violations};

/// # Location Integer Type-Alias
///
/// Used for all layout spatial coordinates.
/// Centralized for quickly swapping to other integer types, if we so desire.
///
pub type Int = isize;

/// Process-wide comparison tolerance.
///
/// Every numeric verdict (width, spacing, enclosure margin, density) treats
/// values within [EPS] of the threshold as passing, keeping boundary-exact
/// layouts from flapping between pass and fail on floating-point rounding.
pub const EPS: f64 = 1e-9;
