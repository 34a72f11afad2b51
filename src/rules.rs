//!
//! # Design-Rule Table
//!
//! The in-memory, read-only rule set consumed by every checker:
//! per-layer width and spacing thresholds, the via-enclosure table,
//! and the density-window configuration.
//!
//! Loaded from a JSON rule file. Missing required keys, ill-typed values,
//! or an unparsable file are fatal: the run halts before any check executes,
//! and the failure names the offending key or parse location.
//!

// Std-Lib
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

// Crates.io
use serde::{Deserialize, Serialize};

// Local imports
use crate::error::{DrcError, DrcResult};
use crate::Int;

/// # Rule Table
///
/// Thresholds are keyed by layer name; a layer absent from a map simply has
/// no applicable rule for that check, and its shapes are skipped rather than
/// rejected. Ordered maps and sets keep every iteration order independent of
/// hash state, which the checkers' deterministic-output contract relies on.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTable {
    /// Minimum same-layer spacing, per layer
    pub min_spacing: BTreeMap<String, Int>,
    /// Minimum drawn (short-side) width, per layer
    pub min_width: BTreeMap<String, Int>,
    /// Maximum drawn (long-side) length, per layer
    pub max_width: BTreeMap<String, Int>,
    /// Density window size and threshold
    pub density_check: DensityRule,
    /// Via-enclosure rules, keyed by via layer name
    #[serde(default)]
    pub via_enclosure: BTreeMap<String, EnclosureRule>,
    /// Layers whose area accumulates into density windows
    #[serde(default = "default_density_layers")]
    pub density_layers: BTreeSet<String>,
    /// Net-connectivity hint. Accepted in rule files, consumed by no check.
    #[serde(default)]
    pub conductive_layers: BTreeSet<String>,
}

/// Local metal-density rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityRule {
    /// Square window side, in layout units
    pub window_size: Int,
    /// Minimum covered-area fraction per window
    pub min_density: f64,
}

/// Enclosure requirement of one via layer by its neighboring metals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnclosureRule {
    /// Metal layer below the via
    pub under: String,
    /// Metal layer above the via
    pub over: String,
    /// Minimum margin on the tightest side
    pub min_enclose: Int,
}

/// Default density-eligible layers: the conventional metal stack
fn default_density_layers() -> BTreeSet<String> {
    ["M1", "M2", "M3"].iter().map(|s| s.to_string()).collect()
}

impl RuleTable {
    /// Load a [RuleTable] from the JSON rule file at `path`
    pub fn open(path: impl AsRef<Path>) -> DrcResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            DrcError::config(format!("cannot open rules file {}: {}", path.display(), e))
        })?;
        let reader = std::io::BufReader::new(file);
        let table: RuleTable = serde_json::from_reader(reader)
            .map_err(|e| DrcError::config(format!("rules file {}: {}", path.display(), e)))?;
        table.validate()?;
        Ok(table)
    }
    /// Parse a [RuleTable] from JSON text
    pub fn from_json(json: &str) -> DrcResult<Self> {
        let table: RuleTable =
            serde_json::from_str(json).map_err(|e| DrcError::config(format!("rules: {}", e)))?;
        table.validate()?;
        Ok(table)
    }
    /// Value checks beyond what deserialization enforces
    fn validate(&self) -> DrcResult<()> {
        // A non-positive window would never advance the density raster
        if self.density_check.window_size <= 0 {
            return Err(DrcError::config(format!(
                "density_check.window_size must be positive, got {}",
                self.density_check.window_size
            )));
        }
        if !(0.0..=1.0).contains(&self.density_check.min_density) {
            return Err(DrcError::config(format!(
                "density_check.min_density must lie in [0, 1], got {}",
                self.density_check.min_density
            )));
        }
        Ok(())
    }
}
