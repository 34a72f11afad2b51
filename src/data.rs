//!
//! # Layout Data Model
//!
//! [Shape]s as loaded from a rectangle-list layout file,
//! and the [LayerIndex] grouping them by layer tag for the checkers.
//!

// Std-Lib
use std::collections::HashMap;

// Crates.io
use serde::{Deserialize, Serialize};

// Local imports
use crate::geom::Rect;
use crate::Int;

/// # Layout Shape
///
/// An axis-aligned rectangle tagged with the layer it is drawn on.
/// Shapes are immutable after load; no checker mutates them.
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shape {
    /// Layer tag, e.g. `M1` or `V12`
    pub layer: String,
    /// Drawn rectangle
    pub rect: Rect,
}
impl Shape {
    /// Create a new [Shape] from a layer tag and corner coordinates
    pub fn new(layer: impl Into<String>, x1: Int, y1: Int, x2: Int, y2: Int) -> Self {
        Self {
            layer: layer.into(),
            rect: Rect::new(x1, y1, x2, y2),
        }
    }
}

/// # Layer Index
///
/// Read-only grouping of shape indices by layer tag.
/// Built once after load and shared by every checker,
/// so all of them observe the same grouping.
/// Indices within each layer run ascending, in shape-list order.
///
#[derive(Debug, Clone, Default)]
pub struct LayerIndex {
    by_layer: HashMap<String, Vec<usize>>,
}
impl LayerIndex {
    /// Build the index over `shapes`
    pub fn build(shapes: &[Shape]) -> Self {
        let mut by_layer: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, shape) in shapes.iter().enumerate() {
            by_layer
                .entry(shape.layer.clone())
                .or_insert_with(Vec::new)
                .push(idx);
        }
        Self { by_layer }
    }
    /// Get the shape indices on layer `name`. Empty for unknown layers.
    pub fn on_layer(&self, name: &str) -> &[usize] {
        self.by_layer.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
    /// Number of distinct layers seen
    pub fn num_layers(&self) -> usize {
        self.by_layer.len()
    }
}
