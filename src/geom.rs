//!
//! # Geometry Primitives
//!
//! Pure rectangle math underlying every design-rule check:
//! drawn width and length, inter-shape separation, via-enclosure margins,
//! and window-intersection areas.
//!
//! Corner ordering of input rectangles is *not* guaranteed.
//! Every operation normalizes through min/max or absolute difference,
//! and never assumes a canonical corner order.
//!

// Crates.io
use serde::{Deserialize, Serialize};

// Local imports
use crate::Int;

/// # Point in two-dimensional layout-space
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    pub x: Int,
    pub y: Int,
}
impl Point {
    /// Create a new [Point] from (x,y) coordinates
    pub fn new(x: Int, y: Int) -> Self {
        Self { x, y }
    }
}

/// # Rectangle
///
/// Axis-aligned rectangle, specified by two opposite corners.
/// The corners are stored exactly as given; accessors normalize.
///
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub p0: Point,
    pub p1: Point,
}
impl Rect {
    /// Create a new [Rect] from corner coordinates, in any corner order
    pub fn new(x1: Int, y1: Int, x2: Int, y2: Int) -> Self {
        Self {
            p0: Point::new(x1, y1),
            p1: Point::new(x2, y2),
        }
    }
    /// Low x edge
    pub fn xmin(&self) -> Int {
        self.p0.x.min(self.p1.x)
    }
    /// High x edge
    pub fn xmax(&self) -> Int {
        self.p0.x.max(self.p1.x)
    }
    /// Low y edge
    pub fn ymin(&self) -> Int {
        self.p0.y.min(self.p1.y)
    }
    /// High y edge
    pub fn ymax(&self) -> Int {
        self.p0.y.max(self.p1.y)
    }
    /// Drawn extent along x
    pub fn width(&self) -> Int {
        (self.p1.x - self.p0.x).abs()
    }
    /// Drawn extent along y
    pub fn height(&self) -> Int {
        (self.p1.y - self.p0.y).abs()
    }
    /// The conductor's drawn width: the shorter of the two sides
    pub fn short_side(&self) -> Int {
        self.width().min(self.height())
    }
    /// The conductor's drawn length: the longer of the two sides
    pub fn long_side(&self) -> Int {
        self.width().max(self.height())
    }
    /// Boolean indication of whether `self` and `other` share any point.
    /// Rectangles are closed: shared boundaries and corners count.
    pub fn overlaps_or_touches(&self, other: &Rect) -> bool {
        self.xmin() <= other.xmax()
            && other.xmin() <= self.xmax()
            && self.ymin() <= other.ymax()
            && other.ymin() <= self.ymax()
    }
    /// Boolean indication of whether `self` fully covers `other`.
    /// Containment is inclusive: coincident edges still cover.
    pub fn covers(&self, other: &Rect) -> bool {
        self.xmin() <= other.xmin()
            && self.ymin() <= other.ymin()
            && self.xmax() >= other.xmax()
            && self.ymax() >= other.ymax()
    }
    /// Area of intersection with `other`.
    /// Zero when disjoint or merely touching along an edge.
    pub fn intersection_area(&self, other: &Rect) -> Int {
        let w = self.xmax().min(other.xmax()) - self.xmin().max(other.xmin());
        let h = self.ymax().min(other.ymax()) - self.ymin().max(other.ymin());
        if w <= 0 || h <= 0 {
            return 0;
        }
        w * h
    }
    /// Separation between `self` and `other`.
    ///
    /// Zero when the rectangles overlap or touch, the axial gap when they
    /// are offset along one axis only, and the Euclidean corner-to-corner
    /// distance `sqrt(dx^2 + dy^2)` when offset along both.
    pub fn separation(&self, other: &Rect) -> f64 {
        let dx = axial_gap(self.xmin(), self.xmax(), other.xmin(), other.xmax());
        let dy = axial_gap(self.ymin(), self.ymax(), other.ymin(), other.ymax());
        match (dx, dy) {
            (0, 0) => 0.0,
            (dx, 0) => dx as f64,
            (0, dy) => dy as f64,
            (dx, dy) => ((dx * dx + dy * dy) as f64).sqrt(),
        }
    }
    /// Signed distance by which `self` extends past `via` on its tightest side.
    /// Negative when `self` fails to reach one of `via`'s edges.
    pub fn enclosure_margin(&self, via: &Rect) -> Int {
        let left = via.xmin() - self.xmin();
        let right = self.xmax() - via.xmax();
        let bottom = via.ymin() - self.ymin();
        let top = self.ymax() - via.ymax();
        left.min(right).min(bottom).min(top)
    }
}
impl std::fmt::Display for Rect {
    /// Render as `(x1,y1)-(x2,y2)`, corners as given
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.p0.x, self.p0.y, self.p1.x, self.p1.y
        )
    }
}

/// Gap between the closed ranges `[amin, amax]` and `[bmin, bmax]`.
/// Zero when the ranges overlap or touch.
fn axial_gap(amin: Int, amax: Int, bmin: Int, bmax: Int) -> Int {
    if amax < bmin {
        bmin - amax
    } else if bmax < amin {
        amin - bmax
    } else {
        0
    }
}
