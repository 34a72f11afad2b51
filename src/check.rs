//!
//! # Design-Rule Checkers
//!
//! The four checks: width/length, same-layer spacing, via enclosure,
//! and local metal density. Each is a pure function of
//! `(shapes, index, rules[, die])` pushing records into an injected
//! [Violations] sink, with no I/O and no shared mutable state.
//!
//! Emission order within each checker is a contract, not an accident:
//! downstream tabular output is compared byte-for-byte in regression tests.
//! The checkers have no data dependency on one another; [run_all] fixes the
//! merged sequence by running them in the canonical order.
//!

// Local imports
use crate::data::{LayerIndex, Shape};
use crate::geom::Rect;
use crate::rules::{EnclosureRule, RuleTable};
use crate::violation::{CheckKind, Status, Violation, Violations};
use crate::{Int, EPS};

/// Minimum over-coverage delta worth an informational note in verbose mode.
/// Filters exact-boundary rounding out of the enclosure diagnostics.
const OVER_ENCLOSURE_REPORT_MIN: f64 = 1.0;

/// Uniform verdict: a margin within [EPS] of zero still passes
fn fails(margin: f64) -> bool {
    margin + EPS < 0.0
}

/// Check every shape's drawn width (short side) against its layer's
/// `min_width`, and its drawn length (long side) against `max_width`.
///
/// Shapes interact with nothing here; a single too-narrow, too-long sliver
/// may emit both records. Layers with no configured threshold are skipped.
pub fn check_width(shapes: &[Shape], rules: &RuleTable, sink: &mut Violations) {
    for (idx, shape) in shapes.iter().enumerate() {
        if let Some(&min) = rules.min_width.get(&shape.layer) {
            let short = shape.rect.short_side();
            let margin = (short - min) as f64;
            if fails(margin) {
                sink.push(Violation {
                    kind: CheckKind::Width,
                    layer: shape.layer.clone(),
                    object: format!("idx={}", idx),
                    bbox: shape.rect.to_string(),
                    rule: format!(">= {}", min),
                    actual: short as f64,
                    margin,
                    status: Status::Fail,
                });
            }
        }
        if let Some(&max) = rules.max_width.get(&shape.layer) {
            let long = shape.rect.long_side();
            // Upper bound: the compliance margin is how far below the cap we sit
            let margin = (max - long) as f64;
            if fails(margin) {
                sink.push(Violation {
                    kind: CheckKind::Width,
                    layer: shape.layer.clone(),
                    object: format!("idx={}", idx),
                    bbox: shape.rect.to_string(),
                    rule: format!("<= {}", max),
                    actual: long as f64,
                    margin,
                    status: Status::Fail,
                });
            }
        }
    }
}

/// Check separation between every unordered same-layer shape pair against
/// the layer's `min_spacing`.
///
/// Pairs are visited with the outer shape index ascending and the inner
/// index ascending above it, which fixes the emission order.
pub fn check_spacing(
    shapes: &[Shape],
    index: &LayerIndex,
    rules: &RuleTable,
    sink: &mut Violations,
) {
    for (i, shape) in shapes.iter().enumerate() {
        let min = match rules.min_spacing.get(&shape.layer) {
            Some(min) => *min,
            None => continue, // no applicable rule on this layer
        };
        for &j in index.on_layer(&shape.layer) {
            if j <= i {
                continue;
            }
            let d = shape.rect.separation(&shapes[j].rect);
            let margin = d - min as f64;
            if fails(margin) {
                sink.push(Violation {
                    kind: CheckKind::Spacing,
                    layer: shape.layer.clone(),
                    object: format!("({},{})", i, j),
                    bbox: "-".to_string(),
                    rule: format!(">= {}", min),
                    actual: d,
                    margin,
                    status: Status::Fail,
                });
            }
        }
    }
}

/// Check via-to-metal enclosure for every configured via layer.
///
/// Each via shape is judged independently against its `under` and `over`
/// metal layers. A via with no overlapping metal at all on one side is a
/// missing-coverage failure carrying the total deficit, never a silent zero.
pub fn check_enclosure(
    shapes: &[Shape],
    index: &LayerIndex,
    rules: &RuleTable,
    verbose: bool,
    sink: &mut Violations,
) {
    for (via_layer, rule) in &rules.via_enclosure {
        for &vi in index.on_layer(via_layer) {
            let via = &shapes[vi].rect;
            for (side, metal_layer) in [("UNDER", &rule.under), ("OVER", &rule.over)] {
                let best = best_enclosure(shapes, index, metal_layer, via);
                report_enclosure(side, metal_layer, via_layer, via, rule, best, verbose, sink);
            }
        }
    }
}

/// Best enclosing margin for `via` among the shapes on `layer`.
///
/// Tiered candidate selection: a candidate fully covering the via is
/// preferred over one merely overlapping or touching it; within a tier the
/// largest margin wins. A fully-covering candidate always has non-negative
/// margin, so the covering tier dominates whenever it is populated.
/// `None` means no candidate overlaps the via at all.
fn best_enclosure(shapes: &[Shape], index: &LayerIndex, layer: &str, via: &Rect) -> Option<Int> {
    let mut covering: Option<Int> = None;
    let mut touching: Option<Int> = None;
    for &k in index.on_layer(layer) {
        let metal = &shapes[k].rect;
        if !metal.overlaps_or_touches(via) {
            continue;
        }
        let margin = metal.enclosure_margin(via);
        let tier = if metal.covers(via) {
            &mut covering
        } else {
            &mut touching
        };
        *tier = Some(match *tier {
            Some(best) => best.max(margin),
            None => margin,
        });
    }
    covering.or(touching)
}

/// Push the verdict for one via-side
#[allow(clippy::too_many_arguments)]
fn report_enclosure(
    side: &str,
    metal_layer: &str,
    via_layer: &str,
    via: &Rect,
    rule: &EnclosureRule,
    best: Option<Int>,
    verbose: bool,
    sink: &mut Violations,
) {
    let need = rule.min_enclose as f64;
    let layer = format!("{} {}", side, metal_layer);
    let rule_desc = format!(">= {}", rule.min_enclose);
    match best {
        // No coverage: a distinguished sentinel, reported as a total deficit
        None => sink.push(Violation {
            kind: CheckKind::Enclosure,
            layer,
            object: via_layer.to_string(),
            bbox: via.to_string(),
            rule: rule_desc,
            actual: 0.0,
            margin: -need,
            status: Status::Fail,
        }),
        Some(best) => {
            let margin = best as f64 - need;
            if fails(margin) {
                sink.push(Violation {
                    kind: CheckKind::Enclosure,
                    layer,
                    object: via_layer.to_string(),
                    bbox: via.to_string(),
                    rule: rule_desc,
                    actual: best as f64,
                    margin,
                    status: Status::Fail,
                });
            } else if verbose && margin >= OVER_ENCLOSURE_REPORT_MIN {
                sink.push(Violation {
                    kind: CheckKind::Enclosure,
                    layer,
                    object: via_layer.to_string(),
                    bbox: via.to_string(),
                    rule: rule_desc,
                    actual: best as f64,
                    margin,
                    status: Status::Info,
                });
            }
        }
    }
}

/// Check local metal density over `W x W` windows rastered across `die`,
/// row-major from the die origin, ascending y then x.
///
/// The last row and column are clipped to the die edge; partial windows are
/// real windows. Coverage sums intersection areas of every shape whose layer
/// is density-eligible.
pub fn check_density(
    shapes: &[Shape],
    index: &LayerIndex,
    rules: &RuleTable,
    die: &Rect,
    sink: &mut Violations,
) {
    let w = rules.density_check.window_size;
    let min_density = rules.density_check.min_density;
    let mut y = die.ymin();
    while y < die.ymax() {
        let mut x = die.xmin();
        while x < die.xmax() {
            let window = Rect::new(x, y, (x + w).min(die.xmax()), (y + w).min(die.ymax()));
            let window_area = window.width() * window.height();
            let mut covered: Int = 0;
            for layer in &rules.density_layers {
                for &k in index.on_layer(layer) {
                    covered += shapes[k].rect.intersection_area(&window);
                }
            }
            let density = if window_area > 0 {
                covered as f64 / window_area as f64
            } else {
                0.0
            };
            let margin = density - min_density;
            if fails(margin) {
                sink.push(Violation {
                    kind: CheckKind::Density,
                    layer: "window".to_string(),
                    object: format!("[{},{}]", x, y),
                    bbox: window.to_string(),
                    rule: format!(">= {}", min_density),
                    actual: density,
                    margin,
                    status: Status::Fail,
                });
            }
            x += w;
        }
        y += w;
    }
}

/// Run all four checks in their canonical order into one sink.
///
/// The checkers share only immutable data and could as well run in
/// parallel; running them sequentially here fixes the merged sequence.
pub fn run_all(
    shapes: &[Shape],
    index: &LayerIndex,
    rules: &RuleTable,
    die: &Rect,
    verbose: bool,
) -> Violations {
    let mut sink = Violations::new();
    check_width(shapes, rules, &mut sink);
    check_spacing(shapes, index, rules, &mut sink);
    check_enclosure(shapes, index, rules, verbose, &mut sink);
    check_density(shapes, index, rules, die, &mut sink);
    sink
}
