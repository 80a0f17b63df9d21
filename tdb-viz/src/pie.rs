//! Pie/donut layout and annular arc paths.
//!
//! Angle convention is d3's: radians, 0 at 12 o'clock, increasing
//! clockwise. A full donut spans `0..TAU`; the half donut spans
//! `-PI/2..PI/2`.

use crate::path::fmt_coord as fmt;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// How slice angles are ordered around the circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Keep dataset order.
    None,
    Ascending,
    /// Largest slice first (d3's default pie sort).
    Descending,
}

/// One laid-out slice. `index` refers back into the input values so the
/// caller can recover the item (and its color) after sorting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcDatum {
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub pad_angle: f64,
}

impl ArcDatum {
    /// Angular extent including the pad.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Assigns proportional angles to a sequence of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub start_angle: f64,
    pub end_angle: f64,
    pub pad_angle: f64,
    pub sort: SortOrder,
}

impl PieLayout {
    /// Full-circle donut, largest slice first.
    pub fn full_circle() -> Self {
        Self {
            start_angle: 0.0,
            end_angle: TAU,
            pad_angle: 0.0,
            sort: SortOrder::Descending,
        }
    }

    /// Top semicircle, smallest slice first.
    pub fn semicircle() -> Self {
        Self {
            start_angle: -PI / 2.0,
            end_angle: PI / 2.0,
            pad_angle: 0.0,
            sort: SortOrder::Ascending,
        }
    }

    /// Total angular span covered by the layout.
    pub fn span(&self) -> f64 {
        (self.end_angle - self.start_angle).clamp(-TAU, TAU)
    }

    /// Lay out `values` as arcs in angle order. Non-positive values get a
    /// zero sweep; if nothing is positive there is nothing to draw and the
    /// result is empty.
    pub fn layout(&self, values: &[f64]) -> Vec<ArcDatum> {
        let n = values.len();
        let sum: f64 = values.iter().filter(|v| **v > 0.0).sum();
        if n == 0 || sum <= 0.0 {
            return Vec::new();
        }

        let mut order: Vec<usize> = (0..n).collect();
        match self.sort {
            SortOrder::None => {}
            SortOrder::Ascending => {
                order.sort_by(|a, b| values[*a].total_cmp(&values[*b]));
            }
            SortOrder::Descending => {
                order.sort_by(|a, b| values[*b].total_cmp(&values[*a]));
            }
        }

        let da = self.span();
        let pad = (da.abs() / n as f64).min(self.pad_angle.max(0.0)) * da.signum();
        let k = (da - n as f64 * pad) / sum;

        let mut arcs = Vec::with_capacity(n);
        let mut a0 = self.start_angle;
        for index in order {
            let value = values[index];
            let sweep = if value > 0.0 { value * k } else { 0.0 };
            let a1 = a0 + sweep + pad;
            arcs.push(ArcDatum {
                index,
                value,
                start_angle: a0,
                end_angle: a1,
                pad_angle: pad.abs(),
            });
            a0 = a1;
        }
        arcs
    }
}

/// Annular ring the arcs are drawn into; generates SVG path data centered
/// on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Annulus {
    pub inner_radius: f64,
    pub outer_radius: f64,
}

/// Point on a circle of radius `r` at clockwise-from-top angle `a`.
fn ray(r: f64, a: f64) -> (f64, f64) {
    (r * a.sin(), -r * a.cos())
}

impl Annulus {
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
        }
    }

    /// SVG path for one arc. The pad angle is split evenly between the two
    /// straight edges; a sweep covering the whole circle becomes a ring.
    pub fn arc_path(&self, arc: &ArcDatum) -> String {
        let half_pad = arc.pad_angle / 2.0;
        let mut a0 = arc.start_angle + half_pad;
        let mut a1 = arc.end_angle - half_pad;
        if a1 < a0 {
            // Pad larger than the slice: collapse to the midpoint.
            a0 = arc.mid_angle();
            a1 = a0;
        }

        let ro = self.outer_radius;
        let ri = self.inner_radius.max(0.0);

        if a1 - a0 >= TAU - 1e-6 {
            // Full ring: two opposing semicircles per radius; the inner ring
            // runs anticlockwise so the nonzero fill rule leaves a hole.
            let mut d = format!(
                "M0,{top} A{ro},{ro} 0 1 1 0,{bottom} A{ro},{ro} 0 1 1 0,{top}",
                top = fmt(-ro),
                bottom = fmt(ro),
                ro = fmt(ro),
            );
            if ri > 0.0 {
                d.push_str(&format!(
                    " M0,{top} A{ri},{ri} 0 1 0 0,{bottom} A{ri},{ri} 0 1 0 0,{top}",
                    top = fmt(-ri),
                    bottom = fmt(ri),
                    ri = fmt(ri),
                ));
            }
            d.push('Z');
            return d;
        }

        let large = if a1 - a0 > PI { 1 } else { 0 };
        let (x0o, y0o) = ray(ro, a0);
        let (x1o, y1o) = ray(ro, a1);
        let (x0i, y0i) = ray(ri, a0);
        let (x1i, y1i) = ray(ri, a1);

        format!(
            "M{},{} A{ro},{ro} 0 {large} 1 {},{} L{},{} A{ri},{ri} 0 {large} 0 {},{}Z",
            fmt(x0o),
            fmt(y0o),
            fmt(x1o),
            fmt(y1o),
            fmt(x1i),
            fmt(y1i),
            fmt(x0i),
            fmt(y0i),
            ro = fmt(ro),
            ri = fmt(ri),
        )
    }

    /// Midpoint of the arc, halfway between the radii. Used to anchor slice
    /// labels.
    pub fn centroid(&self, arc: &ArcDatum) -> (f64, f64) {
        let r = (self.inner_radius + self.outer_radius) / 2.0;
        ray(r, arc.mid_angle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_full_circle_proportions() {
        // 60/40 -> 216 and 144 degrees.
        let arcs = PieLayout::full_circle().layout(&[60.0, 40.0]);
        assert_eq!(arcs.len(), 2);
        assert_close(arcs[0].sweep().to_degrees(), 216.0);
        assert_close(arcs[1].sweep().to_degrees(), 144.0);
        let total: f64 = arcs.iter().map(|a| a.sweep()).sum();
        assert_close(total, TAU);
    }

    #[test]
    fn test_descending_sort_carries_original_index() {
        let arcs = PieLayout::full_circle().layout(&[20.0, 50.0, 30.0]);
        let order: Vec<usize> = arcs.iter().map(|a| a.index).collect();
        assert_eq!(order, [1, 2, 0]);
        // First arc starts at the layout start angle.
        assert_close(arcs[0].start_angle, 0.0);
    }

    #[test]
    fn test_semicircle_spans_half_and_sorts_ascending() {
        let arcs = PieLayout::semicircle().layout(&[85.0, 15.0]);
        assert_eq!(arcs[0].index, 1);
        let total: f64 = arcs.iter().map(|a| a.sweep()).sum();
        assert_close(total, PI);
        assert_close(arcs[0].start_angle, -PI / 2.0);
        assert_close(arcs.last().unwrap().end_angle, PI / 2.0);
    }

    #[test]
    fn test_visible_subset_still_fills_span() {
        // Hiding a category re-normalizes the survivors over the full span.
        let arcs = PieLayout::full_circle().layout(&[60.0]);
        assert_eq!(arcs.len(), 1);
        assert_close(arcs[0].sweep(), TAU);
    }

    #[test]
    fn test_degenerate_inputs_yield_no_arcs() {
        assert!(PieLayout::full_circle().layout(&[]).is_empty());
        assert!(PieLayout::full_circle().layout(&[0.0, 0.0]).is_empty());
        assert!(PieLayout::full_circle().layout(&[-5.0]).is_empty());
    }

    #[test]
    fn test_pad_angle_preserves_total_span() {
        let layout = PieLayout {
            pad_angle: 0.05,
            ..PieLayout::full_circle()
        };
        let arcs = layout.layout(&[10.0, 20.0, 30.0]);
        let total: f64 = arcs.iter().map(|a| a.sweep()).sum();
        assert_close(total, TAU);
    }

    #[test]
    fn test_arc_path_shapes() {
        let ring = Annulus::new(60.0, 100.0);
        let arcs = PieLayout::full_circle().layout(&[60.0, 40.0]);
        let d = ring.arc_path(&arcs[0]);
        assert!(d.starts_with('M'));
        assert!(d.ends_with('Z'));
        assert_eq!(d.matches('A').count(), 2);

        // A single visible slice covers the whole circle and becomes a ring
        // (two arc pairs: outer and inner).
        let full = ring.arc_path(&PieLayout::full_circle().layout(&[1.0])[0]);
        assert_eq!(full.matches('A').count(), 4);
    }

    #[test]
    fn test_centroid_of_right_half() {
        // Slice from 0 to PI hangs on the right side; its centroid sits on
        // the positive x axis at the ring midline.
        let ring = Annulus::new(60.0, 100.0);
        let arc = ArcDatum {
            index: 0,
            value: 1.0,
            start_angle: 0.0,
            end_angle: PI,
            pad_angle: 0.0,
        };
        let (x, y) = ring.centroid(&arc);
        assert_close(x, 80.0);
        assert!(y.abs() < 1e-9);
    }
}
