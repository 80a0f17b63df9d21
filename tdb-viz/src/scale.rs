//! Linear and band scales with d3 semantics.

use serde::{Deserialize, Serialize};

const E10: f64 = 7.071_067_811_865_475_5; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Tick step for roughly `count` ticks over `[start, stop]`, snapped to a
/// 1/2/5 multiple of a power of ten.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if step <= 0.0 || !step.is_finite() {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Continuous affine mapping from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map `value` through the scale. A degenerate (zero-span) domain maps
    /// everything to the range start.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return r0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Extend the domain outward to tick-friendly round values.
    pub fn nice(mut self, count: usize) -> Self {
        // Two passes, recomputing the step after the first rounding.
        for _ in 0..2 {
            let (d0, d1) = self.domain;
            let step = tick_increment(d0, d1, count);
            if step <= 0.0 {
                break;
            }
            self.domain = ((d0 / step).floor() * step, (d1 / step).ceil() * step);
        }
        self
    }

    /// Round tick values covering the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if d0 == d1 {
            return vec![d0];
        }
        let (start, stop) = if d0 < d1 { (d0, d1) } else { (d1, d0) };
        let step = tick_increment(start, stop, count);
        if step <= 0.0 {
            return Vec::new();
        }
        let first = (start / step).ceil() as i64;
        let last = (stop / step).floor() as i64;
        let mut ticks: Vec<f64> = (first..=last).map(|i| i as f64 * step).collect();
        if d0 > d1 {
            ticks.reverse();
        }
        ticks
    }
}

/// Ordinal band scale: evenly spaced bands for categorical labels, with
/// inner/outer padding expressed as a fraction of the step (d3 band math,
/// center-aligned).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl BandScale {
    /// `padding` sets both inner and outer padding, as d3's `padding`
    /// shorthand does.
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let padding = padding.clamp(0.0, 1.0);
        Self {
            domain,
            range,
            padding_inner: padding,
            padding_outer: padding,
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        let denom = (n - self.padding_inner + 2.0 * self.padding_outer).max(1e-12);
        (self.range.1 - self.range.0) / denom
    }

    /// Width of one band.
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Start position of the band at `index`, or None past the domain.
    pub fn position_at(&self, index: usize) -> Option<f64> {
        if index >= self.domain.len() {
            return None;
        }
        let n = self.domain.len() as f64;
        let step = self.step();
        // Center-aligned leftover space (align = 0.5).
        let start = self.range.0
            + (self.range.1 - self.range.0 - step * (n - self.padding_inner)) * 0.5;
        Some(start + step * index as f64)
    }

    /// Start position of the band for `label`, or None for unknown labels.
    pub fn position(&self, label: &str) -> Option<f64> {
        let index = self.domain.iter().position(|d| d == label)?;
        self.position_at(index)
    }

    /// Center of the band at `index` (line points, tick labels).
    pub fn center_at(&self, index: usize) -> Option<f64> {
        self.position_at(index).map(|p| p + self.bandwidth() / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_linear_scale_maps_domain_to_range() {
        let scale = LinearScale::new((0.0, 100.0), (300.0, 0.0));
        assert_close(scale.scale(0.0), 300.0);
        assert_close(scale.scale(100.0), 0.0);
        assert_close(scale.scale(25.0), 225.0);
    }

    #[test]
    fn test_linear_scale_degenerate_domain() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_close(scale.scale(5.0), 0.0);
        assert_close(scale.scale(999.0), 0.0);
    }

    #[test]
    fn test_linear_ticks_use_round_steps() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0));
        assert_eq!(scale.ticks(5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(scale.ticks(2), vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn test_linear_ticks_degenerate() {
        let scale = LinearScale::new((7.0, 7.0), (0.0, 1.0));
        assert_eq!(scale.ticks(5), vec![7.0]);
    }

    #[test]
    fn test_nice_rounds_outward() {
        let scale = LinearScale::new((0.0, 97.0), (0.0, 1.0)).nice(10);
        assert_close(scale.domain.0, 0.0);
        assert_close(scale.domain.1, 100.0);
    }

    #[test]
    fn test_band_scale_layout() {
        // n = 3, range 300, padding 0.3:
        // step = 300 / (3 - 0.3 + 0.6) = 90.909..., bandwidth = step * 0.7
        let labels: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        let scale = BandScale::new(labels, (0.0, 300.0), 0.3);
        let step = 300.0 / 3.3;
        assert_close(scale.step(), step);
        assert_close(scale.bandwidth(), step * 0.7);
        // Center-aligned: start = (300 - step * 2.7) / 2
        let start = (300.0 - step * 2.7) / 2.0;
        assert_close(scale.position_at(0).unwrap(), start);
        assert_close(scale.position("B").unwrap(), start + step);
        assert_close(scale.position_at(2).unwrap(), start + 2.0 * step);
    }

    #[test]
    fn test_band_scale_unknown_label() {
        let labels: Vec<String> = ["A"].iter().map(|s| s.to_string()).collect();
        let scale = BandScale::new(labels, (0.0, 100.0), 0.2);
        assert!(scale.position("Z").is_none());
        assert!(scale.position_at(1).is_none());
    }

    #[test]
    fn test_band_scale_bands_fit_range() {
        let labels: Vec<String> = (0..5).map(|i| format!("c{i}")).collect();
        let scale = BandScale::new(labels, (0.0, 500.0), 0.2);
        let last = scale.position_at(4).unwrap() + scale.bandwidth();
        assert!(scale.position_at(0).unwrap() >= 0.0);
        assert!(last <= 500.0 + 1e-9);
    }
}
