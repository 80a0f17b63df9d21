//! Surface size and margin handling.

use serde::{Deserialize, Serialize};

/// Rendered size of a chart surface, as reported by the size observer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when there is nothing to draw into.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Chart margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(m: f64) -> Self {
        Self::new(m, m, m, m)
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(20.0, 30.0, 50.0, 60.0)
    }
}

/// Outer size plus margins, with helpers for the inner plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub size: Size,
    pub margin: Margin,
}

impl Dimensions {
    pub fn new(size: Size, margin: Margin) -> Self {
        Self { size, margin }
    }

    /// Plot width after subtracting the horizontal margins, clamped at 0.
    pub fn inner_width(&self) -> f64 {
        (self.size.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Plot height after subtracting the vertical margins, clamped at 0.
    pub fn inner_height(&self) -> f64 {
        (self.size.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// SVG `transform` placing the origin at the inner plot area.
    pub fn inner_transform(&self) -> String {
        format!("translate({}, {})", self.margin.left, self.margin.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_area() {
        let dims = Dimensions::new(Size::new(400.0, 300.0), Margin::new(20.0, 30.0, 50.0, 60.0));
        assert_eq!(dims.inner_width(), 310.0);
        assert_eq!(dims.inner_height(), 230.0);
        assert_eq!(dims.inner_transform(), "translate(60, 20)");
    }

    #[test]
    fn test_inner_area_clamps_to_zero() {
        let dims = Dimensions::new(Size::new(40.0, 30.0), Margin::uniform(50.0));
        assert_eq!(dims.inner_width(), 0.0);
        assert_eq!(dims.inner_height(), 0.0);
    }

    #[test]
    fn test_empty_size() {
        assert!(Size::default().is_empty());
        assert!(Size::new(-1.0, 100.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }
}
