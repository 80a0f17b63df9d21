//! Chart dataset types.
//!
//! Each chart family gets an explicit data shape instead of one loosely
//! typed record. Identity is the label/name; items are immutable per render.

use serde::{Deserialize, Serialize};

/// One category in a donut/half-donut chart (and its legend entry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesItem {
    pub label: String,
    pub value: f64,
    /// CSS color for the arc and legend swatch.
    pub color: String,
}

impl SeriesItem {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// One leaf rectangle in a treemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeLeaf {
    pub name: String,
    pub size: f64,
    pub color: String,
}

impl TreeLeaf {
    pub fn new(name: impl Into<String>, size: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            color: color.into(),
        }
    }
}

/// One category on the shared axis of a dual-axis chart: a bar value on the
/// left scale and a line value on the right scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DualAxisPoint {
    pub label: String,
    pub bar_value: f64,
    pub line_value: f64,
}

impl DualAxisPoint {
    pub fn new(label: impl Into<String>, bar_value: f64, line_value: f64) -> Self {
        Self {
            label: label.into(),
            bar_value,
            line_value,
        }
    }
}

/// One stacked segment key: its display name and color, shared by every
/// category of a stacked bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackKey {
    pub name: String,
    pub color: String,
}

impl StackKey {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// One category of a stacked bar chart. `values` is aligned with the chart's
/// `StackKey` list; rows shorter than the key list read as 0 for the
/// missing keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackRow {
    pub category: String,
    pub values: Vec<f64>,
}

impl StackRow {
    pub fn new(category: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            category: category.into(),
            values,
        }
    }

    /// Value for key `k`, treating missing keys as 0.
    pub fn value(&self, k: usize) -> f64 {
        self.values.get(k).copied().unwrap_or(0.0)
    }

    /// Total of all values in this row.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}
