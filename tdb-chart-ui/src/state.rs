//! Per-chart reactive state.
//!
//! Each chart instance owns its own `ChartState` (created with
//! `use_chart_state`); hover, tooltip, and legend visibility are scoped to
//! that chart's lifetime, not shared app-wide.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use tdb_viz::{Size, VisibilitySet};

/// Content and viewport position of the tooltip. At most one exists per
/// chart, tracking the most recent pointer event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipData {
    pub title: String,
    pub lines: Vec<String>,
    /// Viewport (client) coordinates of the pointer.
    pub x: f64,
    pub y: f64,
}

/// Reactive state for one chart instance.
#[derive(Clone, Copy)]
pub struct ChartState {
    /// Label of the element under the pointer, if any.
    pub hovered: Signal<Option<String>>,
    /// Tooltip shown while the pointer is over an interactive shape.
    pub tooltip: Signal<Option<TooltipData>>,
    /// Indices toggled off via the legend.
    pub hidden: Signal<VisibilitySet>,
}

impl ChartState {
    pub fn new(len: usize) -> Self {
        Self {
            hovered: Signal::new(None),
            tooltip: Signal::new(None),
            hidden: Signal::new(VisibilitySet::new(len)),
        }
    }

    /// Rebind the visibility set when the dataset length changes, so hidden
    /// indices never outlive the entries they referred to.
    pub fn sync_dataset(&mut self, len: usize) {
        if self.hidden.peek().len() != len {
            self.hidden.set(VisibilitySet::new(len));
        }
    }

    pub fn toggle(&mut self, index: usize) {
        self.hidden.write().toggle(index);
    }

    pub fn set_hover(&mut self, label: impl Into<String>) {
        self.hovered.set(Some(label.into()));
    }

    pub fn clear_hover(&mut self) {
        self.hovered.set(None);
    }

    pub fn show_tooltip(&mut self, data: TooltipData) {
        self.tooltip.set(Some(data));
    }

    pub fn hide_tooltip(&mut self) {
        self.tooltip.set(None);
    }

    /// True when `label` should render at full strength: either it is the
    /// hovered element or nothing is hovered.
    pub fn is_active(&self, label: &str) -> bool {
        match self.hovered.read().as_deref() {
            None => true,
            Some(hovered) => hovered == label,
        }
    }

    pub fn is_hovered(&self, label: &str) -> bool {
        self.hovered.read().as_deref() == Some(label)
    }
}

/// Hook: chart-local state, visibility rebound to the current dataset size.
pub fn use_chart_state(dataset_len: usize) -> ChartState {
    let mut state = use_hook(|| ChartState::new(dataset_len));
    state.sync_dataset(dataset_len);
    state
}

/// Hook: close the tooltip and drop the hover as soon as the observed
/// surface size changes, so a stale tooltip never floats over a re-laid-out
/// chart.
pub fn use_reset_on_resize(mut state: ChartState, size: Size) {
    let mut last = use_hook(|| CopyValue::new(size));
    if *last.peek() != size {
        last.set(size);
        if state.tooltip.peek().is_some() {
            state.tooltip.set(None);
        }
        if state.hovered.peek().is_some() {
            state.hovered.set(None);
        }
    }
}
