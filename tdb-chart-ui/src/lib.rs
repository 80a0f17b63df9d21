//! Shared Dioxus components for the trade dashboard chart apps.
//!
//! This crate provides:
//! - `resize`: parent-size observation (ResizeObserver via the JS bridge)
//! - `state`: per-chart reactive state (hover, tooltip, legend visibility)
//! - `components`: reusable RSX components (grid/card, legend, tooltip,
//!   axes, and the chart renderers)
//!
//! All geometry comes from `tdb-viz`; components only map filtered data and
//! the observed surface size through those layouts and emit SVG.

pub mod components;
pub mod resize;
pub mod state;
