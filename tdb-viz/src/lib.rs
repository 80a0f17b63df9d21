//! Chart geometry for the trade dashboard apps.
//!
//! Everything in this crate is pure and target-independent: the Dioxus
//! components in `tdb-chart-ui` feed filtered data and the observed surface
//! size through these layouts and render the resulting shapes as SVG.
//!
//! Angle and layout semantics follow d3 (`d3-shape`, `d3-scale`,
//! `d3-hierarchy`): angles are radians clockwise from 12 o'clock, band
//! scales use step/bandwidth/align math, treemaps use binary tiling.

pub mod data;
pub mod dimensions;
pub mod path;
pub mod pie;
pub mod scale;
pub mod stack;
pub mod treemap;
pub mod visibility;

pub use data::{DualAxisPoint, SeriesItem, StackKey, StackRow, TreeLeaf};
pub use dimensions::{Dimensions, Margin, Size};
pub use visibility::VisibilitySet;
