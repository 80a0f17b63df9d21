//! The responsive grid and its chart cards.
//!
//! One parameterized card replaces the per-app duplicated layout markup:
//! each card owns a size observer on its container and hands the observed
//! `Size` to whatever chart it hosts through a render callback.

use crate::resize::{use_parent_size, DEFAULT_DEBOUNCE_MS};
use dioxus::prelude::*;
use tdb_viz::Size;

const GRID_CSS: &str = "
.chart-grid {
    display: grid;
    grid-template-columns: repeat(12, 1fr);
    gap: 8px;
}
.chart-grid .grid-card {
    min-height: 250px;
    padding: 16px;
    border: 2px solid lightblue;
    border-radius: 8px;
    position: relative;
    overflow: hidden;
}
@media (max-width: 900px) {
    .chart-grid .grid-card {
        grid-column: span 12 !important;
    }
}
";

/// 12-column chart grid. Cards pick a column span; small screens collapse
/// every card to the full width.
#[component]
pub fn ChartGrid(children: Element) -> Element {
    rsx! {
        style { "{GRID_CSS}" }
        div {
            class: "chart-grid",
            {children}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ChartCardProps {
    /// DOM id of the card container; must be unique per card and stable for
    /// the card's lifetime (the size observer attaches to it).
    pub id: String,
    /// Grid columns (out of 12) this card occupies on wide screens.
    #[props(default = 4)]
    pub span: u8,
    #[props(default = DEFAULT_DEBOUNCE_MS)]
    pub debounce_ms: u32,
    /// Renders the hosted chart for the card's current inner size.
    pub render: Callback<Size, Element>,
}

/// One grid card hosting a chart. The card observes its own rendered size
/// and re-renders the chart whenever it changes.
#[component]
pub fn ChartCard(props: ChartCardProps) -> Element {
    let size = use_parent_size(&props.id, props.debounce_ms);
    let current = size();

    // The card has 16px padding on each side; charts draw into what's left.
    let inner = Size::new(
        (current.width - 32.0).max(0.0),
        (current.height - 32.0).max(0.0),
    );

    rsx! {
        div {
            id: "{props.id}",
            class: "grid-card",
            style: "grid-column: span {props.span};",
            {props.render.call(inner)}
        }
    }
}
