//! Donut and half-donut charts.
//!
//! Both are the same parameterized renderer: values from the visible subset
//! go through a pie layout, each arc becomes one SVG path, hovering an arc
//! dims the others, draws an enlarged shadow ring behind it, and opens the
//! tooltip. The legend toggles per-category visibility.

use crate::components::{ChartHeader, LastUpdate, Legend, LegendEntry, TooltipOverlay};
use crate::state::{use_chart_state, use_reset_on_resize, TooltipData};
use dioxus::prelude::*;
use tdb_viz::pie::{Annulus, PieLayout};
use tdb_viz::{SeriesItem, Size};

#[derive(Props, Clone, PartialEq)]
pub struct DonutChartProps {
    pub data: Vec<SeriesItem>,
    #[props(default)]
    pub title: String,
    pub sizes: Size,
}

/// Full-circle donut: largest slice first, slice labels at the centroids.
#[component]
pub fn DonutChart(props: DonutChartProps) -> Element {
    rsx! {
        DonutBase {
            data: props.data,
            title: props.title,
            sizes: props.sizes,
            layout: PieLayout::full_circle(),
            show_labels: true,
        }
    }
}

/// Top-semicircle donut: smallest slice first, no slice labels.
#[component]
pub fn HalfDonutChart(props: DonutChartProps) -> Element {
    rsx! {
        DonutBase {
            data: props.data,
            title: props.title,
            sizes: props.sizes,
            layout: PieLayout::semicircle(),
            show_labels: false,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DonutBaseProps {
    data: Vec<SeriesItem>,
    title: String,
    sizes: Size,
    layout: PieLayout,
    show_labels: bool,
}

#[component]
fn DonutBase(props: DonutBaseProps) -> Element {
    let mut state = use_chart_state(props.data.len());
    use_reset_on_resize(state, props.sizes);

    let width = props.sizes.width;
    let height = props.sizes.height;
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    let radius = (width.min(height) / 2.5).max(0.0);
    let inner_radius = radius * 0.6;
    let ring = Annulus::new(inner_radius, radius);
    let shadow_ring = Annulus::new(inner_radius * 1.7, radius + 10.0);

    let hidden = state.hidden.read().clone();
    let entries: Vec<LegendEntry> = props
        .data
        .iter()
        .enumerate()
        .map(|(i, d)| LegendEntry {
            label: d.label.clone(),
            color: d.color.clone(),
            value: Some(d.value),
            hidden: hidden.is_hidden(i),
        })
        .collect();

    let visible = hidden.filtered(&props.data);
    let values: Vec<f64> = visible.iter().map(|(_, d)| d.value).collect();
    let arcs = props.layout.layout(&values);

    let slices = arcs.iter().map(|arc| {
        let item = visible[arc.index].1.clone();
        let d = ring.arc_path(arc);
        let (cx, cy) = ring.centroid(arc);
        let hovered = state.is_hovered(&item.label);
        let opacity = if state.is_active(&item.label) { 1.0 } else { 0.5 };
        let scale = if hovered { 1.1 } else { 1.0 };
        let shadow = if hovered {
            Some(shadow_ring.arc_path(arc))
        } else {
            None
        };
        let enter_item = item.clone();
        rsx! {
            g {
                key: "{item.label}",
                style: "cursor: pointer; opacity: {opacity}; scale: {scale}; transition: all 0.25s ease-in-out;",
                onmouseenter: move |evt: Event<MouseData>| {
                    let point = evt.client_coordinates();
                    state.show_tooltip(TooltipData {
                        title: enter_item.label.clone(),
                        lines: vec![format!("{}", enter_item.value)],
                        x: point.x,
                        y: point.y,
                    });
                    state.set_hover(enter_item.label.clone());
                },
                onmouseleave: move |_| {
                    state.hide_tooltip();
                    state.clear_hover();
                },
                path {
                    d: "{d}",
                    fill: "{item.color}",
                    stroke: "white",
                    stroke_width: "2",
                    style: "transition: all 0.25s ease-in-out;",
                }
                if let Some(shadow_d) = shadow {
                    path {
                        d: "{shadow_d}",
                        fill: "{item.color}",
                        opacity: "0.2",
                    }
                }
                if props.show_labels {
                    text {
                        x: "{cx}",
                        y: "{cy}",
                        dy: ".33em",
                        fill: "white",
                        font_size: "10",
                        text_anchor: "middle",
                        "{item.label}"
                    }
                }
            }
        }
    });

    rsx! {
        div {
            style: "position: relative; text-align: center; height: {height}px; width: {width}px; margin: 0 auto;",
            ChartHeader { title: props.title.clone() }
            Legend {
                entries,
                on_toggle: move |index| state.toggle(index),
                on_hover: move |label: Option<String>| match label {
                    Some(label) => state.set_hover(label),
                    None => state.clear_hover(),
                },
            }
            svg {
                width: "{width}",
                height: "{height}",
                g {
                    transform: "translate({half_w}, {half_h})",
                    {slices}
                }
            }
            TooltipOverlay { data: state.tooltip.read().clone() }
            LastUpdate {}
        }
    }
}
