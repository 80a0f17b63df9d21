//! Stacked bar chart over a fixed percentage axis.
//!
//! Segment heights come from cumulative keyed sums per category; the keyed
//! legend toggles whole keys out of every stack.

use crate::components::{
    AxisSide, AxisTick, ChartHeader, LastUpdate, Legend, LegendEntry, TooltipOverlay, XAxis, YAxis,
};
use crate::state::{use_chart_state, use_reset_on_resize, TooltipData};
use dioxus::prelude::*;
use tdb_viz::scale::{BandScale, LinearScale};
use tdb_viz::stack::stack;
use tdb_viz::{Dimensions, Margin, Size, StackKey, StackRow};

#[derive(Props, Clone, PartialEq)]
pub struct StackedBarChartProps {
    pub data: Vec<StackRow>,
    /// Segment keys, in stacking order (bottom first).
    pub keys: Vec<StackKey>,
    #[props(default)]
    pub title: String,
    pub sizes: Size,
    /// Upper bound of the value axis; values are percentages by default.
    #[props(default = 100.0)]
    pub axis_max: f64,
}

#[component]
pub fn StackedBarChart(props: StackedBarChartProps) -> Element {
    let mut state = use_chart_state(props.keys.len());
    use_reset_on_resize(state, props.sizes);

    let dims = Dimensions::new(props.sizes, Margin::new(20.0, 30.0, 50.0, 60.0));
    let inner_w = dims.inner_width();
    let inner_h = dims.inner_height();
    let plot_transform = dims.inner_transform();

    let categories: Vec<String> = props.data.iter().map(|r| r.category.clone()).collect();
    let x_scale = BandScale::new(categories, (0.0, inner_w), 0.3);
    let bandwidth = x_scale.bandwidth();
    let y_scale = LinearScale::new((0.0, props.axis_max), (inner_h, 0.0));

    let hidden = state.hidden.read().clone();
    let entries: Vec<LegendEntry> = props
        .keys
        .iter()
        .enumerate()
        .map(|(i, key)| LegendEntry {
            label: key.name.clone(),
            color: key.color.clone(),
            value: None,
            hidden: hidden.is_hidden(i),
        })
        .collect();

    let stacks = stack(&props.data, props.keys.len(), &hidden);
    let mut segments: Vec<Element> = Vec::new();
    for (row_index, (row, row_segments)) in props.data.iter().zip(&stacks).enumerate() {
        let x = x_scale.position_at(row_index).unwrap_or(0.0);
        for segment in row_segments {
            let key = &props.keys[segment.key];
            let y = y_scale.scale(segment.y1);
            let seg_height = (y_scale.scale(segment.y0) - y).max(0.0);
            let hover_id = format!("{}-{}", key.name, row_index);
            let opacity = if state.is_hovered(&hover_id) { 0.7 } else { 1.0 };
            let value = row.value(segment.key);
            let fill = key.color.clone();
            let title = key.name.clone();
            let enter_id = hover_id.clone();
            segments.push(rsx! {
                rect {
                    key: "{hover_id}",
                    x: "{x}",
                    y: "{y}",
                    width: "{bandwidth}",
                    height: "{seg_height}",
                    fill: "{fill}",
                    style: "cursor: pointer; opacity: {opacity}; transition: 0.2s;",
                    onmouseenter: move |evt: Event<MouseData>| {
                        let pos = evt.client_coordinates();
                        state.show_tooltip(TooltipData {
                            title: title.clone(),
                            lines: vec![format!("{value}%")],
                            x: pos.x,
                            y: pos.y,
                        });
                        state.set_hover(enter_id.clone());
                    },
                    onmouseleave: move |_| {
                        state.hide_tooltip();
                        state.clear_hover();
                    },
                }
            });
        }
    }

    let x_ticks: Vec<AxisTick> = props
        .data
        .iter()
        .enumerate()
        .filter_map(|(i, row)| {
            x_scale
                .center_at(i)
                .map(|cx| AxisTick::new(cx, row.category.clone()))
        })
        .collect();
    let y_ticks: Vec<AxisTick> = y_scale
        .ticks(5)
        .into_iter()
        .map(|t| AxisTick::new(y_scale.scale(t), format!("{t}")))
        .collect();

    rsx! {
        div {
            style: "position: relative; height: {props.sizes.height}px; width: {props.sizes.width}px;",
            ChartHeader { title: props.title.clone() }
            Legend {
                entries,
                on_toggle: move |index| state.toggle(index),
                on_hover: move |_| {},
            }
            svg {
                width: "{props.sizes.width}",
                height: "{props.sizes.height}",
                g {
                    transform: "{plot_transform}",
                    {segments.into_iter()}
                    XAxis { top: inner_h, length: inner_w, ticks: x_ticks, stroke: "black" }
                    YAxis { left: 0.0, length: inner_h, ticks: y_ticks, side: AxisSide::Left, stroke: "black" }
                }
            }
            TooltipOverlay { data: state.tooltip.read().clone() }
            LastUpdate {}
        }
    }
}
