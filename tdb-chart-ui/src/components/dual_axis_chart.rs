//! Dual-axis bar/line chart.
//!
//! One categorical band axis on the bottom; bars read against a linear
//! scale on the left, a monotone line against an independent linear scale
//! on the right. Hovering a category's bar shows both values.

use crate::components::{AxisSide, AxisTick, ChartHeader, LastUpdate, TooltipOverlay, XAxis, YAxis};
use crate::state::{use_chart_state, use_reset_on_resize, TooltipData};
use dioxus::prelude::*;
use tdb_viz::path::monotone_path;
use tdb_viz::scale::{BandScale, LinearScale};
use tdb_viz::{Dimensions, DualAxisPoint, Margin, Size};

#[derive(Props, Clone, PartialEq)]
pub struct DualAxisChartProps {
    pub data: Vec<DualAxisPoint>,
    #[props(default)]
    pub title: String,
    pub sizes: Size,
    #[props(default = "#9ac7f4".to_string())]
    pub bar_color: String,
    #[props(default = "#ff6384".to_string())]
    pub line_color: String,
}

#[component]
pub fn DualAxisChart(props: DualAxisChartProps) -> Element {
    let mut state = use_chart_state(props.data.len());
    use_reset_on_resize(state, props.sizes);

    let dims = Dimensions::new(props.sizes, Margin::new(20.0, 50.0, 50.0, 50.0));
    let inner_w = dims.inner_width();
    let inner_h = dims.inner_height();
    let plot_transform = dims.inner_transform();

    let labels: Vec<String> = props.data.iter().map(|d| d.label.clone()).collect();
    let x_scale = BandScale::new(labels, (0.0, inner_w), 0.2);
    let bandwidth = x_scale.bandwidth();

    let max_bar = props.data.iter().map(|d| d.bar_value).fold(0.0, f64::max);
    let max_line = props.data.iter().map(|d| d.line_value).fold(0.0, f64::max);
    let y_bar = LinearScale::new((0.0, max_bar), (inner_h, 0.0));
    let y_line = LinearScale::new((0.0, max_line), (inner_h, 0.0));

    let bars = props.data.iter().enumerate().map(|(i, point)| {
        let x = x_scale.position_at(i).unwrap_or(0.0);
        let y = y_bar.scale(point.bar_value);
        let bar_height = (inner_h - y).max(0.0);
        let opacity = if state.is_hovered(&point.label) { 0.8 } else { 1.0 };
        let enter_point = point.clone();
        rsx! {
            rect {
                key: "{point.label}",
                x: "{x}",
                y: "{y}",
                width: "{bandwidth}",
                height: "{bar_height}",
                fill: "{props.bar_color}",
                style: "cursor: pointer; opacity: {opacity}; transition: 0.2s;",
                onmousemove: move |evt: Event<MouseData>| {
                    let pos = evt.client_coordinates();
                    state.show_tooltip(TooltipData {
                        title: enter_point.label.clone(),
                        lines: vec![
                            format!("Bar: {}", enter_point.bar_value),
                            format!("Line: {}", enter_point.line_value),
                        ],
                        x: pos.x,
                        y: pos.y,
                    });
                    state.set_hover(enter_point.label.clone());
                },
                onmouseleave: move |_| {
                    state.hide_tooltip();
                    state.clear_hover();
                },
            }
        }
    });

    let line_points: Vec<(f64, f64)> = props
        .data
        .iter()
        .enumerate()
        .filter_map(|(i, point)| {
            x_scale
                .center_at(i)
                .map(|cx| (cx, y_line.scale(point.line_value)))
        })
        .collect();
    let line_d = monotone_path(&line_points);

    let x_ticks: Vec<AxisTick> = props
        .data
        .iter()
        .enumerate()
        .filter_map(|(i, point)| {
            x_scale
                .center_at(i)
                .map(|cx| AxisTick::new(cx, point.label.clone()))
        })
        .collect();
    let left_ticks: Vec<AxisTick> = y_bar
        .ticks(5)
        .into_iter()
        .map(|t| AxisTick::new(y_bar.scale(t), format!("{t}")))
        .collect();
    let right_ticks: Vec<AxisTick> = y_line
        .ticks(5)
        .into_iter()
        .map(|t| AxisTick::new(y_line.scale(t), format!("{t}")))
        .collect();

    rsx! {
        div {
            style: "position: relative; height: {props.sizes.height}px; width: {props.sizes.width}px;",
            ChartHeader { title: props.title.clone() }
            svg {
                width: "{props.sizes.width}",
                height: "{props.sizes.height}",
                g {
                    transform: "{plot_transform}",
                    {bars}
                    path {
                        d: "{line_d}",
                        fill: "none",
                        stroke: "{props.line_color}",
                        stroke_width: "2",
                    }
                    XAxis { top: inner_h, length: inner_w, ticks: x_ticks }
                    YAxis { left: 0.0, length: inner_h, ticks: left_ticks, side: AxisSide::Left }
                    YAxis { left: inner_w, length: inner_h, ticks: right_ticks, side: AxisSide::Right }
                }
            }
            TooltipOverlay { data: state.tooltip.read().clone() }
            LastUpdate {}
        }
    }
}
