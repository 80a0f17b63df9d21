//! Axis primitives: a domain line plus tick marks and labels.

use dioxus::prelude::*;

/// One tick: offset along the axis and its label text.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub offset: f64,
    pub label: String,
}

impl AxisTick {
    pub fn new(offset: f64, label: impl Into<String>) -> Self {
        Self {
            offset,
            label: label.into(),
        }
    }
}

/// Which side of the plot a vertical axis sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Left,
    Right,
}

#[derive(Props, Clone, PartialEq)]
pub struct XAxisProps {
    /// y position of the axis line within the plot group.
    pub top: f64,
    /// Axis line length.
    pub length: f64,
    pub ticks: Vec<AxisTick>,
    #[props(default = "#D3D3D3".to_string())]
    pub stroke: String,
}

/// Horizontal axis along the bottom of a plot.
#[component]
pub fn XAxis(props: XAxisProps) -> Element {
    rsx! {
        g {
            transform: "translate(0, {props.top})",
            line {
                x1: "0",
                y1: "0",
                x2: "{props.length}",
                y2: "0",
                stroke: "{props.stroke}",
            }
            for tick in props.ticks.iter() {
                g {
                    transform: "translate({tick.offset}, 0)",
                    line { y1: "0", y2: "6", stroke: "{props.stroke}" }
                    text {
                        y: "20",
                        fill: "black",
                        font_size: "12",
                        text_anchor: "middle",
                        "{tick.label}"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct YAxisProps {
    /// x position of the axis line within the plot group.
    pub left: f64,
    /// Axis line length (plot height).
    pub length: f64,
    pub ticks: Vec<AxisTick>,
    pub side: AxisSide,
    #[props(default = "#D3D3D3".to_string())]
    pub stroke: String,
}

/// Vertical axis on either side of a plot. Tick offsets are y positions.
#[component]
pub fn YAxis(props: YAxisProps) -> Element {
    let dir = match props.side {
        AxisSide::Left => -1.0,
        AxisSide::Right => 1.0,
    };
    let anchor = match props.side {
        AxisSide::Left => "end",
        AxisSide::Right => "start",
    };
    let tick_end = 6.0 * dir;
    let label_x = 9.0 * dir;

    rsx! {
        g {
            transform: "translate({props.left}, 0)",
            line {
                x1: "0",
                y1: "0",
                x2: "0",
                y2: "{props.length}",
                stroke: "{props.stroke}",
            }
            for tick in props.ticks.iter() {
                g {
                    transform: "translate(0, {tick.offset})",
                    line { x1: "0", x2: "{tick_end}", stroke: "{props.stroke}" }
                    text {
                        x: "{label_x}",
                        dy: "0.32em",
                        fill: "black",
                        font_size: "12",
                        text_anchor: "{anchor}",
                        "{tick.label}"
                    }
                }
            }
        }
    }
}
