//! Reusable Dioxus RSX components for the dashboard chart apps.

mod axis;
mod chart_card;
mod chart_header;
mod donut_chart;
mod dual_axis_chart;
mod legend;
mod stacked_bar_chart;
mod tooltip;
mod treemap_chart;

pub use axis::{AxisSide, AxisTick, XAxis, YAxis};
pub use chart_card::{ChartCard, ChartGrid};
pub use chart_header::{ChartHeader, LastUpdate};
pub use donut_chart::{DonutChart, HalfDonutChart};
pub use dual_axis_chart::DualAxisChart;
pub use legend::{Legend, LegendEntry};
pub use stacked_bar_chart::StackedBarChart;
pub use tooltip::TooltipOverlay;
pub use treemap_chart::TreemapChart;
