//! Trade operations dashboard.
//!
//! A responsive 12-column grid of chart cards over mock trading data:
//! trade success rate (half donut), monthly sales/growth (dual-axis bar +
//! line), trade notifications and EOD P&L (donuts), asset class
//! concentration (treemap), and per-portfolio composition (stacked bars).
//!
//! Each card observes its own rendered size and feeds it to its chart, so
//! the layout reflows without any chart keeping stale dimensions.

use dioxus::prelude::*;
use tdb_chart_ui::components::{
    ChartCard, ChartGrid, DonutChart, DualAxisChart, HalfDonutChart, StackedBarChart, TreemapChart,
};
use tdb_viz::{DualAxisPoint, SeriesItem, Size, StackKey, StackRow, TreeLeaf};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("trade-ops-root"))
        .launch(App);
}

fn trade_success() -> Vec<SeriesItem> {
    vec![
        SeriesItem::new("Successful Trades", 85.0, "#fed8cc"),
        SeriesItem::new("Failed Trades", 15.0, "#f9804e"),
    ]
}

fn trade_notifications() -> Vec<SeriesItem> {
    vec![
        SeriesItem::new("Scheduled", 60.0, "#9bc5ef"),
        SeriesItem::new("Completed", 15.0, "#407abc"),
        SeriesItem::new("Seat", 25.0, "#50c1c2"),
    ]
}

fn eod_pnl() -> Vec<SeriesItem> {
    vec![
        SeriesItem::new("Completed", 80.0, "#407abc"),
        SeriesItem::new("Finding", 20.0, "#fad175"),
    ]
}

fn monthly_sales() -> Vec<DualAxisPoint> {
    vec![
        DualAxisPoint::new("Jan", 500.0, 5.0),
        DualAxisPoint::new("Feb", 800.0, 10.0),
        DualAxisPoint::new("Mar", 650.0, 8.0),
        DualAxisPoint::new("Apr", 900.0, 15.0),
        DualAxisPoint::new("May", 1200.0, 20.0),
        DualAxisPoint::new("Jun", 1100.0, 18.0),
    ]
}

fn asset_classes() -> Vec<TreeLeaf> {
    vec![
        TreeLeaf::new("Equity", 45.0, "#4177cd"),
        TreeLeaf::new("Fixed Income", 15.0, "#9ac7f0"),
        TreeLeaf::new("Forex", 35.0, "#4f135d"),
    ]
}

fn portfolio_keys() -> Vec<StackKey> {
    vec![
        StackKey::new("Equity", "#6A98E6"),
        StackKey::new("Fixed Income", "#F1C40F"),
        StackKey::new("Forex", "#2E8B57"),
        StackKey::new("Commodity", "#A64CA6"),
    ]
}

fn portfolio_composition() -> Vec<StackRow> {
    vec![
        StackRow::new("Portfolio A", vec![45.0, 35.0, 15.0, 15.0]),
        StackRow::new("Portfolio B", vec![30.0, 40.0, 20.0, 10.0]),
        StackRow::new("Portfolio C", vec![25.0, 30.0, 30.0, 15.0]),
    ]
}

#[component]
fn App() -> Element {
    use_effect(|| {
        log::info!("trade ops dashboard mounted");
    });

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; \
                    font-family: system-ui, -apple-system, sans-serif; \
                    border: 1px solid lightblue; border-radius: 8px;",
            ChartGrid {
                ChartCard {
                    id: "trade-success-card",
                    span: 4,
                    render: Callback::new(|size: Size| rsx! {
                        HalfDonutChart {
                            data: trade_success(),
                            title: "Trade Success Rate",
                            sizes: size,
                        }
                    }),
                }
                ChartCard {
                    id: "monthly-sales-card",
                    span: 8,
                    render: Callback::new(|size: Size| rsx! {
                        DualAxisChart {
                            data: monthly_sales(),
                            title: "Monthly Sales & Growth",
                            sizes: size,
                        }
                    }),
                }
                ChartCard {
                    id: "trade-notification-card",
                    span: 4,
                    render: Callback::new(|size: Size| rsx! {
                        DonutChart {
                            data: trade_notifications(),
                            title: "Trade Notification",
                            sizes: size,
                        }
                    }),
                }
                ChartCard {
                    id: "asset-class-card",
                    span: 4,
                    render: Callback::new(|size: Size| rsx! {
                        TreemapChart {
                            data: asset_classes(),
                            title: "Asset Class Concentration",
                            sizes: size,
                        }
                    }),
                }
                ChartCard {
                    id: "portfolio-composition-card",
                    span: 4,
                    render: Callback::new(|size: Size| rsx! {
                        StackedBarChart {
                            data: portfolio_composition(),
                            keys: portfolio_keys(),
                            title: "Portfolio Composition",
                            sizes: size,
                        }
                    }),
                }
                ChartCard {
                    id: "sales-review-card",
                    span: 8,
                    render: Callback::new(|size: Size| rsx! {
                        DualAxisChart {
                            data: monthly_sales(),
                            title: "Sales Review",
                            sizes: size,
                        }
                    }),
                }
                ChartCard {
                    id: "eod-pnl-card",
                    span: 4,
                    render: Callback::new(|size: Size| rsx! {
                        DonutChart {
                            data: eod_pnl(),
                            title: "EOD P&L",
                            sizes: size,
                        }
                    }),
                }
            }
        }
    }
}
