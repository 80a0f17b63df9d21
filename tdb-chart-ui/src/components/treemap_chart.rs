//! Treemap of a flat hierarchy, tiled with binary partitioning.

use crate::components::{ChartHeader, LastUpdate, TooltipOverlay};
use crate::state::{use_chart_state, use_reset_on_resize, TooltipData};
use dioxus::prelude::*;
use tdb_viz::scale::LinearScale;
use tdb_viz::treemap;
use tdb_viz::{Size, TreeLeaf};

#[derive(Props, Clone, PartialEq)]
pub struct TreemapChartProps {
    pub data: Vec<TreeLeaf>,
    #[props(default)]
    pub title: String,
    pub sizes: Size,
}

#[component]
pub fn TreemapChart(props: TreemapChartProps) -> Element {
    let mut state = use_chart_state(props.data.len());
    use_reset_on_resize(state, props.sizes);

    // Title sits above the tiles; leave it a strip of the surface.
    let header_h = if props.title.is_empty() { 0.0 } else { 36.0 };
    let tile_area = Size::new(props.sizes.width, (props.sizes.height - header_h).max(0.0));
    let tiles = treemap::layout(&props.data, tile_area);

    // Bigger leaves get bigger labels, as a gentle cue of their weight.
    let font_scale = LinearScale::new((0.0, 50.0), (10.0, 20.0));

    let rects = tiles.iter().map(|tile| {
        let leaf = props.data[tile.index].clone();
        let label_x = tile.width / 2.0;
        let label_y = tile.height / 2.0;
        let font_size = font_scale.scale(leaf.size);
        let opacity = if state.is_active(&leaf.name) { 1.0 } else { 0.7 };
        let enter_leaf = leaf.clone();
        rsx! {
            g {
                key: "{leaf.name}",
                transform: "translate({tile.x}, {tile.y})",
                style: "cursor: pointer; opacity: {opacity}; transition: 0.2s;",
                onmouseenter: move |evt: Event<MouseData>| {
                    let pos = evt.client_coordinates();
                    state.show_tooltip(TooltipData {
                        title: enter_leaf.name.clone(),
                        lines: vec![format!("{}", enter_leaf.size)],
                        x: pos.x,
                        y: pos.y,
                    });
                    state.set_hover(enter_leaf.name.clone());
                },
                onmouseleave: move |_| {
                    state.hide_tooltip();
                    state.clear_hover();
                },
                rect {
                    width: "{tile.width}",
                    height: "{tile.height}",
                    fill: "{leaf.color}",
                    stroke: "#fff",
                    stroke_width: "2",
                }
                text {
                    x: "{label_x}",
                    y: "{label_y}",
                    fill: "white",
                    font_size: "{font_size}",
                    font_weight: "bold",
                    text_anchor: "middle",
                    "{leaf.name}"
                }
            }
        }
    });

    rsx! {
        div {
            style: "position: relative; height: {props.sizes.height}px; width: {props.sizes.width}px;",
            ChartHeader { title: props.title.clone() }
            svg {
                width: "{props.sizes.width}",
                height: "{tile_area.height}",
                {rects}
            }
            TooltipOverlay { data: state.tooltip.read().clone() }
            LastUpdate {}
        }
    }
}
