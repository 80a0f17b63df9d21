//! Tooltip overlay.

use crate::state::TooltipData;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TooltipOverlayProps {
    pub data: Option<TooltipData>,
}

/// The one tooltip a chart may show: a fixed-position card anchored just
/// above and to the right of the pointer. Renders nothing while no shape is
/// hovered.
#[component]
pub fn TooltipOverlay(props: TooltipOverlayProps) -> Element {
    let Some(data) = props.data else {
        return rsx! {};
    };
    let left = data.x + 10.0;
    let top = data.y - 10.0;

    rsx! {
        div {
            style: "position: fixed; left: {left}px; top: {top}px; \
                    transform: translate(-50%, -100%); \
                    background-color: white; color: #333; padding: 10px; \
                    border-radius: 6px; border: 1px solid #ddd; \
                    box-shadow: 0px 4px 8px rgba(0,0,0,0.2); \
                    font-size: 12px; font-weight: bold; white-space: nowrap; \
                    pointer-events: none; z-index: 10;",
            div {
                style: "margin-bottom: 5px; text-align: center;",
                "{data.title}"
            }
            for line in data.lines.iter() {
                div {
                    style: "font-size: 14px;",
                    "{line}"
                }
            }
        }
    }
}
