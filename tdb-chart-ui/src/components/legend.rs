//! Ordinal legend with click-to-toggle visibility and hover highlight.

use dioxus::prelude::*;

/// One legend row: swatch color, label, optional value readout, and whether
/// the entry is currently toggled off.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
    pub value: Option<f64>,
    pub hidden: bool,
}

#[derive(Props, Clone, PartialEq)]
pub struct LegendProps {
    pub entries: Vec<LegendEntry>,
    /// Fired with the entry index on click; the owning chart flips its
    /// visibility set.
    pub on_toggle: EventHandler<usize>,
    /// Fired with the entry label on hover, `None` on leave.
    #[props(default)]
    pub on_hover: EventHandler<Option<String>>,
}

/// Horizontal wrapping legend. Hidden entries render struck through.
#[component]
pub fn Legend(props: LegendProps) -> Element {
    let on_toggle = props.on_toggle;
    let on_hover = props.on_hover;

    let items = props.entries.iter().enumerate().map(|(index, entry)| {
        let decoration = if entry.hidden { "line-through" } else { "none" };
        let label = entry.label.clone();
        let hover_label = entry.label.clone();
        rsx! {
            div {
                key: "{label}",
                style: "display: flex; align-items: flex-start; cursor: pointer; user-select: none;",
                tabindex: 1,
                onclick: move |_| on_toggle.call(index),
                onmouseover: move |_| on_hover.call(Some(hover_label.clone())),
                onmouseleave: move |_| on_hover.call(None),
                div {
                    style: "width: 12px; height: 12px; background-color: {entry.color}; margin-right: 7px; margin-top: 2px; border-radius: 20px;",
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 2px; align-items: flex-start;",
                    h5 {
                        style: "margin: 0; font-weight: normal; text-decoration: {decoration};",
                        "{entry.label}"
                    }
                    if let Some(value) = entry.value {
                        h3 {
                            style: "margin: 0; font-weight: normal;",
                            "{value}"
                        }
                    }
                }
            }
        }
    });

    rsx! {
        div {
            style: "display: flex; justify-content: center;",
            div {
                style: "display: flex; flex-wrap: wrap; gap: 4px 15px;",
                {items}
            }
        }
    }
}
