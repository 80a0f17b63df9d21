//! Chart title header and the "Last Update" footer stamp.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
}

/// Left-aligned chart title. Renders nothing for an empty title.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    if props.title.is_empty() {
        return rsx! {};
    }
    rsx! {
        h4 {
            style: "margin: 4px 0 12px 0; text-align: left;",
            "{props.title}"
        }
    }
}

/// Footer stamp showing when the chart was last rendered.
#[component]
pub fn LastUpdate() -> Element {
    let stamp = js_sys::Date::new_0().to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED);
    rsx! {
        span {
            style: "position: absolute; bottom: 0; right: 10px; font-size: 12px; color: #aaa;",
            "Last Update: {stamp}"
        }
    }
}
