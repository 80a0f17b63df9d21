//! Parent-size observation.
//!
//! A `ResizeObserver` is installed on the chart card's container element via
//! the document-eval JS bridge; resize notifications are debounced in JS and
//! streamed back as `[width, height]` pairs into a signal. When the element
//! leaves the DOM the observer disconnects and the stream simply ends.

use dioxus::document;
use dioxus::prelude::*;
use tdb_viz::Size;

/// Default resize debounce, matching the cards' CSS transition time.
pub const DEFAULT_DEBOUNCE_MS: u32 = 150;

/// Synchronously measure an element by id. Used for the first paint, before
/// the observer delivers anything.
pub fn measure(container_id: &str) -> Option<Size> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(container_id)?;
    let rect = element.get_bounding_client_rect();
    Some(Size::new(rect.width(), rect.height()))
}

/// Hook: observe the rendered size of the element with id `container_id`.
///
/// The returned signal starts at the element's current size (or zero before
/// first layout) and updates after every layout-affecting resize, debounced
/// by `debounce_ms`. The container id must be stable for the life of the
/// component.
pub fn use_parent_size(container_id: &str, debounce_ms: u32) -> Signal<Size> {
    let mut size = use_signal(|| measure(container_id).unwrap_or_default());
    let id = container_id.to_string();
    use_future(move || {
        let js = observe_script(&id, debounce_ms);
        let id = id.clone();
        async move {
            let mut eval = document::eval(&js);
            loop {
                match eval.recv::<[f64; 2]>().await {
                    Ok([width, height]) => size.set(Size::new(width, height)),
                    Err(err) => {
                        log::debug!("size observer for #{id} ended: {err:?}");
                        break;
                    }
                }
            }
        }
    });
    size
}

/// JS installed per observed container: poll until the element exists (the
/// effect can run before Dioxus commits the DOM), then attach a debounced
/// ResizeObserver that reports the bounding rect.
fn observe_script(container_id: &str, debounce_ms: u32) -> String {
    // JSON-escape the id before splicing it into the script.
    let id = serde_json::to_string(container_id).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"
        (function() {{
            var id = {id};
            var poll = setInterval(function() {{
                var el = document.getElementById(id);
                if (!el) return;
                clearInterval(poll);
                var timer = null;
                var observer = null;
                var send = function() {{
                    if (!document.body.contains(el)) {{
                        if (observer) observer.disconnect();
                        return;
                    }}
                    var rect = el.getBoundingClientRect();
                    dioxus.send([rect.width, rect.height]);
                }};
                observer = new ResizeObserver(function() {{
                    clearTimeout(timer);
                    timer = setTimeout(send, {debounce_ms});
                }});
                observer.observe(el);
                send();
            }}, 100);
        }})();
        "#,
    )
}
