use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// In-page anchors we take over from the browser.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Selector to scroll to for an in-page href, if any. A bare `#` has no target.
pub fn anchor_target(href: Option<&str>) -> Option<&str> {
    href.filter(|h| !h.is_empty() && *h != "#")
}

/// Smoothly scrolls the first element matching `selector` to the top of the
/// viewport. Exposed to inline `onclick` handlers in the page markup.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(selector: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    // An invalid selector throws in the browser; treat it like no match
    match document.query_selector(selector) {
        Ok(Some(element)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        _ => debug!("scrollToSection: nothing matches {}", selector),
    }
}

/// Document-level click handler. Clicks landing inside an in-page anchor
/// never navigate; those with a real target scroll to it instead.
pub fn handle_anchor_click(e: &MouseEvent) {
    let anchor = e
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(ANCHOR_SELECTOR).ok().flatten());

    if let Some(anchor) = anchor {
        e.prevent_default();
        let href = anchor.get_attribute("href");
        if let Some(target) = anchor_target(href.as_deref()) {
            scroll_to_section(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target(Some("#contact")), Some("#contact"));
        assert_eq!(anchor_target(Some("#")), None);
        assert_eq!(anchor_target(Some("")), None);
        assert_eq!(anchor_target(None), None);
    }
}
