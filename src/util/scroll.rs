//! Scroll helpers: offset reads for the header, smooth anchor
//! scrolling with a fixed-header offset, and body scroll locking for
//! the mobile menu.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Height of the fixed header, compensated when scrolling to an anchor
/// so the target is not hidden underneath it.
pub const ANCHOR_OFFSET_PX: f64 = 80.0;

/// Extract the target element id from a same-page anchor href.
/// Returns `None` for the bare `"#"` and for non-anchor hrefs, which
/// keep their default navigation.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

/// Absolute scroll position that places a target whose viewport-relative
/// top is `rect_top` just below the fixed header.
#[must_use]
pub fn anchor_scroll_top(rect_top: f64, page_offset: f64) -> f64 {
    rect_top + page_offset - ANCHOR_OFFSET_PX
}

/// Current vertical scroll offset; 0 outside a browser.
#[must_use]
pub fn vertical_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll to the element with `id`. Returns `true` when the
/// target exists and scrolling started, so callers know to cancel the
/// default anchor navigation.
pub fn scroll_to_anchor(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(target) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
            return false;
        };

        let page_offset = window.page_y_offset().unwrap_or(0.0);
        let top = anchor_scroll_top(target.get_bounding_client_rect().top(), page_offset);

        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}

/// Click handler shared by every same-page anchor link: smooth-scroll
/// when the target exists, otherwise fall through to default
/// navigation.
pub fn on_anchor_click(ev: &leptos::ev::MouseEvent, href: &str) {
    if let Some(id) = anchor_target(href) {
        if scroll_to_anchor(id) {
            ev.prevent_default();
        }
    }
}

/// Lock or unlock page scrolling while the mobile menu is open.
pub fn set_body_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.body())
        {
            let style = body.style();
            if locked {
                let _ = style.set_property("overflow", "hidden");
            } else {
                let _ = style.remove_property("overflow");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
