use super::*;

// =============================================================
// Anchor parsing
// =============================================================

#[test]
fn bare_hash_is_not_an_anchor_target() {
    assert_eq!(anchor_target("#"), None);
}

#[test]
fn section_href_yields_element_id() {
    assert_eq!(anchor_target("#about"), Some("about"));
    assert_eq!(anchor_target("#projects"), Some("projects"));
}

#[test]
fn non_anchor_hrefs_keep_default_navigation() {
    assert_eq!(anchor_target("/about"), None);
    assert_eq!(anchor_target("https://example.com/#about"), None);
    assert_eq!(anchor_target(""), None);
}

// =============================================================
// Scroll position arithmetic
// =============================================================

#[test]
fn anchor_scroll_top_compensates_for_the_header() {
    // Target 200px below the viewport top while scrolled to 100px.
    let top = anchor_scroll_top(200.0, 100.0);
    assert!((top - 220.0).abs() < f64::EPSILON);
}

#[test]
fn anchor_scroll_top_handles_targets_above_the_viewport() {
    let top = anchor_scroll_top(-300.0, 500.0);
    assert!((top - 120.0).abs() < f64::EPSILON);
}

// =============================================================
// Non-browser fallbacks
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn vertical_offset_is_zero_off_the_browser() {
    assert!(vertical_offset().abs() < f64::EPSILON);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn scroll_to_anchor_reports_no_target_off_the_browser() {
    assert!(!scroll_to_anchor("about"));
}
