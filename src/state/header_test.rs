use super::*;

#[test]
fn header_starts_unscrolled() {
    assert!(!HeaderState::default().scrolled);
}

#[test]
fn scrolled_requires_offset_strictly_above_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(51.0));
    assert!(is_scrolled(1000.0));
}

#[test]
fn on_scroll_updates_in_both_directions() {
    let mut header = HeaderState::default();
    header.on_scroll(120.0);
    assert!(header.scrolled);
    header.on_scroll(10.0);
    assert!(!header.scrolled);
}
