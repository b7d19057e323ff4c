//! Assertion helpers for list and view state

#![allow(dead_code)]

use extdeck_core::ExtensionRecord;
use extdeck_extensions::{Frame, View};

/// Assert that ids are exactly 0..N-1 in list order
pub fn assert_sequential_ids(records: &[ExtensionRecord]) {
    let ids: Vec<usize> = records.iter().map(|r| r.id).collect();
    let expected: Vec<usize> = (0..records.len()).collect();
    assert_eq!(ids, expected, "ids should be sequential from 0");
}

/// Names of the cards in a frame, in order
pub fn card_names(frame: &Frame) -> Vec<String> {
    frame.view.cards().iter().map(|c| c.name.clone()).collect()
}

/// Assert that a frame shows exactly these cards
pub fn assert_cards(frame: &Frame, expected: &[&str]) {
    assert_eq!(card_names(frame), expected, "unexpected cards in view");
}

/// Assert that a frame shows the empty-state placeholder and no cards
pub fn assert_empty_state(frame: &Frame) {
    assert!(
        matches!(frame.view, View::Empty { .. }),
        "expected empty-state placeholder, got {:?}",
        frame.view
    );
    assert!(frame.view.cards().is_empty());
}

/// Assert that a frame shows the load-error placeholder
pub fn assert_load_failed(frame: &Frame) {
    assert!(
        matches!(frame.view, View::LoadFailed { .. }),
        "expected load-error placeholder, got {:?}",
        frame.view
    );
}
