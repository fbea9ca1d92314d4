use super::state::WindowState;
use crate::engine::window::GroupKey;

#[test]
fn close_window_emits_known_groups_in_order_and_resets_counts() {
    let mut state = WindowState::new(1);
    assert!(state.record(&GroupKey::value("b")));
    assert!(state.record(&GroupKey::null()));
    assert!(!state.record(&GroupKey::value("b")));
    assert!(state.record(&GroupKey::value("a")));

    let first = state.close_window();
    assert_eq!(first.sequence, 0);
    assert_eq!(first.pairs(), vec![(None, 1), (Some("a"), 1), (Some("b"), 2)]);
    assert_eq!(state.pending_total(), 0);

    state.record(&GroupKey::value("a"));
    let second = state.close_window();
    assert_eq!(second.sequence, 1);
    assert_eq!(second.pairs(), vec![(None, 0), (Some("a"), 1), (Some("b"), 0)]);
    assert_eq!(second.window_start, first.window_end);
}

#[test]
fn close_window_without_groups_is_empty() {
    let mut state = WindowState::new(7);
    let batch = state.close_window();
    assert!(batch.is_empty());
    assert_eq!(batch.sequence, 0);
    assert_eq!(state.epoch(), 7);
    assert!(state.known_groups().is_empty());
}

#[test]
fn pending_count_reflects_open_window_only() {
    let mut state = WindowState::new(1);
    state.record(&GroupKey::null());
    state.record(&GroupKey::null());
    assert_eq!(state.pending_count(&GroupKey::null()), 2);

    state.close_window();
    assert_eq!(state.pending_count(&GroupKey::null()), 0);
    assert_eq!(state.known_groups(), vec![GroupKey::null()]);
    assert_eq!(state.group_count(), 1);
}
