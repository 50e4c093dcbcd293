//! Input pipeline tests: collector snapshots feeding the edge detector.

use std::time::Duration;

use pixelframe::input::{InputCollector, InputState};
use pixelframe::types::{Key, MouseButton, Scroll};

/// One engine-style frame: snapshot then edge refresh.
fn frame(collector: &InputCollector, state: &mut InputState) {
    let snap = collector.snapshot();
    state.update(&snap);
}

#[test]
fn test_down_down_up_edge_sequence() {
    let collector = InputCollector::new();
    let mut state = InputState::new();

    // Frame 1: raw down.
    collector.key_down(Key::Z);
    frame(&collector, &mut state);
    let b = state.key(Key::Z);
    assert!(b.pressed, "frame 1: pressed");
    assert!(b.down, "frame 1: down");
    assert!(!b.released, "frame 1: not released");

    // Frame 2: still down.
    frame(&collector, &mut state);
    let b = state.key(Key::Z);
    assert!(!b.pressed, "frame 2: pressed is a one-frame edge");
    assert!(b.down, "frame 2: down persists");
    assert!(!b.released);

    // Frame 3: raw up.
    collector.key_up(Key::Z);
    frame(&collector, &mut state);
    let b = state.key(Key::Z);
    assert!(!b.pressed);
    assert!(!b.down);
    assert!(b.released, "frame 3: released");

    // Frame 4: idle again.
    frame(&collector, &mut state);
    let b = state.key(Key::Z);
    assert!(!b.pressed && !b.down && !b.released);
}

#[test]
fn test_press_and_release_within_one_frame_window() {
    let collector = InputCollector::new();
    let mut state = InputState::new();

    // Down and up both land before the next snapshot: the level never
    // reads true, so no edges fire. One-frame sampling skew is accepted.
    collector.key_down(Key::Q);
    collector.key_up(Key::Q);
    frame(&collector, &mut state);
    let b = state.key(Key::Q);
    assert!(!b.pressed && !b.down && !b.released);
}

#[test]
fn test_any_none_aggregates_across_full_set() {
    let collector = InputCollector::new();
    let mut state = InputState::new();

    frame(&collector, &mut state);
    assert!(!state.key(Key::Any).down);
    assert!(state.key(Key::None).down);

    collector.key_down(Key::F5);
    collector.key_down(Key::Space);
    frame(&collector, &mut state);
    assert!(state.key(Key::Any).pressed);
    assert!(state.key(Key::Any).down);
    assert!(!state.key(Key::None).down);

    collector.key_up(Key::F5);
    frame(&collector, &mut state);
    // Space still held: released fired for F5, down stays for the set.
    assert!(state.key(Key::Any).released);
    assert!(state.key(Key::Any).down);
}

#[test]
fn test_mouse_buttons_and_wheel() {
    let collector = InputCollector::new();
    let mut state = InputState::new();

    collector.button_down(MouseButton::Right);
    collector.mouse_moved(17, 23);
    collector.wheel(Scroll::Up);
    frame(&collector, &mut state);

    assert!(state.mouse_button(MouseButton::Right).pressed);
    assert!(state.mouse_button(MouseButton::Any).down);
    assert_eq!(state.mouse_x(), 17);
    assert_eq!(state.mouse_y(), 23);
    assert_eq!(state.mouse_scroll(), Scroll::Up);

    // Wheel is a per-frame signal.
    frame(&collector, &mut state);
    assert_eq!(state.mouse_scroll(), Scroll::None);
    assert!(state.mouse_button(MouseButton::Right).down);
}

#[test]
fn test_release_timeout_synthesizes_key_up() {
    let collector = InputCollector::new();
    collector.set_release_timeout(Some(Duration::from_millis(5)));
    let mut state = InputState::new();

    collector.key_down(Key::Left);
    frame(&collector, &mut state);
    assert!(state.key(Key::Left).pressed);

    // No release event arrives; after the quiet period the key expires
    // and the edge detector sees a normal release.
    std::thread::sleep(Duration::from_millis(10));
    frame(&collector, &mut state);
    assert!(state.key(Key::Left).released);
    assert!(!state.key(Key::Left).down);
}

#[test]
fn test_repeat_events_keep_timed_out_key_alive() {
    let collector = InputCollector::new();
    collector.set_release_timeout(Some(Duration::from_millis(20)));
    let mut state = InputState::new();

    collector.key_down(Key::Right);
    frame(&collector, &mut state);

    // Terminal auto-repeat re-reports the key before the timeout.
    std::thread::sleep(Duration::from_millis(10));
    collector.key_down(Key::Right);
    std::thread::sleep(Duration::from_millis(10));
    frame(&collector, &mut state);
    assert!(state.key(Key::Right).down, "refreshed key must stay held");
}
