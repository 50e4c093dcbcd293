//! Raw input collection across threads.
//!
//! The event pump runs on its own thread and records plain level state
//! (key X is down, mouse at (x, y)). The frame driver takes one snapshot
//! per tick; edge detection happens downstream in [`crate::state`].

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use pixelframe_types::{Key, MouseButton, Scroll};

/// One frame's copy of the raw input level state.
#[derive(Debug, Clone, Copy)]
pub struct RawSnapshot {
    pub keys: [bool; Key::COUNT],
    pub buttons: [bool; MouseButton::COUNT],
    pub mouse_x: i32,
    pub mouse_y: i32,
    pub scroll: Scroll,
}

impl Default for RawSnapshot {
    fn default() -> Self {
        Self {
            keys: [false; Key::COUNT],
            buttons: [false; MouseButton::COUNT],
            mouse_x: 0,
            mouse_y: 0,
            scroll: Scroll::None,
        }
    }
}

#[derive(Debug)]
struct Shared {
    keys: [bool; Key::COUNT],
    key_seen: [Option<Instant>; Key::COUNT],
    buttons: [bool; MouseButton::COUNT],
    mouse_x: i32,
    mouse_y: i32,
    scroll: Scroll,
    release_timeout: Option<Duration>,
}

impl Shared {
    fn new() -> Self {
        Self {
            keys: [false; Key::COUNT],
            key_seen: [None; Key::COUNT],
            buttons: [false; MouseButton::COUNT],
            mouse_x: 0,
            mouse_y: 0,
            scroll: Scroll::None,
            release_timeout: None,
        }
    }
}

/// Shared handle between the event-pump thread (producer) and the frame
/// driver (consumer). Cloning shares the underlying state.
#[derive(Debug, Clone)]
pub struct InputCollector {
    shared: Arc<Mutex<Shared>>,
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl InputCollector {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared::new())),
        }
    }

    /// Enable synthetic key releases: any key not re-reported within
    /// `timeout` is dropped at the next snapshot. For terminals that never
    /// deliver key-up events; their auto-repeat keeps held keys alive.
    pub fn set_release_timeout(&self, timeout: Option<Duration>) {
        self.shared.lock().unwrap().release_timeout = timeout;
    }

    pub fn key_down(&self, key: Key) {
        if !key.is_physical() {
            return;
        }
        let mut s = self.shared.lock().unwrap();
        s.keys[key.index()] = true;
        s.key_seen[key.index()] = Some(Instant::now());
    }

    pub fn key_up(&self, key: Key) {
        if !key.is_physical() {
            return;
        }
        let mut s = self.shared.lock().unwrap();
        s.keys[key.index()] = false;
        s.key_seen[key.index()] = None;
    }

    pub fn button_down(&self, button: MouseButton) {
        if matches!(button, MouseButton::Any | MouseButton::None) {
            return;
        }
        self.shared.lock().unwrap().buttons[button.index()] = true;
    }

    pub fn button_up(&self, button: MouseButton) {
        if matches!(button, MouseButton::Any | MouseButton::None) {
            return;
        }
        self.shared.lock().unwrap().buttons[button.index()] = false;
    }

    pub fn mouse_moved(&self, x: i32, y: i32) {
        let mut s = self.shared.lock().unwrap();
        s.mouse_x = x;
        s.mouse_y = y;
    }

    pub fn wheel(&self, scroll: Scroll) {
        self.shared.lock().unwrap().scroll = scroll;
    }

    /// Copy the current raw state. Wheel state is consumed: it reads back
    /// `None` until the next wheel event. Keys past the release timeout are
    /// dropped here.
    pub fn snapshot(&self) -> RawSnapshot {
        let mut s = self.shared.lock().unwrap();

        if let Some(timeout) = s.release_timeout {
            for i in 0..Key::COUNT {
                if let Some(seen) = s.key_seen[i] {
                    if seen.elapsed() > timeout {
                        s.keys[i] = false;
                        s.key_seen[i] = None;
                    }
                }
            }
        }

        let snap = RawSnapshot {
            keys: s.keys,
            buttons: s.buttons,
            mouse_x: s.mouse_x,
            mouse_y: s.mouse_y,
            scroll: s.scroll,
        };
        s.scroll = Scroll::None;
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_down_up_round_trip() {
        let c = InputCollector::new();
        c.key_down(Key::A);
        assert!(c.snapshot().keys[Key::A.index()]);
        c.key_up(Key::A);
        assert!(!c.snapshot().keys[Key::A.index()]);
    }

    #[test]
    fn test_aggregate_keys_are_ignored_by_collector() {
        let c = InputCollector::new();
        c.key_down(Key::Any);
        c.key_down(Key::None);
        let snap = c.snapshot();
        assert!(snap.keys.iter().all(|&k| !k));
    }

    #[test]
    fn test_wheel_resets_after_snapshot() {
        let c = InputCollector::new();
        c.wheel(Scroll::Up);
        assert_eq!(c.snapshot().scroll, Scroll::Up);
        assert_eq!(c.snapshot().scroll, Scroll::None);
    }

    #[test]
    fn test_clones_share_state() {
        let producer = InputCollector::new();
        let consumer = producer.clone();
        producer.button_down(MouseButton::Left);
        producer.mouse_moved(12, 34);
        let snap = consumer.snapshot();
        assert!(snap.buttons[MouseButton::Left.index()]);
        assert_eq!((snap.mouse_x, snap.mouse_y), (12, 34));
    }

    #[test]
    fn test_release_timeout_drops_stale_keys() {
        let c = InputCollector::new();
        c.set_release_timeout(Some(Duration::from_millis(0)));
        c.key_down(Key::Left);
        std::thread::sleep(Duration::from_millis(2));
        assert!(!c.snapshot().keys[Key::Left.index()]);
    }

    #[test]
    fn test_no_timeout_keeps_keys_held() {
        let c = InputCollector::new();
        c.key_down(Key::Left);
        std::thread::sleep(Duration::from_millis(2));
        assert!(c.snapshot().keys[Key::Left.index()]);
    }
}
