//! Per-frame input edge detection.
//!
//! Each logical button is a two-state machine (`Up`/`Down`). Once per frame
//! the driver feeds in the raw snapshot; a differing bit produces the
//! one-frame `pressed` or `released` edge, then the old bits catch up. The
//! synthetic `Any`/`None` entries are OR/NOR folds over the whole set.

use pixelframe_types::{Button, Key, MouseButton, Scroll};

use crate::raw::RawSnapshot;

/// Edge-detected input state for one frame.
#[derive(Debug, Clone)]
pub struct InputState {
    keys: [Button; Key::COUNT],
    old_keys: [bool; Key::COUNT],
    any_key: Button,
    none_key: Button,
    buttons: [Button; MouseButton::COUNT],
    old_buttons: [bool; MouseButton::COUNT],
    any_button: Button,
    none_button: Button,
    mouse_x: i32,
    mouse_y: i32,
    scroll: Scroll,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: [Button::default(); Key::COUNT],
            old_keys: [false; Key::COUNT],
            any_key: Button::default(),
            none_key: Button {
                pressed: true,
                released: true,
                down: false,
            },
            buttons: [Button::default(); MouseButton::COUNT],
            old_buttons: [false; MouseButton::COUNT],
            any_button: Button::default(),
            none_button: Button {
                pressed: true,
                released: true,
                down: false,
            },
            mouse_x: 0,
            mouse_y: 0,
            scroll: Scroll::None,
        }
    }

    /// Refresh edge state from this frame's raw snapshot.
    pub fn update(&mut self, raw: &RawSnapshot) {
        refresh(&mut self.keys, &mut self.old_keys, &raw.keys);
        self.any_key = aggregate(&self.keys);
        self.none_key = negate(self.any_key);

        refresh(&mut self.buttons, &mut self.old_buttons, &raw.buttons);
        self.any_button = aggregate(&self.buttons);
        self.none_button = negate(self.any_button);

        self.mouse_x = raw.mouse_x;
        self.mouse_y = raw.mouse_y;
        self.scroll = raw.scroll;
    }

    pub fn key(&self, key: Key) -> Button {
        match key {
            Key::Any => self.any_key,
            Key::None => self.none_key,
            _ => self.keys[key.index()],
        }
    }

    pub fn mouse_button(&self, button: MouseButton) -> Button {
        match button {
            MouseButton::Any => self.any_button,
            MouseButton::None => self.none_button,
            _ => self.buttons[button.index()],
        }
    }

    pub fn mouse_x(&self) -> i32 {
        self.mouse_x
    }

    pub fn mouse_y(&self) -> i32 {
        self.mouse_y
    }

    pub fn mouse_scroll(&self) -> Scroll {
        self.scroll
    }
}

fn refresh<const N: usize>(state: &mut [Button; N], old: &mut [bool; N], new: &[bool; N]) {
    for i in 0..N {
        let b = &mut state[i];
        b.pressed = false;
        b.released = false;

        if new[i] != old[i] {
            if new[i] {
                b.pressed = !b.down;
                b.down = true;
            } else {
                b.released = true;
                b.down = false;
            }
        }

        old[i] = new[i];
    }
}

fn aggregate(set: &[Button]) -> Button {
    Button {
        pressed: set.iter().any(|b| b.pressed),
        released: set.iter().any(|b| b.released),
        down: set.iter().any(|b| b.down),
    }
}

fn negate(b: Button) -> Button {
    Button {
        pressed: !b.pressed,
        released: !b.released,
        down: !b.down,
    }
}
