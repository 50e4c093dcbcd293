//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (rasterizer, input handling, presentation,
//! headless tests).
//!
//! # Screen Dimensions
//!
//! The default logical screen is 100x100 pixels. Backends may present it at
//! a different physical size; all engine code works in logical pixels.
//!
//! # Input Model
//!
//! Physical keys and mouse buttons are identified by [`Key`] and
//! [`MouseButton`]. The per-frame state of each is a [`Button`] value with
//! `pressed`/`released` edge flags valid for exactly one frame and a `down`
//! level flag that persists while held. The synthetic `Any`/`None` variants
//! aggregate across the whole key or button set.
//!
//! # Example
//!
//! ```
//! use pixelframe_types::{Key, Pixel, Point, Scroll};
//!
//! let p = Point::new(3, 4);
//! assert_eq!(p.x, 3);
//!
//! let red = Pixel::rgb(255, 0, 0);
//! assert_eq!(red.a, 255);
//! assert_eq!(red, Pixel::RED);
//!
//! // Physical keys index into fixed-size state arrays.
//! assert!((Key::A.index()) < Key::COUNT);
//! assert_eq!(Scroll::default(), Scroll::None);
//! ```

pub mod pixel;
pub mod rng;

pub use pixel::Pixel;
pub use rng::SimpleRng;

/// Default logical screen width in pixels.
pub const DEFAULT_WIDTH: u32 = 100;

/// Default logical screen height in pixels.
pub const DEFAULT_HEIGHT: u32 = 100;

/// Quiet period after which a key with no release event is considered
/// released (for terminals that never report key-up).
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// A point on the framebuffer. Plain integer coordinates, no invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Physical keyboard keys, plus the synthetic `Any`/`None` aggregates.
///
/// Variants before `Any` are physical and index into the engine's state
/// arrays via [`Key::index`]; `Any`/`None` are resolved separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[rustfmt::skip]
pub enum Key {
    A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    K0, K1, K2, K3, K4, K5, K6, K7, K8, K9,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    Up, Down, Left, Right,
    Space, Tab, Shift, Control, Insert, Delete, Home, End, PageUp, PageDown,
    Back, Escape, Enter, Pause, ScrollLock,
    Any, None,
}

impl Key {
    /// Number of physical keys (excludes `Any`/`None`).
    pub const COUNT: usize = Key::ScrollLock as usize + 1;

    /// Every physical key, in state-array order.
    #[rustfmt::skip]
    pub const PHYSICAL: [Key; Key::COUNT] = [
        Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
        Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
        Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
        Key::K0, Key::K1, Key::K2, Key::K3, Key::K4, Key::K5, Key::K6, Key::K7,
        Key::K8, Key::K9,
        Key::F1, Key::F2, Key::F3, Key::F4, Key::F5, Key::F6, Key::F7, Key::F8,
        Key::F9, Key::F10, Key::F11, Key::F12,
        Key::Up, Key::Down, Key::Left, Key::Right,
        Key::Space, Key::Tab, Key::Shift, Key::Control, Key::Insert, Key::Delete,
        Key::Home, Key::End, Key::PageUp, Key::PageDown,
        Key::Back, Key::Escape, Key::Enter, Key::Pause, Key::ScrollLock,
    ];

    /// Index into a `[_; Key::COUNT]` state array. Only valid for physical
    /// keys; the aggregates have no slot.
    pub fn index(self) -> usize {
        debug_assert!(!matches!(self, Key::Any | Key::None));
        self as usize
    }

    /// Whether this is a physical key with a state-array slot.
    pub fn is_physical(self) -> bool {
        (self as usize) < Key::COUNT
    }
}

/// Mouse buttons, plus the synthetic `Any`/`None` aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Any,
    None,
}

impl MouseButton {
    /// Number of physical buttons (excludes `Any`/`None`).
    pub const COUNT: usize = 3;

    /// Index into a `[_; MouseButton::COUNT]` state array.
    pub fn index(self) -> usize {
        debug_assert!(!matches!(self, MouseButton::Any | MouseButton::None));
        self as usize
    }
}

/// Mouse wheel movement observed during the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scroll {
    Up,
    #[default]
    None,
    Down,
}

/// Per-frame state of one logical button (keyboard key or mouse button).
///
/// `pressed` and `released` are edge flags, true for exactly the one frame
/// on which the transition happened. `down` is the level and persists while
/// the button is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Button {
    pub pressed: bool,
    pub released: bool,
    pub down: bool,
}

impl Button {
    pub fn up(self) -> bool {
        !self.down
    }
}

/// How a new pixel combines with the pixel already at the target location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Overwrite the destination.
    #[default]
    Normal,
    /// Write only fully opaque source pixels (`a == 255`).
    Mask,
    /// Linear blend weighted by source alpha and the global blend factor.
    Alpha,
    /// Delegate to the user shader callback.
    Custom,
}
