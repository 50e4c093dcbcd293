//! The user-facing game trait.

use pixelframe_types::{Key, MouseButton, Scroll};

use crate::context::Context;

/// Callbacks the frame driver invokes. Only `on_update` is required.
///
/// Input hooks fire once per frame from edge state, before `on_update`,
/// and keep firing while the engine is paused; that is how a paused game
/// resumes itself.
pub trait Game {
    /// One-time setup before the first frame.
    fn on_create(&mut self, _ctx: &mut Context) {}

    /// Per-frame update; `elapsed` is seconds since the previous frame.
    fn on_update(&mut self, ctx: &mut Context, elapsed: f32);

    /// Teardown after the loop has stopped.
    fn on_destroy(&mut self, _ctx: &mut Context) {}

    /// A key transitioned up -> down this frame.
    fn on_key_press(&mut self, _ctx: &mut Context, _key: Key) {}

    /// A key transitioned down -> up this frame.
    fn on_key_release(&mut self, _ctx: &mut Context, _key: Key) {}

    /// Fires every frame a key is held.
    fn on_key_down(&mut self, _ctx: &mut Context, _key: Key) {}

    /// A mouse button transitioned up -> down this frame.
    fn on_mouse_press(&mut self, _ctx: &mut Context, _button: MouseButton) {}

    /// A mouse button transitioned down -> up this frame.
    fn on_mouse_release(&mut self, _ctx: &mut Context, _button: MouseButton) {}

    /// Fires every frame a mouse button is held.
    fn on_mouse_down(&mut self, _ctx: &mut Context, _button: MouseButton) {}

    /// The wheel moved this frame.
    fn on_mouse_scroll(&mut self, _ctx: &mut Context, _scroll: Scroll) {}
}
