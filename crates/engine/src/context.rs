//! The per-frame context handed to game callbacks.
//!
//! All engine access goes through this explicit handle; there is no
//! process-wide "current game". The context borrows the engine's draw
//! state, default draw target and input state for the duration of one
//! callback and records control requests (finish, pause, delay, title)
//! that the driver applies after the callback returns.

use pixelframe_gfx::{DrawState, Font, Shader, Sprite};
use pixelframe_input::InputState;
use pixelframe_types::{BlendMode, Button, Key, MouseButton, Pixel, Point, Scroll};

use crate::clock::Clock;

/// Deferred control actions a callback may request.
#[derive(Debug, Default)]
pub(crate) struct ControlRequests {
    pub finish: bool,
    pub pause: Option<bool>,
    pub delay: f32,
    pub title: Option<String>,
}

/// Engine access for one callback invocation.
pub struct Context<'a> {
    draw: &'a mut DrawState,
    target: &'a mut Sprite,
    input: &'a InputState,
    clock: &'a Clock,
    frame_count: u64,
    requests: &'a mut ControlRequests,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        draw: &'a mut DrawState,
        target: &'a mut Sprite,
        input: &'a InputState,
        clock: &'a Clock,
        frame_count: u64,
        requests: &'a mut ControlRequests,
    ) -> Self {
        Self {
            draw,
            target,
            input,
            clock,
            frame_count,
            requests,
        }
    }

    // --- screen ---

    pub fn screen_width(&self) -> i32 {
        self.target.width() as i32
    }

    pub fn screen_height(&self) -> i32 {
        self.target.height() as i32
    }

    /// Read a pixel back from the screen buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Pixel {
        self.target.get(x, y)
    }

    // --- drawing onto the screen buffer ---

    pub fn clear(&mut self, color: Pixel) {
        self.target.clear(color);
    }

    pub fn draw(&mut self, x: i32, y: i32, color: Pixel) {
        self.draw.plot(self.target, x, y, color);
    }

    pub fn draw_point(&mut self, p: Point, color: Pixel) {
        self.draw.plot(self.target, p.x, p.y, color);
    }

    pub fn draw_line(&mut self, p1: Point, p2: Point, color: Pixel) {
        self.draw.draw_line(self.target, p1, p2, color);
    }

    pub fn draw_path(&mut self, points: &[Point], color: Pixel) {
        self.draw.draw_path(self.target, points, color);
    }

    pub fn draw_circle(&mut self, center: Point, radius: i32, color: Pixel) {
        self.draw.draw_circle(self.target, center, radius, color);
    }

    pub fn fill_circle(&mut self, center: Point, radius: i32, color: Pixel) {
        self.draw.fill_circle(self.target, center, radius, color);
    }

    pub fn draw_ellipse(&mut self, center: Point, rx: i32, ry: i32, color: Pixel) {
        self.draw.draw_ellipse(self.target, center, rx, ry, color);
    }

    pub fn fill_ellipse(&mut self, center: Point, rx: i32, ry: i32, color: Pixel) {
        self.draw.fill_ellipse(self.target, center, rx, ry, color);
    }

    pub fn draw_rect(&mut self, p: Point, w: i32, h: i32, color: Pixel) {
        self.draw.draw_rect(self.target, p, w, h, color);
    }

    pub fn fill_rect(&mut self, p: Point, w: i32, h: i32, color: Pixel) {
        self.draw.fill_rect(self.target, p, w, h, color);
    }

    pub fn draw_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: Pixel) {
        self.draw.draw_triangle(self.target, p1, p2, p3, color);
    }

    pub fn fill_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: Pixel) {
        self.draw.fill_triangle(self.target, p1, p2, p3, color);
    }

    pub fn draw_polygon(&mut self, verts: &[Point], color: Pixel) {
        self.draw.draw_polygon(self.target, verts, color);
    }

    pub fn fill_polygon(&mut self, verts: &[Point], color: Pixel) {
        self.draw.fill_polygon(self.target, verts, color);
    }

    pub fn draw_sprite(&mut self, p: Point, sprite: &Sprite) {
        self.draw.draw_sprite(self.target, p, sprite);
    }

    pub fn draw_partial_sprite(&mut self, p: Point, sprite: &Sprite, origin: Point, w: i32, h: i32) {
        self.draw
            .draw_partial_sprite(self.target, p, sprite, origin, w, h);
    }

    pub fn draw_text(&mut self, p: Point, text: &str, color: Pixel, scale: i32) {
        self.draw.draw_text(self.target, p, text, color, scale);
    }

    pub fn draw_text_with_font(&mut self, p: Point, text: &str, font: &Font, color: Pixel, scale: i32) {
        self.draw
            .draw_text_with_font(self.target, p, text, font, color, scale);
    }

    // --- blend state ---

    pub fn blend_mode(&self) -> BlendMode {
        self.draw.blend_mode()
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        self.draw.set_blend_mode(mode);
    }

    pub fn blend_factor(&self) -> f32 {
        self.draw.blend_factor()
    }

    pub fn set_blend_factor(&mut self, factor: f32) {
        self.draw.set_blend_factor(factor);
    }

    pub fn set_shader(&mut self, shader: Shader) {
        self.draw.set_shader(shader);
    }

    pub fn clear_shader(&mut self) {
        self.draw.clear_shader();
    }

    /// Direct access to the draw state, for rendering into offscreen
    /// sprites with the same blend configuration.
    pub fn draw_state_mut(&mut self) -> &mut DrawState {
        &mut *self.draw
    }

    // --- input ---

    pub fn key(&self, key: Key) -> Button {
        self.input.key(key)
    }

    pub fn mouse_button(&self, button: MouseButton) -> Button {
        self.input.mouse_button(button)
    }

    pub fn mouse_x(&self) -> i32 {
        self.input.mouse_x()
    }

    pub fn mouse_y(&self) -> i32 {
        self.input.mouse_y()
    }

    pub fn mouse_scroll(&self) -> Scroll {
        self.input.mouse_scroll()
    }

    // --- timing ---

    pub fn clock(&self) -> &Clock {
        self.clock
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    // --- control requests ---

    /// Ask the frame loop to stop after this frame.
    pub fn finish(&mut self) {
        self.requests.finish = true;
    }

    /// Suspend per-frame updates; presentation continues and input hooks
    /// still fire (so a game can resume itself).
    pub fn pause(&mut self) {
        self.requests.pause = Some(true);
    }

    /// Resume per-frame updates.
    pub fn resume(&mut self) {
        self.requests.pause = Some(false);
    }

    /// Skip frames for `seconds`. Multiple calls accumulate.
    pub fn delay(&mut self, seconds: f32) {
        self.requests.delay += seconds;
    }

    /// Update the surface title.
    pub fn set_title(&mut self, title: &str) {
        self.requests.title = Some(title.to_string());
    }
}
