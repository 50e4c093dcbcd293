//! Terminal presentation backend.
//!
//! Implements the engine's [`Backend`](pixelframe_engine::Backend) seam on
//! top of crossterm: raw-mode alternate screen, an event-pump thread that
//! feeds the shared input collector, and half-block presentation (two
//! pixels per terminal cell) with frame diffing.
//!
//! Goals:
//! - Keep the engine and rasterizer free of any terminal knowledge
//! - Restore the terminal on every exit path
//! - Flush only the cells that changed since the previous frame
//!
//! ```no_run
//! use anyhow::Result;
//! use pixelframe_engine::{Context, Engine, Game};
//! use pixelframe_term::TermBackend;
//! use pixelframe_types::{Key, Pixel, Point};
//!
//! struct Dot;
//!
//! impl Game for Dot {
//!     fn on_update(&mut self, ctx: &mut Context, _elapsed: f32) {
//!         ctx.clear(Pixel::BLACK);
//!         ctx.fill_circle(Point::new(ctx.mouse_x(), ctx.mouse_y()), 3, Pixel::RED);
//!         if ctx.key(Key::Escape).pressed {
//!             ctx.finish();
//!         }
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     Engine::new(TermBackend::new())
//!         .with_size(80, 60)
//!         .with_frame_rate(60)
//!         .run(&mut Dot)
//! }
//! ```

pub mod backend;
pub mod keymap;
mod pump;

pub use pixelframe_engine as engine;
pub use pixelframe_types as types;

pub use backend::TermBackend;
pub use keymap::{map_key, map_mouse_button};
