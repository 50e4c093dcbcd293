//! Frame driver module.
//!
//! Coordinates the pieces around one loop: a [`Backend`] presents frames
//! and pumps events, [`pixelframe_input`] turns raw events into per-frame
//! edge state, and the user's [`Game`] draws through an explicit
//! [`Context`]; there is no ambient engine global.
//!
//! # Lifecycle
//!
//! `Created -> Running <-> Paused -> Destroyed`. The loop starts with a
//! one-time `on_create`, then each iteration: poll control events, gate on
//! the fixed frame rate (busy-poll), drain pending delay, refresh input
//! edges, fire input hooks, run `on_update`, present. A close request or
//! `Context::finish` leaves the loop, runs `on_destroy` and closes the
//! backend. There is no crash isolation: a panic in a callback tears the
//! loop down.
//!
//! # Example
//!
//! A game runs against any [`Backend`]; here a headless one, as used in
//! tests (`pixelframe-term` provides the terminal backend):
//!
//! ```
//! use anyhow::Result;
//! use pixelframe_engine::{Backend, Context, ControlEvents, Engine, Game};
//! use pixelframe_gfx::Sprite;
//! use pixelframe_input::InputCollector;
//! use pixelframe_types::{Pixel, Point};
//!
//! struct Headless;
//!
//! impl Backend for Headless {
//!     fn open(&mut self, size: Option<(u32, u32)>, _input: InputCollector) -> Result<(u32, u32)> {
//!         Ok(size.unwrap_or((64, 64)))
//!     }
//!     fn poll_events(&mut self) -> ControlEvents {
//!         ControlEvents::new()
//!     }
//!     fn present(&mut self, _frame: &Sprite) -> Result<()> {
//!         Ok(())
//!     }
//!     fn set_title(&mut self, _title: &str) {}
//!     fn close(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! struct OneFrame;
//!
//! impl Game for OneFrame {
//!     fn on_update(&mut self, ctx: &mut Context, _elapsed: f32) {
//!         ctx.clear(Pixel::BLACK);
//!         ctx.fill_circle(Point::new(32, 32), 10, Pixel::RED);
//!         ctx.finish();
//!     }
//! }
//!
//! Engine::new(Headless).with_size(64, 64).run(&mut OneFrame).unwrap();
//! ```

pub mod backend;
pub mod clock;
pub mod context;
pub mod driver;
pub mod game;

pub use pixelframe_gfx as gfx;
pub use pixelframe_input as input;
pub use pixelframe_types as types;

pub use backend::{Backend, ControlEvent, ControlEvents};
pub use clock::{Clock, FrameTimer};
pub use context::Context;
pub use driver::{Engine, EngineState};
pub use game::Game;
