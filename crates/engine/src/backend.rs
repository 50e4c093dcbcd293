//! The presentation/windowing backend seam.
//!
//! The frame driver composes with a [`Backend`] rather than inheriting
//! from a display type: the backend owns the surface and its event pump,
//! and the engine only ever sees logical pixels and translated events.

use anyhow::Result;
use arrayvec::ArrayVec;

use pixelframe_gfx::Sprite;
use pixelframe_input::InputCollector;

/// Out-of-band events a backend reports to the frame driver. Input goes
/// through the [`InputCollector`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// The surface asked to close (window close button, terminal Ctrl-C).
    CloseRequested,
    /// The surface changed size; dimensions are logical pixels.
    Resized { width: u32, height: u32 },
}

/// Per-frame control event batch.
pub type ControlEvents = ArrayVec<ControlEvent, 16>;

/// Capability set of a presentation backend: open a surface, pump events,
/// present a framebuffer, close.
pub trait Backend {
    /// Open the surface. `size` is the requested logical pixel size, or
    /// `None` to fill whatever the surface offers. The event pump starts
    /// here and feeds `input` from its own thread. Returns the actual
    /// logical size.
    fn open(&mut self, size: Option<(u32, u32)>, input: InputCollector) -> Result<(u32, u32)>;

    /// Drain control events accumulated since the last call.
    fn poll_events(&mut self) -> ControlEvents;

    /// Put the framebuffer on the surface.
    fn present(&mut self, frame: &Sprite) -> Result<()>;

    /// Update the surface title, where the surface has one.
    fn set_title(&mut self, title: &str);

    /// Stop the event pump and restore the surface.
    fn close(&mut self) -> Result<()>;
}
