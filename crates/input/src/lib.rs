//! Input module (engine-facing).
//!
//! Two layers, separated by a copy:
//!
//! - [`raw`]: the collector the backend's event-pump thread writes into.
//!   A mutex-guarded snapshot the frame driver copies exactly once per
//!   tick; input may be up to one frame stale.
//! - [`state`]: the per-frame edge detector turning raw level state into
//!   `pressed`/`released`/`down` flags plus the `Any`/`None` aggregates.
//!
//! Neither layer knows anything about the windowing library; backends
//! translate their native events into [`Key`](pixelframe_types::Key) and
//! [`MouseButton`](pixelframe_types::MouseButton) values before feeding the
//! collector.

pub mod raw;
pub mod state;

pub use pixelframe_types as types;

pub use raw::{InputCollector, RawSnapshot};
pub use state::InputState;
