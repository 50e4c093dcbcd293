//! pixelframe (workspace facade crate).
//!
//! This package keeps the `pixelframe::{types,gfx,input,engine,term,audio}`
//! public API in one place while the implementation lives in dedicated
//! crates under `crates/`.

pub use pixelframe_audio as audio;
pub use pixelframe_engine as engine;
pub use pixelframe_gfx as gfx;
pub use pixelframe_input as input;
pub use pixelframe_term as term;
pub use pixelframe_types as types;
