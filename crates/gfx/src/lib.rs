//! Software rasterization module - pure, deterministic, and testable
//!
//! Everything here operates on in-memory pixel buffers with no I/O beyond
//! the asset loaders, so the whole pipeline runs identically in a terminal,
//! under a different backend, or headless in tests.
//!
//! # Module Structure
//!
//! - [`sprite`]: the RGBA framebuffer with edge-tolerant access
//! - [`draw`]: blend modes and the primitive rasterizer
//! - [`font`]: built-in 8x8 font plus variable-width glyph fonts
//! - [`load`]: image and `.spr` binary sprite loading
//!
//! # Drawing Model
//!
//! All primitives funnel into a single pixel-write function governed by the
//! active [`BlendMode`](pixelframe_types::BlendMode): `Normal` overwrites,
//! `Mask` writes only fully opaque pixels, `Alpha` blends by source alpha
//! scaled with a global factor, and `Custom` defers to a user shader.
//! Out-of-bounds access is always a silent no-op.
//!
//! # Example
//!
//! ```
//! use pixelframe_gfx::{DrawState, Sprite};
//! use pixelframe_types::{Pixel, Point};
//!
//! let mut fb = Sprite::new(32, 32);
//! let draw = DrawState::new();
//! draw.fill_circle(&mut fb, Point::new(16, 16), 10, Pixel::CYAN);
//! assert_eq!(fb.get(16, 16), Pixel::CYAN);
//! ```

pub mod draw;
pub mod font;
pub mod load;
pub mod sprite;

pub use pixelframe_types as types;

pub use draw::{DrawState, Shader};
pub use font::Font;
pub use load::{decode_spr, load_sprite, save_sprite, try_load_sprite};
pub use sprite::Sprite;
