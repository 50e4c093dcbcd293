//! Sprite asset loading.
//!
//! Two formats: ordinary image files (anything the `image` crate decodes),
//! and the legacy `.spr` binary format (`i32 LE width, i32 LE height`, then
//! `height * width` little-endian `i16` entries whose low nibble indexes the
//! fixed 16-entry palette).
//!
//! Loading never fails from the caller's point of view: a missing or
//! malformed file yields the 8x8 blank placeholder sprite. Use
//! [`try_load_sprite`] when a real error is wanted.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use pixelframe_types::Pixel;

use crate::sprite::Sprite;

/// Load a sprite from disk, falling back to the placeholder on any failure.
pub fn load_sprite<P: AsRef<Path>>(path: P) -> Sprite {
    try_load_sprite(path).unwrap_or_else(|_| Sprite::placeholder())
}

/// Load a sprite from disk, surfacing failures.
pub fn try_load_sprite<P: AsRef<Path>>(path: P) -> Result<Sprite> {
    let path = path.as_ref();
    if path.extension().is_some_and(|e| e == "spr") {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        decode_spr(&bytes)
    } else {
        let img = image::open(path)
            .with_context(|| format!("decoding {}", path.display()))?
            .into_rgba8();
        let mut spr = Sprite::new(img.width(), img.height());
        for (x, y, px) in img.enumerate_pixels() {
            let [r, g, b, a] = px.0;
            spr.set(x as i32, y as i32, Pixel::new(r, g, b, a));
        }
        Ok(spr)
    }
}

/// Decode the `.spr` binary format from a byte slice.
pub fn decode_spr(bytes: &[u8]) -> Result<Sprite> {
    if bytes.len() < 8 {
        bail!("sprite data truncated: {} bytes", bytes.len());
    }
    let width = i32::from_le_bytes(bytes[0..4].try_into().unwrap());
    let height = i32::from_le_bytes(bytes[4..8].try_into().unwrap());
    if width < 0 || height < 0 {
        bail!("negative sprite dimensions {width}x{height}");
    }

    let expected = (width as usize) * (height as usize) * 2;
    let data = &bytes[8..];
    if data.len() < expected {
        bail!(
            "sprite data truncated: expected {expected} pixel bytes, got {}",
            data.len()
        );
    }

    let mut spr = Sprite::new(width as u32, height as u32);
    let mut chunks = data.chunks_exact(2);
    for y in 0..height {
        for x in 0..width {
            let raw = chunks.next().unwrap();
            let code = i16::from_le_bytes([raw[0], raw[1]]);
            spr.set(x, y, palette_color(code));
        }
    }
    Ok(spr)
}

/// Map a palette code to its color: the low nibble selects one of the 16
/// fixed entries.
fn palette_color(code: i16) -> Pixel {
    Pixel::PALETTE[(code & 0xF) as usize]
}

/// Save a sprite as a PNG.
pub fn save_sprite<P: AsRef<Path>>(spr: &Sprite, path: P) -> Result<()> {
    let path = path.as_ref();
    let img = image::RgbaImage::from_raw(spr.width(), spr.height(), spr.to_rgba_bytes())
        .context("sprite buffer size mismatch")?;
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
