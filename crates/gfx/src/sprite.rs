//! Sprite: the software framebuffer.
//!
//! A sprite is a fixed-size 2D array of RGBA pixels. It is both the thing
//! games draw into and the thing backends present. All access is
//! bounds-checked at the edges of the API: reads outside the buffer return
//! the transparent pixel and writes outside are dropped, never an error.

use pixelframe_types::Pixel;

/// 2D pixel buffer with row-major layout (`y * width + x`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Sprite {
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![Pixel::EMPTY; len],
        }
    }

    /// The 8x8 blank sprite handed out when an asset fails to load.
    pub fn placeholder() -> Self {
        Self::new(8, 8)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Read a pixel. Out-of-bounds coordinates yield [`Pixel::EMPTY`].
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Pixel {
        self.idx(x, y).map_or(Pixel::EMPTY, |i| self.pixels[i])
    }

    /// Write a pixel. Out-of-bounds coordinates are silently ignored.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, p: Pixel) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = p;
        }
    }

    /// Fill the whole buffer with one color.
    pub fn clear(&mut self, p: Pixel) {
        self.pixels.fill(p);
    }

    /// Copy another sprite's contents wholesale. A size mismatch leaves the
    /// destination untouched.
    pub fn copy_from(&mut self, src: &Sprite) {
        if src.pixels.len() != self.pixels.len() {
            return;
        }
        self.pixels.copy_from_slice(&src.pixels);
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Row-major RGBA bytes, the format presentation backends consume.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for p in &self.pixels {
            out.extend_from_slice(&[p.r, p.g, p.b, p.a]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sprite_is_transparent() {
        let s = Sprite::new(4, 3);
        assert_eq!(s.width(), 4);
        assert_eq!(s.height(), 3);
        assert!(s.pixels().iter().all(|&p| p == Pixel::EMPTY));
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let mut s = Sprite::new(4, 4);
        s.set(2, 1, Pixel::RED);
        assert_eq!(s.get(2, 1), Pixel::RED);
    }

    #[test]
    fn test_out_of_bounds_read_is_empty() {
        let s = Sprite::new(4, 4);
        assert_eq!(s.get(-1, 0), Pixel::EMPTY);
        assert_eq!(s.get(0, -1), Pixel::EMPTY);
        assert_eq!(s.get(4, 0), Pixel::EMPTY);
        assert_eq!(s.get(0, 4), Pixel::EMPTY);
    }

    #[test]
    fn test_out_of_bounds_write_is_dropped() {
        let mut s = Sprite::new(2, 2);
        let before = s.clone();
        s.set(-1, 0, Pixel::RED);
        s.set(2, 0, Pixel::RED);
        s.set(0, 2, Pixel::RED);
        assert_eq!(s, before);
    }

    #[test]
    fn test_clear_overwrites_everything() {
        let mut s = Sprite::new(3, 3);
        s.set(1, 1, Pixel::GREEN);
        s.clear(Pixel::BLUE);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(s.get(x, y), Pixel::BLUE);
            }
        }
    }

    #[test]
    fn test_copy_from_requires_matching_size() {
        let mut dst = Sprite::new(2, 2);
        let mut src = Sprite::new(2, 2);
        src.set(0, 0, Pixel::YELLOW);
        dst.copy_from(&src);
        assert_eq!(dst.get(0, 0), Pixel::YELLOW);

        let other = Sprite::new(3, 3);
        dst.copy_from(&other);
        // Mismatched copy is a no-op.
        assert_eq!(dst.get(0, 0), Pixel::YELLOW);
    }

    #[test]
    fn test_rgba_bytes_are_row_major() {
        let mut s = Sprite::new(2, 1);
        s.set(0, 0, Pixel::new(1, 2, 3, 4));
        s.set(1, 0, Pixel::new(5, 6, 7, 8));
        assert_eq!(s.to_rgba_bytes(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
