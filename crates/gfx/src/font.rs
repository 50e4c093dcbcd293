//! Bitmap fonts.
//!
//! The engine ships one built-in fixed-width 8x8 font, decoded at startup
//! from a packed sheet (96 printable ASCII glyphs in a 128x48 grid, 6 bits
//! per packed character, columns top-to-bottom). Variable-width fonts are a
//! glyph table keyed by char with per-glyph widths.

use std::collections::HashMap;

use pixelframe_types::Pixel;

use crate::sprite::Sprite;

/// Built-in glyph cell width in pixels.
pub const CHAR_WIDTH: i32 = 8;

/// Built-in glyph cell height in pixels.
pub const CHAR_HEIGHT: i32 = 8;

const SHEET_WIDTH: u32 = 128;
const SHEET_HEIGHT: u32 = 48;
const GLYPHS_PER_ROW: i32 = 16;
const FIRST_GLYPH: char = ' ';
const LAST_GLYPH: char = 127 as char;

/// Packed font sheet. Each character encodes 6 bits (offset from '0');
/// groups of four characters yield 24 vertical pixels.
#[rustfmt::skip]
const SHEET_DATA: [&str; 16] = [
    "?Q`0001oOch0o01o@F40o0<AGD4090LAGD<090@A7ch0?00O7Q`0600>00000000",
    "O000000nOT0063Qo4d8>?7a14Gno94AA4gno94AaOT0>o3`oO400o7QN00000400",
    "Of80001oOg<7O7moBGT7O7lABET024@aBEd714AiOdl717a_=TH013Q>00000000",
    "720D000V?V5oB3Q_HdUoE7a9@DdDE4A9@DmoE4A;Hg]oM4Aj8S4D84@`00000000",
    "OaPT1000Oa`^13P1@AI[?g`1@A=[OdAoHgljA4Ao?WlBA7l1710007l100000000",
    "ObM6000oOfMV?3QoBDD`O7a0BDDH@5A0BDD<@5A0BGeVO5ao@CQR?5Po00000000",
    "Oc``000?Ogij70PO2D]??0Ph2DUM@7i`2DTg@7lh2GUj?0TO0C1870T?00000000",
    "70<4001o?P<7?1QoHg43O;`h@GT0@:@LB@d0>:@hN@L0@?aoN@<0O7ao0000?000",
    "OcH0001SOglLA7mg24TnK7ln24US>0PL24U140PnOgl0>7QgOcH0K71S0000A000",
    "00H00000@Dm1S007@DUSg00?OdTnH7YhOfTL<7Yh@Cl0700?@Ah0300700000000",
    "<008001QL00ZA41a@6HnI<1i@FHLM81M@@0LG81?O`0nC?Y7?`0ZA7Y300080000",
    "O`082000Oh0827mo6>Hn?Wmo?6HnMb11MP08@C11H`08@FP0@@0004@000000000",
    "00P00001Oab00003OcKP0006@6=PMgl<@440MglH@000000`@000001P00000000",
    "Ob@8@@00Ob@8@Ga13R@8Mga172@8?PAo3R@827QoOb@820@0O`0007`0000007P0",
    "O`000P08Od400g`<3V=P0G`673IP0`@3>1`00P@6O`P00g`<O`000GP800000000",
    "?P9PL020O`<`N3R0@E4HC7b0@ET<ATB0@@l6C4B0O`H3N7b0?P01L3R000000020",
];

/// Decode the packed data into the 128x48 monochrome sheet sprite.
pub fn build_font_sheet() -> Sprite {
    let mut sheet = Sprite::new(SHEET_WIDTH, SHEET_HEIGHT);
    let data: Vec<u8> = SHEET_DATA.concat().into_bytes();

    let mut px = 0;
    let mut py = 0;
    for chunk in data.chunks_exact(4) {
        let sym1 = (chunk[0] - b'0') as u32;
        let sym2 = (chunk[1] - b'0') as u32;
        let sym3 = (chunk[2] - b'0') as u32;
        let sym4 = (chunk[3] - b'0') as u32;
        let bits = sym1 << 18 | sym2 << 12 | sym3 << 6 | sym4;

        for i in 0..24 {
            let p = if bits & (1 << i) != 0 {
                Pixel::WHITE
            } else {
                Pixel::BLACK
            };
            sheet.set(px, py, p);
            py += 1;
            if py == SHEET_HEIGHT as i32 {
                px += 1;
                py = 0;
            }
        }
    }
    sheet
}

/// Sheet cell origin for a supported character, or `None` for characters
/// outside the printable ASCII range.
pub fn sheet_offset(c: char) -> Option<(i32, i32)> {
    if !(FIRST_GLYPH..LAST_GLYPH).contains(&c) {
        return None;
    }
    let index = c as i32 - FIRST_GLYPH as i32;
    Some((
        (index % GLYPHS_PER_ROW) * CHAR_WIDTH,
        (index / GLYPHS_PER_ROW) * CHAR_HEIGHT,
    ))
}

/// A variable-width glyph-table font.
///
/// Line height is the tallest glyph; characters without a glyph advance the
/// cursor by [`Font::default_advance`] without drawing.
pub struct Font {
    glyphs: HashMap<char, Sprite>,
    char_height: i32,
    default_advance: i32,
}

impl Font {
    /// Build a font from a glyph table. The line height is the tallest
    /// glyph's height.
    pub fn from_glyphs(glyphs: HashMap<char, Sprite>) -> Self {
        let char_height = glyphs
            .values()
            .map(|g| g.height() as i32)
            .max()
            .unwrap_or(CHAR_HEIGHT);
        Self {
            glyphs,
            char_height,
            default_advance: CHAR_WIDTH,
        }
    }

    /// The built-in 8x8 font as a glyph table.
    pub fn builtin() -> Self {
        let sheet = build_font_sheet();
        let mut glyphs = HashMap::new();
        let mut c = FIRST_GLYPH;
        while c < LAST_GLYPH {
            if let Some((ox, oy)) = sheet_offset(c) {
                let mut glyph = Sprite::new(CHAR_WIDTH as u32, CHAR_HEIGHT as u32);
                for j in 0..CHAR_HEIGHT {
                    for i in 0..CHAR_WIDTH {
                        glyph.set(i, j, sheet.get(ox + i, oy + j));
                    }
                }
                glyphs.insert(c, glyph);
            }
            c = (c as u8 + 1) as char;
        }
        Self::from_glyphs(glyphs)
    }

    /// Override the advance used for characters without a glyph.
    pub fn with_default_advance(mut self, advance: i32) -> Self {
        self.default_advance = advance;
        self
    }

    pub fn glyph(&self, c: char) -> Option<&Sprite> {
        self.glyphs.get(&c)
    }

    pub fn char_height(&self) -> i32 {
        self.char_height
    }

    pub fn default_advance(&self) -> i32 {
        self.default_advance
    }

    /// Width in pixels of the widest line of `text`.
    pub fn text_width(&self, text: &str) -> i32 {
        let mut widest = 0;
        let mut line = 0;
        for c in text.chars() {
            if c == '\n' {
                widest = widest.max(line);
                line = 0;
                continue;
            }
            line += self
                .glyph(c)
                .map_or(self.default_advance, |g| g.width() as i32);
        }
        widest.max(line)
    }

    /// Height in pixels of `text` (line count times line height).
    pub fn text_height(&self, text: &str) -> i32 {
        let lines = text.chars().filter(|&c| c == '\n').count() as i32 + 1;
        lines * self.char_height
    }
}
