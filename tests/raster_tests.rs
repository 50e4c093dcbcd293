//! Rasterizer property tests.
//!
//! These pin down the drawing contract: bounds behavior, blend-mode
//! semantics, endpoint symmetry and the classic fill scenarios.

use std::collections::HashSet;

use pixelframe::gfx::{DrawState, Sprite};
use pixelframe::types::{BlendMode, Pixel, Point};

fn lit_pixels(fb: &Sprite) -> HashSet<(i32, i32)> {
    let mut set = HashSet::new();
    for y in 0..fb.height() as i32 {
        for x in 0..fb.width() as i32 {
            if fb.get(x, y) != Pixel::EMPTY {
                set.insert((x, y));
            }
        }
    }
    set
}

#[test]
fn test_write_then_read_round_trips_everywhere() {
    let draw = DrawState::new();
    let mut fb = Sprite::new(10, 10);
    for y in 0..10 {
        for x in 0..10 {
            let color = Pixel::rgb((x * 20) as u8, (y * 20) as u8, 7);
            draw.plot(&mut fb, x, y, color);
            assert_eq!(fb.get(x, y), color, "({x},{y})");
        }
    }
}

#[test]
fn test_out_of_bounds_access_is_silent() {
    let draw = DrawState::new();
    let mut fb = Sprite::new(10, 10);
    let before = fb.clone();

    for (x, y) in [(-1, 5), (5, -1), (10, 5), (5, 10), (-100, -100), (1000, 3)] {
        assert_eq!(fb.get(x, y), Pixel::EMPTY, "read ({x},{y})");
        draw.plot(&mut fb, x, y, Pixel::RED);
    }
    assert_eq!(fb, before, "out-of-bounds writes must not change anything");
}

#[test]
fn test_line_is_symmetric_under_endpoint_swap() {
    let draw = DrawState::new();
    let cases = [
        (Point::new(1, 1), Point::new(30, 9)),
        (Point::new(4, 28), Point::new(9, 2)),
        (Point::new(0, 0), Point::new(31, 31)),
        (Point::new(17, 3), Point::new(17, 25)),
        (Point::new(3, 17), Point::new(29, 17)),
        (Point::new(8, 8), Point::new(8, 8)),
    ];

    for (a, b) in cases {
        let mut forward = Sprite::new(32, 32);
        let mut backward = Sprite::new(32, 32);
        draw.draw_line(&mut forward, a, b, Pixel::WHITE);
        draw.draw_line(&mut backward, b, a, Pixel::WHITE);
        assert_eq!(
            lit_pixels(&forward),
            lit_pixels(&backward),
            "{a:?} -> {b:?}"
        );
    }
}

#[test]
fn test_line_contains_both_endpoints() {
    let draw = DrawState::new();
    let mut fb = Sprite::new(32, 32);
    let (a, b) = (Point::new(3, 5), Point::new(27, 19));
    draw.draw_line(&mut fb, a, b, Pixel::WHITE);
    let lit = lit_pixels(&fb);
    assert!(lit.contains(&(a.x, a.y)));
    assert!(lit.contains(&(b.x, b.y)));
}

#[test]
fn test_circle_is_eight_way_symmetric() {
    let draw = DrawState::new();
    for radius in [1, 2, 5, 7, 11] {
        let mut fb = Sprite::new(64, 64);
        let c = Point::new(32, 32);
        draw.draw_circle(&mut fb, c, radius, Pixel::WHITE);
        let lit = lit_pixels(&fb);

        assert!(!lit.is_empty());
        for &(x, y) in &lit {
            let (dx, dy) = (x - c.x, y - c.y);
            for (mx, my) in [
                (dx, dy),
                (-dx, dy),
                (dx, -dy),
                (-dx, -dy),
                (dy, dx),
                (-dy, dx),
                (dy, -dx),
                (-dy, -dx),
            ] {
                assert!(
                    lit.contains(&(c.x + mx, c.y + my)),
                    "r={radius}: ({dx},{dy}) lit but mirror ({mx},{my}) is not"
                );
            }
        }

        // The four axis extremes exist.
        for p in [
            (c.x + radius, c.y),
            (c.x - radius, c.y),
            (c.x, c.y + radius),
            (c.x, c.y - radius),
        ] {
            assert!(lit.contains(&p), "r={radius}: missing extreme {p:?}");
        }
    }
}

#[test]
fn test_clear_is_idempotent_over_prior_content() {
    let draw = DrawState::new();
    let mut fb = Sprite::new(12, 9);
    draw.fill_circle(&mut fb, Point::new(5, 5), 4, Pixel::MAGENTA);
    draw.draw_line(&mut fb, Point::new(0, 0), Point::new(11, 8), Pixel::YELLOW);

    fb.clear(Pixel::DARK_CYAN);
    for y in 0..9 {
        for x in 0..12 {
            assert_eq!(fb.get(x, y), Pixel::DARK_CYAN, "({x},{y})");
        }
    }
}

#[test]
fn test_filled_rect_scenario() {
    let draw = DrawState::new();
    let mut fb = Sprite::new(10, 10);
    let background = Pixel::rgb(20, 30, 40);
    fb.clear(background);

    draw.fill_rect(&mut fb, Point::new(2, 2), 4, 4, Pixel::RED);

    for y in 0..10 {
        for x in 0..10 {
            let inside = (2..6).contains(&x) && (2..6).contains(&y);
            let expected = if inside { Pixel::RED } else { background };
            assert_eq!(fb.get(x, y), expected, "({x},{y})");
        }
    }
}

#[test]
fn test_mask_mode_scenario() {
    let mut draw = DrawState::new();
    draw.set_blend_mode(BlendMode::Mask);
    let mut fb = Sprite::new(10, 10);
    let background = Pixel::rgb(1, 2, 3);
    fb.clear(background);

    let translucent = Pixel::new(255, 0, 0, 128);
    let opaque = Pixel::new(0, 255, 0, 255);

    for y in 0..10 {
        for x in 0..10 {
            draw.plot(&mut fb, x, y, translucent);
        }
    }
    assert!(
        (0..10).all(|y| (0..10).all(|x| fb.get(x, y) == background)),
        "alpha 128 must never be written in mask mode"
    );

    draw.plot(&mut fb, 4, 4, opaque);
    assert_eq!(fb.get(4, 4), opaque, "alpha 255 is written verbatim");
}

#[test]
fn test_unknown_text_glyphs_advance_like_spaces() {
    let mut draw = DrawState::new();
    let mut with_unknown = Sprite::new(64, 16);
    let mut with_space = Sprite::new(64, 16);

    // 'é' has no glyph: it must advance one cell and draw nothing,
    // exactly like a space.
    draw.draw_text(&mut with_unknown, Point::new(0, 0), "éA", Pixel::WHITE, 1);
    draw.draw_text(&mut with_space, Point::new(0, 0), " A", Pixel::WHITE, 1);

    assert_eq!(lit_pixels(&with_unknown), lit_pixels(&with_space));
    assert!(!lit_pixels(&with_space).is_empty());
}

#[test]
fn test_text_scale_doubles_coverage() {
    let mut draw = DrawState::new();
    let mut small = Sprite::new(64, 32);
    let mut big = Sprite::new(64, 32);
    draw.draw_text(&mut small, Point::new(0, 0), "X", Pixel::WHITE, 1);
    draw.draw_text(&mut big, Point::new(0, 0), "X", Pixel::WHITE, 2);
    assert_eq!(lit_pixels(&big).len(), 4 * lit_pixels(&small).len());
}

#[test]
fn test_partial_sprite_blit_copies_region() {
    let draw = DrawState::new();
    let mut src = Sprite::new(8, 8);
    for y in 0..8 {
        for x in 0..8 {
            src.set(x, y, Pixel::rgb(x as u8, y as u8, 0));
        }
    }

    let mut fb = Sprite::new(16, 16);
    draw.draw_partial_sprite(&mut fb, Point::new(4, 4), &src, Point::new(2, 3), 3, 2);

    for j in 0..2 {
        for i in 0..3 {
            assert_eq!(
                fb.get(4 + i, 4 + j),
                Pixel::rgb((2 + i) as u8, (3 + j) as u8, 0),
                "({i},{j})"
            );
        }
    }
    assert_eq!(fb.get(7, 4), Pixel::EMPTY);
}

#[test]
fn test_alpha_blend_full_and_zero_alpha() {
    let mut draw = DrawState::new();
    draw.set_blend_mode(BlendMode::Alpha);
    let mut fb = Sprite::new(4, 4);
    fb.clear(Pixel::rgb(100, 100, 100));

    // Fully opaque source replaces the destination color.
    draw.plot(&mut fb, 0, 0, Pixel::new(200, 0, 0, 255));
    assert_eq!(fb.get(0, 0), Pixel::rgb(200, 0, 0));

    // Fully transparent source leaves the destination color.
    draw.plot(&mut fb, 1, 1, Pixel::new(200, 0, 0, 0));
    assert_eq!(fb.get(1, 1), Pixel::rgb(100, 100, 100));
}
