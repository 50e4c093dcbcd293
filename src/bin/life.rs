//! Cellular life demo.
//!
//! Exercises mouse input (paint cells with the left button), the engine
//! pause state (updates stop, presentation and input hooks keep running)
//! and free reseeding.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use pixelframe::engine::{Context, Engine, Game};
use pixelframe::term::TermBackend;
use pixelframe::types::{Key, MouseButton, Pixel, SimpleRng};

const WIDTH: i32 = 80;
const HEIGHT: i32 = 60;

struct Life {
    cells: Vec<bool>,
    scratch: Vec<bool>,
    paused: bool,
    rng: SimpleRng,
}

impl Life {
    fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(1);
        let mut game = Self {
            cells: vec![false; (WIDTH * HEIGHT) as usize],
            scratch: vec![false; (WIDTH * HEIGHT) as usize],
            paused: false,
            rng: SimpleRng::new(seed),
        };
        game.reseed();
        game
    }

    fn reseed(&mut self) {
        for cell in &mut self.cells {
            *cell = self.rng.next_f32() < 0.3;
        }
    }

    fn alive(&self, x: i32, y: i32) -> bool {
        let x = x.rem_euclid(WIDTH);
        let y = y.rem_euclid(HEIGHT);
        self.cells[(y * WIDTH + x) as usize]
    }

    fn step(&mut self) {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let mut neighbors = 0;
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        if (dx, dy) != (0, 0) && self.alive(x + dx, y + dy) {
                            neighbors += 1;
                        }
                    }
                }
                let next = matches!(
                    (self.alive(x, y), neighbors),
                    (true, 2) | (true, 3) | (false, 3)
                );
                self.scratch[(y * WIDTH + x) as usize] = next;
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }
}

impl Game for Life {
    fn on_create(&mut self, ctx: &mut Context) {
        ctx.set_title("LIFE - P pause, R reseed, paint with mouse");
    }

    fn on_update(&mut self, ctx: &mut Context, _elapsed: f32) {
        self.step();

        ctx.clear(Pixel::BLACK);
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                if self.cells[(y * WIDTH + x) as usize] {
                    ctx.draw(x, y, Pixel::WHITE);
                }
            }
        }
    }

    fn on_key_press(&mut self, ctx: &mut Context, key: Key) {
        match key {
            Key::Escape => ctx.finish(),
            Key::R => self.reseed(),
            Key::P => {
                // Hooks keep firing while paused, so P also resumes.
                if self.paused {
                    ctx.resume();
                } else {
                    ctx.pause();
                }
                self.paused = !self.paused;
            }
            _ => {}
        }
    }

    fn on_mouse_down(&mut self, ctx: &mut Context, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        let (x, y) = (ctx.mouse_x(), ctx.mouse_y());
        if (0..WIDTH).contains(&x) && (0..HEIGHT).contains(&y) {
            for (dx, dy) in [(0, 0), (1, 0), (0, 1)] {
                let (px, py) = ((x + dx).rem_euclid(WIDTH), (y + dy).rem_euclid(HEIGHT));
                self.cells[(py * WIDTH + px) as usize] = true;
            }
            // Show the paint immediately, even while paused.
            ctx.draw(x, y, Pixel::GREEN);
        }
    }
}

fn main() -> Result<()> {
    let mut game = Life::new();
    Engine::new(TermBackend::new())
        .with_size(WIDTH as u32, HEIGHT as u32)
        .with_frame_rate(20)
        .with_title("LIFE")
        .run(&mut game)
}
