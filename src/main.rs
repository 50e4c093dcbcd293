//! Snake (default binary).
//!
//! A small consumer of the engine API: fixed frame rate, keyboard edges,
//! pixel reads for food placement and text for the score line.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use pixelframe::engine::{Context, Engine, Game};
use pixelframe::term::TermBackend;
use pixelframe::types::{Key, Pixel, Point, SimpleRng};

const WIDTH: i32 = 64;
const HEIGHT: i32 = 48;

struct Snake {
    segments: Vec<(i32, i32)>,
    food: (i32, i32),
    score: u32,
    dir: i32,
    dead: bool,
    started: bool,
    rng: SimpleRng,
}

impl Snake {
    fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(1);
        let mut game = Self {
            segments: Vec::new(),
            food: (0, 0),
            score: 0,
            dir: 3,
            dead: false,
            started: false,
            rng: SimpleRng::new(seed),
        };
        game.reset();
        game
    }

    fn reset(&mut self) {
        self.segments.clear();
        for i in 0..9 {
            self.segments.push((i + 20, HEIGHT / 2));
        }
        self.food = (30, HEIGHT / 2 - 5);
        self.score = 0;
        self.dir = 3;
        self.dead = false;
    }

    /// Move the food to a random cell that read back as background on the
    /// previous frame.
    fn randomize_food(&mut self, ctx: &Context) {
        while ctx.pixel(self.food.0, self.food.1) != Pixel::BLACK {
            self.food = (
                self.rng.next_range(WIDTH as u32) as i32,
                self.rng.next_range(HEIGHT as u32) as i32,
            );
        }
    }
}

impl Game for Snake {
    fn on_create(&mut self, ctx: &mut Context) {
        ctx.set_title("SNAKE! Press 'Enter' To Start");
    }

    fn on_update(&mut self, ctx: &mut Context, _elapsed: f32) {
        if ctx.key(Key::Escape).pressed {
            ctx.finish();
            return;
        }

        if !self.started {
            if ctx.key(Key::Enter).pressed {
                self.reset();
                self.started = true;
                ctx.set_title("SNAKE!");
            }
        }

        if self.dead {
            self.started = false;
            ctx.set_title("SNAKE! Press 'Enter' To Start");
        }

        if ctx.key(Key::Right).pressed {
            self.dir = (self.dir + 1) % 4;
        }
        if ctx.key(Key::Left).pressed {
            self.dir = (self.dir + 3) % 4;
        }

        if self.started {
            let head = self.segments[0];
            let next = match self.dir {
                0 => (head.0, head.1 - 1),
                1 => (head.0 + 1, head.1),
                2 => (head.0, head.1 + 1),
                _ => (head.0 - 1, head.1),
            };
            self.segments.insert(0, next);
            self.segments.pop();

            if self.segments[0] == self.food {
                self.score += 1;
                ctx.set_title(&format!("SNAKE! Score: {}", self.score));
                self.randomize_food(ctx);
                let tail = *self.segments.last().unwrap();
                self.segments.push(tail);
            }

            let (hx, hy) = self.segments[0];
            if hx < -1 || hx >= WIDTH + 1 || hy < -1 || hy >= HEIGHT + 1 {
                self.dead = true;
            }
            if self.segments[1..].contains(&self.segments[0]) {
                self.dead = true;
            }
        }

        ctx.clear(Pixel::BLACK);
        ctx.draw_rect(Point::new(0, 0), WIDTH - 1, HEIGHT - 1, Pixel::GREY);

        for &(x, y) in &self.segments[1..] {
            ctx.draw(x, y, if self.dead { Pixel::BLUE } else { Pixel::YELLOW });
        }
        let (hx, hy) = self.segments[0];
        ctx.draw(hx, hy, if self.dead { Pixel::GREEN } else { Pixel::MAGENTA });

        ctx.draw(self.food.0, self.food.1, Pixel::RED);

        ctx.draw_text(
            Point::new(2, 2),
            &format!("{}", self.score),
            Pixel::WHITE,
            1,
        );
    }
}

fn main() -> Result<()> {
    let mut game = Snake::new();
    Engine::new(TermBackend::new())
        .with_size(WIDTH as u32, HEIGHT as u32)
        .with_frame_rate(15)
        .with_title("SNAKE!")
        .run(&mut game)
}
