//! The frame driver.
//!
//! Owns the default draw target, the input edge state and the frame loop:
//! poll control events, gate on the optional fixed frame rate, drain any
//! pending delay, snapshot input, fire input hooks, run the user update,
//! present. The backend is injected; the driver never touches a surface
//! directly.

use anyhow::Result;

use pixelframe_gfx::{DrawState, Sprite};
use pixelframe_input::{InputCollector, InputState};
use pixelframe_types::{Key, MouseButton, Scroll};

use crate::backend::{Backend, ControlEvent};
use crate::clock::{Clock, FrameTimer};
use crate::context::{Context, ControlRequests};
use crate::game::Game;

/// Lifecycle of the frame driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Created,
    Running,
    Paused,
    Destroyed,
}

/// Requested screen size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScreenMode {
    /// Fixed logical size; the backend letterboxes as needed.
    Fixed(u32, u32),
    /// Track the backend surface, recreating the draw target on resize.
    FillSurface,
}

/// The engine: a backend plus the frame-loop state machine
/// `Created -> Running <-> Paused -> Destroyed`.
pub struct Engine<B: Backend> {
    backend: B,
    screen: ScreenMode,
    frame_rate: Option<u32>,
    title: String,
    state: EngineState,
}

impl<B: Backend> Engine<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            screen: ScreenMode::Fixed(pixelframe_types::DEFAULT_WIDTH, pixelframe_types::DEFAULT_HEIGHT),
            frame_rate: None,
            title: String::new(),
            state: EngineState::Created,
        }
    }

    /// Request a fixed logical screen size (the default is 100x100).
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.screen = ScreenMode::Fixed(width.max(1), height.max(1));
        self
    }

    /// Track the backend surface size instead of a fixed one. The draw
    /// target is recreated (blank) whenever the surface resizes.
    pub fn fill_surface(mut self) -> Self {
        self.screen = ScreenMode::FillSurface;
        self
    }

    /// Cap the loop at a fixed frame rate. Without one the loop free-runs.
    pub fn with_frame_rate(mut self, fps: u32) -> Self {
        self.frame_rate = Some(fps);
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Run the game to completion. Returns once the game finishes or the
    /// backend requests close.
    pub fn run<G: Game>(&mut self, game: &mut G) -> Result<()> {
        let collector = InputCollector::new();
        let requested = match self.screen {
            ScreenMode::Fixed(w, h) => Some((w, h)),
            ScreenMode::FillSurface => None,
        };
        let (width, height) = self.backend.open(requested, collector.clone())?;

        let mut target = Sprite::new(width, height);
        let mut draw = DrawState::new();
        let mut input = InputState::new();
        let mut requests = ControlRequests::default();
        let mut frame_count: u64 = 0;
        let mut delay_left: f32 = 0.0;

        if !self.title.is_empty() {
            self.backend.set_title(&self.title);
        }

        let mut clock = Clock::new();
        let mut timer = self.frame_rate.map(FrameTimer::per_second);

        self.state = EngineState::Running;

        {
            let mut ctx = Context::new(&mut draw, &mut target, &input, &clock, frame_count, &mut requests);
            game.on_create(&mut ctx);
        }
        let mut active = !requests.finish;
        self.apply_requests(&mut requests, &mut active, &mut delay_left);

        while active {
            for event in self.backend.poll_events() {
                match event {
                    ControlEvent::CloseRequested => active = false,
                    ControlEvent::Resized { width, height } => {
                        if self.screen == ScreenMode::FillSurface {
                            target = Sprite::new(width, height);
                        }
                    }
                }
            }
            if !active {
                break;
            }

            let elapsed = clock.tick().as_secs_f32();

            // Fixed frame rate: poll again until the interval is due.
            if let Some(timer) = timer.as_mut() {
                if !timer.tick() {
                    continue;
                }
            }

            if delay_left > 0.0 {
                delay_left -= elapsed;
                if delay_left > 0.0 {
                    continue;
                }
                delay_left = 0.0;
            }

            let snapshot = collector.snapshot();
            input.update(&snapshot);

            self.dispatch_input_hooks(
                game,
                &mut draw,
                &mut target,
                &input,
                &clock,
                frame_count,
                &mut requests,
            );

            if self.state != EngineState::Paused {
                let mut ctx =
                    Context::new(&mut draw, &mut target, &input, &clock, frame_count, &mut requests);
                game.on_update(&mut ctx, elapsed);
                frame_count += 1;
            }

            self.apply_requests(&mut requests, &mut active, &mut delay_left);

            self.backend.present(&target)?;
        }

        {
            let mut ctx = Context::new(&mut draw, &mut target, &input, &clock, frame_count, &mut requests);
            game.on_destroy(&mut ctx);
        }
        self.backend.close()?;
        self.state = EngineState::Destroyed;
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn dispatch_input_hooks<G: Game>(
        &mut self,
        game: &mut G,
        draw: &mut DrawState,
        target: &mut Sprite,
        input: &InputState,
        clock: &Clock,
        frame_count: u64,
        requests: &mut ControlRequests,
    ) {
        for key in Key::PHYSICAL {
            let b = input.key(key);
            if b.pressed {
                let mut ctx = Context::new(draw, target, input, clock, frame_count, requests);
                game.on_key_press(&mut ctx, key);
            }
            if b.released {
                let mut ctx = Context::new(draw, target, input, clock, frame_count, requests);
                game.on_key_release(&mut ctx, key);
            }
            if b.down {
                let mut ctx = Context::new(draw, target, input, clock, frame_count, requests);
                game.on_key_down(&mut ctx, key);
            }
        }

        for button in [MouseButton::Left, MouseButton::Middle, MouseButton::Right] {
            let b = input.mouse_button(button);
            if b.pressed {
                let mut ctx = Context::new(draw, target, input, clock, frame_count, requests);
                game.on_mouse_press(&mut ctx, button);
            }
            if b.released {
                let mut ctx = Context::new(draw, target, input, clock, frame_count, requests);
                game.on_mouse_release(&mut ctx, button);
            }
            if b.down {
                let mut ctx = Context::new(draw, target, input, clock, frame_count, requests);
                game.on_mouse_down(&mut ctx, button);
            }
        }

        if input.mouse_scroll() != Scroll::None {
            let scroll = input.mouse_scroll();
            let mut ctx = Context::new(draw, target, input, clock, frame_count, requests);
            game.on_mouse_scroll(&mut ctx, scroll);
        }
    }

    fn apply_requests(&mut self, requests: &mut ControlRequests, active: &mut bool, delay_left: &mut f32) {
        if requests.finish {
            *active = false;
        }
        match requests.pause.take() {
            Some(true) => self.state = EngineState::Paused,
            Some(false) => self.state = EngineState::Running,
            None => {}
        }
        if requests.delay > 0.0 {
            *delay_left += requests.delay;
        }
        if let Some(title) = requests.title.take() {
            self.backend.set_title(&title);
        }
        *requests = ControlRequests::default();
    }
}
