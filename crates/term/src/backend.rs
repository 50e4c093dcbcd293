//! Terminal presentation backend.
//!
//! Presents the RGBA framebuffer as half-block cells: each terminal cell
//! carries two vertically stacked pixels, `▀` with the upper pixel as
//! foreground and the lower as background. Frames are diffed against the
//! previous one and flushed as per-run cursor moves, with color changes
//! elided while a run keeps the same pair.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::Result;

use crossterm::{
    cursor,
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use pixelframe_engine::{Backend, ControlEvent, ControlEvents};
use pixelframe_gfx::Sprite;
use pixelframe_input::InputCollector;
use pixelframe_types::{Pixel, DEFAULT_KEY_RELEASE_TIMEOUT_MS};

use crate::pump::{self, Layout};

const HALF_BLOCK: char = '▀';

/// Crossterm-backed [`Backend`] implementation.
pub struct TermBackend {
    stdout: io::Stdout,
    events: Arc<Mutex<Vec<ControlEvent>>>,
    layout: Arc<Mutex<Layout>>,
    stop: Arc<AtomicBool>,
    pump: Option<JoinHandle<()>>,
    prev: Option<Sprite>,
    prev_origin: (u16, u16),
    prev_term: (u16, u16),
    enhanced_keys: bool,
}

impl Default for TermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TermBackend {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            events: Arc::new(Mutex::new(Vec::new())),
            layout: Arc::new(Mutex::new(Layout::default())),
            stop: Arc::new(AtomicBool::new(false)),
            pump: None,
            prev: None,
            prev_origin: (0, 0),
            prev_term: (0, 0),
            enhanced_keys: false,
        }
    }

    fn flush_cells(
        &mut self,
        frame: &Sprite,
        origin: (u16, u16),
        term: (u16, u16),
        full: bool,
    ) -> Result<()> {
        let cell_rows = frame.height().div_ceil(2);
        let visible_cols = (frame.width() as i32).min(term.0 as i32 - origin.0 as i32).max(0) as u16;
        let visible_rows = (cell_rows as i32).min(term.1 as i32 - origin.1 as i32).max(0) as u16;

        let mut current: Option<(Color, Color)> = None;

        if full {
            self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
            for cy in 0..visible_rows {
                self.stdout.queue(cursor::MoveTo(origin.0, origin.1 + cy))?;
                for cx in 0..visible_cols {
                    self.put_cell(frame, cx, cy, &mut current)?;
                }
            }
        } else {
            let prev = self.prev.take().unwrap();
            for_each_changed_cell_run(&prev, frame, visible_cols, visible_rows, |cx, cy, len| {
                self.stdout.queue(cursor::MoveTo(origin.0 + cx, origin.1 + cy))?;
                for dx in 0..len {
                    self.put_cell(frame, cx + dx, cy, &mut current)?;
                }
                Ok(())
            })?;
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn put_cell(
        &mut self,
        frame: &Sprite,
        cx: u16,
        cy: u16,
        current: &mut Option<(Color, Color)>,
    ) -> Result<()> {
        let (top, bottom) = cell_pixels(frame, cx, cy);
        let colors = (to_color(top), to_color(bottom));
        if *current != Some(colors) {
            self.stdout.queue(SetForegroundColor(colors.0))?;
            self.stdout.queue(SetBackgroundColor(colors.1))?;
            *current = Some(colors);
        }
        self.stdout.queue(Print(HALF_BLOCK))?;
        Ok(())
    }
}

impl Backend for TermBackend {
    fn open(&mut self, size: Option<(u32, u32)>, input: InputCollector) -> Result<(u32, u32)> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.queue(EnableMouseCapture)?;

        // Prefer real key-release events where the terminal can report
        // them; otherwise synthesize releases with a hold timeout.
        self.enhanced_keys = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if self.enhanced_keys {
            self.stdout.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        } else {
            input.set_release_timeout(Some(Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS)));
        }
        self.stdout.flush()?;

        self.stop.store(false, Ordering::Relaxed);
        let events = Arc::clone(&self.events);
        let layout = Arc::clone(&self.layout);
        let stop = Arc::clone(&self.stop);
        self.pump = Some(std::thread::spawn(move || {
            pump::run(input, events, layout, stop);
        }));

        let (cols, rows) = terminal::size()?;
        Ok(match size {
            Some(requested) => requested,
            None => (cols as u32, rows as u32 * 2),
        })
    }

    fn poll_events(&mut self) -> ControlEvents {
        let mut queued = self.events.lock().unwrap();
        let mut out = ControlEvents::new();
        while !queued.is_empty() && !out.is_full() {
            let event = queued.remove(0);
            if matches!(event, ControlEvent::Resized { .. }) {
                // Surface changed under us: next present redraws fully.
                self.prev = None;
            }
            out.push(event);
        }
        out
    }

    fn present(&mut self, frame: &Sprite) -> Result<()> {
        let term = terminal::size().unwrap_or((80, 24));
        let cell_rows = frame.height().div_ceil(2) as u16;
        let origin = (
            term.0.saturating_sub(frame.width() as u16) / 2,
            term.1.saturating_sub(cell_rows) / 2,
        );

        *self.layout.lock().unwrap() = Layout {
            off_x: origin.0,
            off_y: origin.1,
        };

        let full = match &self.prev {
            None => true,
            Some(prev) => {
                prev.width() != frame.width()
                    || prev.height() != frame.height()
                    || self.prev_origin != origin
                    || self.prev_term != term
            }
        };

        self.flush_cells(frame, origin, term, full)?;

        self.prev = Some(frame.clone());
        self.prev_origin = origin;
        self.prev_term = term;
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        let _ = self.stdout.queue(terminal::SetTitle(title));
        let _ = self.stdout.flush();
    }

    fn close(&mut self) -> Result<()> {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(pump) = self.pump.take() {
            let _ = pump.join();
        }

        if self.enhanced_keys {
            self.stdout.queue(PopKeyboardEnhancementFlags)?;
        }
        self.stdout.queue(DisableMouseCapture)?;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

/// The two stacked pixels behind one terminal cell. Rows past the buffer
/// (odd heights) read as transparent, shown black.
fn cell_pixels(frame: &Sprite, cx: u16, cy: u16) -> (Pixel, Pixel) {
    let x = cx as i32;
    let y = cy as i32 * 2;
    (frame.get(x, y), frame.get(x, y + 1))
}

fn to_color(p: Pixel) -> Color {
    Color::Rgb {
        r: p.r,
        g: p.g,
        b: p.b,
    }
}

/// Walk runs of cells whose pixel pair changed between frames, row by row.
fn for_each_changed_cell_run(
    prev: &Sprite,
    next: &Sprite,
    cols: u16,
    rows: u16,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    for cy in 0..rows {
        let mut cx = 0;
        while cx < cols {
            if cell_pixels(prev, cx, cy) == cell_pixels(next, cx, cy) {
                cx += 1;
                continue;
            }

            let start = cx;
            cx += 1;
            while cx < cols && cell_pixels(prev, cx, cy) != cell_pixels(next, cx, cy) {
                cx += 1;
            }
            f(start, cy, cx - start)?;
        }
    }
    Ok(())
}
