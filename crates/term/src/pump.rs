//! Terminal event pump.
//!
//! Runs on its own thread and only ever writes: key and button levels into
//! the shared input collector, close/resize notifications into the control
//! queue. The frame thread reads both once per tick.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind, KeyModifiers, MouseEventKind};

use pixelframe_engine::ControlEvent;
use pixelframe_input::InputCollector;
use pixelframe_types::{Key, Scroll};

use crate::keymap::{is_interrupt, map_key, map_mouse_button};

/// Cell offset of the framebuffer inside the terminal grid, maintained by
/// the presenter and read here to map mouse cells to pixels.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Layout {
    pub off_x: u16,
    pub off_y: u16,
}

const POLL_INTERVAL: Duration = Duration::from_millis(25);

pub(crate) fn run(
    input: InputCollector,
    events: Arc<Mutex<Vec<ControlEvent>>>,
    layout: Arc<Mutex<Layout>>,
    stop: Arc<AtomicBool>,
) {
    while !stop.load(Ordering::Relaxed) {
        match event::poll(POLL_INTERVAL) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(_) => break,
        }
        let ev = match event::read() {
            Ok(ev) => ev,
            Err(_) => break,
        };

        match ev {
            Event::Key(key) => {
                if is_interrupt(&key) {
                    events.lock().unwrap().push(ControlEvent::CloseRequested);
                    continue;
                }

                // Modifier levels ride along on every key event.
                set_level(&input, Key::Shift, key.modifiers.contains(KeyModifiers::SHIFT));
                set_level(&input, Key::Control, key.modifiers.contains(KeyModifiers::CONTROL));

                if let Some(mapped) = map_key(key.code) {
                    match key.kind {
                        KeyEventKind::Press | KeyEventKind::Repeat => input.key_down(mapped),
                        KeyEventKind::Release => input.key_up(mapped),
                    }
                }
            }
            Event::Mouse(mouse) => {
                let (px, py) = {
                    let l = layout.lock().unwrap();
                    (
                        mouse.column as i32 - l.off_x as i32,
                        (mouse.row as i32 - l.off_y as i32) * 2,
                    )
                };
                match mouse.kind {
                    MouseEventKind::Down(b) => {
                        input.mouse_moved(px, py);
                        input.button_down(map_mouse_button(b));
                    }
                    MouseEventKind::Up(b) => {
                        input.mouse_moved(px, py);
                        input.button_up(map_mouse_button(b));
                    }
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        input.mouse_moved(px, py);
                    }
                    MouseEventKind::ScrollUp => input.wheel(Scroll::Up),
                    MouseEventKind::ScrollDown => input.wheel(Scroll::Down),
                    _ => {}
                }
            }
            Event::Resize(cols, rows) => {
                events.lock().unwrap().push(ControlEvent::Resized {
                    width: cols as u32,
                    height: rows as u32 * 2,
                });
            }
            _ => {}
        }
    }
}

fn set_level(input: &InputCollector, key: Key, down: bool) {
    if down {
        input.key_down(key);
    } else {
        input.key_up(key);
    }
}
