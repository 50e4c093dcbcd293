//! The sample mixer and audio thread.
//!
//! The game thread loads sounds and starts/stops instances; the audio
//! thread repeatedly mixes fixed-size blocks and hands them to an
//! [`AudioSink`]. The playing list is mutex-guarded: both sides take the
//! lock briefly, the game thread per call, the audio thread per block.
//! Device integration lives entirely behind the sink trait.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::Result;

use crate::wav::{Sound, SAMPLE_RATE};

/// Handle to a loaded sound.
pub type SoundId = usize;

/// Generator callback: `(channel, global_time, dt) -> sample`.
pub type SynthFn = Box<dyn Fn(u16, f32, f32) -> f32 + Send>;

/// Filter callback: `(channel, global_time, mixed) -> sample`.
pub type FilterFn = Box<dyn Fn(u16, f32, f32) -> f32 + Send>;

/// Consumer of mixed sample blocks. `submit` may block until the device
/// can take another block; that backpressure paces the audio thread.
pub trait AudioSink: Send {
    fn submit(&mut self, block: &[i16]) -> Result<()>;
}

/// Sink that swallows everything, for headless runs.
#[derive(Debug, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn submit(&mut self, _block: &[i16]) -> Result<()> {
        // Pace as a real device would, one block per block-duration.
        std::thread::sleep(std::time::Duration::from_millis(10));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct PlayingSound {
    sound: SoundId,
    position: u64,
    looped: bool,
    finished: bool,
}

struct Shared {
    sounds: Vec<Sound>,
    playing: Vec<PlayingSound>,
    volume: f32,
    synth: Option<SynthFn>,
    filter: Option<FilterFn>,
}

/// The audio mixer.
pub struct Mixer {
    shared: Arc<Mutex<Shared>>,
    active: Arc<AtomicBool>,
    global_time: Arc<AtomicU32>,
    thread: Option<JoinHandle<()>>,
    channels: u16,
    block_samples: usize,
}

impl Default for Mixer {
    fn default() -> Self {
        Self::new()
    }
}

impl Mixer {
    /// Mono mixer with 512-sample blocks.
    pub fn new() -> Self {
        Self::with_config(1, 512)
    }

    pub fn with_config(channels: u16, block_samples: usize) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                sounds: Vec::new(),
                playing: Vec::new(),
                volume: 1.0,
                synth: None,
                filter: None,
            })),
            active: Arc::new(AtomicBool::new(false)),
            global_time: Arc::new(AtomicU32::new(0)),
            thread: None,
            channels: channels.max(1),
            block_samples: block_samples.max(1),
        }
    }

    /// Load a WAV asset. `None` when the file is missing, malformed or not
    /// 44.1kHz.
    pub fn load<P: AsRef<std::path::Path>>(&self, path: P) -> Option<SoundId> {
        Sound::load(path).map(|s| self.add(s))
    }

    /// Register an already-decoded sound.
    pub fn add(&self, sound: Sound) -> SoundId {
        let mut shared = self.shared.lock().unwrap();
        shared.sounds.push(sound);
        shared.sounds.len() - 1
    }

    pub fn set_looped(&self, id: SoundId, looped: bool) {
        let mut shared = self.shared.lock().unwrap();
        if let Some(sound) = shared.sounds.get_mut(id) {
            sound.set_looped(looped);
        }
    }

    /// Start one instance of a sound from the beginning.
    pub fn play(&self, id: SoundId) {
        let mut shared = self.shared.lock().unwrap();
        let Some(sound) = shared.sounds.get(id) else {
            return;
        };
        let looped = sound.looped();
        shared.playing.push(PlayingSound {
            sound: id,
            position: 0,
            looped,
            finished: false,
        });
    }

    /// Finish every playing instance of a sound.
    pub fn stop(&self, id: SoundId) {
        let mut shared = self.shared.lock().unwrap();
        for ps in shared.playing.iter_mut().filter(|ps| ps.sound == id) {
            ps.finished = true;
        }
    }

    pub fn playing_count(&self) -> usize {
        let shared = self.shared.lock().unwrap();
        shared.playing.iter().filter(|ps| !ps.finished).count()
    }

    pub fn volume(&self) -> f32 {
        self.shared.lock().unwrap().volume
    }

    /// Master volume, clamped to `[0, 1]`.
    pub fn set_volume(&self, volume: f32) {
        self.shared.lock().unwrap().volume = volume.clamp(0.0, 1.0);
    }

    /// Install a waveform generator mixed into every block.
    pub fn set_synth(&self, synth: SynthFn) {
        self.shared.lock().unwrap().synth = Some(synth);
    }

    /// Install a filter applied to every mixed sample.
    pub fn set_filter(&self, filter: FilterFn) {
        self.shared.lock().unwrap().filter = Some(filter);
    }

    /// Seconds of audio mixed since the thread started.
    pub fn global_time(&self) -> f32 {
        f32::from_bits(self.global_time.load(Ordering::Relaxed))
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn block_samples(&self) -> usize {
        self.block_samples
    }

    /// Mix one block in place. Public so headless callers and tests can
    /// drive the mixer without a thread.
    pub fn mix_block(&self, block: &mut [i16]) {
        let mut shared = self.shared.lock().unwrap();
        let mut t = f32::from_bits(self.global_time.load(Ordering::Relaxed));
        mix_into(&mut shared, block, self.channels, &mut t);
        self.global_time.store(t.to_bits(), Ordering::Relaxed);
    }

    /// Start the audio thread pushing blocks into `sink`.
    pub fn start(&mut self, mut sink: Box<dyn AudioSink>) {
        if self.thread.is_some() {
            return;
        }
        self.active.store(true, Ordering::Relaxed);

        let shared = Arc::clone(&self.shared);
        let active = Arc::clone(&self.active);
        let global_time = Arc::clone(&self.global_time);
        let channels = self.channels;
        let block_samples = self.block_samples;

        self.thread = Some(std::thread::spawn(move || {
            let mut block = vec![0i16; block_samples];
            while active.load(Ordering::Relaxed) {
                {
                    let mut shared = shared.lock().unwrap();
                    let mut t = f32::from_bits(global_time.load(Ordering::Relaxed));
                    mix_into(&mut shared, &mut block, channels, &mut t);
                    global_time.store(t.to_bits(), Ordering::Relaxed);
                }
                if sink.submit(&block).is_err() {
                    break;
                }
            }
        }));
    }

    /// Stop the audio thread cooperatively.
    pub fn shutdown(&mut self) {
        self.active.store(false, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for Mixer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn mix_into(shared: &mut Shared, block: &mut [i16], channels: u16, t: &mut f32) {
    const NORM: f32 = 1.0 / i16::MAX as f32;
    let dt = 1.0 / SAMPLE_RATE as f32;

    for frame in block.chunks_mut(channels as usize) {
        for (c, out) in frame.iter_mut().enumerate() {
            let mut sample = 0.0f32;

            for ps in &shared.playing {
                if ps.finished {
                    continue;
                }
                let sound = &shared.sounds[ps.sound];
                if ps.position >= sound.frame_count() {
                    continue;
                }
                let src_channels = sound.channels() as usize;
                let idx = ps.position as usize * src_channels + (c).min(src_channels - 1);
                sample += sound.samples()[idx] as f32 * NORM;
            }

            if let Some(synth) = &shared.synth {
                sample += synth(c as u16, *t, dt);
            }
            if let Some(filter) = &shared.filter {
                sample = filter(c as u16, *t, sample);
            }
            sample *= shared.volume;

            *out = (clip(sample) * i16::MAX as f32) as i16;
        }

        // Advance instances one frame; loops wrap, the rest finish.
        for ps in &mut shared.playing {
            if ps.finished {
                continue;
            }
            ps.position += 1;
            if ps.position >= shared.sounds[ps.sound].frame_count() {
                if ps.looped {
                    ps.position = 0;
                } else {
                    ps.finished = true;
                }
            }
        }
        *t += dt;
    }

    shared.playing.retain(|ps| !ps.finished);
}

fn clip(sample: f32) -> f32 {
    sample.clamp(-1.0, 1.0)
}
