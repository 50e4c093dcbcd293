//! Audio module: WAV assets and a block mixer.
//!
//! The mixer is a producer pipeline, not a device driver: an audio thread
//! mixes fixed-size `i16` blocks from the currently playing sounds (plus
//! optional synth/filter callbacks) and pushes them into an [`AudioSink`].
//! Wiring a sink to an actual output device is the embedder's job; tests
//! and headless runs use capturing or null sinks.
//!
//! Only 44.1kHz WAV assets are accepted; loading anything else yields no
//! handle.
//!
//! ```
//! use pixelframe_audio::{Mixer, Sound};
//!
//! let mixer = Mixer::new();
//! let beep = mixer.add(Sound::from_samples(vec![8000; 441], 1));
//! mixer.play(beep);
//!
//! let mut block = vec![0i16; 64];
//! mixer.mix_block(&mut block);
//! assert!(block.iter().any(|&s| s != 0));
//! ```

pub mod mixer;
pub mod wav;

pub use mixer::{AudioSink, FilterFn, Mixer, NullSink, SoundId, SynthFn};
pub use wav::{Sound, SAMPLE_RATE};
