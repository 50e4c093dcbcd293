//! Audio pipeline tests: WAV acceptance rules and mixer behavior through
//! the public API.

use std::io::Cursor;
use std::sync::{Arc, Mutex};

use anyhow::Result;

use pixelframe::audio::{AudioSink, Mixer, Sound, SAMPLE_RATE};

/// Assemble a minimal PCM WAV byte stream.
fn wav_bytes(sample_rate: u32, channels: u16, bits: u16, data: &[u8]) -> Vec<u8> {
    let block_align = channels * bits / 8;
    let mut out = Vec::new();
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data.len() as u32).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * block_align as u32).to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&bits.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&(data.len() as u32).to_le_bytes());
    out.extend_from_slice(data);
    out
}

#[test]
fn test_only_44100_hz_is_accepted() {
    let samples: Vec<u8> = [1000i16, -1000]
        .iter()
        .flat_map(|s| s.to_le_bytes())
        .collect();

    assert!(Sound::from_reader(Cursor::new(wav_bytes(SAMPLE_RATE, 1, 16, &samples))).is_ok());
    for rate in [8_000, 22_050, 48_000, 96_000] {
        assert!(
            Sound::from_reader(Cursor::new(wav_bytes(rate, 1, 16, &samples))).is_err(),
            "{rate} Hz must be rejected"
        );
    }
}

#[test]
fn test_invalid_asset_yields_no_handle() {
    let mixer = Mixer::new();
    assert!(mixer.load("missing/file.wav").is_none());

    let path = std::env::temp_dir().join("pixelframe_bad_rate.wav");
    std::fs::write(&path, wav_bytes(22_050, 1, 16, &[0, 0])).unwrap();
    assert!(mixer.load(&path).is_none());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_valid_asset_loads_and_plays() {
    let path = std::env::temp_dir().join("pixelframe_good.wav");
    let samples: Vec<u8> = vec![12_000i16; 32]
        .iter()
        .flat_map(|s| s.to_le_bytes())
        .collect();
    std::fs::write(&path, wav_bytes(SAMPLE_RATE, 1, 16, &samples)).unwrap();

    let mixer = Mixer::new();
    let id = mixer.load(&path).expect("valid wav loads");
    let _ = std::fs::remove_file(&path);

    mixer.play(id);
    let mut block = vec![0i16; 16];
    mixer.mix_block(&mut block);
    assert!(block.iter().all(|&s| (s - 12_000).abs() <= 2));
}

#[test]
fn test_two_sounds_mix_additively() {
    let mixer = Mixer::new();
    let a = mixer.add(Sound::from_samples(vec![4000; 64], 1));
    let b = mixer.add(Sound::from_samples(vec![6000; 64], 1));
    mixer.play(a);
    mixer.play(b);

    let mut block = vec![0i16; 8];
    mixer.mix_block(&mut block);
    assert!(
        block.iter().all(|&s| (s - 10_000).abs() <= 4),
        "block: {block:?}"
    );
}

#[test]
fn test_loop_flag_sustains_playback() {
    let mixer = Mixer::new();
    let id = mixer.add(Sound::from_samples(vec![3000; 4], 1));
    mixer.set_looped(id, true);
    mixer.play(id);

    let mut block = vec![0i16; 64];
    mixer.mix_block(&mut block);
    assert_eq!(mixer.playing_count(), 1, "looped sound keeps playing");
    assert!(block.iter().all(|&s| (s - 3000).abs() <= 2));

    mixer.stop(id);
    mixer.mix_block(&mut block);
    assert_eq!(mixer.playing_count(), 0);
}

#[test]
fn test_audio_thread_feeds_sink_blocks() {
    struct CaptureSink(Arc<Mutex<Vec<Vec<i16>>>>);
    impl AudioSink for CaptureSink {
        fn submit(&mut self, block: &[i16]) -> Result<()> {
            self.0.lock().unwrap().push(block.to_vec());
            std::thread::sleep(std::time::Duration::from_millis(1));
            Ok(())
        }
    }

    let captured = Arc::new(Mutex::new(Vec::new()));
    let mut mixer = Mixer::with_config(1, 32);
    let id = mixer.add(Sound::from_samples(vec![9000; 44_100], 1));
    mixer.play(id);

    mixer.start(Box::new(CaptureSink(Arc::clone(&captured))));
    std::thread::sleep(std::time::Duration::from_millis(25));
    mixer.shutdown();

    let blocks = captured.lock().unwrap();
    assert!(!blocks.is_empty(), "the audio thread produced blocks");
    assert!(blocks[0].iter().all(|&s| (s - 9000).abs() <= 2));
    assert!(mixer.global_time() > 0.0);
}
