//! RIFF/WAVE loading.
//!
//! Only 44.1kHz PCM assets are accepted; anything else is rejected and the
//! caller gets no handle. Sample depths of 8, 16, 24 and 32 bits are
//! normalized to interleaved `i16`.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use anyhow::{bail, Context, Result};

/// The only sample rate the mixer runs at.
pub const SAMPLE_RATE: u32 = 44_100;

/// A decoded PCM waveform.
#[derive(Debug, Clone)]
pub struct Sound {
    samples: Vec<i16>,
    channels: u16,
    sample_rate: u32,
    looped: bool,
}

impl Sound {
    /// Load from disk. Returns `None` for missing, malformed or
    /// wrong-sample-rate files.
    pub fn load<P: AsRef<Path>>(path: P) -> Option<Sound> {
        let file = File::open(path).ok()?;
        Sound::from_reader(BufReader::new(file)).ok()
    }

    /// Decode a WAV stream, surfacing failures.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Sound> {
        if &read4(&mut reader)? != b"RIFF" {
            bail!("not a RIFF stream");
        }
        read_u32(&mut reader)?; // overall size, unused
        if &read4(&mut reader)? != b"WAVE" {
            bail!("not a WAVE stream");
        }
        if &read4(&mut reader)? != b"fmt " {
            bail!("missing fmt chunk");
        }

        let fmt_size = read_u32(&mut reader)?;
        let _format_tag = read_u16(&mut reader)?;
        let channels = read_u16(&mut reader)?;
        let sample_rate = read_u32(&mut reader)?;
        let _avg_bytes_per_sec = read_u32(&mut reader)?;
        let _block_align = read_u16(&mut reader)?;
        let bits_per_sample = read_u16(&mut reader)?;
        if fmt_size > 16 {
            reader.seek(SeekFrom::Current(i64::from(fmt_size) - 16))?;
        }

        if sample_rate != SAMPLE_RATE {
            bail!("unsupported sample rate {sample_rate}");
        }
        if channels == 0 {
            bail!("zero channels");
        }

        // Skip non-data chunks until the sample payload.
        let data_size = loop {
            let id = read4(&mut reader).context("no data chunk")?;
            let size = read_u32(&mut reader)?;
            if &id == b"data" {
                break size;
            }
            reader.seek(SeekFrom::Current(i64::from(size)))?;
        };

        let bytes_per_sample = match bits_per_sample {
            8 | 16 | 24 | 32 => (bits_per_sample / 8) as usize,
            other => bail!("unsupported bit depth {other}"),
        };
        let total_samples = data_size as usize / bytes_per_sample;

        let mut samples = Vec::with_capacity(total_samples);
        let mut raw = vec![0u8; total_samples * bytes_per_sample];
        reader.read_exact(&mut raw).context("sample data truncated")?;

        for chunk in raw.chunks_exact(bytes_per_sample) {
            let sample = match bytes_per_sample {
                1 => (chunk[0] as f32 * (i16::MAX as f32 / u8::MAX as f32)) as i16,
                2 => i16::from_le_bytes([chunk[0], chunk[1]]),
                3 => {
                    let n = (chunk[0] as i32) | (chunk[1] as i32) << 8 | (chunk[2] as i32) << 16;
                    let n = (n << 8) >> 8; // sign-extend 24 bits
                    (n as f32 * (i16::MAX as f32 / (1 << 23) as f32)) as i16
                }
                4 => {
                    let n = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
                    (n as f32 * (i16::MAX as f32 / i32::MAX as f32)) as i16
                }
                _ => unreachable!(),
            };
            samples.push(sample);
        }

        Ok(Sound {
            samples,
            channels,
            sample_rate,
            looped: false,
        })
    }

    /// Build a sound from raw interleaved samples (already at the mixer
    /// rate). Used by tests and generated audio.
    pub fn from_samples(samples: Vec<i16>, channels: u16) -> Sound {
        Sound {
            samples,
            channels: channels.max(1),
            sample_rate: SAMPLE_RATE,
            looped: false,
        }
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Frames in the waveform (samples per channel).
    pub fn frame_count(&self) -> u64 {
        (self.samples.len() / self.channels as usize) as u64
    }

    pub fn looped(&self) -> bool {
        self.looped
    }

    pub fn set_looped(&mut self, looped: bool) {
        self.looped = looped;
    }
}

fn read4<R: Read>(reader: &mut R) -> Result<[u8; 4]> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

fn read_u32<R: Read>(reader: &mut R) -> Result<u32> {
    Ok(u32::from_le_bytes(read4(reader)?))
}

fn read_u16<R: Read>(reader: &mut R) -> Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}
