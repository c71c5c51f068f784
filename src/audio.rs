//! WAV decoding for the whisper engine.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("failed to read wav: {0}")]
    Wav(#[from] hound::Error),
    #[error(
        "expected 16 kHz mono 16-bit PCM, found {channels} channel(s) at {sample_rate} Hz, \
         {bits_per_sample}-bit {sample_format:?}"
    )]
    UnsupportedSpec {
        channels: u16,
        sample_rate: u32,
        bits_per_sample: u16,
        sample_format: hound::SampleFormat,
    },
}

/// Read a 16 kHz mono 16-bit PCM WAV file into samples normalized to
/// `[-1.0, 1.0]`, the format whisper.cpp expects.
pub fn read_wav_samples(path: &Path) -> Result<Vec<f32>, AudioError> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    if spec.channels != 1
        || spec.sample_rate != 16_000
        || spec.bits_per_sample != 16
        || spec.sample_format != hound::SampleFormat::Int
    {
        return Err(AudioError::UnsupportedSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: spec.sample_format,
        });
    }

    let samples: Result<Vec<f32>, _> = reader
        .samples::<i16>()
        .map(|sample| sample.map(|s| s as f32 / i16::MAX as f32))
        .collect();

    Ok(samples?)
}
