//! Turn timed speech-recognition output into SRT subtitles and
//! frame-timecoded plain-text notes.
//!
//! Speech recognition itself happens behind the [`TranscriptionEngine`]
//! trait; the bundled implementation wraps whisper.cpp. This crate owns the
//! timecode arithmetic, the two transcript file formats, and the pipeline
//! that ties an engine invocation to the writers.

pub mod audio;
pub mod engines;
pub mod pipeline;
pub mod timecode;
pub mod writer;

use std::path::Path;

/// One recognized utterance with its position in the source media.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Offset of the start of the utterance, in seconds.
    pub start: f64,
    /// Offset of the end of the utterance, in seconds. Always `>= start`.
    pub end: f64,
    /// Raw recognized text; may carry leading/trailing whitespace.
    pub text: String,
}

/// Per-run metadata reported by the engine alongside the segments.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionInfo {
    /// Language code of the detected (or caller-forced) language.
    pub language: String,
    /// Confidence of the language decision, in `[0.0, 1.0]`.
    pub language_probability: f32,
}

/// Decoding options forwarded to the engine for a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscribeOptions {
    /// Beam width for beam-search decoding.
    pub beam_size: i32,
    /// Language hint; `None` asks the engine to auto-detect.
    pub language: Option<String>,
    /// Skip regions the engine considers silence.
    pub vad_filter: bool,
}

impl Default for TranscribeOptions {
    fn default() -> Self {
        Self {
            beam_size: 5,
            language: None,
            vad_filter: true,
        }
    }
}

/// Result of one engine invocation: run metadata plus the segment stream.
///
/// The stream yields segments in chronological order and can only be
/// traversed once; collect it before handing it to more than one consumer.
pub struct Transcription {
    pub info: TranscriptionInfo,
    pub segments: Box<dyn Iterator<Item = Segment>>,
}

/// Minimal interface the pipeline uses to request a transcript.
pub trait TranscriptionEngine {
    /// Transcribe the media file at `path` with the given options.
    fn transcribe_file(
        &mut self,
        path: &Path,
        options: &TranscribeOptions,
    ) -> Result<Transcription, Box<dyn std::error::Error>>;
}
