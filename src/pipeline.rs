//! The end-to-end transcription run.
//!
//! One sequential pipeline: validate the input path, invoke the engine,
//! materialize its segment stream, then write the SRT and plain-text files.
//! There are no retries; any failure aborts the run, and segments are
//! materialized before either output file is opened.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::writer::{self, OutputPaths};
use crate::{Segment, TranscribeOptions, TranscriptionEngine, TranscriptionInfo};

/// Everything the pipeline needs for one run.
#[derive(Debug, Clone)]
pub struct Request {
    pub input: PathBuf,
    /// Destination directory override; `None` means next to the input.
    pub output_dir: Option<PathBuf>,
    /// Frame rate for the plain-text timecodes.
    pub fps: u32,
    pub options: TranscribeOptions,
}

impl Request {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: None,
            fps: 60,
            options: TranscribeOptions::default(),
        }
    }
}

/// What a successful run produced.
#[derive(Debug)]
pub struct Outcome {
    pub info: TranscriptionInfo,
    pub segment_count: usize,
    pub paths: OutputPaths,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input not found: {0}")]
    InputNotFound(PathBuf),
    #[error("transcription failed: {0}")]
    Engine(Box<dyn std::error::Error>),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Run one transcription end to end.
///
/// The engine is invoked exactly once. Its segment stream is collected into
/// an owned `Vec` before either writer runs, since both writers traverse the
/// sequence independently.
pub fn run(
    engine: &mut dyn TranscriptionEngine,
    request: &Request,
) -> Result<Outcome, PipelineError> {
    if !request.input.is_file() {
        return Err(PipelineError::InputNotFound(request.input.clone()));
    }

    let paths = OutputPaths::resolve(&request.input, request.output_dir.as_deref());

    log::info!("transcribing {}", request.input.display());
    let transcription = engine
        .transcribe_file(&request.input, &request.options)
        .map_err(PipelineError::Engine)?;

    let segments: Vec<Segment> = transcription.segments.collect();
    let info = transcription.info;
    log::info!(
        "detected language {} (p={:.3}), {} segment(s)",
        info.language,
        info.language_probability,
        segments.len()
    );

    write_file(&paths.srt, |path| writer::write_srt(&segments, path))?;
    write_file(&paths.txt, |path| {
        writer::write_txt(&segments, path, request.fps)
    })?;

    Ok(Outcome {
        info,
        segment_count: segments.len(),
        paths,
    })
}

fn write_file(
    path: &Path,
    write: impl FnOnce(&Path) -> std::io::Result<()>,
) -> Result<(), PipelineError> {
    write(path).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })
}
