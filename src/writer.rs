//! Transcript file formats.
//!
//! Both writers replace the target file wholesale and create any missing
//! parent directories first. Segment text is trimmed of leading/trailing
//! whitespace on output; internal whitespace is preserved verbatim.

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::timecode::{frame_timestamp, srt_timestamp};
use crate::Segment;

/// Destination files for one transcription run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub srt: PathBuf,
    pub txt: PathBuf,
}

impl OutputPaths {
    /// Place `<stem>.srt` and `<stem>.txt` next to each other, where `stem`
    /// is the input file name with its extension stripped. The directory is
    /// `output_dir` if given, else the input's own directory, else `.`.
    pub fn resolve(input: &Path, output_dir: Option<&Path>) -> Self {
        let dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => match input.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            },
        };

        let stem = input
            .file_stem()
            .unwrap_or_else(|| OsStr::new("transcript"))
            .to_string_lossy();

        Self {
            srt: dir.join(format!("{stem}.srt")),
            txt: dir.join(format!("{stem}.txt")),
        }
    }
}

/// Write numbered SRT blocks for `segments`, one per segment.
///
/// Sequence numbers are assigned by position (1, 2, 3, ...) regardless of
/// gaps or overlaps between segment times. An empty slice produces an empty
/// file.
pub fn write_srt(segments: &[Segment], path: &Path) -> io::Result<()> {
    let mut file = create_output_file(path)?;

    for (i, segment) in segments.iter().enumerate() {
        writeln!(file, "{}", i + 1)?;
        writeln!(
            file,
            "{} --> {}",
            srt_timestamp(segment.start),
            srt_timestamp(segment.end)
        )?;
        writeln!(file, "{}", segment.text.trim())?;
        writeln!(file)?;
    }

    file.flush()
}

/// Write one `[HH:MM:SS:FF] text` line per segment.
///
/// Only the segment's start time is represented; `end` does not appear in
/// this format. An empty slice produces an empty file.
pub fn write_txt(segments: &[Segment], path: &Path, fps: u32) -> io::Result<()> {
    let mut file = create_output_file(path)?;

    for segment in segments {
        writeln!(
            file,
            "[{}] {}",
            frame_timestamp(segment.start, fps),
            segment.text.trim()
        )?;
    }

    file.flush()
}

fn create_output_file(path: &Path) -> io::Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?))
}
