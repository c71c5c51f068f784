//! Timecode formatting for transcript output.
//!
//! Two independent conversions from a second offset to a string. They use
//! different rounding rules on purpose: the SRT form truncates fractional
//! seconds while the frame form rounds a total frame count to nearest, so
//! the two can disagree near a rounding boundary. Downstream files depend
//! on the exact numbers each form produces; do not unify them.

/// Format a second offset as an SRT timestamp, `HH:MM:SS,mmm`.
///
/// Whole seconds are truncated, never rounded, and the millisecond field is
/// derived from the original fractional part. Hours are not wrapped at 24.
pub fn srt_timestamp(seconds: f64) -> String {
    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    let millis = ((seconds - seconds.trunc()) * 1000.0) as u64;
    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}

/// Format a second offset as a frame timecode, `HH:MM:SS:FF`.
///
/// The offset is rounded to the nearest frame (ties away from zero) before
/// being split into fields, so the seconds field comes from the frame count
/// rather than from truncation.
pub fn frame_timestamp(seconds: f64, fps: u32) -> String {
    let fps = u64::from(fps);
    let total_frames = (seconds * fps as f64).round() as u64;
    let frames = total_frames % fps;
    let total_seconds = total_frames / fps;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}:{frames:02}")
}
