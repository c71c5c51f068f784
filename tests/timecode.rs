use srtscribe::timecode::{frame_timestamp, srt_timestamp};

fn srt_fields(timestamp: &str) -> (u64, u64, u64, u64) {
    let (clock, millis) = timestamp.split_once(',').expect("missing millis field");
    let parts: Vec<u64> = clock.split(':').map(|p| p.parse().unwrap()).collect();
    assert_eq!(parts.len(), 3, "unexpected timestamp shape: {timestamp}");
    (parts[0], parts[1], parts[2], millis.parse().unwrap())
}

fn frame_fields(timecode: &str) -> (u64, u64, u64, u64) {
    let parts: Vec<u64> = timecode.split(':').map(|p| p.parse().unwrap()).collect();
    assert_eq!(parts.len(), 4, "unexpected timecode shape: {timecode}");
    (parts[0], parts[1], parts[2], parts[3])
}

#[test]
fn srt_timestamp_formats_known_offsets() {
    assert_eq!(srt_timestamp(0.0), "00:00:00,000");
    assert_eq!(srt_timestamp(0.5), "00:00:00,500");
    assert_eq!(srt_timestamp(1.5), "00:00:01,500");
    assert_eq!(srt_timestamp(3.25), "00:00:03,250");
    assert_eq!(srt_timestamp(59.999), "00:00:59,999");
    assert_eq!(srt_timestamp(3599.5), "00:59:59,500");
}

#[test]
fn srt_timestamp_truncates_the_fractional_part() {
    // The stored double for 3661.999 sits just below .999; truncation keeps
    // every digit it actually has rather than rounding up.
    assert_eq!(srt_timestamp(3661.999), "01:01:01,998");
    assert_eq!(srt_timestamp(61.01), "00:01:01,009");
}

#[test]
fn srt_timestamp_does_not_wrap_hours() {
    assert_eq!(srt_timestamp(30.0 * 3600.0 + 0.75), "30:00:00,750");
    assert_eq!(srt_timestamp(108000.75), "30:00:00,750");
}

#[test]
fn srt_timestamp_fields_recompose_to_the_truncated_offset() {
    let offsets = [
        0.0, 0.001, 0.5, 1.5, 3.25, 59.999, 61.01, 3599.5, 3661.999, 7322.004, 86400.0, 108000.75,
    ];
    for seconds in offsets {
        let (hours, minutes, secs, millis) = srt_fields(&srt_timestamp(seconds));
        assert!(minutes < 60, "minutes out of range for {seconds}");
        assert!(secs < 60, "seconds out of range for {seconds}");
        assert!(millis < 1000, "millis out of range for {seconds}");
        assert_eq!(
            hours * 3600 + minutes * 60 + secs,
            seconds as u64,
            "whole-second decomposition wrong for {seconds}"
        );
    }
}

#[test]
fn frame_timestamp_formats_known_offsets() {
    assert_eq!(frame_timestamp(0.0, 60), "00:00:00:00");
    assert_eq!(frame_timestamp(1.5, 60), "00:00:01:30");
    assert_eq!(frame_timestamp(3.25, 24), "00:00:03:06");
}

#[test]
fn frame_timestamp_rounds_to_the_nearest_frame() {
    // 3661.999 s at 30 fps is 109859.97 frames, which rounds up to a whole
    // second; the SRT form of the same offset stays at 01:01:01.
    assert_eq!(frame_timestamp(3661.999, 30), "01:01:02:00");
    assert_eq!(srt_timestamp(3661.999), "01:01:01,998");
}

#[test]
fn frame_timestamp_rounds_ties_away_from_zero() {
    // 0.025 * 20 is exactly half a frame.
    assert_eq!(frame_timestamp(0.025, 20), "00:00:00:01");
}

#[test]
fn frame_timestamp_fields_recompose_to_the_rounded_frame_count() {
    let offsets = [0.0, 0.49, 1.5, 2.984, 59.999, 3599.5, 3661.999, 108000.75];
    for fps in [24u32, 30, 60] {
        for seconds in offsets {
            let (hours, minutes, secs, frames) = frame_fields(&frame_timestamp(seconds, fps));
            assert!(minutes < 60, "minutes out of range for {seconds}@{fps}");
            assert!(secs < 60, "seconds out of range for {seconds}@{fps}");
            assert!(frames < u64::from(fps), "frames out of range for {seconds}@{fps}");
            let total_frames = (seconds * f64::from(fps)).round() as u64;
            assert_eq!(
                (hours * 3600 + minutes * 60 + secs) * u64::from(fps) + frames,
                total_frames,
                "frame decomposition wrong for {seconds}@{fps}"
            );
        }
    }
}
