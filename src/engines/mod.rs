//! Speech recognition engines.
//!
//! The pipeline only depends on the [`TranscriptionEngine`] trait; the one
//! engine shipped here wraps whisper.cpp through the `whisper-rs` bindings
//! and works with GGML model files (e.g. `ggml-large-v3.bin`).
//!
//! [`TranscriptionEngine`]: crate::TranscriptionEngine

pub mod whisper;
