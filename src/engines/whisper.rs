use std::error::Error;
use std::path::{Path, PathBuf};

use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio::{self, AudioError};
use crate::{Segment, TranscribeOptions, Transcription, TranscriptionEngine, TranscriptionInfo};

/// Where whisper.cpp runs inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Cuda,
    Cpu,
}

/// Model-loading knobs, mirroring the command-line surface.
#[derive(Debug, Clone)]
pub struct WhisperModelConfig {
    /// Size name (e.g. `large-v3`) resolved under the model directory, or a
    /// direct path to a GGML model file.
    pub model: String,
    pub device: Device,
    /// Quantization hint. GGML files bake their quantization into the file,
    /// so this is recorded in the log rather than applied.
    pub compute_type: String,
}

impl Default for WhisperModelConfig {
    fn default() -> Self {
        Self {
            model: "large-v3".to_string(),
            device: Device::Cuda,
            compute_type: "float16".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WhisperEngineError {
    #[error("model '{model}' not found (no such file, and no {candidate})")]
    ModelNotFound { model: String, candidate: PathBuf },
    #[error(transparent)]
    Whisper(#[from] whisper_rs::WhisperError),
    #[error(transparent)]
    Audio(#[from] AudioError),
}

/// whisper.cpp-backed [`TranscriptionEngine`].
pub struct WhisperEngine {
    context: WhisperContext,
}

impl WhisperEngine {
    /// Load a GGML model as described by `config`.
    pub fn load(config: &WhisperModelConfig) -> Result<Self, WhisperEngineError> {
        let model_path = resolve_model_path(&config.model)?;
        log::info!(
            "loading model {} on {:?} (compute type hint: {})",
            model_path.display(),
            config.device,
            config.compute_type
        );

        let mut context_params = WhisperContextParameters::default();
        context_params.use_gpu(config.device == Device::Cuda);

        let context =
            WhisperContext::new_with_params(&model_path.to_string_lossy(), context_params)?;
        Ok(Self { context })
    }
}

impl TranscriptionEngine for WhisperEngine {
    fn transcribe_file(
        &mut self,
        path: &Path,
        options: &TranscribeOptions,
    ) -> Result<Transcription, Box<dyn Error>> {
        let samples = audio::read_wav_samples(path)?;

        let mut params = FullParams::new(SamplingStrategy::BeamSearch {
            beam_size: options.beam_size,
            patience: -1.0,
        });
        // "auto" makes whisper.cpp run language detection on the first window.
        params.set_language(options.language.as_deref().or(Some("auto")));
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_suppress_blank(options.vad_filter);
        params.set_suppress_non_speech_tokens(options.vad_filter);
        if options.vad_filter {
            params.set_no_speech_thold(0.2);
        }

        let mut state = self.context.create_state()?;
        state.full(params, &samples)?;

        let num_segments = state.full_n_segments()?;
        let mut segments = Vec::with_capacity(num_segments as usize);
        for i in 0..num_segments {
            let text = state.full_get_segment_text(i)?;
            // whisper.cpp reports timestamps in centiseconds.
            let start = state.full_get_segment_t0(i)? as f64 / 100.0;
            let end = state.full_get_segment_t1(i)? as f64 / 100.0;
            segments.push(Segment { start, end, text });
        }

        let language = match options.language.as_deref() {
            Some(code) => code.to_string(),
            None => {
                let lang_id = state.full_lang_id_from_state()?;
                whisper_rs::get_lang_str(lang_id)
                    .unwrap_or("unknown")
                    .to_string()
            }
        };
        // The bindings expose no detection confidence, so certainty is
        // reported either way.
        let info = TranscriptionInfo {
            language,
            language_probability: 1.0,
        };

        Ok(Transcription {
            info,
            segments: Box::new(segments.into_iter()),
        })
    }
}

/// Accept either a direct path to a GGML file or a bare size name like
/// `large-v3`, resolved as `ggml-<size>.bin` under `$WHISPER_MODEL_DIR`
/// (default `models/`).
fn resolve_model_path(model: &str) -> Result<PathBuf, WhisperEngineError> {
    let direct = PathBuf::from(model);
    if direct.is_file() {
        return Ok(direct);
    }

    let model_dir = std::env::var_os("WHISPER_MODEL_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("models"));
    let candidate = model_dir.join(format!("ggml-{model}.bin"));
    if candidate.is_file() {
        return Ok(candidate);
    }

    Err(WhisperEngineError::ModelNotFound {
        model: model.to_string(),
        candidate,
    })
}
