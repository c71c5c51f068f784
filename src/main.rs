use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use srtscribe::engines::whisper::{Device, WhisperEngine, WhisperModelConfig};
use srtscribe::pipeline::{self, Request};
use srtscribe::TranscribeOptions;

#[derive(Parser, Debug)]
#[command(
    about = "Transcribe audio to SRT subtitles and frame-timecoded cliff notes",
    version
)]
struct Args {
    /// Input audio file (16 kHz mono WAV)
    input: PathBuf,

    /// Model size (e.g. tiny, base, small, medium, large-v3) or path to a
    /// GGML model file
    #[arg(long, default_value = "large-v3")]
    model_size: String,

    /// Device to run inference on
    #[arg(long, value_enum, default_value_t = DeviceChoice::Cuda)]
    device: DeviceChoice,

    /// Compute type hint forwarded to the model loader
    #[arg(long, default_value = "float16")]
    compute_type: String,

    /// Language code (e.g. en). If omitted, the model will auto-detect.
    #[arg(long)]
    language: Option<String>,

    /// Beam size for decoding
    #[arg(long, default_value_t = 5)]
    beam_size: i32,

    /// Directory for outputs (default: same as input file)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Frame rate used for the plain-text timecodes
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DeviceChoice {
    Cuda,
    Cpu,
}

impl From<DeviceChoice> for Device {
    fn from(choice: DeviceChoice) -> Self {
        match choice {
            DeviceChoice::Cuda => Device::Cuda,
            DeviceChoice::Cpu => Device::Cpu,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    // Fail on a bad input path before paying for model loading.
    if !args.input.is_file() {
        return Err(format!("Input not found: {}", args.input.display()).into());
    }

    println!(
        "Loading model '{}' on {:?} ({})...",
        args.model_size, args.device, args.compute_type
    );
    let mut engine = WhisperEngine::load(&WhisperModelConfig {
        model: args.model_size,
        device: args.device.into(),
        compute_type: args.compute_type,
    })?;

    println!("Transcribing: {}", args.input.display());
    let request = Request {
        input: args.input,
        output_dir: args.output_dir,
        fps: args.fps,
        options: TranscribeOptions {
            beam_size: args.beam_size,
            language: args.language,
            vad_filter: true,
        },
    };
    let outcome = pipeline::run(&mut engine, &request)?;

    println!(
        "Detected language: {} (p={:.3})",
        outcome.info.language, outcome.info.language_probability
    );
    println!("Got {} segments", outcome.segment_count);
    println!(
        "Wrote:\n  {}\n  {}",
        outcome.paths.srt.display(),
        outcome.paths.txt.display()
    );

    Ok(())
}
