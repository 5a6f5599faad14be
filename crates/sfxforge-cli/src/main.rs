//! sfxforge CLI - render procedural sound effects to WAV files

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use sfxforge_backend_audio::{ConvolutionMethod, SampleFormat};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use sfxforge_cli::commands;
use sfxforge_cli::commands::mixdown::MixdownArgs;
use sfxforge_cli::commands::render::RenderArgs;

/// sfxforge - Procedural sound effect synthesis
#[derive(Parser)]
#[command(name = "sfxforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a parameter file or preset to a WAV file
    Render {
        /// Path to a JSON parameter file
        #[arg(short, long, conflicts_with = "preset")]
        params: Option<String>,

        /// Name of a built-in preset
        #[arg(long)]
        preset: Option<String>,

        /// Output WAV path
        #[arg(short, long)]
        out: String,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100.0)]
        sample_rate: f64,

        /// Seed overriding the one in the parameters
        #[arg(long)]
        seed: Option<u32>,

        /// Sample encoding
        #[arg(long, default_value = "pcm16", value_parser = ["pcm16", "float32"])]
        format: String,

        /// Reverb convolution algorithm
        #[arg(long, default_value = "direct", value_parser = ["direct", "fft"])]
        convolution: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render the layers of a manifest and mix them into one WAV file
    Mixdown {
        /// Path to the mixdown manifest (JSON)
        #[arg(short, long)]
        manifest: String,

        /// Output WAV path
        #[arg(short, long)]
        out: String,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100.0)]
        sample_rate: f64,

        /// Sample encoding
        #[arg(long, default_value = "pcm16", value_parser = ["pcm16", "float32"])]
        format: String,

        /// Reverb convolution algorithm
        #[arg(long, default_value = "direct", value_parser = ["direct", "fft"])]
        convolution: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a parameter file without rendering
    Validate {
        /// Path to a JSON parameter file
        #[arg(short, long, conflicts_with = "preset")]
        params: Option<String>,

        /// Name of a built-in preset
        #[arg(long)]
        preset: Option<String>,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 44100.0)]
        sample_rate: f64,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List built-in presets
    Presets {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_convolution(name: &str) -> Result<ConvolutionMethod> {
    match name {
        "direct" => Ok(ConvolutionMethod::Direct),
        "fft" => Ok(ConvolutionMethod::Fft),
        other => Err(anyhow!("unknown convolution method '{}'", other)),
    }
}

fn parse_format(name: &str) -> Result<SampleFormat> {
    name.parse::<SampleFormat>().map_err(|e| anyhow!(e))
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Render {
            params,
            preset,
            out,
            sample_rate,
            seed,
            format,
            convolution,
            json,
        } => {
            let args = RenderArgs {
                params: params.as_deref().map(Path::new),
                preset: preset.as_deref(),
                out: Path::new(&out),
                sample_rate,
                seed,
                format: parse_format(&format)?,
                convolution: parse_convolution(&convolution)?,
            };
            commands::render::run(&args, json)
        }
        Commands::Mixdown {
            manifest,
            out,
            sample_rate,
            format,
            convolution,
            json,
        } => {
            let args = MixdownArgs {
                manifest: Path::new(&manifest),
                out: Path::new(&out),
                sample_rate,
                format: parse_format(&format)?,
                convolution: parse_convolution(&convolution)?,
            };
            commands::mixdown::run(&args, json)
        }
        Commands::Validate {
            params,
            preset,
            sample_rate,
            json,
        } => commands::validate::run(
            params.as_deref().map(Path::new),
            preset.as_deref(),
            sample_rate,
            json,
        ),
        Commands::Presets { json } => commands::presets::run(json),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
