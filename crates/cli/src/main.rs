#![deny(unsafe_code)]
//! CLI binary for the flow field.
//!
//! Subcommands:
//! - `window` — run interactively in a resizable window
//! - `render` — run N frames headless, write the last one as PNG
//! - `params` — print the parameter schema

mod driver;
mod error;
#[cfg(feature = "window")]
mod window;

use clap::{Parser, Subcommand};
use error::CliError;
use flowfield_core::{Engine, EngineError, Seed};
use flowfield_particles::{FlowEngine, FlowParams, ENGINE_NAME};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "flowfield", about = "Noise-steered particle flow field")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open a window and animate until Escape or close.
    #[cfg(feature = "window")]
    Window {
        /// Window width in pixels.
        #[arg(short = 'W', long, default_value_t = 500)]
        width: usize,

        /// Window height in pixels.
        #[arg(short = 'H', long, default_value_t = 500)]
        height: usize,

        /// PRNG seed for placement and noise.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Frame rate cap.
        #[arg(long, default_value_t = 60)]
        fps: usize,

        /// Engine parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Run N frames without a window and write the last frame as PNG.
    Render {
        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 500)]
        width: usize,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 500)]
        height: usize,

        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 600)]
        frames: usize,

        /// PRNG seed for placement and noise.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Engine parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Replay a saved seed file; overrides size, seed, frames and params.
        #[arg(long)]
        seed_file: Option<PathBuf>,

        /// Write the run's seed file here.
        #[arg(long)]
        save_seed: Option<PathBuf>,
    },
    /// Print every engine parameter with its default and range.
    Params,
}

fn parse_params(raw: &str) -> Result<serde_json::Value, CliError> {
    serde_json::from_str(raw).map_err(CliError::Params)
}

/// Resolves the run description from a seed file or from the flags.
fn resolve_seed(
    seed_file: Option<PathBuf>,
    width: usize,
    height: usize,
    seed: u64,
    frames: usize,
    params: &str,
) -> Result<Seed, CliError> {
    if let Some(path) = seed_file {
        let loaded = Seed::load(&path).map_err(CliError::replay(&path))?;
        if loaded.engine != ENGINE_NAME {
            return Err(CliError::replay(&path)(EngineError::UnknownEngine(
                loaded.engine,
            )));
        }
        return Ok(loaded);
    }
    let mut s = Seed::new(ENGINE_NAME, width, height, seed);
    s.params = parse_params(params)?;
    s.steps = frames;
    s.validate()?;
    Ok(s)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Params => {
            let schema = FlowParams::schema();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&schema)?);
            } else if let Some(entries) = schema.as_object() {
                for (name, info) in entries {
                    println!(
                        "  {name:<16} default {:<10} {}",
                        info["default"].to_string(),
                        info["description"].as_str().unwrap_or_default()
                    );
                }
            }
        }
        #[cfg(feature = "window")]
        Command::Window {
            width,
            height,
            seed,
            fps,
            params,
        } => {
            let params = parse_params(&params)?;
            let mut engine = FlowEngine::from_json(width, height, seed, &params)?;
            let frames = window::run(&mut engine, seed, fps)?;
            if cli.json {
                let info = serde_json::json!({
                    "frames": frames,
                    "params": engine.params(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            }
        }
        Command::Render {
            width,
            height,
            frames,
            seed,
            params,
            output,
            seed_file,
            save_seed,
        } => {
            let spec = resolve_seed(seed_file, width, height, seed, frames, &params)?;
            let mut engine = FlowEngine::from_json(spec.width, spec.height, spec.seed, &spec.params)?;

            let raster = driver::run_headless(&mut engine, spec.steps)?;
            flowfield_core::snapshot::write_png(&raster, &output)
                .map_err(CliError::output(&output))?;
            if let Some(path) = save_seed {
                spec.save(&path).map_err(CliError::output(&path))?;
            }

            if cli.json {
                let info = serde_json::json!({
                    "engine": spec.engine,
                    "width": spec.width,
                    "height": spec.height,
                    "frames": spec.steps,
                    "seed": spec.seed,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} ({}x{}, {} frames, seed {}) -> {}",
                    spec.engine,
                    spec.width,
                    spec.height,
                    spec.steps,
                    spec.seed,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
