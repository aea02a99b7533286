//! Failures of the `flowfield` binary, each with its own exit code.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: the engine rejected its configuration (bad size, bad color param)
//! - 11: the PNG snapshot or saved seed file could not be written
//! - 12: `--params` is not valid JSON
//! - 13: JSON output could not be produced
//! - 14: the window could not be opened or refused a frame
//! - 15: a `--seed-file` could not be replayed

use flowfield_core::EngineError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Engine(EngineError),

    #[error("cannot write {}: {source}", path.display())]
    Output { path: PathBuf, source: EngineError },

    #[error("invalid --params JSON: {0}")]
    Params(serde_json::Error),

    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("window: {0}")]
    Window(String),

    #[error("cannot replay {}: {source}", path.display())]
    Replay { path: PathBuf, source: EngineError },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Engine(_) => 10,
            CliError::Output { .. } => 11,
            CliError::Params(_) => 12,
            CliError::Json(_) => 13,
            CliError::Window(_) => 14,
            CliError::Replay { .. } => 15,
        }
    }

    pub fn output(path: impl Into<PathBuf>) -> impl FnOnce(EngineError) -> Self {
        let path = path.into();
        move |source| CliError::Output { path, source }
    }

    pub fn replay(path: impl Into<PathBuf>) -> impl FnOnce(EngineError) -> Self {
        let path = path.into();
        move |source| CliError::Replay { path, source }
    }
}

/// A surface failure mid-run is the window refusing a frame; anything else
/// the engine raised is a configuration problem.
impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Surface(msg) => CliError::Window(msg),
            other => CliError::Engine(other),
        }
    }
}
