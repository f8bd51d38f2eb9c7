use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("Config error: {msg}")]
    Config { msg: String },

    #[error("Output directory error: {msg}")]
    OutputDir { msg: String, path: PathBuf },

    #[error("I/O error: {msg}")]
    Io { msg: String, path: PathBuf },

    #[error("Index out of range: index {index} on {aggregate} (member_count = {size})")]
    IndexOutOfRange { aggregate: String, index: usize, size: usize },
}

impl GenError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config { msg: msg.into() }
    }

    pub fn output_dir(msg: impl Into<String>, path: &Path) -> Self {
        Self::OutputDir { msg: msg.into(), path: path.to_path_buf() }
    }

    pub fn io(msg: impl Into<String>, path: &Path) -> Self {
        Self::Io { msg: msg.into(), path: path.to_path_buf() }
    }

    pub fn index_out_of_range(aggregate: impl Into<String>, index: usize, size: usize) -> Self {
        Self::IndexOutOfRange { aggregate: aggregate.into(), index, size }
    }

    /// Short tag used in the `error[...]` prefix.
    pub fn kind(&self) -> &'static str {
        match self {
            GenError::Config { .. } => "config",
            GenError::OutputDir { .. } => "output",
            GenError::Io { .. } => "io",
            GenError::IndexOutOfRange { .. } => "index",
        }
    }
}

/// Render a GenError for terminal output.
pub fn render_error(err: &GenError) {
    eprintln!("{}", format_error(err));
}

/// Format a GenError the way `render_error` prints it, without the trailing newline.
pub fn format_error(err: &GenError) -> String {
    match err {
        GenError::Config { msg } => format!("error[{}]: {msg}", err.kind()),
        GenError::OutputDir { msg, path } | GenError::Io { msg, path } => {
            format!("error[{}]: {msg}\n  --> {}", err.kind(), path.display())
        }
        GenError::IndexOutOfRange { .. } => format!("error[{}]: {err}", err.kind()),
    }
}
