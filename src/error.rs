use std::path::PathBuf;

use thiserror::Error;

/// Everything that can make a `check` fail. The first problem found wins;
/// errors are never aggregated.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File {} does not contain the start marker ({marker})", path.display())]
    StartMarkerNotFound { path: PathBuf, marker: String },

    #[error("File {} does not contain the end marker ({marker})", path.display())]
    EndMarkerNotFound { path: PathBuf, marker: String },

    #[error("The start marker appears after the end marker in file {}", path.display())]
    InvertedMarkers { path: PathBuf },

    #[error("The section between the start marker and end marker in file {} is empty", path.display())]
    EmptySection { path: PathBuf },

    #[error("The file {}:{line} differs from {}:{baseline_line}", path.display(), baseline_path.display())]
    Mismatch {
        path: PathBuf,
        line: usize,
        baseline_path: PathBuf,
        baseline_line: usize,
    },
}

pub type Result<T> = std::result::Result<T, CheckError>;
