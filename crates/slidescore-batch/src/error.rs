//! Error types for batch scoring.

use std::io;
use std::path::PathBuf;

use slidescore_core::AnalysisError;
use slidescore_dom::SnapshotError;
use thiserror::Error;

/// Errors that abort a whole batch before any unit runs.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The slides folder does not exist.
    #[error("folder not found: {}", path.display())]
    FolderNotFound {
        /// The folder that was asked for.
        path: PathBuf,
    },
    /// The slides folder could not be listed.
    #[error("failed to read folder {}: {source}", path.display())]
    ReadDir {
        /// The folder being listed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The worker pool could not be started.
    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Errors loading one snapshot file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        /// The snapshot file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file is not a render snapshot.
    #[error("failed to parse '{}': {source}", path.display())]
    Snapshot {
        /// The snapshot file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: SnapshotError,
    },
}

/// Why a single slide unit failed. Recorded in the report; the batch goes on.
#[derive(Debug, Error)]
pub enum UnitError {
    /// One of the two snapshots could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The snapshots loaded but could not be analysed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}
