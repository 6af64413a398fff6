//! Fatal pipeline failures.
//!
//! Per-asset normalization failures are not represented here; they are
//! aggregated into the build summary and the batch continues.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort the whole batch.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No `*.svg` assets were found in the input directory.
    #[error("no SVG assets found in '{0}'")]
    EmptyInput(PathBuf),

    /// Two assets derived the same lookup key. Raised before any artifact
    /// is written; a silently overwritten mapping would be a correctness
    /// bug.
    #[error("duplicate lookup key '{key}' derived from '{first}' and '{second}'")]
    DuplicateKey {
        /// The colliding lookup key.
        key: String,
        /// Source filename that produced the key first.
        first: String,
        /// Source filename that collided with it.
        second: String,
    },

    /// Filesystem access failed outside the per-asset fail-soft path.
    #[error("failed to access '{path}': {source}")]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
