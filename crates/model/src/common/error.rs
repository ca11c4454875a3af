//! Error types for configuration loading, benchmark execution, and results
//! persistence.
//!
//! Geometry problems (zero-sized caches, zero workers, and so on) are not
//! errors: they are clamped to safe minimums at construction time. What
//! remains is the genuinely fallible surface: reading and parsing a config
//! file, a worker thread dying mid-run, and writing result artifacts.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the model.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read from disk.
    #[error("failed to read config file `{path}`")]
    ConfigRead {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file was read but is not valid JSON for [`crate::Config`].
    #[error("failed to parse config file `{path}`")]
    ConfigParse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A benchmark worker panicked. The run is abandoned: a dead worker means
    /// the request budget was not processed and the summary would be a lie.
    #[error("benchmark worker {index} panicked; run aborted")]
    WorkerPanic {
        /// Zero-based index of the worker that died.
        index: usize,
    },

    /// A result artifact could not be written.
    #[error("failed to write results to `{path}`")]
    ResultsWrite {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
