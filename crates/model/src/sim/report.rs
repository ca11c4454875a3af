//! Result artifact persistence.
//!
//! Writes the run's artifacts into the configured results directory: a
//! `results.json` with the summary metrics under their stable field names,
//! and a `latencies.csv` with one microsecond value per request so the
//! latency distribution can be analyzed outside the model. The model never
//! renders anything itself; these files are the boundary.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::common::Error;
use crate::stats::Summary;

/// File name of the JSON summary artifact.
pub const RESULTS_FILE: &str = "results.json";

/// File name of the CSV latency artifact.
pub const LATENCIES_FILE: &str = "latencies.csv";

/// Writes the summary as pretty-printed JSON into `dir`, creating the
/// directory if needed.
///
/// # Errors
///
/// Returns [`Error::ResultsWrite`] carrying the offending path if the
/// directory cannot be created or the file cannot be written.
pub fn write_results(dir: &Path, summary: &Summary) -> Result<PathBuf, Error> {
    ensure_dir(dir)?;
    let path = dir.join(RESULTS_FILE);

    let json = serde_json::to_string_pretty(summary).map_err(|source| Error::ResultsWrite {
        path: path.clone(),
        source: std::io::Error::other(source),
    })?;

    fs::write(&path, json).map_err(|source| Error::ResultsWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Writes every request latency as microseconds into `dir/latencies.csv`,
/// creating the directory if needed.
///
/// The file carries a `latency_us` header followed by one row per request
/// in merge order.
///
/// # Errors
///
/// Returns [`Error::ResultsWrite`] carrying the offending path if the
/// directory cannot be created or the file cannot be written.
pub fn write_latencies(dir: &Path, latencies: &[Duration]) -> Result<PathBuf, Error> {
    ensure_dir(dir)?;
    let path = dir.join(LATENCIES_FILE);

    let mut csv = String::with_capacity(latencies.len() * 8 + 16);
    csv.push_str("latency_us\n");
    for latency in latencies {
        // Writing into a String cannot fail.
        let _ = writeln!(csv, "{:.3}", latency.as_secs_f64() * 1e6);
    }

    fs::write(&path, csv).map_err(|source| Error::ResultsWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Creates the results directory (and parents) if it does not exist.
fn ensure_dir(dir: &Path) -> Result<(), Error> {
    fs::create_dir_all(dir).map_err(|source| Error::ResultsWrite {
        path: dir.to_path_buf(),
        source,
    })
}
