//! JSON file discovery and loading for the auction analyzer.
//!
//! Reads one [`SecurityRecord`] per `.json` file from the data directory.
//! A file that fails to read or parse is logged and skipped; it still counts
//! toward the candidate-file total so the report can surface the gap.

use std::path::{Path, PathBuf};

use gsec_core::error::GsecError;
use gsec_core::models::SecurityRecord;
use tracing::{debug, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// The result of scanning one data directory.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Records that parsed successfully, in sorted-path order.
    pub records: Vec<SecurityRecord>,
    /// Number of candidate `.json` files found, parsed or not.
    pub file_count: usize,
}

/// Find all `.json` files directly under `data_dir`, sorted by path.
pub fn find_json_files(data_dir: &Path) -> Vec<PathBuf> {
    if !data_dir.exists() {
        warn!("Data directory does not exist: {}", data_dir.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == "json")
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Load every auction record under `data_dir`.
///
/// Parse failures are emitted as diagnostics on the error stream and the
/// affected file's record is excluded; the run never aborts. An absent or
/// empty directory yields an empty outcome.
pub fn load_records(data_dir: &Path) -> LoadOutcome {
    let files = find_json_files(data_dir);
    let file_count = files.len();

    let mut records: Vec<SecurityRecord> = Vec::with_capacity(file_count);
    for path in &files {
        match read_record(path) {
            Ok(record) => records.push(record),
            Err(e) => warn!("{}", e),
        }
    }

    debug!(
        "Loaded {} records from {} candidate files in {}",
        records.len(),
        file_count,
        data_dir.display()
    );

    LoadOutcome {
        records,
        file_count,
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Read and parse a single record file.
fn read_record(path: &Path) -> Result<SecurityRecord, GsecError> {
    let contents = std::fs::read_to_string(path).map_err(|source| GsecError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| GsecError::RecordParse {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
