use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that abort a run. Skipped commands are not errors and
/// never show up here.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("no script path given")]
    MissingScript,
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line_no}: {reason} in {line:?}")]
    Parse {
        line_no: usize,
        line: String,
        reason: String,
    },
    #[error("command queue is empty, expected at least one of PLACE, BLOCK, EXPLORE or REPORT")]
    EmptyQueue,
    #[error("cell ({row},{col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        row: i32,
        col: i32,
        rows: i32,
        cols: i32,
    },
    #[error("grid extent {rows}x{cols} must be positive and hold at most {max} cells", max = crate::grid::MAX_CELLS)]
    InvalidExtent { rows: i32, cols: i32 },
    #[error("invalid config {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}
