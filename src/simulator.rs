use crate::command::build_queue;
use crate::config::Config;
use crate::dispatch::{dispatch, validate};
use crate::error::SimError;
use crate::grid::{Grid, Snapshot};
use crate::run_log::RunLog;
use log::info;
use std::fs;
use std::path::Path;

/// Result of a run that completed without a fatal error
#[derive(Debug)]
pub struct RunOutcome {
    /// One snapshot per REPORT, in script order
    pub reports: Vec<Snapshot>,
    pub log: RunLog,
    pub grid: Snapshot,
}

/// Read the script at `path`, one command per line
pub fn read_script(path: &Path) -> Result<Vec<String>, SimError> {
    let contents = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Build, validate and dispatch the command queue for `lines` on a fresh grid
pub fn run_script<S: AsRef<str>>(lines: &[S], config: &Config) -> Result<RunOutcome, SimError> {
    let queue = build_queue(lines)?;
    validate(&queue)?;

    let mut grid = Grid::new(config.grid.rows, config.grid.cols)?;
    info!("{}x{} grid initialized", grid.rows, grid.cols);

    let mut log = RunLog::new();
    let reports = dispatch(&queue, &mut grid, &mut log)?;

    let snapshot = grid.snapshot();
    log.finish(snapshot.clone());
    info!("{}", log.summary());

    Ok(RunOutcome {
        reports,
        log,
        grid: snapshot,
    })
}
