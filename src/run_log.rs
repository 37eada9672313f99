use crate::command::Command;
use crate::grid::Snapshot;
use serde::Serialize;
use std::path::Path;

/// What happened to a single queued command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Marker written to the grid
    Applied,
    /// Target cell already held a marker, nothing written
    Occupied,
    /// Coordinate outside the grid, command skipped
    OutOfBounds,
    /// Grid snapshot emitted
    Reported,
}

/// Logged command with its position in the queue
#[derive(Clone, Debug, Serialize)]
pub struct LoggedCommand {
    pub index: usize,
    pub command: Command,
    pub outcome: Outcome,
}

/// Per-run ledger of command outcomes, in queue order
#[derive(Clone, Debug, Default, Serialize)]
pub struct RunLog {
    commands: Vec<LoggedCommand>,
    final_grid: Option<Snapshot>,
}

impl RunLog {
    pub fn new() -> Self {
        RunLog::default()
    }

    pub fn record(&mut self, command: Command, outcome: Outcome) {
        let index = self.commands.len();
        self.commands.push(LoggedCommand {
            index,
            command,
            outcome,
        });
    }

    /// Attach the grid as it stood when the run finished
    pub fn finish(&mut self, grid: Snapshot) {
        self.final_grid = Some(grid);
    }

    pub fn entries(&self) -> &[LoggedCommand] {
        &self.commands
    }

    pub fn final_grid(&self) -> Option<&Snapshot> {
        self.final_grid.as_ref()
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.commands
            .iter()
            .filter(|logged| logged.outcome == outcome)
            .count()
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} commands: {} applied, {} occupied, {} out of bounds, {} reports",
            self.commands.len(),
            self.count(Outcome::Applied),
            self.count(Outcome::Occupied),
            self.count(Outcome::OutOfBounds),
            self.count(Outcome::Reported)
        )
    }
}
