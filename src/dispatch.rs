use crate::bounds::in_bounds;
use crate::command::{Command, CommandQueue};
use crate::error::SimError;
use crate::grid::{Coordinate, Grid, Snapshot};
use crate::occupant::{HolderKind, Occupant};
use crate::run_log::{Outcome, RunLog};
use log::{debug, info, warn};

/// Reject a queue with nothing to run
pub fn validate(queue: &CommandQueue) -> Result<(), SimError> {
    if queue.is_empty() {
        warn!("command queue is empty");
        return Err(SimError::EmptyQueue);
    }
    Ok(())
}

fn applied(written: bool) -> Outcome {
    if written {
        Outcome::Applied
    } else {
        Outcome::Occupied
    }
}

fn handle_place(grid: &mut Grid, coordinate: Coordinate) -> Result<Outcome, SimError> {
    let written = grid.apply(&Occupant::new(HolderKind::Place, coordinate))?;
    Ok(applied(written))
}

fn handle_block(grid: &mut Grid, coordinate: Coordinate) -> Result<Outcome, SimError> {
    let written = grid.apply(&Occupant::new(HolderKind::Block, coordinate))?;
    Ok(applied(written))
}

/// Arrival marker first, then the sweep; sweeping first would erase the
/// arrival before it exists.
fn handle_explore(grid: &mut Grid, coordinate: Coordinate) -> Result<Outcome, SimError> {
    let written = grid.apply(&Occupant::new(HolderKind::Explore, coordinate))?;
    grid.advance_explorer();
    Ok(applied(written))
}

fn handle_report(grid: &Grid) -> Snapshot {
    grid.snapshot()
}

/// Apply every command in queue order. Out-of-bounds commands are skipped
/// and recorded; REPORT snapshots are returned in the order they were taken.
pub fn dispatch(
    queue: &CommandQueue,
    grid: &mut Grid,
    log: &mut RunLog,
) -> Result<Vec<Snapshot>, SimError> {
    if let Some(head) = queue.first() {
        info!("dispatching {} commands, head is {}", queue.len(), head);
    }
    let mut reports = Vec::new();

    for command in queue {
        if let Some(coordinate) = command.coordinate() {
            if !in_bounds(coordinate, grid.rows, grid.cols) {
                warn!(
                    "{}: outside the {}x{} grid, skipping it",
                    command, grid.rows, grid.cols
                );
                log.record(*command, Outcome::OutOfBounds);
                continue;
            }
        }

        let outcome = match *command {
            Command::Place(coordinate) => handle_place(grid, coordinate)?,
            Command::Block(coordinate) => handle_block(grid, coordinate)?,
            Command::Explore(coordinate) => handle_explore(grid, coordinate)?,
            Command::Report => {
                reports.push(handle_report(grid));
                Outcome::Reported
            }
        };

        if outcome == Outcome::Occupied {
            debug!("{}: cell already occupied, nothing written", command);
        } else {
            debug!("{}: {:?}", command, outcome);
        }
        log.record(*command, outcome);
    }

    Ok(reports)
}
