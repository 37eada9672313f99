pub mod bounds;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod grid;
pub mod occupant;
pub mod run_log;
pub mod simulator;

pub use command::{build_queue, Command, CommandKind, CommandQueue};
pub use config::Config;
pub use error::SimError;
pub use grid::{Coordinate, Grid, Marker, Snapshot};
pub use occupant::{HolderKind, Occupant};
pub use run_log::{Outcome, RunLog};
pub use simulator::{read_script, run_script, RunOutcome};
