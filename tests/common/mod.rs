#![allow(dead_code)]

use explorer_sim::{run_script, Config, Coordinate, Marker, RunOutcome, SimError, Snapshot};
use std::fs;
use std::path::Path;

/// Run script lines on the default 5x5 grid
pub fn run(lines: &[&str]) -> Result<RunOutcome, SimError> {
    run_script(lines, &Config::default())
}

pub fn marker_at(snapshot: &Snapshot, row: i32, col: i32) -> Marker {
    snapshot
        .get(Coordinate::new(row, col))
        .unwrap_or_else(|| panic!("({},{}) outside the snapshot", row, col))
}

/// Every cell not listed in `expected` must be empty
pub fn assert_only(snapshot: &Snapshot, expected: &[(i32, i32, Marker)]) {
    for row in 0..snapshot.rows {
        for col in 0..snapshot.cols {
            let want = expected
                .iter()
                .find(|(r, c, _)| *r == row && *c == col)
                .map(|(_, _, m)| *m)
                .unwrap_or(Marker::Empty);
            assert_eq!(marker_at(snapshot, row, col), want, "cell ({},{})", row, col);
        }
    }
}

/// Load a script fixture and the report text it should produce
pub fn load_script_case(path: &Path) -> Result<(Vec<String>, String), Box<dyn std::error::Error>> {
    let script = fs::read_to_string(path)?;
    let expected = fs::read_to_string(path.with_extension("expected"))?;
    Ok((
        script.lines().map(str::to_string).collect(),
        expected.trim_end().to_string(),
    ))
}

/// Render reports the way the binary prints them
pub fn render_reports(reports: &[Snapshot]) -> String {
    reports
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
