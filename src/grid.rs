use crate::bounds::in_bounds;
use crate::error::SimError;
use crate::occupant::Occupant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A (row, column) pair. Validity depends on the grid it is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub fn new(row: i32, col: i32) -> Self {
        Coordinate { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Cell marker. Compared by value, serialized as its single-character code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    #[serde(rename = "*")]
    Empty,
    /// Placed marker, also the explorer at rest
    #[serde(rename = "p")]
    Placed,
    #[serde(rename = "b")]
    Blocked,
    /// Transient explorer arrival, swept to `Placed` within the same command
    #[serde(rename = "d")]
    Arrival,
}

impl Marker {
    pub fn code(self) -> char {
        match self {
            Marker::Empty => '*',
            Marker::Placed => 'p',
            Marker::Blocked => 'b',
            Marker::Arrival => 'd',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Largest number of cells a grid may hold
pub const MAX_CELLS: i32 = 1 << 20;

/// Number of cells in a `rows` x `cols` grid, rejecting empty, negative and
/// oversized extents
pub fn cell_count(rows: i32, cols: i32) -> Result<usize, SimError> {
    match rows.checked_mul(cols) {
        Some(cells) if rows > 0 && cols > 0 && cells <= MAX_CELLS => Ok(cells as usize),
        _ => Err(SimError::InvalidExtent { rows, cols }),
    }
}

/// Fixed-size occupancy store. A cell is written only while it holds
/// `Marker::Empty`; the explorer sweep is the only transition that clears one.
#[derive(Clone, Debug)]
pub struct Grid {
    pub rows: i32,
    pub cols: i32,
    cells: Vec<Marker>,
}

impl Grid {
    /// Create an initialized grid with every cell empty
    pub fn new(rows: i32, cols: i32) -> Result<Self, SimError> {
        let count = cell_count(rows, cols)?;
        Ok(Grid {
            rows,
            cols,
            cells: vec![Marker::Empty; count],
        })
    }

    /// Reset every cell to empty, whatever it held before
    pub fn initialize(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Marker::Empty;
        }
    }

    fn get_id(&self, coord: Coordinate) -> Result<usize, SimError> {
        if !in_bounds(coord, self.rows, self.cols) {
            return Err(SimError::OutOfRange {
                row: coord.row,
                col: coord.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok((coord.row * self.cols + coord.col) as usize)
    }

    /// Get the marker at `coord`
    pub fn cell(&self, coord: Coordinate) -> Result<Marker, SimError> {
        let id = self.get_id(coord)?;
        Ok(self.cells[id])
    }

    /// True iff the cell at `coord` is empty. Errors when `coord` lies
    /// outside the grid; callers are expected to bounds-check first.
    pub fn is_available(&self, coord: Coordinate) -> Result<bool, SimError> {
        Ok(self.cell(coord)? == Marker::Empty)
    }

    /// Write the occupant's marker if its cell is empty. Returns whether the
    /// write happened; an occupied cell is left untouched.
    pub fn apply(&mut self, occupant: &Occupant) -> Result<bool, SimError> {
        let coord = occupant.coordinate();
        if !self.is_available(coord)? {
            return Ok(false);
        }
        let id = self.get_id(coord)?;
        self.cells[id] = occupant.kind().marker();
        Ok(true)
    }

    /// Explorer sweep: vacate every `Placed` cell and promote every `Arrival`
    /// cell to `Placed`, in a single pass.
    pub fn advance_explorer(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = match *cell {
                Marker::Placed => Marker::Empty,
                Marker::Arrival => Marker::Placed,
                other => other,
            };
        }
    }

    /// Read-only copy of the current cells
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .chunks(self.cols as usize)
                .map(|row| row.to_vec())
                .collect(),
        }
    }
}

/// Grid contents at the moment of a REPORT (or at the end of a run).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub rows: i32,
    pub cols: i32,
    pub cells: Vec<Vec<Marker>>,
}

impl Snapshot {
    pub fn get(&self, coord: Coordinate) -> Option<Marker> {
        if !in_bounds(coord, self.rows, self.cols) {
            return None;
        }
        Some(self.cells[coord.row as usize][coord.col as usize])
    }

    /// Number of cells holding `marker`
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == marker)
            .count()
    }

    /// One line per row, markers joined by `separator`
    pub fn render(&self, separator: &str) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|marker| marker.code().to_string())
                    .collect::<Vec<_>>()
                    .join(separator)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupant::HolderKind;

    fn at(row: i32, col: i32) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(5, 5).unwrap();
        let snapshot = grid.snapshot();
        assert_eq!(snapshot.count(Marker::Empty), 25);
        assert_eq!(snapshot.cells.len(), 5);
        assert!(snapshot.cells.iter().all(|row| row.len() == 5));
    }

    #[test]
    fn test_first_writer_wins() {
        let mut grid = Grid::new(5, 5).unwrap();
        assert!(grid.apply(&Occupant::new(HolderKind::Place, at(2, 3))).unwrap());
        assert!(!grid.apply(&Occupant::new(HolderKind::Block, at(2, 3))).unwrap());
        assert!(!grid.apply(&Occupant::new(HolderKind::Explore, at(2, 3))).unwrap());
        assert_eq!(grid.cell(at(2, 3)).unwrap(), Marker::Placed);
    }

    #[test]
    fn test_rejects_bad_extents() {
        for (rows, cols) in [(0, 5), (5, 0), (-3, 5), (5, -3), (50_000, 50_000), (i32::MAX, 2)] {
            assert!(
                matches!(Grid::new(rows, cols), Err(SimError::InvalidExtent { .. })),
                "{}x{}",
                rows,
                cols
            );
        }
        assert_eq!(cell_count(1024, 1024).unwrap(), 1 << 20);
        assert!(cell_count(1025, 1024).is_err());
    }

    #[test]
    fn test_is_available_out_of_range() {
        let grid = Grid::new(5, 5).unwrap();
        assert!(grid.is_available(at(4, 4)).unwrap());
        assert!(matches!(
            grid.is_available(at(5, 0)),
            Err(SimError::OutOfRange { row: 5, col: 0, .. })
        ));
        assert!(grid.is_available(at(0, -1)).is_err());
    }

    #[test]
    fn test_apply_out_of_range_leaves_grid() {
        let mut grid = Grid::new(5, 5).unwrap();
        let before = grid.snapshot();
        assert!(grid.apply(&Occupant::new(HolderKind::Place, at(9, 9))).is_err());
        assert_eq!(grid.snapshot(), before);
    }

    #[test]
    fn test_advance_explorer_moves_placed_marker() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.apply(&Occupant::new(HolderKind::Place, at(0, 0))).unwrap();
        grid.apply(&Occupant::new(HolderKind::Block, at(3, 3))).unwrap();
        grid.apply(&Occupant::new(HolderKind::Explore, at(1, 1))).unwrap();
        assert_eq!(grid.cell(at(1, 1)).unwrap(), Marker::Arrival);

        grid.advance_explorer();

        assert_eq!(grid.cell(at(0, 0)).unwrap(), Marker::Empty);
        assert_eq!(grid.cell(at(1, 1)).unwrap(), Marker::Placed);
        assert_eq!(grid.cell(at(3, 3)).unwrap(), Marker::Blocked);
        assert_eq!(grid.snapshot().count(Marker::Arrival), 0);
    }

    #[test]
    fn test_advance_explorer_without_arrival_clears_placed() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.apply(&Occupant::new(HolderKind::Place, at(0, 0))).unwrap();
        grid.advance_explorer();
        assert_eq!(grid.snapshot().count(Marker::Placed), 0);
    }

    #[test]
    fn test_initialize_twice_resets() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.apply(&Occupant::new(HolderKind::Place, at(0, 0))).unwrap();
        grid.apply(&Occupant::new(HolderKind::Block, at(4, 4))).unwrap();
        grid.initialize();
        grid.initialize();
        assert_eq!(grid.snapshot().count(Marker::Empty), 25);
    }

    #[test]
    fn test_snapshot_render() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.apply(&Occupant::new(HolderKind::Place, at(0, 1))).unwrap();
        grid.apply(&Occupant::new(HolderKind::Block, at(1, 2))).unwrap();
        let snapshot = grid.snapshot();
        assert_eq!(snapshot.to_string(), "* p *\n* * b");
        assert_eq!(snapshot.render(""), "*p*\n**b");
        assert_eq!(snapshot.get(at(1, 2)), Some(Marker::Blocked));
        assert_eq!(snapshot.get(at(2, 0)), None);
    }

    #[test]
    fn test_snapshot_serializes_codes() {
        let mut grid = Grid::new(1, 2).unwrap();
        grid.apply(&Occupant::new(HolderKind::Block, at(0, 1))).unwrap();
        let json = serde_json::to_string(&grid.snapshot()).unwrap();
        assert_eq!(json, r#"{"rows":1,"cols":2,"cells":[["*","b"]]}"#);
    }
}
