use crate::grid::Coordinate;

/// True iff `0 <= row < rows` and `0 <= col < cols`
pub fn in_bounds(coord: Coordinate, rows: i32, cols: i32) -> bool {
    coord.row >= 0 && coord.row < rows && coord.col >= 0 && coord.col < cols
}
