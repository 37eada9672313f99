use crate::grid::{Coordinate, Marker};
use serde::{Deserialize, Serialize};

/// Category of a placeable entity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HolderKind {
    Place,
    Block,
    Explore,
}

impl HolderKind {
    /// Marker written to the grid for this kind
    pub fn marker(self) -> Marker {
        match self {
            HolderKind::Place => Marker::Placed,
            HolderKind::Block => Marker::Blocked,
            HolderKind::Explore => Marker::Arrival,
        }
    }

    /// Single-character occupancy code
    pub fn code(self) -> char {
        self.marker().code()
    }
}

/// Placer, blocker or explorer: a kind at a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occupant {
    kind: HolderKind,
    coordinate: Coordinate,
}

impl Occupant {
    pub fn new(kind: HolderKind, coordinate: Coordinate) -> Self {
        Occupant { kind, coordinate }
    }

    pub fn kind(&self) -> HolderKind {
        self.kind
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}
