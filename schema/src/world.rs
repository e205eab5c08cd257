use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One cardinal movement step in the overworld.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step for this direction. Y grows downward, as in tile rows.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Classification of a map cell.
///
/// `Path` and `TallGrass` form the walkable allow-set of the fixed-grid map;
/// `TallGrass` is additionally the encounter-eligible "special zone".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum TileKind {
    /// Impassable border or obstacle (trees, fences).
    Barrier,
    /// Plain walkable ground.
    Path,
    /// Walkable, and eligible for wild encounters.
    TallGrass,
    /// Building footprint; blocks movement.
    Building,
    /// Water; blocks movement (no surfing in the overworld core).
    Water,
    /// Purely decorative, non-interactive.
    Decoration,
}
