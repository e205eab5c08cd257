use schema::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod grid;
pub mod layered;

pub use grid::GridMap;
pub use layered::{LayeredMap, PointOfInterest};

/// A map coordinate. Signed so that candidate positions one step past an edge
/// are representable; every `TerrainMap` answers `false` for them.
///
/// The unit depends on the backing map: cell indices for `GridMap`, pixels
/// for `LayeredMap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// The coordinate one step of `size` in `direction`.
    pub fn stepped(self, direction: Direction, size: i32) -> Coord {
        let (dx, dy) = direction.delta();
        Coord {
            x: self.x + dx * size,
            y: self.y + dy * size,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What a map without explicit walkability metadata should answer.
///
/// The reference implementation flip-flopped between "everything walkable"
/// debug builds and a strict allow-list; the allow-list is the default here
/// and `Permissive` is an explicit opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WalkabilityPolicy {
    /// Only cells matching the map's walkable metadata are walkable.
    #[default]
    AllowList,
    /// Every non-empty cell is walkable (debug-style maps).
    Permissive,
}

/// Capability interface every map backing must satisfy.
///
/// Both predicates are total: any coordinate outside the map answers `false`,
/// never panics. Maps are immutable once constructed.
pub trait TerrainMap {
    /// Can the avatar stand on this coordinate?
    fn is_walkable(&self, coord: Coord) -> bool;

    /// Is this coordinate encounter-eligible (tall grass)?
    fn is_special_zone(&self, coord: Coord) -> bool;

    /// (width, height) in this map's coordinate unit.
    fn dimensions(&self) -> (u32, u32);

    /// Where a fresh session starts: authored spawn annotation, else first
    /// walkable coordinate, else the geometric center.
    fn spawn_point(&self) -> Coord;

    /// Length of one movement step in this map's coordinate unit.
    fn step(&self) -> i32 {
        1
    }
}
