use crate::map::{Coord, TerrainMap, WalkabilityPolicy};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Tile id 0 marks an empty cell in a layer, as in the common tile editors.
const EMPTY_TILE: u32 = 0;

/// A named annotation authored on the map: the player spawn, an NPC, a shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub kind: String,
    pub position: Coord,
}

/// Annotation name the spawn lookup recognizes.
pub const SPAWN_POINT: &str = "player_start";

/// Layered-tile map: stacked layers of numeric tile identifiers, addressed by
/// pixel coordinate and resolved through an integer scale factor, the way
/// externally authored tile assets are.
///
/// The external loader decodes its format and hands this type the layers,
/// per-id metadata and annotations; the core never parses map markup itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayeredMap {
    // layer -> row -> tile id
    layers: Vec<Vec<Vec<u32>>>,
    width: u32,  // in tiles
    height: u32, // in tiles
    tile_size: u32,
    walkable_ids: HashSet<u32>,
    special_ids: HashSet<u32>,
    policy: WalkabilityPolicy,
    points: BTreeMap<String, PointOfInterest>,
}

impl LayeredMap {
    /// Build from decoded layers. Every layer must be rectangular and share
    /// the same dimensions; `tile_size` is the pixel length of one cell side.
    pub fn new(layers: Vec<Vec<Vec<u32>>>, tile_size: u32) -> Result<Self, String> {
        if tile_size == 0 {
            return Err("Tile size must be at least 1 pixel".to_string());
        }
        let first = layers
            .first()
            .and_then(|layer| layer.first())
            .ok_or_else(|| "Layered map needs at least one non-empty layer".to_string())?;
        let width = first.len();
        let height = layers[0].len();
        if width == 0 {
            return Err("Layered map rows must be non-empty".to_string());
        }
        for (i, layer) in layers.iter().enumerate() {
            if layer.len() != height || layer.iter().any(|row| row.len() != width) {
                return Err(format!("Layer {} does not match {}x{}", i, width, height));
            }
        }

        Ok(LayeredMap {
            layers,
            width: width as u32,
            height: height as u32,
            tile_size,
            walkable_ids: HashSet::new(),
            special_ids: HashSet::new(),
            policy: WalkabilityPolicy::default(),
            points: BTreeMap::new(),
        })
    }

    /// Tile ids the avatar may stand on.
    pub fn with_walkable_ids(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.walkable_ids = ids.into_iter().collect();
        self
    }

    /// Tile ids that count as tall grass.
    pub fn with_special_ids(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.special_ids = ids.into_iter().collect();
        self
    }

    /// Policy applied when no walkable metadata was authored at all.
    pub fn with_policy(mut self, policy: WalkabilityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Record a named annotation at a pixel position.
    pub fn with_point(mut self, name: impl Into<String>, kind: impl Into<String>, position: Coord) -> Self {
        self.points.insert(
            name.into(),
            PointOfInterest {
                kind: kind.into(),
                position,
            },
        );
        self
    }

    pub fn point(&self, name: &str) -> Option<&PointOfInterest> {
        self.points.get(name)
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, &PointOfInterest)> {
        self.points.iter().map(|(name, poi)| (name.as_str(), poi))
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Pixel coordinate -> cell index, or None when off the map.
    fn cell_of(&self, coord: Coord) -> Option<(usize, usize)> {
        if coord.x < 0 || coord.y < 0 {
            return None;
        }
        let cx = coord.x as u32 / self.tile_size;
        let cy = coord.y as u32 / self.tile_size;
        if cx >= self.width || cy >= self.height {
            return None;
        }
        Some((cx as usize, cy as usize))
    }

    /// Tile ids stacked at a cell, skipping empties.
    fn ids_at(&self, cx: usize, cy: usize) -> impl Iterator<Item = u32> + '_ {
        self.layers
            .iter()
            .map(move |layer| layer[cy][cx])
            .filter(|&id| id != EMPTY_TILE)
    }

    fn first_walkable(&self) -> Option<Coord> {
        for cy in 0..self.height {
            for cx in 0..self.width {
                let pixel = Coord::new((cx * self.tile_size) as i32, (cy * self.tile_size) as i32);
                if self.is_walkable(pixel) {
                    return Some(pixel);
                }
            }
        }
        None
    }
}

impl TerrainMap for LayeredMap {
    fn is_walkable(&self, coord: Coord) -> bool {
        let Some((cx, cy)) = self.cell_of(coord) else {
            return false;
        };
        if self.walkable_ids.is_empty() {
            // No authored metadata: the policy decides.
            return match self.policy {
                WalkabilityPolicy::Permissive => self.ids_at(cx, cy).next().is_some(),
                WalkabilityPolicy::AllowList => false,
            };
        }
        self.ids_at(cx, cy).any(|id| self.walkable_ids.contains(&id))
    }

    fn is_special_zone(&self, coord: Coord) -> bool {
        let Some((cx, cy)) = self.cell_of(coord) else {
            return false;
        };
        self.ids_at(cx, cy).any(|id| self.special_ids.contains(&id))
    }

    /// Dimensions in pixels, the map's addressing unit.
    fn dimensions(&self) -> (u32, u32) {
        (self.width * self.tile_size, self.height * self.tile_size)
    }

    fn spawn_point(&self) -> Coord {
        if let Some(spawn) = self.points.get(SPAWN_POINT) {
            return spawn.position;
        }
        self.first_walkable().unwrap_or_else(|| {
            Coord::new(
                (self.width * self.tile_size / 2) as i32,
                (self.height * self.tile_size / 2) as i32,
            )
        })
    }

    /// One step is one tile, in pixels.
    fn step(&self) -> i32 {
        self.tile_size as i32
    }
}
