use crate::map::{Coord, TerrainMap, WalkabilityPolicy};
use schema::TileKind;
use serde::{Deserialize, Serialize};

/// Fixed-grid map: a pre-authored rectangle of tile kinds addressed by cell
/// index. This is the format the reference game shipped its starter town in,
/// one character per cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridMap {
    tiles: Vec<Vec<TileKind>>,
    width: u32,
    height: u32,
    policy: WalkabilityPolicy,
    spawn: Option<Coord>,
}

fn kind_for_code(code: char) -> Option<TileKind> {
    match code {
        'A' => Some(TileKind::Barrier),
        'P' | '.' => Some(TileKind::Path),
        'G' => Some(TileKind::TallGrass),
        // Building footprints of the reference town: houses, mart, center, shop
        'H' | 'M' | 'C' | 'S' => Some(TileKind::Building),
        'W' => Some(TileKind::Water),
        '*' => Some(TileKind::Decoration),
        _ => None,
    }
}

fn code_for_kind(kind: TileKind) -> char {
    match kind {
        TileKind::Barrier => 'A',
        TileKind::Path => 'P',
        TileKind::TallGrass => 'G',
        TileKind::Building => 'H',
        TileKind::Water => 'W',
        TileKind::Decoration => '*',
    }
}

impl GridMap {
    /// Parse authored rows of kind characters. Rows must be non-empty and
    /// rectangular; unknown characters are rejected rather than guessed at.
    pub fn from_rows(rows: &[&str]) -> Result<Self, String> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err("Grid map needs at least one non-empty row".to_string());
        }

        let width = rows[0].chars().count();
        let mut tiles = Vec::with_capacity(rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(format!(
                    "Row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                ));
            }
            let mut cells = Vec::with_capacity(width);
            for (x, code) in row.chars().enumerate() {
                match kind_for_code(code) {
                    Some(kind) => cells.push(kind),
                    None => return Err(format!("Unknown tile code '{}' at ({}, {})", code, x, y)),
                }
            }
            tiles.push(cells);
        }

        Ok(GridMap {
            width: width as u32,
            height: tiles.len() as u32,
            tiles,
            policy: WalkabilityPolicy::default(),
            spawn: None,
        })
    }

    pub fn with_policy(mut self, policy: WalkabilityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Pin the spawn point to an authored coordinate.
    pub fn with_spawn(mut self, spawn: Coord) -> Self {
        self.spawn = Some(spawn);
        self
    }

    pub fn tile(&self, coord: Coord) -> Option<TileKind> {
        if coord.x < 0 || coord.y < 0 {
            return None;
        }
        self.tiles
            .get(coord.y as usize)
            .and_then(|row| row.get(coord.x as usize))
            .copied()
    }

    /// Render the grid back to authored rows (debug display).
    pub fn render_rows(&self) -> Vec<String> {
        self.tiles
            .iter()
            .map(|row| row.iter().map(|kind| code_for_kind(*kind)).collect())
            .collect()
    }

    fn first_walkable(&self) -> Option<Coord> {
        (0..self.height as i32)
            .flat_map(|y| (0..self.width as i32).map(move |x| Coord::new(x, y)))
            .find(|&coord| self.is_walkable(coord))
    }
}

impl TerrainMap for GridMap {
    fn is_walkable(&self, coord: Coord) -> bool {
        match self.tile(coord) {
            Some(kind) => match self.policy {
                WalkabilityPolicy::Permissive => true,
                WalkabilityPolicy::AllowList => {
                    matches!(kind, TileKind::Path | TileKind::TallGrass)
                }
            },
            None => false,
        }
    }

    fn is_special_zone(&self, coord: Coord) -> bool {
        matches!(self.tile(coord), Some(TileKind::TallGrass))
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn spawn_point(&self) -> Coord {
        self.spawn
            .or_else(|| self.first_walkable())
            .unwrap_or_else(|| Coord::new(self.width as i32 / 2, self.height as i32 / 2))
    }
}
