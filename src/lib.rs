// In: src/lib.rs

//! Pokemon Overworld Exploration Core
//!
//! The overworld companion to the battle engine: tile-map traversal with
//! collision, probabilistic wild encounters gated by a cooldown, and a small
//! turn-based battle loop (attack, flee, capture) whose outcomes fold back
//! into the player's roster and bag. Rendering, input polling and creature
//! data sources stay behind narrow collaborator traits.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod bag;
pub mod battle;
pub mod creature;
pub mod encounter;
pub mod errors;
pub mod map;
pub mod overworld;
pub mod presentation;
pub mod provider;
pub mod rng;
pub mod roster;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokemon-overworld`
// crate, making it easy for users to import the most important types
// directly.

// --- From the `schema` crate ---
// Re-export the shared data definitions.
pub use schema::{BaseStats, Direction, SpeciesId, TileKind};

// --- From this crate's modules (`src/`) ---

// Core session types.
pub use battle::{BattleAction, BattleEvent, BattleSession, BattleStatus, CaptureAttempt};
pub use overworld::{EncounterOutcome, MoveOutcome, OverworldSession};

// Core runtime entities.
pub use bag::{ItemBag, CAPTURE_ITEM};
pub use creature::CreatureStats;
pub use roster::{Roster, ROSTER_CAPACITY};

// Maps and encounters.
pub use encounter::{EncounterConfig, EncounterPolicy};
pub use map::{Coord, GridMap, LayeredMap, TerrainMap, WalkabilityPolicy};

// Collaborator interfaces and reference implementations.
pub use presentation::{NullSink, OverworldSnapshot, PresentationSink};
pub use provider::{CreatureDataProvider, RonProvider, StaticProvider};
pub use rng::SessionRng;

// Crate-specific error and result types.
pub use errors::{
    BagError, OverworldError, OverworldResult, ProviderError, ProviderResult, RosterError,
    SessionError,
};
