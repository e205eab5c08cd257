// Pokemon Overworld Schema - Shared type definitions
// This crate contains the plain-data types shared between the overworld core
// and its external collaborators (creature data providers, map loaders).

// Re-export the main types
pub use species::*;
pub use world::*;

pub mod species;
pub mod world;
