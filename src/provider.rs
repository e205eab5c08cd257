use crate::errors::{ProviderError, ProviderResult};
use schema::{BaseStats, SpeciesId};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::warn;

/// Synchronous lookup of a species' stat block, implemented by an external
/// data source (a remote creature database, a local data directory, a test
/// table). Implementations own their own timeout mechanics and answer
/// `ProviderError::Timeout` when they give up waiting.
pub trait CreatureDataProvider {
    fn fetch(&self, species: &SpeciesId) -> ProviderResult<BaseStats>;
}

/// Fetch with graceful degradation: any provider failure is logged and
/// replaced by the fallback stat block. Spawning never fails on data.
pub fn fetch_or_fallback(provider: &dyn CreatureDataProvider, species: &SpeciesId) -> BaseStats {
    match provider.fetch(species) {
        Ok(stats) => stats,
        Err(err) => {
            warn!(species = %species, error = %err, "species lookup failed; using fallback stats");
            BaseStats::fallback()
        }
    }
}

/// In-memory provider: a fixed species table. Used by the demo binary and
/// throughout the tests.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    table: HashMap<SpeciesId, BaseStats>,
}

impl StaticProvider {
    pub fn new() -> Self {
        StaticProvider::default()
    }

    pub fn with_species(mut self, key: &str, stats: BaseStats) -> Self {
        self.table.insert(SpeciesId::new(key), stats);
        self
    }

    /// The stat blocks of the reference game's cast.
    pub fn reference_catalog() -> Self {
        StaticProvider::new()
            .with_species(
                "pikachu",
                BaseStats {
                    hp: 35,
                    attack: 55,
                    defense: 40,
                },
            )
            .with_species(
                "rattata",
                BaseStats {
                    hp: 30,
                    attack: 30,
                    defense: 15,
                },
            )
            .with_species(
                "pidgey",
                BaseStats {
                    hp: 40,
                    attack: 45,
                    defense: 40,
                },
            )
    }
}

impl CreatureDataProvider for StaticProvider {
    fn fetch(&self, species: &SpeciesId) -> ProviderResult<BaseStats> {
        self.table
            .get(species)
            .copied()
            .ok_or_else(|| ProviderError::NotFound(species.clone()))
    }
}

/// Directory-backed provider: one RON file per species under
/// `<data>/species/<key>.ron`, each holding a `BaseStats` record like
/// `(hp: 35, attack: 55, defense: 40)`.
#[derive(Debug, Clone)]
pub struct RonProvider {
    data_path: PathBuf,
}

impl RonProvider {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        RonProvider {
            data_path: data_path.into(),
        }
    }

    fn species_file(&self, species: &SpeciesId) -> PathBuf {
        self.data_path
            .join("species")
            .join(format!("{}.ron", species))
    }

    fn parse_record(text: &str) -> Option<BaseStats> {
        ron::from_str(text).ok()
    }
}

impl CreatureDataProvider for RonProvider {
    fn fetch(&self, species: &SpeciesId) -> ProviderResult<BaseStats> {
        let path = self.species_file(species);
        let text = std::fs::read_to_string(&path)
            .map_err(|_| ProviderError::NotFound(species.clone()))?;
        // A malformed record is as good as a missing one
        Self::parse_record(&text).ok_or_else(|| ProviderError::NotFound(species.clone()))
    }
}

/// Provider that never answers in time; handy for exercising the timeout
/// degradation path in tests.
#[derive(Debug, Clone, Default)]
pub struct TimedOutProvider;

impl CreatureDataProvider for TimedOutProvider {
    fn fetch(&self, species: &SpeciesId) -> ProviderResult<BaseStats> {
        Err(ProviderError::Timeout(species.clone()))
    }
}
