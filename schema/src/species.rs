use serde::{Deserialize, Serialize};
use std::fmt;

/// Key identifying a species in a creature data source.
///
/// Unlike the battle engine's compiled `Species` enum, the overworld pulls
/// species data from an external provider at runtime, so the key space is
/// open-ended. Keys are normalized to lowercase on construction, matching the
/// lookup convention of the public creature databases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesId(String);

impl SpeciesId {
    pub fn new(key: impl AsRef<str>) -> Self {
        SpeciesId(key.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Species name capitalized for user-facing text ("pikachu" -> "Pikachu").
    pub fn display_name(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl From<&str> for SpeciesId {
    fn from(key: &str) -> Self {
        SpeciesId::new(key)
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The stat block a creature data source answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
}

impl BaseStats {
    /// Default stat block used when a species lookup fails.
    /// Deliberately mediocre so a data outage never produces a monster.
    pub fn fallback() -> Self {
        BaseStats {
            hp: 30,
            attack: 30,
            defense: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_keys_are_normalized() {
        assert_eq!(SpeciesId::new("  Pikachu ").as_str(), "pikachu");
        assert_eq!(SpeciesId::new("RATTATA"), SpeciesId::new("rattata"));
    }

    #[test]
    fn display_name_capitalizes() {
        assert_eq!(SpeciesId::new("pikachu").display_name(), "Pikachu");
        assert_eq!(SpeciesId::new("").display_name(), "");
    }
}
