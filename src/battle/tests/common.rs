use crate::creature::CreatureStats;
use schema::SpeciesId;

/// A builder for creating test creatures with common defaults.
///
/// # Example
/// ```ignore
/// let wild = TestCreatureBuilder::new("rattata")
///     .with_stats(30, 30, 15)
///     .with_hp(10)
///     .build();
/// ```
pub struct TestCreatureBuilder {
    species: &'static str,
    level: u8,
    max_hp: u16,
    attack: u16,
    defense: u16,
    current_hp: Option<u16>,
}

impl TestCreatureBuilder {
    pub fn new(species: &'static str) -> Self {
        Self {
            species,
            level: 5,
            max_hp: 30,
            attack: 30,
            defense: 15,
            current_hp: None,
        }
    }

    pub fn with_stats(mut self, max_hp: u16, attack: u16, defense: u16) -> Self {
        self.max_hp = max_hp;
        self.attack = attack;
        self.defense = defense;
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn build(self) -> CreatureStats {
        let species = SpeciesId::new(self.species);
        let mut creature = CreatureStats::new(
            species.display_name(),
            species,
            self.level,
            self.max_hp,
            self.attack,
            self.defense,
        );
        if let Some(hp) = self.current_hp {
            creature.set_hp(hp);
        }
        creature
    }
}

/// The reference starter: Pikachu, 35/35 HP, 55 attack, 40 defense.
pub fn reference_player() -> CreatureStats {
    TestCreatureBuilder::new("pikachu")
        .with_stats(35, 55, 40)
        .build()
}

/// The reference wild spawn: Rattata, 30/30 HP, 30 attack, 15 defense.
pub fn reference_wild() -> CreatureStats {
    TestCreatureBuilder::new("rattata")
        .with_stats(30, 30, 15)
        .build()
}
