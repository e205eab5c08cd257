use schema::{BaseStats, SpeciesId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One combatant instance: a player's roster member or a wild spawn.
///
/// `max_hp` is fixed at creation; `hp` is the only stat that moves, and it is
/// clamped to `0..=max_hp` by every mutation path, so `is_fainted()` is
/// exactly `hp == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureStats {
    pub name: String,
    pub species: SpeciesId,
    pub level: u8, // Cosmetic; not part of the damage formula
    hp: u16,
    max_hp: u16,
    pub attack: u16,
    pub defense: u16,
}

impl CreatureStats {
    /// Build a creature at full health from a provider stat block.
    ///
    /// Stats scale linearly with level around the provider's baseline
    /// (level 5, the starter level of the reference data), with max HP never
    /// below 1.
    pub fn from_base_stats(species: SpeciesId, base: BaseStats, level: u8) -> Self {
        const BASELINE_LEVEL: u16 = 5;
        let scale = |stat: u16| -> u16 {
            ((stat as u32 * level.max(1) as u32) / BASELINE_LEVEL as u32) as u16
        };

        let max_hp = scale(base.hp).max(1);
        CreatureStats {
            name: species.display_name(),
            species,
            level,
            hp: max_hp,
            max_hp,
            attack: scale(base.attack),
            defense: scale(base.defense),
        }
    }

    /// Build a creature with explicit stats, at full health.
    pub fn new(
        name: impl Into<String>,
        species: SpeciesId,
        level: u8,
        max_hp: u16,
        attack: u16,
        defense: u16,
    ) -> Self {
        let max_hp = max_hp.max(1);
        CreatureStats {
            name: name.into(),
            species,
            level,
            hp: max_hp,
            max_hp,
            attack,
            defense,
        }
    }

    pub fn current_hp(&self) -> u16 {
        self.hp
    }

    pub fn max_hp(&self) -> u16 {
        self.max_hp
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    /// Apply damage, clamping at 0.
    pub fn take_damage(&mut self, damage: u16) {
        self.hp = self.hp.saturating_sub(damage);
    }

    /// Restore HP, clamping at max.
    pub fn heal(&mut self, amount: u16) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    /// Set HP directly (test setup, capture bookkeeping). Clamped to max.
    pub fn set_hp(&mut self, hp: u16) {
        self.hp = hp.min(self.max_hp);
    }
}

impl fmt::Display for CreatureStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Lv. {}) HP: {}/{}",
            self.name, self.level, self.hp, self.max_hp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rattata() -> CreatureStats {
        CreatureStats::new("Rattata", SpeciesId::new("rattata"), 5, 30, 30, 15)
    }

    #[test]
    fn damage_clamps_at_zero() {
        let mut wild = rattata();
        wild.take_damage(500);
        assert_eq!(wild.current_hp(), 0);
        assert!(wild.is_fainted());
    }

    #[test]
    fn heal_clamps_at_max() {
        let mut wild = rattata();
        wild.take_damage(10);
        wild.heal(200);
        assert_eq!(wild.current_hp(), wild.max_hp());
    }

    #[test]
    fn fainted_iff_zero_hp() {
        let mut wild = rattata();
        assert!(!wild.is_fainted());
        wild.take_damage(29);
        assert!(!wild.is_fainted());
        wild.take_damage(1);
        assert!(wild.is_fainted());
        wild.heal(1);
        assert!(!wild.is_fainted());
    }

    #[test]
    fn hp_never_exceeds_max_after_any_sequence() {
        let mut wild = rattata();
        for step in 0..50u16 {
            wild.take_damage(step % 7);
            wild.heal(step % 5);
            assert!(wild.current_hp() <= wild.max_hp());
        }
    }

    #[test]
    fn from_base_stats_scales_with_level() {
        let base = BaseStats {
            hp: 35,
            attack: 55,
            defense: 40,
        };
        let at_baseline = CreatureStats::from_base_stats(SpeciesId::new("pikachu"), base, 5);
        assert_eq!(at_baseline.max_hp(), 35);
        assert_eq!(at_baseline.attack, 55);

        let at_ten = CreatureStats::from_base_stats(SpeciesId::new("pikachu"), base, 10);
        assert_eq!(at_ten.max_hp(), 70);
        assert_eq!(at_ten.defense, 80);
        assert_eq!(at_ten.current_hp(), at_ten.max_hp());
    }

    #[test]
    fn from_base_stats_never_zero_hp() {
        let base = BaseStats {
            hp: 0,
            attack: 0,
            defense: 0,
        };
        let odd = CreatureStats::from_base_stats(SpeciesId::new("shedinja"), base, 1);
        assert_eq!(odd.max_hp(), 1);
        assert!(!odd.is_fainted());
    }

    #[test]
    fn display_matches_reference_format() {
        assert_eq!(format!("{}", rattata()), "Rattata (Lv. 5) HP: 30/30");
    }
}
