use crate::rng::SessionRng;
use schema::SpeciesId;
use serde::{Deserialize, Serialize};

/// Tuning knobs for wild encounters. RON-deserializable so a campaign can
/// ship its own table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterConfig {
    /// Probability that one committed step in tall grass spawns an encounter.
    pub trigger_chance: f32,
    /// Refractory period after a spawn, in committed movement steps.
    pub cooldown_ticks: u32,
    /// Species eligible to spawn, picked uniformly.
    pub species_pool: Vec<SpeciesId>,
    /// Level wild creatures spawn at.
    pub wild_level: u8,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        EncounterConfig {
            // The reference rolled 0.1 per grass step
            trigger_chance: 0.1,
            cooldown_ticks: 60,
            species_pool: Vec::new(),
            wild_level: 5,
        }
    }
}

/// Decides whether a committed movement step spawns a wild encounter.
///
/// The cooldown gate keeps a player standing in (or circling through) grass
/// from being chain-ambushed; the probability keeps movement mostly
/// uninterrupted.
#[derive(Debug, Clone)]
pub struct EncounterPolicy {
    config: EncounterConfig,
    cooldown: u32,
}

impl EncounterPolicy {
    pub fn new(config: EncounterConfig) -> Self {
        EncounterPolicy {
            config,
            cooldown: 0,
        }
    }

    pub fn config(&self) -> &EncounterConfig {
        &self.config
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    /// Advance the refractory countdown by one committed movement step.
    /// Call exactly once per committed move, and never for a blocked one.
    pub fn tick(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    /// Evaluate the trigger for the tile the avatar just stepped onto.
    ///
    /// No encounter while the cooldown is running or off the special zone;
    /// neither case consumes randomness or touches the cooldown. A losing
    /// roll also leaves the cooldown untouched so the next step gets a fresh
    /// chance; only an actual spawn arms the refractory period.
    pub fn maybe_trigger(
        &mut self,
        is_special_zone: bool,
        rng: &mut SessionRng,
    ) -> Option<SpeciesId> {
        if self.cooldown > 0 || !is_special_zone || self.config.species_pool.is_empty() {
            return None;
        }

        let roll = rng.next_roll("encounter trigger");
        if roll >= self.config.trigger_chance {
            return None;
        }

        let pick = rng.next_index("wild species pick", self.config.species_pool.len());
        self.cooldown = self.config.cooldown_ticks;
        Some(self.config.species_pool[pick].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grass_config() -> EncounterConfig {
        EncounterConfig {
            species_pool: vec![SpeciesId::new("rattata"), SpeciesId::new("pidgey")],
            ..EncounterConfig::default()
        }
    }

    #[test]
    fn cooldown_gates_regardless_of_zone_and_probability() {
        let mut policy = EncounterPolicy::new(EncounterConfig {
            trigger_chance: 1.0,
            ..grass_config()
        });
        let mut rng = SessionRng::new_for_test(vec![0.0]);

        policy.cooldown = 3;
        assert_eq!(policy.maybe_trigger(true, &mut rng), None);
        // Gate must not consume rolls or mutate the cooldown
        assert_eq!(policy.cooldown(), 3);
        assert_eq!(rng.next_roll("untouched"), 0.0);
    }

    #[test]
    fn no_trigger_off_the_special_zone() {
        let mut policy = EncounterPolicy::new(grass_config());
        let mut rng = SessionRng::new_for_test(vec![0.0]);
        assert_eq!(policy.maybe_trigger(false, &mut rng), None);
    }

    #[test]
    fn winning_roll_spawns_and_arms_cooldown() {
        let mut policy = EncounterPolicy::new(grass_config());
        // Trigger roll under 0.1, then pick index 1 of 2
        let mut rng = SessionRng::new_for_test(vec![0.05, 0.6]);

        let species = policy.maybe_trigger(true, &mut rng);
        assert_eq!(species, Some(SpeciesId::new("pidgey")));
        assert_eq!(policy.cooldown(), 60);
    }

    #[test]
    fn losing_roll_leaves_cooldown_unarmed() {
        let mut policy = EncounterPolicy::new(grass_config());
        let mut rng = SessionRng::new_for_test(vec![0.5]);

        assert_eq!(policy.maybe_trigger(true, &mut rng), None);
        assert_eq!(policy.cooldown(), 0);
    }

    #[test]
    fn tick_counts_down_to_zero_and_stops() {
        let mut policy = EncounterPolicy::new(grass_config());
        policy.cooldown = 2;
        policy.tick();
        assert_eq!(policy.cooldown(), 1);
        policy.tick();
        policy.tick();
        assert_eq!(policy.cooldown(), 0);
    }

    #[test]
    fn empty_pool_never_triggers() {
        let mut policy = EncounterPolicy::new(EncounterConfig {
            trigger_chance: 1.0,
            ..EncounterConfig::default()
        });
        let mut rng = SessionRng::new_for_test(vec![0.0, 0.0]);
        assert_eq!(policy.maybe_trigger(true, &mut rng), None);
    }

    #[test]
    fn encounter_becomes_possible_again_after_cooldown_expires() {
        let mut policy = EncounterPolicy::new(EncounterConfig {
            trigger_chance: 1.0,
            cooldown_ticks: 2,
            ..grass_config()
        });
        let mut rng = SessionRng::new_for_test(vec![0.0, 0.0, 0.0, 0.0]);

        assert!(policy.maybe_trigger(true, &mut rng).is_some());
        policy.tick();
        assert_eq!(policy.maybe_trigger(true, &mut rng), None);
        policy.tick();
        assert!(policy.maybe_trigger(true, &mut rng).is_some());
    }
}
