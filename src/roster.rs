use crate::creature::CreatureStats;
use crate::errors::RosterError;
use serde::{Deserialize, Serialize};

/// Maximum number of creatures a player may carry.
pub const ROSTER_CAPACITY: usize = 6;

/// The player's team: an ordered sequence of up to six creatures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    slots: [Option<CreatureStats>; ROSTER_CAPACITY],
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    /// Append to the first free slot. A full roster rejects the add with no
    /// mutation and hands the creature back for the caller to report on.
    pub fn add(&mut self, creature: CreatureStats) -> Result<(), (CreatureStats, RosterError)> {
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(creature);
                Ok(())
            }
            None => Err((creature, RosterError::RosterFull)),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == ROSTER_CAPACITY
    }

    /// Index of the creature that leads the next battle: the first slot whose
    /// occupant can still fight. The reference implementation always sent out
    /// slot 0, fainted or not; that was a latent bug, so the lead skips
    /// fainted creatures. Returns None when the whole team is down.
    pub fn lead_index(&self) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| matches!(slot, Some(c) if !c.is_fainted()))
    }

    /// Remove and return the creature at `index` (battle hand-off).
    pub fn take(&mut self, index: usize) -> Option<CreatureStats> {
        self.slots.get_mut(index).and_then(|slot| slot.take())
    }

    /// Return a creature to an empty slot after a battle.
    pub fn put_back(&mut self, index: usize, creature: CreatureStats) {
        debug_assert!(
            self.slots[index].is_none(),
            "returning a creature to an occupied slot"
        );
        self.slots[index] = Some(creature);
    }

    pub fn get(&self, index: usize) -> Option<&CreatureStats> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    /// Whether any creature can still fight.
    pub fn has_usable(&self) -> bool {
        self.lead_index().is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CreatureStats> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }
}
