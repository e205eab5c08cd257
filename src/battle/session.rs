use crate::bag::{ItemBag, CAPTURE_ITEM};
use crate::battle::events::{BattleEvent, EventBus};
use crate::creature::CreatureStats;
use crate::rng::SessionRng;
use serde::{Deserialize, Serialize};

/// Where a battle stands. Every status except `Ongoing` is terminal: once
/// reached, resolvers become no-ops.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleStatus {
    Ongoing,
    /// The wild creature fainted.
    PlayerVictory,
    /// The player's creature fainted.
    PlayerDefeat,
    /// The player escaped.
    PlayerFled,
    /// The wild creature was caught.
    Captured,
}

impl BattleStatus {
    pub fn is_terminal(self) -> bool {
        self != BattleStatus::Ongoing
    }
}

/// The three things a player can do on their turn.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleAction {
    Attack,
    Flee,
    Capture,
}

/// How a capture attempt went. Running out of capture items is its own
/// outcome, distinct from a throw the creature broke out of: no item is
/// spent and the wild creature does not get a free hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureAttempt {
    Caught,
    BrokeFree,
    OutOfItems,
}

/// One wild-encounter battle: the player's lead creature against one wild
/// creature, resolved action by action until a terminal status.
///
/// The session owns both combatants for its lifetime; `into_combatants`
/// hands them back when the overworld folds the outcome into the roster.
#[derive(Debug, Clone)]
pub struct BattleSession {
    player: CreatureStats,
    wild: CreatureStats,
    status: BattleStatus,
    turn: u32,
    capture_item: String,
    events: EventBus,
}

/// The reference damage formula: flat attack minus defense, with a floor of 1
/// so a tanky matchup can never stalemate at zero.
fn damage_between(attacker: &CreatureStats, defender: &CreatureStats) -> u16 {
    attacker.attack.saturating_sub(defender.defense).max(1)
}

impl BattleSession {
    pub fn new(player: CreatureStats, wild: CreatureStats) -> Self {
        let mut events = EventBus::new();
        events.push(BattleEvent::WildAppeared {
            name: wild.name.clone(),
        });
        BattleSession {
            player,
            wild,
            status: BattleStatus::Ongoing,
            turn: 0,
            capture_item: CAPTURE_ITEM.to_string(),
            events,
        }
    }

    /// Use a different consumable for captures (default "Poke Ball").
    pub fn with_capture_item(mut self, item: impl Into<String>) -> Self {
        self.capture_item = item.into();
        self
    }

    pub fn status(&self) -> BattleStatus {
        self.status
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn player(&self) -> &CreatureStats {
        &self.player
    }

    pub fn wild(&self) -> &CreatureStats {
        &self.wild
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Hand accumulated events to the presentation layer.
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        self.events.drain()
    }

    /// Give both combatants back once the session is over.
    pub fn into_combatants(self) -> (CreatureStats, CreatureStats) {
        (self.player, self.wild)
    }

    /// Player attacks; the wild creature counter-attacks if it survives.
    /// Returns the damage the player dealt, or None if the session was
    /// already terminal (documented no-op).
    pub fn resolve_attack(&mut self) -> Option<u16> {
        if self.status.is_terminal() {
            return None;
        }
        self.begin_turn();

        let damage = damage_between(&self.player, &self.wild);
        self.wild.take_damage(damage);
        self.events.push(BattleEvent::AttackLanded {
            attacker: self.player.name.clone(),
            defender: self.wild.name.clone(),
            damage,
            remaining_hp: self.wild.current_hp(),
        });

        if self.wild.is_fainted() {
            self.events.push(BattleEvent::CreatureFainted {
                name: self.wild.name.clone(),
            });
            self.end(BattleStatus::PlayerVictory);
        } else {
            self.wild_counter_attack();
        }
        Some(damage)
    }

    /// Attempt to run: even odds. A failed attempt gives the wild creature a
    /// free hit. Returns whether the escape succeeded, or None if terminal.
    pub fn resolve_flee(&mut self, rng: &mut SessionRng) -> Option<bool> {
        if self.status.is_terminal() {
            return None;
        }
        self.begin_turn();

        let escaped = rng.next_roll("flee roll") < 0.5;
        if escaped {
            self.events.push(BattleEvent::FleeSucceeded);
            self.end(BattleStatus::PlayerFled);
        } else {
            self.events.push(BattleEvent::FleeFailed);
            self.wild_counter_attack();
        }
        Some(escaped)
    }

    /// Throw a capture item. The catch chance is the wild creature's missing
    /// HP fraction: zero at full health, approaching one near zero HP (a
    /// fainted wild is unreachable here; victory already ended the session).
    /// Returns None if the session was already terminal.
    pub fn resolve_capture(
        &mut self,
        bag: &mut ItemBag,
        rng: &mut SessionRng,
    ) -> Option<CaptureAttempt> {
        if self.status.is_terminal() {
            return None;
        }

        if bag.consume(&self.capture_item).is_err() {
            // No item was thrown: not a turn, and no counter-attack.
            self.events.push(BattleEvent::OutOfItems {
                item: self.capture_item.clone(),
            });
            return Some(CaptureAttempt::OutOfItems);
        }
        self.begin_turn();

        let max_hp = self.wild.max_hp() as f32;
        let capture_chance = (max_hp - self.wild.current_hp() as f32) / max_hp;

        if rng.next_roll("capture roll") < capture_chance {
            self.events.push(BattleEvent::CaptureSucceeded {
                name: self.wild.name.clone(),
            });
            self.end(BattleStatus::Captured);
            Some(CaptureAttempt::Caught)
        } else {
            self.events.push(BattleEvent::CaptureFailed {
                name: self.wild.name.clone(),
            });
            self.wild_counter_attack();
            Some(CaptureAttempt::BrokeFree)
        }
    }

    fn begin_turn(&mut self) {
        self.turn += 1;
        self.events.push(BattleEvent::TurnStarted {
            turn_number: self.turn,
        });
    }

    fn wild_counter_attack(&mut self) {
        let damage = damage_between(&self.wild, &self.player);
        self.player.take_damage(damage);
        self.events.push(BattleEvent::AttackLanded {
            attacker: self.wild.name.clone(),
            defender: self.player.name.clone(),
            damage,
            remaining_hp: self.player.current_hp(),
        });

        if self.player.is_fainted() {
            self.events.push(BattleEvent::CreatureFainted {
                name: self.player.name.clone(),
            });
            self.end(BattleStatus::PlayerDefeat);
        }
    }

    fn end(&mut self, status: BattleStatus) {
        self.status = status;
        self.events.push(BattleEvent::BattleEnded { status });
    }
}
