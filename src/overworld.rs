use crate::bag::ItemBag;
use crate::battle::{BattleAction, BattleEvent, BattleSession, BattleStatus, CaptureAttempt};
use crate::creature::CreatureStats;
use crate::encounter::{EncounterConfig, EncounterPolicy};
use crate::errors::{OverworldResult, RosterError, SessionError};
use crate::map::{Coord, TerrainMap};
use crate::presentation::{OverworldSnapshot, PresentationSink};
use crate::provider::{fetch_or_fallback, CreatureDataProvider};
use crate::rng::SessionRng;
use crate::roster::Roster;
use schema::{Direction, SpeciesId};
use tracing::debug;

/// What one movement request amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The step committed; nothing jumped out of the grass.
    Moved,
    /// The candidate tile was not walkable; the position is unchanged.
    /// Not an error, and the encounter cooldown does not advance.
    Blocked,
    /// The step committed and a wild creature appeared; the session is now in
    /// battle until `battle_action` reaches a terminal status.
    Encounter { species: SpeciesId },
}

/// What one battle action amounted to, with the outcome already folded into
/// the roster and bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncounterOutcome {
    /// The battle continues; submit another action.
    Ongoing,
    /// The wild creature fainted.
    Victory,
    /// The player's creature fainted.
    Defeat,
    /// Got away safely.
    Fled,
    /// The wild creature was caught. `kept` is false when the roster was
    /// full: the capture itself still succeeded, but the creature was
    /// released rather than stored.
    Captured { kept: bool },
    /// No capture item left; the battle continues and nothing changed.
    OutOfItems,
}

struct ActiveBattle {
    session: BattleSession,
    /// Roster slot the lead creature came from, so it goes back where it was.
    lead_slot: usize,
}

/// Top-level orchestrator: player position, movement gating, encounter
/// lifecycle, and the fold of battle outcomes into roster and bag.
///
/// Everything is step-driven; each call runs to completion before the next
/// input is accepted, so there is no interior locking anywhere.
pub struct OverworldSession {
    player_name: String,
    position: Coord,
    map: Box<dyn TerrainMap>,
    policy: EncounterPolicy,
    roster: Roster,
    bag: ItemBag,
    rng: SessionRng,
    provider: Box<dyn CreatureDataProvider>,
    battle: Option<ActiveBattle>,
    pending_events: Vec<BattleEvent>,
}

impl OverworldSession {
    /// Start a session at the map's spawn point with an empty roster and the
    /// reference starting stock of items.
    pub fn new(
        player_name: impl Into<String>,
        map: Box<dyn TerrainMap>,
        provider: Box<dyn CreatureDataProvider>,
        config: EncounterConfig,
        rng: SessionRng,
    ) -> Self {
        let position = map.spawn_point();
        OverworldSession {
            player_name: player_name.into(),
            position,
            map,
            policy: EncounterPolicy::new(config),
            roster: Roster::new(),
            bag: ItemBag::with_starting_stock(),
            rng,
            provider,
            battle: None,
            pending_events: Vec::new(),
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn bag(&self) -> &ItemBag {
        &self.bag
    }

    pub fn bag_mut(&mut self) -> &mut ItemBag {
        &mut self.bag
    }

    pub fn encounter_policy(&self) -> &EncounterPolicy {
        &self.policy
    }

    pub fn in_battle(&self) -> bool {
        self.battle.is_some()
    }

    pub fn battle(&self) -> Option<&BattleSession> {
        self.battle.as_ref().map(|active| &active.session)
    }

    /// Add a creature of `species` to the roster, stats from the provider
    /// (or the fallback block when the lookup fails).
    pub fn recruit(&mut self, species: SpeciesId, level: u8) -> Result<(), RosterError> {
        let base = fetch_or_fallback(self.provider.as_ref(), &species);
        let creature = CreatureStats::from_base_stats(species, base, level);
        self.roster.add(creature).map_err(|(_, err)| err)
    }

    /// One movement request. A non-walkable candidate leaves everything
    /// untouched; a committed step advances the encounter cooldown and may
    /// spawn a battle.
    pub fn move_player(&mut self, direction: Direction) -> OverworldResult<MoveOutcome> {
        if self.battle.is_some() {
            return Err(SessionError::BattleInProgress.into());
        }

        let candidate = self.position.stepped(direction, self.map.step());
        if !self.map.is_walkable(candidate) {
            return Ok(MoveOutcome::Blocked);
        }

        self.position = candidate;
        self.policy.tick();

        // A team with nobody able to fight cannot be ambushed.
        if !self.roster.has_usable() {
            return Ok(MoveOutcome::Moved);
        }

        let in_grass = self.map.is_special_zone(self.position);
        match self.policy.maybe_trigger(in_grass, &mut self.rng) {
            Some(species) => {
                self.start_battle(species.clone());
                Ok(MoveOutcome::Encounter { species })
            }
            None => Ok(MoveOutcome::Moved),
        }
    }

    fn start_battle(&mut self, species: SpeciesId) {
        let base = fetch_or_fallback(self.provider.as_ref(), &species);
        let wild =
            CreatureStats::from_base_stats(species, base, self.policy.config().wild_level);

        let lead_slot = self
            .roster
            .lead_index()
            .expect("start_battle requires a usable lead");
        let lead = self
            .roster
            .take(lead_slot)
            .expect("lead slot was just located");

        debug!(wild = %wild, lead = %lead, "wild encounter started");
        self.battle = Some(ActiveBattle {
            session: BattleSession::new(lead, wild),
            lead_slot,
        });
    }

    /// One battle action. When the action terminates the battle, the outcome
    /// is folded in before returning: the lead creature goes back to its
    /// slot, and a caught wild creature is stored (or released if the roster
    /// is full).
    pub fn battle_action(&mut self, action: BattleAction) -> OverworldResult<EncounterOutcome> {
        let Some(active) = self.battle.as_mut() else {
            return Err(SessionError::NoActiveBattle.into());
        };

        let capture = match action {
            BattleAction::Attack => {
                let _ = active.session.resolve_attack();
                None
            }
            BattleAction::Flee => {
                let _ = active.session.resolve_flee(&mut self.rng);
                None
            }
            BattleAction::Capture => active.session.resolve_capture(&mut self.bag, &mut self.rng),
        };

        self.pending_events.extend(active.session.drain_events());

        if capture == Some(CaptureAttempt::OutOfItems) {
            return Ok(EncounterOutcome::OutOfItems);
        }
        if !active.session.status().is_terminal() {
            return Ok(EncounterOutcome::Ongoing);
        }

        let finished = self.battle.take().expect("battle was just borrowed");
        let status = finished.session.status();
        let (lead, wild) = finished.session.into_combatants();
        self.roster.put_back(finished.lead_slot, lead);

        Ok(match status {
            BattleStatus::PlayerVictory => EncounterOutcome::Victory,
            BattleStatus::PlayerDefeat => EncounterOutcome::Defeat,
            BattleStatus::PlayerFled => EncounterOutcome::Fled,
            BattleStatus::Captured => match self.roster.add(wild) {
                Ok(()) => EncounterOutcome::Captured { kept: true },
                Err((released, RosterError::RosterFull)) => {
                    debug!(released = %released, "roster full; captured creature released");
                    EncounterOutcome::Captured { kept: false }
                }
            },
            BattleStatus::Ongoing => unreachable!("terminal status checked above"),
        })
    }

    /// Battle commentary accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Capture the current state for rendering.
    pub fn snapshot(&self) -> OverworldSnapshot {
        OverworldSnapshot {
            player_name: self.player_name.clone(),
            position: self.position,
            roster: self.roster.iter().map(Into::into).collect(),
            bag: self
                .bag
                .iter()
                .map(|(name, count)| (name.to_string(), count))
                .collect(),
            battle: self.battle.as_ref().map(|active| (&active.session).into()),
        }
    }

    /// Push the snapshot and any pending battle commentary to a sink.
    pub fn publish(&mut self, sink: &mut dyn PresentationSink) {
        let events = self.drain_events();
        if !events.is_empty() {
            sink.battle_events(&events);
        }
        sink.present(&self.snapshot());
    }
}
