use crate::battle::{BattleEvent, BattleSession, BattleStatus};
use crate::creature::CreatureStats;
use crate::map::Coord;
use schema::SpeciesId;
use serde::{Deserialize, Serialize};

/// Read-only view of one creature for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureView {
    pub name: String,
    pub species: SpeciesId,
    pub level: u8,
    pub current_hp: u16,
    pub max_hp: u16,
    pub is_fainted: bool,
}

impl From<&CreatureStats> for CreatureView {
    fn from(creature: &CreatureStats) -> Self {
        CreatureView {
            name: creature.name.clone(),
            species: creature.species.clone(),
            level: creature.level,
            current_hp: creature.current_hp(),
            max_hp: creature.max_hp(),
            is_fainted: creature.is_fainted(),
        }
    }
}

/// Read-only view of the battle in progress, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleView {
    pub status: BattleStatus,
    pub turn: u32,
    pub player: CreatureView,
    pub wild: CreatureView,
}

impl From<&BattleSession> for BattleView {
    fn from(session: &BattleSession) -> Self {
        BattleView {
            status: session.status(),
            turn: session.turn(),
            player: session.player().into(),
            wild: session.wild().into(),
        }
    }
}

/// Everything the presentation layer may render, captured at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverworldSnapshot {
    pub player_name: String,
    pub position: Coord,
    pub roster: Vec<CreatureView>,
    pub bag: Vec<(String, u32)>,
    pub battle: Option<BattleView>,
}

/// Where the core pushes its state for rendering. The core never blocks on a
/// sink and never reads state back from it; player inputs come in through
/// `OverworldSession` calls, not through this trait.
pub trait PresentationSink {
    fn present(&mut self, snapshot: &OverworldSnapshot);

    /// Formatted battle commentary, in resolution order.
    fn battle_events(&mut self, events: &[BattleEvent]) {
        let _ = events;
    }
}

/// Sink that drops everything; for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn present(&mut self, _snapshot: &OverworldSnapshot) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::SpeciesId;

    #[test]
    fn creature_view_mirrors_the_stat_block() {
        let mut creature =
            CreatureStats::new("Rattata", SpeciesId::new("rattata"), 5, 30, 30, 15);
        creature.take_damage(30);

        let view = CreatureView::from(&creature);
        assert_eq!(view.current_hp, 0);
        assert_eq!(view.max_hp, 30);
        assert!(view.is_fainted);
    }

    #[test]
    fn snapshot_serializes_for_out_of_process_sinks() {
        let snapshot = OverworldSnapshot {
            player_name: "Sacha".to_string(),
            position: Coord::new(5, 5),
            roster: vec![],
            bag: vec![("Poke Ball".to_string(), 5)],
            battle: None,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: OverworldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
