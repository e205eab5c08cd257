use crate::battle::session::BattleStatus;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Turn Management
    TurnStarted {
        turn_number: u32,
    },

    // Encounter lifecycle
    WildAppeared {
        name: String,
    },

    // Action resolution
    AttackLanded {
        attacker: String,
        defender: String,
        damage: u16,
        remaining_hp: u16,
    },
    CreatureFainted {
        name: String,
    },
    FleeSucceeded,
    FleeFailed,
    CaptureSucceeded {
        name: String,
    },
    CaptureFailed {
        name: String,
    },
    OutOfItems {
        item: String,
    },

    // Battle End
    BattleEnded {
        status: BattleStatus,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::TurnStarted { .. } => {
                None // Silent - the turn boundary is obvious from the exchange
            }
            BattleEvent::WildAppeared { name } => Some(format!("A wild {} appeared!", name)),
            BattleEvent::AttackLanded {
                attacker,
                defender,
                damage,
                ..
            } => Some(format!("{} hit {} for {} damage!", attacker, defender, damage)),
            BattleEvent::CreatureFainted { name } => Some(format!("{} fainted!", name)),
            BattleEvent::FleeSucceeded => Some("Got away safely!".to_string()),
            BattleEvent::FleeFailed => Some("Can't escape!".to_string()),
            BattleEvent::CaptureSucceeded { name } => Some(format!("Gotcha! {} was caught!", name)),
            BattleEvent::CaptureFailed { name } => {
                Some(format!("Oh no! {} broke free!", name))
            }
            BattleEvent::OutOfItems { item } => Some(format!("No {} left!", item)),
            BattleEvent::BattleEnded { .. } => None, // Silent - the outcome event already spoke
        }
    }
}

/// Event bus for collecting battle events until the presentation layer
/// drains them. The core never blocks on a consumer.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        EventBus::default()
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Hand the accumulated events off, leaving the bus empty.
    pub fn drain(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    /// Formatted lines for every non-silent event, one per row.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            if let Some(line) = event.format() {
                writeln!(f, "  {}", line)?;
            }
        }
        Ok(())
    }
}
