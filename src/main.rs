use pokemon_overworld::{
    BattleAction, Direction, EncounterConfig, EncounterOutcome, GridMap, MoveOutcome,
    OverworldSession, OverworldSnapshot, PresentationSink, SessionRng, SpeciesId, StaticProvider,
};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// The reference town, with a wild meadow added east of the shops.
const TOWN_ROWS: [&str; 6] = [
    "AAAAAAAAAAAAAAAAAAAA",
    "APPPPPPPPPPPPPPGGGGA",
    "APHHHPMMMPCCCPPGGGGA",
    "APHHHPMMMPCCCPPGGGGA",
    "APPPPPPPPPPPPPPGGGGA",
    "AAAAAAAAAAAAAAAAAAAA",
];

/// Prints snapshots and battle commentary to stdout.
struct ConsoleSink;

impl PresentationSink for ConsoleSink {
    fn present(&mut self, snapshot: &OverworldSnapshot) {
        match &snapshot.battle {
            Some(battle) => {
                println!(
                    "  [{}] {}  vs  wild {}",
                    battle.turn,
                    format_args!(
                        "{} {}/{}",
                        battle.player.name, battle.player.current_hp, battle.player.max_hp
                    ),
                    format_args!(
                        "{} {}/{}",
                        battle.wild.name, battle.wild.current_hp, battle.wild.max_hp
                    ),
                );
            }
            None => {
                println!("  {} is at {}", snapshot.player_name, snapshot.position);
            }
        }
    }

    fn battle_events(&mut self, events: &[pokemon_overworld::BattleEvent]) {
        for event in events {
            if let Some(line) = event.format() {
                println!("  {}", line);
            }
        }
    }
}

fn print_help(in_battle: bool) {
    if in_battle {
        println!("Battle commands: attack, flee, capture");
    } else {
        println!("Commands: up, down, left, right, team, bag, map, quit");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let map = GridMap::from_rows(&TOWN_ROWS).expect("authored town rows are valid");
    let config = EncounterConfig {
        species_pool: vec![SpeciesId::new("rattata"), SpeciesId::new("pidgey")],
        ..EncounterConfig::default()
    };

    let mut session = OverworldSession::new(
        "Sacha",
        Box::new(map),
        Box::new(StaticProvider::reference_catalog()),
        config,
        SessionRng::new_random(),
    );
    session
        .recruit(SpeciesId::new("pikachu"), 5)
        .expect("fresh roster has room for the starter");

    let mut sink = ConsoleSink;
    println!("Welcome to the overworld. You start with a Pikachu.");
    print_help(false);
    session.publish(&mut sink);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let Some(Ok(line)) = stdin.lock().lines().next() else {
            break;
        };
        let command = line.trim().to_lowercase();

        if command == "quit" {
            break;
        }

        if session.in_battle() {
            let action = match command.as_str() {
                "attack" => BattleAction::Attack,
                "flee" => BattleAction::Flee,
                "capture" => BattleAction::Capture,
                _ => {
                    print_help(true);
                    continue;
                }
            };
            match session.battle_action(action) {
                Ok(EncounterOutcome::Ongoing) | Ok(EncounterOutcome::OutOfItems) => {}
                Ok(EncounterOutcome::Victory) => println!("You won!"),
                Ok(EncounterOutcome::Defeat) => println!("Your creature fainted..."),
                Ok(EncounterOutcome::Fled) => println!("Back to the overworld."),
                Ok(EncounterOutcome::Captured { kept: true }) => {
                    println!("The creature joined your team!")
                }
                Ok(EncounterOutcome::Captured { kept: false }) => {
                    println!("Caught, but your team is full; it was released.")
                }
                Err(err) => println!("{}", err),
            }
            session.publish(&mut sink);
            continue;
        }

        match command.as_str() {
            "team" => {
                for creature in session.roster().iter() {
                    println!("  {}", creature);
                }
            }
            "bag" => println!("  {}", session.bag()),
            "map" => {
                for row in TOWN_ROWS {
                    println!("  {}", row);
                }
            }
            _ => match Direction::from_str(&command) {
                Ok(direction) => {
                    match session.move_player(direction) {
                        Ok(MoveOutcome::Encounter { .. }) => print_help(true),
                        Ok(MoveOutcome::Blocked) => println!("  Something blocks the way."),
                        Ok(MoveOutcome::Moved) => {}
                        Err(err) => println!("{}", err),
                    }
                    session.publish(&mut sink);
                }
                Err(_) => print_help(false),
            },
        }
    }
}
