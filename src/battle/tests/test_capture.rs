use crate::bag::{ItemBag, CAPTURE_ITEM};
use crate::battle::events::BattleEvent;
use crate::battle::session::{BattleSession, BattleStatus, CaptureAttempt};
use crate::battle::tests::common::{reference_player, reference_wild, TestCreatureBuilder};
use crate::rng::SessionRng;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn wounded_wild(hp: u16) -> BattleSession {
    let wild = TestCreatureBuilder::new("rattata")
        .with_stats(30, 30, 15)
        .with_hp(hp)
        .build();
    BattleSession::new(reference_player(), wild)
}

#[test]
fn empty_bag_fails_distinctly_with_no_counter_attack() {
    let mut session = BattleSession::new(reference_player(), reference_wild());
    let mut bag = ItemBag::new();
    bag.add(CAPTURE_ITEM, 0);
    let mut rng = SessionRng::new_for_test(vec![]);

    let attempt = session.resolve_capture(&mut bag, &mut rng);

    assert_eq!(attempt, Some(CaptureAttempt::OutOfItems));
    assert_eq!(session.status(), BattleStatus::Ongoing);
    assert_eq!(session.player().current_hp(), 35); // no free hit
    assert_eq!(session.turn(), 0); // nothing was thrown
    assert_eq!(bag.quantity(CAPTURE_ITEM), 0);
    assert!(session.events().events().contains(&BattleEvent::OutOfItems {
        item: CAPTURE_ITEM.to_string()
    }));
}

#[test]
fn full_health_wild_can_never_be_caught() {
    // Chance is (30 - 30) / 30 = 0; even the minimum roll of 0.0 fails.
    let mut session = BattleSession::new(reference_player(), reference_wild());
    let mut bag = ItemBag::with_starting_stock();
    let mut rng = SessionRng::new_for_test(vec![0.0]);

    let attempt = session.resolve_capture(&mut bag, &mut rng);

    assert_eq!(attempt, Some(CaptureAttempt::BrokeFree));
    assert_eq!(session.status(), BattleStatus::Ongoing);
}

#[rstest]
// capture_chance = (30 - hp) / 30; a roll of 0.5 succeeds only below it
#[case(30, false)] // chance 0.0
#[case(20, false)] // chance 1/3
#[case(15, false)] // chance 0.5: boundary roll fails
#[case(10, true)] // chance 2/3
#[case(5, true)] // chance 5/6
#[case(1, true)] // chance 29/30
fn capture_chance_grows_as_hp_drops(#[case] wild_hp: u16, #[case] caught: bool) {
    let mut session = wounded_wild(wild_hp);
    let mut bag = ItemBag::with_starting_stock();
    let mut rng = SessionRng::new_for_test(vec![0.5]);

    let attempt = session.resolve_capture(&mut bag, &mut rng);

    if caught {
        assert_eq!(attempt, Some(CaptureAttempt::Caught));
        assert_eq!(session.status(), BattleStatus::Captured);
    } else {
        assert_eq!(attempt, Some(CaptureAttempt::BrokeFree));
        assert_eq!(session.status(), BattleStatus::Ongoing);
    }
    // The item is spent either way once it was thrown
    assert_eq!(bag.quantity(CAPTURE_ITEM), 4);
}

#[test]
fn successful_capture_keeps_the_wild_creature_intact() {
    let mut session = wounded_wild(10);
    let mut bag = ItemBag::with_starting_stock();
    let mut rng = SessionRng::new_for_test(vec![0.1]);

    let _ = session.resolve_capture(&mut bag, &mut rng);

    assert_eq!(session.status(), BattleStatus::Captured);
    let (_, wild) = session.into_combatants();
    assert_eq!(wild.current_hp(), 10); // caught at the HP it had
}

#[test]
fn broken_throw_triggers_a_counter_attack() {
    let mut session = wounded_wild(30);
    let mut bag = ItemBag::with_starting_stock();
    let mut rng = SessionRng::new_for_test(vec![0.9]);

    let _ = session.resolve_capture(&mut bag, &mut rng);

    // Rattata's answer: max(1, 30 - 40) = 1
    assert_eq!(session.player().current_hp(), 34);
    assert_eq!(session.status(), BattleStatus::Ongoing);
}

#[test]
fn failed_capture_counter_attack_can_end_in_defeat() {
    let player = TestCreatureBuilder::new("pikachu")
        .with_stats(35, 55, 40)
        .with_hp(1)
        .build();
    let wild = TestCreatureBuilder::new("rattata")
        .with_stats(30, 30, 15)
        .with_hp(20)
        .build();
    let mut session = BattleSession::new(player, wild);
    let mut bag = ItemBag::with_starting_stock();
    let mut rng = SessionRng::new_for_test(vec![0.99]);

    let _ = session.resolve_capture(&mut bag, &mut rng);

    assert_eq!(session.status(), BattleStatus::PlayerDefeat);
}

#[test]
fn capture_after_termination_is_a_noop() {
    // Win first; the wild is fainted, and capture must not resolve at all.
    let mut session = BattleSession::new(reference_player(), reference_wild());
    let _ = session.resolve_attack();
    assert_eq!(session.status(), BattleStatus::PlayerVictory);

    let mut bag = ItemBag::with_starting_stock();
    let mut rng = SessionRng::new_for_test(vec![]);

    assert_eq!(session.resolve_capture(&mut bag, &mut rng), None);
    assert_eq!(bag.quantity(CAPTURE_ITEM), 5); // nothing consumed
    assert_eq!(session.status(), BattleStatus::PlayerVictory);
}

#[test]
fn custom_capture_item_is_honored() {
    let mut session = wounded_wild(5).with_capture_item("Great Ball");
    let mut bag = ItemBag::new();
    bag.add("Great Ball", 1);
    let mut rng = SessionRng::new_for_test(vec![0.2]);

    let attempt = session.resolve_capture(&mut bag, &mut rng);

    assert_eq!(attempt, Some(CaptureAttempt::Caught));
    assert_eq!(bag.quantity("Great Ball"), 0);
}
