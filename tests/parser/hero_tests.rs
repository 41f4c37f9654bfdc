//! Hero spec parsing and roster registration.

use skirmish_data::{HeroRoster, builtin};
use skirmish_foundation::ErrorKind;
use skirmish_parser::{parse_hero_spec, parse_lineup_token};

#[test]
fn hero_level_survives_into_the_army() {
    let data = builtin::game_data();
    let mut roster = HeroRoster::new();
    let army = parse_lineup_token("panda,aria:5,wolf", &data, &mut roster).unwrap();
    assert_eq!(army.len(), 3);
    let hero = &army.units()[1];
    assert!(hero.is_hero());
    assert_eq!(hero.level(), 5);
}

#[test]
fn same_hero_token_across_two_armies_yields_equal_monsters() {
    let data = builtin::game_data();
    let mut roster = HeroRoster::new();
    let first = parse_lineup_token("aria:5,panda", &data, &mut roster).unwrap();
    let second = parse_lineup_token("wolf,aria:5", &data, &mut roster).unwrap();
    assert_eq!(first.units()[0], second.units()[1]);
    assert_eq!(roster.len(), 1);
}

#[test]
fn unknown_hero_and_unknown_monster_are_distinct() {
    let data = builtin::game_data();
    let mut roster = HeroRoster::new();

    let err = parse_lineup_token("zorn:3", &data, &mut roster).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownHero(_)));

    let err = parse_lineup_token("zorn", &data, &mut roster).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownMonster(_)));
}

#[test]
fn hero_spec_rejects_malformed_levels() {
    let data = builtin::game_data();
    for token in ["aria:", "aria:x", "aria:1.5", "aria:-2"] {
        let err = parse_hero_spec(token, &data.heroes).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidLevel(_)), "{token}");
    }
}
