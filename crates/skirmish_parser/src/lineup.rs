//! Raw lineup resolution: comma-separated monster tokens into an army.

use skirmish_data::{GameData, HeroRoster};
use skirmish_foundation::{Army, ELEMENT_SEPARATOR, Error, HERO_LEVEL_SEPARATOR, Monster, Result};

use crate::hero::parse_hero_spec;

/// Resolves a sequence of monster-name tokens into an army.
///
/// Tokens containing the hero-level separator are parsed as hero specs
/// and registered with the roster; everything else is an exact-name
/// monster lookup.
///
/// # Errors
///
/// Returns a parse failure for an unknown monster or hero name, a
/// malformed level, or a lineup longer than the army capacity. Nothing
/// is committed on failure apart from roster entries for hero tokens
/// that parsed before the failing one; re-registration on retry is
/// idempotent, so a re-prompted line converges to the same roster.
pub fn parse_lineup<'a, I>(tokens: I, data: &GameData, roster: &mut HeroRoster) -> Result<Army>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut army = Army::new();
    for token in tokens {
        army.add(resolve_token(token, data, roster)?)?;
    }
    Ok(army)
}

/// Splits one comma-separated lineup token and resolves it.
///
/// # Errors
///
/// Same failure modes as [`parse_lineup`].
pub fn parse_lineup_token(token: &str, data: &GameData, roster: &mut HeroRoster) -> Result<Army> {
    parse_lineup(token.split(ELEMENT_SEPARATOR), data, roster)
}

/// Resolves a single monster token to a concrete unit.
fn resolve_token(token: &str, data: &GameData, roster: &mut HeroRoster) -> Result<Monster> {
    if token.contains(HERO_LEVEL_SEPARATOR) {
        let (template, level) = parse_hero_spec(token, &data.heroes)?;
        Ok(roster.add_leveled(&template, level))
    } else {
        data.monsters
            .get(token)
            .cloned()
            .ok_or_else(|| Error::unknown_monster(token))
    }
}
