//! Hero spec parsing: `name:level` tokens.

use skirmish_data::HeroRegistry;
use skirmish_foundation::{Error, HERO_LEVEL_SEPARATOR, Monster, Result};

/// Parses a `name:level` token into a base hero template and its level.
///
/// The base name must match a registry template exactly; the level must
/// be a non-negative base-10 integer. The returned template is the
/// registry entry, not yet leveled; callers pass it to
/// [`HeroRoster::add_leveled`](skirmish_data::HeroRoster::add_leveled).
///
/// # Errors
///
/// Returns [`ErrorKind::UnknownHero`](skirmish_foundation::ErrorKind::UnknownHero)
/// for an unrecognized base name (reported distinctly from an unknown
/// monster) and [`ErrorKind::InvalidLevel`](skirmish_foundation::ErrorKind::InvalidLevel)
/// for a malformed level.
pub fn parse_hero_spec(token: &str, heroes: &HeroRegistry) -> Result<(Monster, u32)> {
    let (name, level_digits) = token
        .split_once(HERO_LEVEL_SEPARATOR)
        .ok_or_else(|| Error::invalid_level(token))?;

    let template = heroes
        .find(name)
        .ok_or_else(|| Error::unknown_hero(name))?
        .clone();

    let level: u32 = level_digits
        .parse()
        .map_err(|_| Error::invalid_level(token))?;

    Ok((template, level))
}
