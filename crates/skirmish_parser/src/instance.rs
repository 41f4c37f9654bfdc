//! Instance token parsing: quest references and raw lineups.

use skirmish_data::{GameData, HeroRoster};
use skirmish_foundation::{
    ARMY_MAX_SIZE, Error, Instance, QUEST_PREFIX, QUEST_TIER_SEPARATOR, Result,
};

use crate::lineup::{parse_lineup, parse_lineup_token};

/// A recognized `q<number>-<tier>` reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct QuestRef {
    number: usize,
    tier: usize,
}

/// Recognizes a quest reference token.
///
/// A token is a quest reference only when it matches the full
/// `q<digits>-<digits>` shape; anything else falls back to raw-lineup
/// resolution, so a monster whose name merely starts with `q` still
/// parses.
fn quest_ref(token: &str) -> Option<QuestRef> {
    let rest = token.strip_prefix(QUEST_PREFIX)?;
    let (number, tier) = rest.split_once(QUEST_TIER_SEPARATOR)?;
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if tier.is_empty() || !tier.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(QuestRef {
        number: number.parse().ok()?,
        tier: tier.parse().ok()?,
    })
}

/// Converts one instance token into an unsolved [`Instance`].
///
/// Quest references resolve the quest's canonical lineup and reduce the
/// allowed solution size by `tier - 1`; raw lineups allow the full army
/// capacity. `target_size` is always the resolved army's unit count.
///
/// # Errors
///
/// Returns a parse failure for unknown names, malformed levels, an
/// out-of-range quest number, or a tier that is zero or would leave no
/// combatant slots.
pub fn parse_instance(token: &str, data: &GameData, roster: &mut HeroRoster) -> Result<Instance> {
    if let Some(quest) = quest_ref(token) {
        let lineup = data
            .quests
            .lineup(quest.number)
            .ok_or_else(|| Error::unknown_quest(quest.number))?;
        let target = parse_lineup(lineup.iter().map(String::as_str), data, roster)?;

        let max_combatants = quest
            .tier
            .checked_sub(1)
            .and_then(|handicap| ARMY_MAX_SIZE.checked_sub(handicap))
            .filter(|&max| max >= 1)
            .ok_or_else(|| Error::invalid_quest_ref(token))?;

        Ok(Instance::new(target, max_combatants))
    } else {
        let target = parse_lineup_token(token, data, roster)?;
        Ok(Instance::unrestricted(target))
    }
}

/// Parses a whole input line of whitespace-separated instance tokens.
///
/// Succeeds only if every token parses; the caller owns the retry loop
/// and re-prompts the whole line otherwise.
///
/// # Errors
///
/// Returns the first token's parse failure.
pub fn parse_instances(line: &str, data: &GameData, roster: &mut HeroRoster) -> Result<Vec<Instance>> {
    line.split_whitespace()
        .map(|token| parse_instance(token, data, roster))
        .collect()
}
