//! Input commands built on the query automaton.
//!
//! These own the retry loops: the parser reports failures, the command
//! decides to re-prompt.

use skirmish_data::{GameData, HeroRoster};
use skirmish_foundation::{Error, Instance, Monster, Query, QueryKind, Result};
use skirmish_parser::{parse_hero_spec, parse_instances};

use crate::console::Console;
use crate::output::OutputLevel;
use crate::source::LineSource;

/// Help text for hero-level entry.
const HERO_INPUT_HELP: &str = "Enter one hero per line as name:level, e.g. aria:32.\n\
    Type done (or press enter twice) to continue without more heroes.";

/// Help text for lineup entry.
const LINEUP_INPUT_HELP: &str = "Enter a lineup as monster names joined by commas, e.g. \
    panda,aria:5,wolf,\nor a quest reference like q12-3. Separate multiple lineups with spaces.";

/// Outcome of one hero-level entry line.
///
/// Explicit so callers and tests can tell "user pressed enter" apart
/// from "user typo'd a hero name"; both leave the roster unchanged but
/// only blanks count toward the two-blank termination rule.
#[derive(Debug)]
pub enum HeroEntry {
    /// A hero spec parsed and was registered.
    Accepted(Monster),
    /// The line was empty.
    Blank,
    /// The line was non-empty but did not parse.
    Rejected(Error),
    /// The literal `done`.
    Done,
}

/// Classifies one already-normalized hero entry line.
///
/// An accepted spec is registered with the roster as a side effect.
pub fn classify_hero_entry(input: &str, data: &GameData, roster: &mut HeroRoster) -> HeroEntry {
    if input.is_empty() {
        return HeroEntry::Blank;
    }
    if input == "done" {
        return HeroEntry::Done;
    }
    match parse_hero_spec(input, &data.heroes) {
        Ok((template, level)) => HeroEntry::Accepted(roster.add_leveled(&template, level)),
        Err(e) => HeroEntry::Rejected(e),
    }
}

impl<S: LineSource> Console<S> {
    /// Collects the player's hero levels, one `name:level` spec per line.
    ///
    /// Terminates on the literal `done` or after two consecutive blank
    /// lines; any non-empty line resets the blank counter, whether or
    /// not it parsed. Rejected entries are reported through the gate
    /// before re-prompting. Returns the created heroes in order of
    /// first successful entry.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Console::resolve`].
    pub fn collect_hero_levels(
        &mut self,
        data: &GameData,
        roster: &mut HeroRoster,
    ) -> Result<Vec<Monster>> {
        if !self.script_silent() {
            self.gate().message(
                "\nEnter your heroes with levels. Press enter after every hero.",
                OutputLevel::Basic,
            );
            self.gate().message(
                "Press enter twice or type done to proceed without more heroes.",
                OutputLevel::Basic,
            );
        }

        let mut heroes: Vec<Monster> = Vec::new();
        let mut blanks = 0;
        loop {
            let query = Query::new(
                format!("Enter hero {}: ", heroes.len() + 1),
                HERO_INPUT_HELP,
                QueryKind::RawFirst,
            );
            let input = self.resolve(&query)?;
            match classify_hero_entry(&input, data, roster) {
                HeroEntry::Blank => {
                    blanks += 1;
                    if blanks >= 2 {
                        break;
                    }
                }
                HeroEntry::Done => break,
                HeroEntry::Accepted(hero) => {
                    blanks = 0;
                    if let Some(existing) = heroes
                        .iter_mut()
                        .find(|h| h.base_name() == hero.base_name())
                    {
                        *existing = hero;
                    } else {
                        heroes.push(hero);
                    }
                }
                HeroEntry::Rejected(e) => {
                    blanks = 0;
                    self.gate()
                        .message(&format!("Could not add hero: {e}"), OutputLevel::Basic);
                }
            }
        }

        Ok(heroes)
    }

    /// Collects one or more instances to solve.
    ///
    /// Re-prompts the whole line until every whitespace-separated
    /// instance token parses and at least one instance results.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Console::resolve`].
    pub fn collect_instances(
        &mut self,
        prompt: &str,
        data: &GameData,
        roster: &mut HeroRoster,
    ) -> Result<Vec<Instance>> {
        let query = Query::new(prompt, LINEUP_INPUT_HELP, QueryKind::Raw);
        loop {
            let line = self.resolve(&query)?;
            match parse_instances(&line, data, roster) {
                Ok(instances) if !instances.is_empty() => return Ok(instances),
                Ok(_) => {}
                Err(e) if e.is_parse_failure() => {
                    self.gate()
                        .message(&format!("Could not read lineup: {e}"), OutputLevel::Basic);
                }
                Err(e) => return Err(e),
            }
        }
    }
}
