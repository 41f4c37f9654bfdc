//! Ordered, bounded lineups of monsters.

use std::fmt;

use crate::constants::{ARMY_MAX_SIZE, ELEMENT_SEPARATOR};
use crate::error::{Error, Result};
use crate::monster::Monster;

/// An ordered sequence of monsters, bounded by [`ARMY_MAX_SIZE`].
///
/// Mutable only through [`Army::add`] during construction; insertion
/// order is preserved and matters to the replay format.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Army {
    units: Vec<Monster>,
}

impl Army {
    /// Creates an empty army.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a unit to the lineup.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ArmyFull`](crate::ErrorKind::ArmyFull) if the
    /// army is already at capacity.
    pub fn add(&mut self, unit: Monster) -> Result<()> {
        if self.units.len() >= ARMY_MAX_SIZE {
            return Err(Error::army_full(ARMY_MAX_SIZE));
        }
        self.units.push(unit);
        Ok(())
    }

    /// Returns the units in insertion order.
    #[must_use]
    pub fn units(&self) -> &[Monster] {
        &self.units
    }

    /// Returns the number of units in the lineup.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns whether the lineup has no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl fmt::Display for Army {
    /// Formats the lineup in input syntax, e.g. `panda,aria:5,wolf`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, unit) in self.units.iter().enumerate() {
            if i > 0 {
                write!(f, "{ELEMENT_SEPARATOR}")?;
            }
            write!(f, "{unit}")?;
        }
        Ok(())
    }
}
