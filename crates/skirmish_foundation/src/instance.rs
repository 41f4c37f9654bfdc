//! Solving problems: a target army plus solver-filled solution fields.

use crate::army::Army;
use crate::constants::ARMY_MAX_SIZE;

/// One solving problem.
///
/// Created by the lineup parser; the solution fields are populated later
/// by the external solver, never by the parsing layers.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    /// The army to defeat.
    pub target: Army,
    /// Upper bound on the solution army's size. Full capacity unless a
    /// quest tier reduces it.
    pub max_combatants: usize,
    /// Unit count of the target at creation time.
    pub target_size: usize,
    /// The winning army, if the solver found one.
    pub best_solution: Option<Army>,
    /// Solver wall-clock time in seconds.
    pub calculation_time: u64,
    /// Total number of fights the solver simulated.
    pub total_fights_simulated: u64,
}

impl Instance {
    /// Creates an unsolved instance for the given target.
    #[must_use]
    pub fn new(target: Army, max_combatants: usize) -> Self {
        let target_size = target.len();
        Self {
            target,
            max_combatants,
            target_size,
            best_solution: None,
            calculation_time: 0,
            total_fights_simulated: 0,
        }
    }

    /// Creates an unsolved instance with no combatant restriction.
    #[must_use]
    pub fn unrestricted(target: Army) -> Self {
        Self::new(target, ARMY_MAX_SIZE)
    }

    /// Returns whether the solver found a winning army.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.best_solution.is_some()
    }
}
