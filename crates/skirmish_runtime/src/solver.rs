//! Boundary to the external solving engine.

use skirmish_foundation::{Instance, Result};

/// Fills an instance's solution fields.
///
/// The battle-simulation engine lives outside this repository; anything
/// that can produce a winning army (or decide there is none) plugs in
/// here.
pub trait Solver {
    /// Solves one instance in place, populating `best_solution`,
    /// `calculation_time`, and `total_fights_simulated`.
    ///
    /// # Errors
    ///
    /// Implementations may fail for engine-specific reasons; failure
    /// leaves the instance unsolved.
    fn solve(&mut self, instance: &mut Instance) -> Result<()>;
}

/// Placeholder engine that never finds a solution.
///
/// Keeps the CLI runnable without the real engine wired in; every
/// instance reports the "could not find a solution" outcome.
#[derive(Debug, Default)]
pub struct NoSolver;

impl Solver for NoSolver {
    fn solve(&mut self, instance: &mut Instance) -> Result<()> {
        instance.best_solution = None;
        instance.calculation_time = 0;
        instance.total_fights_simulated = 0;
        Ok(())
    }
}
