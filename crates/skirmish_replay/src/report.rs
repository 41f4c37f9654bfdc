//! Instance reporting: human text and machine-readable records.
//!
//! Pure formatting over an already-solved (or unsolved) instance; no
//! validation, no mutation. The machine record embeds the replay token
//! so downstream tooling can hand it straight to the game client.

use std::fmt::Write as _;

use serde_json::{Value, json};
use skirmish_data::GameData;
use skirmish_foundation::{Army, Instance, Monster, Result};

use crate::encode::encode_replay;

/// Formats an instance as a machine-readable JSON record.
///
/// Keys: `target`, `solution` (arrays of unit names), `time` (seconds),
/// `fights`, and `replay` (the base64 token as a string). An unsolved
/// instance has an empty `solution` array and a replay built from an
/// empty solution army, mirroring the in-game importer's tolerance.
///
/// # Errors
///
/// Returns an encode error if the replay payload fails to serialize.
pub fn instance_record(instance: &Instance, data: &GameData) -> Result<Value> {
    let empty = Army::new();
    let solution = instance.best_solution.as_ref().unwrap_or(&empty);
    let replay = encode_replay(solution, &instance.target, data)?;

    Ok(json!({
        "target": unit_names(&instance.target),
        "solution": unit_names(solution),
        "time": instance.calculation_time,
        "fights": instance.total_fights_simulated,
        "replay": replay,
    }))
}

/// Formats an instance as multi-line human text.
///
/// Shows the solved lineup or the "could not find a solution" banner,
/// the fight count and timing, and, when a solution exists, the
/// replay token block for the in-game tournament page.
///
/// # Errors
///
/// Returns an encode error if the replay payload fails to serialize.
pub fn instance_report(instance: &Instance, data: &GameData) -> Result<String> {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "Solution for {}:", instance.target);
    if let Some(solution) = &instance.best_solution {
        let _ = writeln!(out, "  {solution}");
    } else {
        let _ = writeln!(out);
        let _ = writeln!(out, "Could not find a solution that beats this lineup.");
    }
    let _ = writeln!(out, "  {} Fights simulated.", instance.total_fights_simulated);
    let _ = writeln!(
        out,
        "  Total Calculation Time: {} seconds",
        instance.calculation_time
    );
    let _ = writeln!(out);

    if let Some(solution) = &instance.best_solution {
        let replay = encode_replay(solution, &instance.target, data)?;
        let _ = writeln!(out, "Battle Replay (Use on Ingame Tournament Page):");
        let _ = writeln!(out, "{replay}");
        let _ = writeln!(out);
    }

    Ok(out)
}

fn unit_names(army: &Army) -> Vec<&str> {
    army.units().iter().map(Monster::name).collect()
}
