//! End-to-end scripted sessions.
//!
//! Drives a whole session the way the binary does: hero collection,
//! instance collection, solving, and reporting, with every answer fed
//! from a script.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

use skirmish_data::{HeroRoster, builtin};
use skirmish_foundation::{ARMY_MAX_SIZE, Army, ErrorKind, Instance, Result};
use skirmish_replay::{instance_record, instance_report};
use skirmish_runtime::{Console, LineSource, ReadResult, ScriptSource, Solver};

/// Interactive source that replays fixed lines, then EOF.
struct FakeSource {
    lines: Vec<String>,
    index: usize,
}

impl FakeSource {
    fn new<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            index: 0,
        }
    }

    fn empty() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl LineSource for FakeSource {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        if self.index < self.lines.len() {
            let line = self.lines[self.index].clone();
            self.index += 1;
            Ok(ReadResult::Line(line))
        } else {
            Ok(ReadResult::Eof)
        }
    }
}

/// Engine stand-in that answers every instance with a fixed lineup.
struct CannedSolver {
    answer: Vec<&'static str>,
}

impl Solver for CannedSolver {
    fn solve(&mut self, instance: &mut Instance) -> Result<()> {
        let data = builtin::game_data();
        let mut army = Army::new();
        for name in &self.answer {
            army.add(data.monsters.get(name).unwrap().clone())?;
        }
        instance.best_solution = Some(army);
        instance.calculation_time = 3;
        instance.total_fights_simulated = 999;
        Ok(())
    }
}

#[test]
fn scripted_session_from_heroes_to_report() {
    let data = builtin::game_data();
    let mut roster = HeroRoster::new();
    let mut console = Console::with_source(FakeSource::empty());
    console.attach_script(
        ScriptSource::from_lines([
            "aria:32 // my carry",
            "done",
            "q1-1 panda,aria:32",
        ]),
        false,
    );

    let heroes = console.collect_hero_levels(&data, &mut roster).unwrap();
    assert_eq!(heroes.len(), 1);
    assert_eq!(heroes[0].name(), "aria:32");

    let mut instances = console
        .collect_instances("Enter lineup(s): ", &data, &mut roster)
        .unwrap();
    assert_eq!(instances.len(), 2);
    assert_eq!(instances[0].target_size, 1);
    assert_eq!(instances[0].max_combatants, ARMY_MAX_SIZE);
    assert_eq!(instances[1].target.units()[1].name(), "aria:32");

    let mut solver = CannedSolver {
        answer: vec!["titan", "drake"],
    };
    for instance in &mut instances {
        solver.solve(instance).unwrap();
    }

    let report = instance_report(&instances[0], &data).unwrap();
    assert!(report.contains("Solution for imp:"));
    assert!(report.contains("  titan,drake"));
    assert!(report.contains("999 Fights simulated."));
    assert!(report.contains("Total Calculation Time: 3 seconds"));
    assert!(report.contains("Battle Replay (Use on Ingame Tournament Page):"));

    let record = instance_record(&instances[1], &data).unwrap();
    assert_eq!(record["target"], json!(["panda", "aria:32"]));
    assert_eq!(record["solution"], json!(["titan", "drake"]));
    assert_eq!(record["fights"], json!(999));

    // The roster hero lands in the replay payload by registry index and
    // level.
    let token = record["replay"].as_str().unwrap();
    let payload: Value = serde_json::from_slice(&STANDARD.decode(token).unwrap()).unwrap();
    // titan=9, drake=7 reversed on each solution line.
    assert_eq!(payload["setup"][0], json!(7));
    assert_eq!(payload["setup"][1], json!(9));
    // Target line: aria (registry index 0 -> -2), then panda(3).
    assert_eq!(payload["player"][0], json!(-2));
    assert_eq!(payload["player"][1], json!(3));
    assert_eq!(payload["phero"][0], json!(32));
}

#[test]
fn script_exhaustion_mid_session_falls_back_to_typed_input() {
    let data = builtin::game_data();
    let mut roster = HeroRoster::new();
    // Script covers the heroes only; the lineup line is typed.
    let mut console = Console::with_source(FakeSource::new(["wolf,panda"]));
    console.attach_script(ScriptSource::from_lines(["brand:7", "done"]), false);

    let heroes = console.collect_hero_levels(&data, &mut roster).unwrap();
    assert_eq!(heroes.len(), 1);
    assert!(console.script_active());

    let instances = console
        .collect_instances("Enter lineup(s): ", &data, &mut roster)
        .unwrap();
    assert!(!console.script_active());
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].target_size, 2);
}

#[test]
fn closed_input_mid_session_is_an_error_not_a_hang() {
    let data = builtin::game_data();
    let mut roster = HeroRoster::new();
    let mut console = Console::with_source(FakeSource::new(["aria:1"]));

    let err = console.collect_hero_levels(&data, &mut roster).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InputClosed));
    // The hero entered before the channel closed is still registered.
    assert_eq!(roster.len(), 1);
}

#[test]
fn unsolved_instances_report_without_a_replay() {
    let data = builtin::game_data();
    let mut roster = HeroRoster::new();
    let mut console = Console::with_source(FakeSource::empty());
    console.attach_script(ScriptSource::from_lines(["q5-1"]), false);

    let instances = console
        .collect_instances("Enter lineup(s): ", &data, &mut roster)
        .unwrap();
    let report = instance_report(&instances[0], &data).unwrap();
    assert!(report.contains("Could not find a solution that beats this lineup."));
    assert!(!report.contains("Battle Replay"));
}
