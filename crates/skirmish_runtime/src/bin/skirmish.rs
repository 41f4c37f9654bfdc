//! Skirmish CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use skirmish_data::{HeroRoster, builtin};
use skirmish_parser::parse_instance;
use skirmish_replay::instance_report;
use skirmish_runtime::{Console, NoSolver, OutputLevel, Solver};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    script: Option<PathBuf>,
    echo_script: bool,
    quiet: bool,
    verbose: bool,
    show_help: bool,
    show_version: bool,
    lineups: Vec<String>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-e" | "--echo-script" => config.echo_script = true,
            "-q" | "--quiet" => config.quiet = true,
            "-v" | "--verbose" => config.verbose = true,
            "-s" | "--script" => {
                i += 1;
                if i >= args.len() {
                    return Err("--script requires a file path".into());
                }
                config.script = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            lineup => config.lineups.push(lineup.to_lowercase()),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("skirmish {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let data = builtin::game_data();
    let mut console = Console::new()?;
    if config.quiet {
        console.gate_mut().set_level(OutputLevel::Solution);
    } else if config.verbose {
        console.gate_mut().set_level(OutputLevel::Detailed);
    }
    if let Some(path) = &config.script {
        console.attach_script_file(path, config.echo_script);
    }

    let mut roster = HeroRoster::new();
    let mut solver = NoSolver;

    // Lineups given on the command line are solved once, without prompts.
    if !config.lineups.is_empty() {
        for token in &config.lineups {
            let mut instance = parse_instance(token, &data, &mut roster)?;
            solver.solve(&mut instance)?;
            if console.gate().should_emit(OutputLevel::Solution) {
                print!("{}", instance_report(&instance, &data)?);
            }
        }
        return Ok(());
    }

    console.collect_hero_levels(&data, &mut roster)?;
    loop {
        let instances = console.collect_instances("Enter lineup(s): ", &data, &mut roster)?;
        for mut instance in instances {
            solver.solve(&mut instance)?;
            if console.gate().should_emit(OutputLevel::Solution) {
                print!("{}", instance_report(&instance, &data)?);
            }
        }

        let again = console.ask_yes_no(
            "Do you want to calculate more lineups?",
            "Answer y to enter another lineup, n to exit.",
            OutputLevel::Basic,
            false,
        )?;
        if !again {
            break;
        }
    }

    console.halt_execution();
    Ok(())
}

fn print_help() {
    println!(
        "skirmish - army lineup solving front-end

USAGE:
    skirmish [OPTIONS] [LINEUPS...]

ARGUMENTS:
    [LINEUPS...]    Instance tokens to solve without prompting,
                    e.g. q12-3 or panda,aria:5,wolf

OPTIONS:
    -h, --help           Print help information
    -V, --version        Print version information
    -s, --script FILE    Answer queries from FILE (one answer per line,
                         // starts a comment) until it runs out
    -e, --echo-script    Show scripted answers as if typed
    -q, --quiet          Only print solutions
    -v, --verbose        Print progress details

EXAMPLES:
    skirmish                     Prompt for heroes and lineups
    skirmish q12-3               Solve quest 12 at tier 3
    skirmish -s answers.txt      Replay a recorded session
    skirmish -q panda,wolf       Print only the solution report"
    );
}
