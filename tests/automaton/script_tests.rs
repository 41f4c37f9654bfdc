//! Script-mode behavior: ordering, exhaustion, comments.

use skirmish_foundation::{ErrorKind, Query, QueryKind};
use skirmish_runtime::{Console, ScriptSource};

use crate::FakeSource;

fn raw(prompt: &str) -> Query {
    Query::new(prompt, "", QueryKind::Raw)
}

#[test]
fn third_query_prompts_interactively_after_two_line_script() {
    let mut console = Console::with_source(FakeSource::new(["typed"]));
    console.attach_script(ScriptSource::from_lines(["first", "second"]), false);

    assert_eq!(console.resolve(&raw("1: ")).unwrap(), "first");
    assert_eq!(console.resolve(&raw("2: ")).unwrap(), "second");
    assert_eq!(console.resolve(&raw("3: ")).unwrap(), "typed");
    assert!(!console.script_active());
}

#[test]
fn script_exit_is_permanent() {
    let mut console = Console::with_source(FakeSource::new(["a", "b"]));
    console.attach_script(ScriptSource::from_lines(Vec::<String>::new()), false);

    assert_eq!(console.resolve(&raw("> ")).unwrap(), "a");
    assert!(!console.script_active());
    assert_eq!(console.resolve(&raw("> ")).unwrap(), "b");
}

#[test]
fn scripted_help_advances_to_the_next_script_line() {
    let mut console = Console::with_source(FakeSource::new(Vec::<String>::new()));
    console.attach_script(ScriptSource::from_lines(["help", "12"]), false);
    let query = Query::new("n: ", "A number.", QueryKind::Integer);
    assert_eq!(console.resolve(&query).unwrap(), "12");
}

#[test]
fn script_comments_are_stripped() {
    let mut console = Console::with_source(FakeSource::new(Vec::<String>::new()));
    console.attach_script(
        ScriptSource::from_lines(["7 // the answer to the first query"]),
        false,
    );
    let query = Query::new("n: ", "", QueryKind::Integer);
    assert_eq!(console.resolve(&query).unwrap(), "7");
}

#[test]
fn exhausted_script_with_closed_console_surfaces_input_closed() {
    let mut console = Console::with_source(FakeSource::new(Vec::<String>::new()));
    console.attach_script(ScriptSource::from_lines(["only"]), false);
    assert_eq!(console.resolve(&raw("> ")).unwrap(), "only");
    let err = console.resolve(&raw("> ")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InputClosed));
}
