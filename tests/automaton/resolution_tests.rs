//! Validation guarantees per query kind.

use skirmish_foundation::{Query, QueryKind};
use skirmish_runtime::Console;

use crate::FakeSource;

fn integer_query() -> Query {
    Query::new("Enter a number: ", "Any whole number.", QueryKind::Integer)
}

#[test]
fn integer_answers_always_parse() {
    let junk_then_good = ["", "twelve", "1.5", "12abc", "-", "  ", "-42"];
    let mut console = Console::with_source(FakeSource::new(junk_then_good));
    let answer = console.resolve(&integer_query()).unwrap();
    assert!(answer.parse::<i64>().is_ok());
    assert_eq!(answer, "-42");
}

#[test]
fn integer_answer_is_returned_as_text() {
    let mut console = Console::with_source(FakeSource::new(["007"]));
    // The contract is shape validation, not conversion: leading zeros
    // survive because the token is returned unparsed.
    assert_eq!(console.resolve(&integer_query()).unwrap(), "007");
}

#[test]
fn question_answers_are_one_of_the_literals() {
    let mut console = Console::with_source(FakeSource::new(["yes", "no", "Y"]));
    let query = Query::new("Continue? ", "y or n.", QueryKind::Question);
    // "yes"/"no" are not the literals; the case-folded "Y" is.
    assert_eq!(console.resolve(&query).unwrap(), "y");
}

#[test]
fn raw_returns_the_whole_normalized_line() {
    let mut console = Console::with_source(FakeSource::new(["Q3-1 Panda,Wolf // target"]));
    let query = Query::new("Lineups: ", "", QueryKind::Raw);
    assert_eq!(console.resolve(&query).unwrap(), "q3-1 panda,wolf ");
}

#[test]
fn raw_first_drops_the_rest_of_the_line() {
    let mut console = Console::with_source(FakeSource::new(["aria:5 wolf panda"]));
    let query = Query::new("Hero: ", "", QueryKind::RawFirst);
    assert_eq!(console.resolve(&query).unwrap(), "aria:5");
}

#[test]
fn help_is_never_an_answer() {
    let mut console = Console::with_source(FakeSource::new(["help", "help", "9"]));
    assert_eq!(console.resolve(&integer_query()).unwrap(), "9");
}

#[test]
fn retries_consume_lines_in_order() {
    let mut console = Console::with_source(FakeSource::new(["nope", "8"]));
    assert_eq!(console.resolve(&integer_query()).unwrap(), "8");
    // Both lines are gone; the next query hits end of input.
    let query = Query::new("again: ", "", QueryKind::Raw);
    assert!(console.resolve(&query).is_err());
}
