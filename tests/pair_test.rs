use std::ffi::OsString;

use argecho::cli::{run, CliError};
use argecho::util::testing;
use argecho::{ArgPair, ArityError};
use rstest::{fixture, rstest};
use tracing::debug;

#[fixture]
fn setup() {
    testing::init_test_setup();
}

#[rstest]
fn test_pair_display(#[from(setup)] _setup: ()) {
    let pair = ArgPair::from_values(&[OsString::from("hello"), OsString::from("world")]).unwrap();
    debug!("pair: {:?}", pair);
    assert_eq!(pair.to_string(), "Argument 1: hello\nArgument 2: world\n");
}

#[rstest]
fn test_pair_values_are_opaque(#[from(setup)] _setup: ()) {
    // no numeric or path interpretation
    let pair = ArgPair::new("007", "../x/./y");
    assert_eq!(pair.lines()[0], "Argument 1: 007");
    assert_eq!(pair.lines()[1], "Argument 2: ../x/./y");
}

#[rstest]
#[case(vec![], 0)]
#[case(vec!["only-one"], 1)]
#[case(vec!["a", "b", "c"], 3)]
fn test_run_usage(#[from(setup)] _setup: (), #[case] values: Vec<&str>, #[case] found: usize) {
    let mut argv = vec!["/opt/tools/argecho"];
    argv.extend(values);
    let mut out = Vec::new();

    let err = run(argv, &mut out).unwrap_err();

    match err {
        CliError::Usage { program, source } => {
            assert_eq!(program, "argecho");
            assert_eq!(source, ArityError { found });
        }
        other => panic!("expected usage error, got {other:?}"),
    }
    assert_eq!(String::from_utf8(out).unwrap(), "Usage: argecho <arg1> <arg2>\n");
}

#[rstest]
fn test_run_is_idempotent(#[from(setup)] _setup: ()) {
    let mut first = Vec::new();
    let mut second = Vec::new();
    run(["argecho", "x", "y"], &mut first).unwrap();
    run(["argecho", "x", "y"], &mut second).unwrap();
    assert_eq!(first, second);
}
