use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::Path;

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::pair::ArgPair;

/// File name of the invoked executable, used in the usage line.
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .map(Path::new)
        .and_then(Path::file_name)
        .and_then(OsStr::to_str)
        .map(str::to_owned)
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// Parse the full argv (program name first).
///
/// A clap rejection prints the usage line and becomes `CliError::Parse`.
pub fn parse_cli<I, T, W>(argv: I, program: &str, out: &mut W) -> CliResult<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    match Cli::try_from_values(program, argv.into_iter().skip(1)) {
        Ok(cli) => Ok(cli),
        Err(e) => {
            debug!("clap rejected command line: {:?}", e.kind());
            output::usage(out, program)?;
            Err(CliError::Parse(e.kind().to_string()))
        }
    }
}

#[instrument(skip(out))]
pub fn execute_command<W: Write>(cli: &Cli, program: &str, out: &mut W) -> CliResult<()> {
    match ArgPair::from_values(&cli.values) {
        Ok(pair) => {
            debug!("pair: {:?}", pair);
            output::arguments(out, &pair)?;
            Ok(())
        }
        Err(source) => {
            output::usage(out, program)?;
            Err(CliError::Usage {
                program: program.to_string(),
                source,
            })
        }
    }
}

/// Parse and execute in one go, without touching the logging setup.
pub fn run<I, T, W>(argv: I, out: &mut W) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let program = program_name(argv.first().map(OsString::as_os_str));
    let cli = parse_cli(argv, &program, out)?;
    execute_command(&cli, &program, out)
}
