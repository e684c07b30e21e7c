//! CLI-level errors (wraps the arity error)

use thiserror::Error;

use crate::errors::ArityError;

/// CLI errors are the top-level error type.
/// The usage line is already on stdout by the time one of these is returned.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("usage: {program}: {source}")]
    Usage {
        program: String,
        #[source]
        source: ArityError,
    },

    #[error("invalid command line: {0}")]
    Parse(String),

    #[error("cannot write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage { .. } | CliError::Parse(_) => crate::exitcode::USAGE,
            CliError::Io(_) => crate::exitcode::IOERR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn usage_and_parse_errors_exit_with_one() {
        let usage = CliError::Usage {
            program: "argecho".into(),
            source: ArityError { found: 0 },
        };
        assert_eq!(usage.exit_code(), 1);
        assert_eq!(CliError::Parse("unexpected '-x'".into()).exit_code(), 1);
    }

    #[test]
    fn io_error_exits_with_ioerr() {
        let err = CliError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.exit_code(), crate::exitcode::IOERR);
    }
}
