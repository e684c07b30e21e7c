//! CLI argument definitions using clap

use std::ffi::OsString;

use clap::Parser;

/// Print exactly two positional arguments back, one per line
///
/// Every value is positional, including `--`, `-h` and anything else that
/// looks like a flag. Log verbosity comes from `RUST_LOG` only.
#[derive(Parser, Debug)]
#[command(name = "argecho")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// The two values to print
    #[arg(value_name = "ARG", allow_hyphen_values = true, trailing_var_arg = true)]
    pub values: Vec<OsString>,
}

impl Cli {
    /// Parse the values that follow the program name.
    ///
    /// A leading escape is injected so clap stops option parsing at once and
    /// hands every value through verbatim, a literal `--` included.
    pub fn try_from_values<I, T>(program: &str, values: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv = [OsString::from(program), OsString::from("--")]
            .into_iter()
            .chain(values.into_iter().map(Into::into));
        Self::try_parse_from(argv)
    }
}
