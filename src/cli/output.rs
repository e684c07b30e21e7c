//! Standard output formatting
//!
//! Everything here is plain text: the printed lines are the tool's contract.

use std::io::{self, Write};

use crate::pair::ArgPair;

/// Print the usage line.
pub fn usage<W: Write>(out: &mut W, program: &str) -> io::Result<()> {
    writeln!(out, "Usage: {program} <arg1> <arg2>")?;
    out.flush()
}

/// Print "Argument 1: ..." and "Argument 2: ..." lines.
pub fn arguments<W: Write>(out: &mut W, pair: &ArgPair) -> io::Result<()> {
    write!(out, "{pair}")?;
    out.flush()
}
