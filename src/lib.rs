//! Print exactly two positional arguments back, one per line.
//!
//! `argecho hello world` prints `Argument 1: hello` and `Argument 2: world`.
//! Any other argument count prints `Usage: argecho <arg1> <arg2>` and exits with 1.

pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod pair;
pub mod util;

pub use errors::{ArityError, PairResult};
pub use pair::ArgPair;
