//! The two positional values and how they are rendered.

use std::ffi::OsString;
use std::fmt;

use tracing::debug;

use crate::errors::{ArityError, PairResult};

/// Number of positional values the tool accepts.
pub const ARITY: usize = 2;

/// Exactly two opaque text values, bound in invocation order.
///
/// Values are kept verbatim: no trimming, no parsing, empty strings allowed.
/// Bytes that are not valid UTF-8 are shown as U+FFFD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgPair {
    pub first: String,
    pub second: String,
}

impl ArgPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Validates the arity of `values` and binds them positionally.
    pub fn from_values(values: &[OsString]) -> PairResult<Self> {
        match values {
            [first, second] => Ok(Self::new(
                first.to_string_lossy(),
                second.to_string_lossy(),
            )),
            _ => {
                debug!("arity mismatch: {} values", values.len());
                Err(ArityError {
                    found: values.len(),
                })
            }
        }
    }

    /// The two output lines, without trailing newlines.
    pub fn lines(&self) -> [String; ARITY] {
        [
            format!("Argument 1: {}", self.first),
            format!("Argument 2: {}", self.second),
        ]
    }
}

impl fmt::Display for ArgPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = self.lines();
        writeln!(f, "{first}")?;
        writeln!(f, "{second}")
    }
}
