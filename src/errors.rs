use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected exactly 2 arguments, found {found}")]
pub struct ArityError {
    pub found: usize,
}

pub type PairResult<T> = Result<T, ArityError>;
