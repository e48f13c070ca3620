//! Errors aborting a translation. Unknown declaration heads are not errors, they are rendered as
//! marker comments.

use thiserror::Error;

use crate::parsing::{ClassificationError, ScanError, SyntaxError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Classification(#[from] ClassificationError),
}

pub type Result<T> = std::result::Result<T, Error>;
