use thiserror::Error;

use tp_core::PathId;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("{0} resolves to zero nodes")]
    NoNodes(PathId),

    #[error("{path} node {index} has a non-finite coordinate")]
    NonFiniteNode { path: PathId, index: usize },

    #[error("{0} schedule period does not fit in u32 milliseconds")]
    PeriodOverflow(PathId),
}

pub type PathResult<T> = Result<T, PathError>;
