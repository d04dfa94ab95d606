//! Graph-loading error type.

use thiserror::Error;

/// Errors produced while loading authored graph data.
///
/// Runtime "not found" conditions (missing register, unreachable goal,
/// dangling neighbor) are never errors — they surface as `Option`/empty
/// results per the core's failure semantics.  `GraphError` only covers
/// malformed authoring input, which is validated eagerly at load time.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("duplicate waypoint id {0} in authored data")]
    DuplicateNode(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
