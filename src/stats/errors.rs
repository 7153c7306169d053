use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("Invalid stat kind: {0}")]
    InvalidStatKind(String),

    #[error("Invalid delta: {0} (must be a positive integer)")]
    InvalidDelta(i64),
}
