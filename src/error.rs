use thiserror::Error;

/// Failures surfaced by the proximity core.
///
/// All inputs are trusted positions from the frame driver, so the only
/// failures are construction-time parameter checks and pool invariant breaks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProximityError {
    #[error("marker pool is empty")]
    PoolExhausted,
    #[error("invalid parameters: {0}")]
    InvalidParams(&'static str),
}

pub type Result<T> = std::result::Result<T, ProximityError>;
