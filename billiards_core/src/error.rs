use thiserror::Error;

/// Errors raised while building a simulation
///
/// Stepping never fails; every variant here is a construction problem and
/// leaves no simulation behind.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("ball {index} has invalid radius {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("ball {index} has a non-finite position or velocity")]
    NonFiniteBall { index: usize },

    #[error("balls {first} and {second} are both flagged as the cue ball")]
    MultipleCueBalls { first: usize, second: usize },

    #[error("invalid table size {width}x{height}")]
    InvalidTable { width: f32, height: f32 },

    #[error("pocket {index} is not a valid circle")]
    InvalidPocket { index: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
