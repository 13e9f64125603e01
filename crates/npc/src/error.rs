//! Errors raised by the NPC policy.
//!
//! Conditions cannot fail and actions only ever report `Success` or
//! `Running`, so everything here is a fault: the tree stops and the error
//! travels out of [`crate::Agent::update`] unchanged.

use thiserror::Error;

/// Errors raised while configuring or ticking an agent.
#[derive(Debug, Error)]
pub enum AgentError {
    /// A movement action ran before any target was assigned.
    #[error("target location must be set before moving")]
    TargetUnset,

    /// A target or steering goal has non-finite coordinates.
    #[error("invalid target location ({x}, {y})")]
    InvalidTarget { x: f64, y: f64 },

    /// Patrol wandering was requested with no waypoints.
    #[error("patrol route has no waypoints")]
    EmptyPatrolRoute,

    /// The host supplied a negative or non-finite frame time.
    #[error("invalid frame time {0}")]
    InvalidFrameTime(f64),

    /// The agent configuration failed validation.
    #[error("invalid agent config: {0}")]
    InvalidConfig(String),

    /// The config file could not be read.
    #[error("failed to read agent config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file could not be parsed.
    #[error("failed to parse agent config: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, AgentError>;
