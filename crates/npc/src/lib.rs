//! Chase, flee and wander policy for real-time NPCs.
//!
//! Every frame the host calls [`Agent::update`] with the elapsed time and the
//! entity the agent tracks. The agent ticks a reactive behavior tree from the
//! root:
//!
//! 1. **Chase** the quarry when it is close and the agent is not behind on points
//! 2. **Flee** from the quarry when it is close and ahead on points
//! 3. **Wander** to random points (or along a patrol route) otherwise
//!
//! # Core Components
//!
//! - [`Agent`]: Owns the state and the tree; the host-facing API
//! - [`AgentConfig`] / [`Tuning`]: Physical parameters and their world-unit form
//! - [`AgentContext`]: Blackboard handed to every leaf
//! - [`nodes`]: Condition and action leaves
//! - [`policy`]: Tree assembly
//! - [`steering`]: Heading, advance and proximity math

pub mod agent;
pub mod config;
pub mod context;
pub mod error;
pub mod nodes;
pub mod policy;
pub mod quarry;
pub mod state;
pub mod steering;

/// Positions and directions in world units.
pub type Point = glam::DVec2;

// Re-export public API
pub use agent::Agent;
pub use config::{AgentConfig, Tuning, WanderBounds, WanderMode};
pub use context::AgentContext;
pub use error::{AgentError, Result};
pub use quarry::{Quarry, Tracked};
pub use state::{AgentState, MotionState, PatrolRoute};
