//! Tick context for the NPC behavior tree.
//!
//! The [`AgentContext`] is the blackboard every leaf receives. It holds:
//!
//! - The agent's own state (mutable)
//! - A snapshot of the quarry for the current frame (read-only by convention)
//! - The elapsed frame time consumed by movement leaves
//! - The random source used by the wander branch

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{AgentState, Quarry};

pub struct AgentContext {
    pub agent: AgentState,
    /// Tracked entity as seen at the start of this frame.
    pub quarry: Quarry,
    /// Seconds since the previous frame.
    pub dt: f64,
    rng: StdRng,
}

impl AgentContext {
    /// Creates a context with a deterministic random source.
    pub fn new(agent: AgentState, seed: u64) -> Self {
        Self {
            agent,
            quarry: Quarry::default(),
            dt: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Stores this frame's inputs before the tree is ticked.
    pub fn begin_frame(&mut self, dt: f64, quarry: Quarry) {
        self.dt = dt;
        self.quarry = quarry;
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}
