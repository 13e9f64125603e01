//! Agent facade used by the host frame loop.

use behavior_tree::Status;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::policy::{self, AgentTree, ScoreGuards};
use crate::{
    AgentConfig, AgentContext, AgentError, AgentState, MotionState, PatrolRoute, Point, Quarry,
    Result, Tracked,
};

/// A non-player agent driven by the chase/flee/wander tree.
///
/// The tree is built once in the constructor and ticked from the root on
/// every [`Agent::update`].
pub struct Agent {
    ctx: AgentContext,
    tree: AgentTree,
}

impl Agent {
    /// Creates an agent at `spawn`.
    ///
    /// `seed` drives random wander targets, so runs are reproducible.
    pub fn new(config: &AgentConfig, spawn: Point, seed: u64) -> Result<Self> {
        Self::with_guards(config, spawn, seed, ScoreGuards::standard())
    }

    /// Creates an agent at a random point inside the wander bounds.
    pub fn spawn_random(config: &AgentConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let bounds = config.wander_bounds;
        let mut rng = StdRng::seed_from_u64(seed);
        let spawn = Point::new(
            rng.gen_range(bounds.min.x..=bounds.max.x),
            rng.gen_range(bounds.min.y..=bounds.max.y),
        );
        Self::new(config, spawn, seed)
    }

    /// Creates an agent whose chase/flee branches are gated by `guards`.
    pub fn with_guards(
        config: &AgentConfig,
        spawn: Point,
        seed: u64,
        guards: ScoreGuards,
    ) -> Result<Self> {
        let tuning = config.tuning()?;
        let state = AgentState::new(spawn, PatrolRoute::new(config.patrol_route.clone()));

        tracing::debug!(
            x = spawn.x,
            y = spawn.y,
            wander = %tuning.wander,
            "agent created"
        );

        Ok(Self {
            ctx: AgentContext::new(state, seed),
            tree: policy::assemble(guards, &tuning),
        })
    }

    /// Runs one frame: snapshots the quarry and ticks the tree once.
    ///
    /// The returned status is informational. Errors raised by a leaf are
    /// returned unchanged and should be treated as fatal for this agent.
    pub fn update<T: Tracked + ?Sized>(&mut self, dt: f64, quarry: &T) -> Result<Status> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(AgentError::InvalidFrameTime(dt));
        }
        self.ctx.begin_frame(dt, Quarry::of(quarry));

        match self.tree.tick(&mut self.ctx) {
            Ok(status) => {
                tracing::trace!(%status, motion = %self.ctx.agent.motion, "agent ticked");
                Ok(status)
            }
            Err(err) => {
                tracing::warn!(error = %err, "agent tree raised");
                Err(err)
            }
        }
    }

    /// Sets the target location used by the wander branch.
    pub fn set_target(&mut self, target: Point) -> Result<Status> {
        self.ctx.agent.set_target(target)?;
        Ok(Status::Success)
    }

    /// Counts a consumed collectible.
    pub fn record_pickup(&mut self) {
        self.ctx.agent.score = self.ctx.agent.score.saturating_add(1);
    }

    pub fn state(&self) -> &AgentState {
        &self.ctx.agent
    }

    pub fn position(&self) -> Point {
        self.ctx.agent.position
    }

    pub fn heading(&self) -> f64 {
        self.ctx.agent.heading
    }

    pub fn speed(&self) -> f64 {
        self.ctx.agent.speed
    }

    pub fn target(&self) -> Option<Point> {
        self.ctx.agent.target
    }

    pub fn motion(&self) -> MotionState {
        self.ctx.agent.motion
    }

    pub fn score(&self) -> u32 {
        self.ctx.agent.score
    }

    /// `true` when the sprite should be mirrored horizontally.
    pub fn faces_left(&self) -> bool {
        self.ctx.agent.heading.cos() < 0.0
    }
}

impl Tracked for Agent {
    fn position(&self) -> Point {
        self.ctx.agent.position
    }

    fn score(&self) -> u32 {
        self.ctx.agent.score
    }
}
