//! Agent state.
//!
//! Everything the agent remembers between frames lives here. The behavior
//! tree itself is stateless; its leaves read and write this struct through
//! [`crate::AgentContext`].

use crate::{AgentError, Point, Result};

/// Discrete movement state read by the presentation layer to pick a sprite.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr,
)]
pub enum MotionState {
    #[default]
    Idle,
    #[strum(serialize = "Walk")]
    Moving,
}

impl MotionState {
    /// Animation name for this state.
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Fixed, ordered patrol waypoints with a cursor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatrolRoute {
    waypoints: Vec<Point>,
    cursor: usize,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Point>) -> Self {
        Self {
            waypoints,
            cursor: 0,
        }
    }

    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    /// Index of the waypoint [`PatrolRoute::advance`] returns next.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the waypoint under the cursor and moves the cursor on,
    /// wrapping at the end of the route.
    pub fn advance(&mut self) -> Result<Point> {
        let waypoint = *self
            .waypoints
            .get(self.cursor)
            .ok_or(AgentError::EmptyPatrolRoute)?;
        self.cursor = (self.cursor + 1) % self.waypoints.len();
        Ok(waypoint)
    }
}

/// Mutable per-agent state.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentState {
    pub position: Point,
    /// Radians.
    pub heading: f64,
    /// Current speed in world units per second.
    pub speed: f64,
    /// Destination of the wander branch; also drawn as a debug marker.
    pub target: Option<Point>,
    pub motion: MotionState,
    /// Collectibles consumed so far.
    pub score: u32,
    pub patrol: PatrolRoute,
}

impl AgentState {
    pub fn new(position: Point, patrol: PatrolRoute) -> Self {
        Self {
            position,
            heading: 0.0,
            speed: 0.0,
            target: None,
            motion: MotionState::Idle,
            score: 0,
            patrol,
        }
    }

    /// Assigns the target location.
    pub fn set_target(&mut self, target: Point) -> Result<()> {
        self.target = Some(finite(target)?);
        Ok(())
    }

    /// The target location, or an error if none was ever set.
    pub fn require_target(&self) -> Result<Point> {
        self.target.ok_or(AgentError::TargetUnset).and_then(finite)
    }
}

/// Rejects points with NaN or infinite coordinates.
pub(crate) fn finite(point: Point) -> Result<Point> {
    if point.is_finite() {
        Ok(point)
    } else {
        Err(AgentError::InvalidTarget {
            x: point.x,
            y: point.y,
        })
    }
}
