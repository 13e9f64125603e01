//! Action nodes for NPC behavior trees.
//!
//! Two shapes of action live here:
//!
//! - Instantaneous: pick the next wander target and return `Success`.
//! - Progressive: move one step per tick toward (or away from) a goal and
//!   return `Running` until the goal radius is reached, then `Success`.
//!
//! Actions never return `Failure`. A missing or malformed goal is an error.

use behavior_tree::Status;
use behavior_tree::builder::action;
use rand::Rng;

use crate::state::finite;
use crate::steering::{advance, away_point, heading_towards, within_radius};
use crate::{AgentContext, MotionState, Point, WanderBounds};

use super::AgentNode;
use super::conditions::quarry_is_near;

/// Picks a random wander target inside `bounds`.
///
/// An existing target is kept until the agent is within `arrive_radius` of
/// it, so the wander branch walks to one destination before choosing the next.
pub fn pick_random_target(bounds: WanderBounds, arrive_radius: f64) -> AgentNode {
    action("set random location", move |ctx: &mut AgentContext| {
        if has_open_target(ctx, arrive_radius) {
            return Ok(Status::Success);
        }
        let target = random_point(ctx.rng(), bounds);
        ctx.agent.set_target(target)?;
        tracing::debug!(x = target.x, y = target.y, "new random wander target");
        Ok(Status::Success)
    })
}

/// Takes the next patrol waypoint as the wander target.
///
/// Like [`pick_random_target`], the cursor only moves once the current target
/// has been reached.
pub fn next_patrol_target(arrive_radius: f64) -> AgentNode {
    action("get patrol location", move |ctx: &mut AgentContext| {
        if has_open_target(ctx, arrive_radius) {
            return Ok(Status::Success);
        }
        let waypoint = ctx.agent.patrol.advance()?;
        ctx.agent.set_target(waypoint)?;
        tracing::debug!(
            x = waypoint.x,
            y = waypoint.y,
            cursor = ctx.agent.patrol.cursor(),
            "next patrol waypoint"
        );
        Ok(Status::Success)
    })
}

/// Steps toward the agent's target location.
///
/// Raises [`crate::AgentError::TargetUnset`] if no target was ever set.
pub fn move_to_target(speed: f64, arrive_radius: f64) -> AgentNode {
    action("move to target", move |ctx: &mut AgentContext| {
        let target = ctx.agent.require_target()?;
        steer(ctx, target, speed);
        Ok(arrival(ctx, target, arrive_radius))
    })
}

/// Steps toward the quarry's current position.
pub fn move_to_quarry(speed: f64, arrive_radius: f64) -> AgentNode {
    action("move to quarry", move |ctx: &mut AgentContext| {
        let goal = finite(ctx.quarry.position)?;
        steer(ctx, goal, speed);
        Ok(arrival(ctx, goal, arrive_radius))
    })
}

/// Steps directly away from the quarry.
///
/// Succeeds once the quarry is no longer within `clear_radius`.
pub fn flee_from_quarry(speed: f64, clear_radius: f64) -> AgentNode {
    action("run away from quarry", move |ctx: &mut AgentContext| {
        let threat = finite(ctx.quarry.position)?;
        let away = away_point(ctx.agent.position, threat);
        steer(ctx, away, speed);

        if quarry_is_near(ctx, clear_radius) {
            Ok(Status::Running)
        } else {
            tracing::debug!("escaped quarry");
            Ok(Status::Success)
        }
    })
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Moves the agent one frame's worth toward `goal`, stopping on it.
fn steer(ctx: &mut AgentContext, goal: Point, speed: f64) {
    let agent = &mut ctx.agent;
    agent.motion = MotionState::Moving;
    agent.heading = heading_towards(agent.position, goal);
    agent.speed = speed;

    let remaining = agent.position.distance(goal);
    let dt = if speed > 0.0 {
        ctx.dt.min(remaining / speed)
    } else {
        ctx.dt
    };
    agent.position = advance(agent.position, agent.heading, speed, dt);
}

fn arrival(ctx: &AgentContext, goal: Point, radius: f64) -> Status {
    if within_radius(goal, ctx.agent.position, radius) {
        tracing::debug!(x = goal.x, y = goal.y, "arrived");
        Status::Success
    } else {
        Status::Running
    }
}

/// `true` while a target is set and not yet reached.
fn has_open_target(ctx: &AgentContext, arrive_radius: f64) -> bool {
    ctx.agent
        .target
        .is_some_and(|target| !within_radius(target, ctx.agent.position, arrive_radius))
}

fn random_point<R: Rng + ?Sized>(rng: &mut R, bounds: WanderBounds) -> Point {
    Point::new(
        rng.gen_range(bounds.min.x..=bounds.max.x),
        rng.gen_range(bounds.min.y..=bounds.max.y),
    )
}
