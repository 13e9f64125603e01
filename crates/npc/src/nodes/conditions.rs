//! Condition nodes for NPC behavior trees.
//!
//! Condition nodes only see `&AgentContext`, so they cannot modify state.

use behavior_tree::builder::condition;

use crate::AgentContext;
use crate::steering::within_radius;

use super::AgentNode;

/// Checks if the quarry is strictly closer than `radius` world units.
///
/// # Example
///
/// ```rust,ignore
/// // Chase when the quarry is within 7 m
/// sequence("chase", vec![
///     quarry_within(config.meters(7.0)),
///     move_to_quarry(tuning.speed, tuning.arrive_radius),
/// ])
/// ```
pub fn quarry_within(radius: f64) -> AgentNode {
    condition("is the quarry nearby?", move |ctx: &AgentContext| {
        quarry_is_near(ctx, radius)
    })
}

/// Succeeds if the agent has fewer points than the quarry.
pub fn quarry_leads() -> AgentNode {
    condition("does the quarry have more points?", |ctx: &AgentContext| {
        ctx.agent.score < ctx.quarry.score
    })
}

/// Succeeds if the agent has at least as many points as the quarry.
///
/// Ties count as leading, so with equal scores the agent chases.
pub fn agent_leads() -> AgentNode {
    condition("do we have at least as many points?", |ctx: &AgentContext| {
        ctx.agent.score >= ctx.quarry.score
    })
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Shared proximity test, also used by the flee action to decide completion.
#[inline]
pub(crate) fn quarry_is_near(ctx: &AgentContext, radius: f64) -> bool {
    within_radius(ctx.quarry.position, ctx.agent.position, radius)
}
