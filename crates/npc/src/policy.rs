//! Complete behavior tree for a chasing NPC.
//!
//! The tree is assembled from three branches, tried in priority order on
//! every tick:
//!
//! ```text
//! chaser()
//!   └─ Selector "chase, flee or wander"
//!       ├─ Sequence "chase quarry"
//!       │   ├─ agent_leads()                     ← score guard
//!       │   ├─ quarry_within(chase_radius)
//!       │   └─ move_to_quarry(speed, arrive_radius)
//!       ├─ Sequence "flee from quarry"
//!       │   ├─ quarry_leads()                    ← score guard
//!       │   ├─ quarry_within(chase_radius)
//!       │   └─ flee_from_quarry(speed, flee_clear_radius)
//!       └─ Sequence "wander"
//!           ├─ pick_random_target | next_patrol_target
//!           └─ move_to_target(speed, arrive_radius)
//! ```
//!
//! The score guards are mutually exclusive (`>=` vs `<`), so at most one of
//! the first two branches is eligible. If they ever overlap, child order
//! decides and chase wins.

use behavior_tree::BehaviorTree;
use behavior_tree::builder::{selector, sequence};

use crate::nodes::{
    AgentNode, agent_leads, flee_from_quarry, move_to_quarry, move_to_target, next_patrol_target,
    pick_random_target, quarry_leads, quarry_within,
};
use crate::{AgentContext, AgentError, Tuning, WanderMode};

/// Tree type ticked by [`crate::Agent`].
pub type AgentTree = BehaviorTree<AgentContext, AgentError>;

/// The score conditions that decide between chasing and fleeing.
pub struct ScoreGuards {
    pub chase: AgentNode,
    pub flee: AgentNode,
}

impl ScoreGuards {
    /// Chase while at least level on points, flee while behind.
    pub fn standard() -> Self {
        Self {
            chase: agent_leads(),
            flee: quarry_leads(),
        }
    }
}

impl Default for ScoreGuards {
    fn default() -> Self {
        Self::standard()
    }
}

/// The production tree.
pub fn chaser(tuning: &Tuning) -> AgentTree {
    assemble(ScoreGuards::standard(), tuning)
}

/// Builds the tree around the given score guards.
pub fn assemble(guards: ScoreGuards, tuning: &Tuning) -> AgentTree {
    BehaviorTree::new(selector(
        "chase, flee or wander",
        vec![
            chase_when_leading(guards.chase, tuning),
            flee_when_trailing(guards.flee, tuning),
            wander(tuning),
        ],
    ))
}

/// Move toward the quarry while `guard` holds and it is within chase range.
pub fn chase_when_leading(guard: AgentNode, tuning: &Tuning) -> AgentNode {
    sequence(
        "chase quarry",
        vec![
            guard,
            quarry_within(tuning.chase_radius),
            move_to_quarry(tuning.speed, tuning.arrive_radius),
        ],
    )
}

/// Run away from the quarry while `guard` holds and it is within chase range.
pub fn flee_when_trailing(guard: AgentNode, tuning: &Tuning) -> AgentNode {
    sequence(
        "flee from quarry",
        vec![
            guard,
            quarry_within(tuning.chase_radius),
            flee_from_quarry(tuning.speed, tuning.flee_clear_radius),
        ],
    )
}

/// Fallback: walk to a random point or along the patrol route.
pub fn wander(tuning: &Tuning) -> AgentNode {
    let pick = match tuning.wander {
        WanderMode::Random => pick_random_target(tuning.wander_bounds, tuning.arrive_radius),
        WanderMode::Patrol => next_patrol_target(tuning.arrive_radius),
    };

    sequence(
        "wander",
        vec![pick, move_to_target(tuning.speed, tuning.arrive_radius)],
    )
}

#[cfg(test)]
mod tests {
    use behavior_tree::NodeKind;

    use super::*;
    use crate::AgentConfig;

    #[test]
    fn root_lists_branches_in_priority_order() {
        let tree = chaser(&AgentConfig::default().tuning().unwrap());
        let root = tree.root();

        assert_eq!(root.kind(), NodeKind::Selector);
        let names: Vec<_> = root.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["chase quarry", "flee from quarry", "wander"]);
        assert_eq!(root.subtree_size(), 1 + 4 + 4 + 3);
    }

    #[test]
    fn wander_mode_selects_the_target_source() {
        let config = AgentConfig::default().with_wander(WanderMode::Patrol);
        let node = wander(&config.tuning().unwrap());

        assert_eq!(node.children()[0].name(), "get patrol location");
        assert_eq!(node.children()[1].name(), "move to target");
    }
}
