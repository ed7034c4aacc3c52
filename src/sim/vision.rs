//! Line-of-sight resolution across the agent set
//!
//! One segment cast per candidate agent, scanned against every fixture of
//! every body in the world except the two endpoint bodies themselves (a
//! cast from an agent's center would otherwise clip its own circle, and the
//! cast *to* a center always clips the target's). Walls and third-party
//! agents occlude.
//!
//! O(agents x bodies x fixtures) per call. That is the accepted deal for
//! small populations; a spatial index can replace the scan behind
//! [`WorldSnapshot`] without changing this resolver.

use super::agent::{Agent, AgentId};
use super::world::WorldSnapshot;

/// Recompute the set of agents visible from `agent`.
///
/// The result wholly replaces any previous set; entries follow the
/// iteration order of `all`. `agent` itself is never included.
pub fn refresh_visibility<S: WorldSnapshot>(snapshot: &S, agent: &Agent, all: &[Agent]) -> Vec<AgentId> {
    let from = snapshot.body_position(agent.body());
    let mut visible = Vec::new();

    for other in all {
        if other.id == agent.id {
            continue;
        }
        let to = snapshot.body_position(other.body());
        let skip = [agent.body(), other.body()];
        if snapshot.nearest_hit(from, to, &skip) == 1.0 {
            visible.push(other.id);
        }
    }

    log::trace!(
        "agent {} sees {} of {}",
        agent.id.0,
        visible.len(),
        all.len().saturating_sub(1)
    );
    visible
}
