use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::state_graph::models::{StateCache, StateId};
use crate::state_graph::neighbors::neighbors;

/// Priority-first walk over the cached state graph from `start`,
/// popping states by ascending recorded depth. A neighbor is admitted
/// only when its cached depth is strictly below the popped state's
/// depth, so the walk rides the depth gradient the shuffle left behind
/// instead of computing true distances. Changing this comparison
/// changes which states the solver can reach at all.
///
/// Returns the path in start-to-goal order, or an empty vector when the
/// queue drains without reaching `goal`.
pub fn solve(cache: &mut StateCache, start: StateId, goal: StateId) -> Vec<StateId> {
    let Some(start_state) = cache.get_state(start) else {
        return Vec::new();
    };

    let mut parents: HashMap<StateId, StateId> = HashMap::new();
    let mut queue: BinaryHeap<Reverse<(usize, StateId)>> = BinaryHeap::new();
    queue.push(Reverse((start_state.depth, start)));

    while let Some(Reverse((depth, id))) = queue.pop() {
        if id == goal {
            let mut path = vec![id];
            let mut node = id;
            while let Some(&parent) = parents.get(&node) {
                path.insert(0, parent);
                node = parent;
            }
            log::debug!("reconstructed a {}-state path", path.len());
            return path;
        }

        for neighbor in neighbors(cache, id) {
            let Some(neighbor_state) = cache.get_state(neighbor) else {
                continue;
            };
            log::trace!(
                "neighbor {} of {} has recorded depth {}",
                neighbor,
                id,
                neighbor_state.depth
            );
            if neighbor_state.depth < depth {
                parents.insert(neighbor, id);
                queue.push(Reverse((neighbor_state.depth, neighbor)));
            }
        }
    }

    log::debug!("queue drained before reaching the goal state");
    Vec::new()
}
