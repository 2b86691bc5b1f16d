use rand::prelude::*;

use crate::state_graph::models::{StateCache, StateId};
use crate::state_graph::neighbors::neighbors;

/// Random walk of `steps` single slides starting at `start`, returning
/// the final cached state. Revisited arrangements reuse the cached
/// instance and keep the depth recorded at first discovery; every
/// visited state stays reachable from `start` by construction.
pub fn shuffle<R: Rng>(
    cache: &mut StateCache,
    start: StateId,
    steps: usize,
    rng: &mut R,
) -> StateId {
    let mut current = start;
    for _ in 0..steps {
        let options = neighbors(cache, current);
        let Some(&next) = options.choose(rng) else {
            break;
        };
        current = next;
    }
    current
}
