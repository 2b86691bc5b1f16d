use crate::core::StateKey;
use crate::state_graph::models::{BoardState, StateCache, StateId};

impl StateCache {
    pub fn new() -> Self {
        StateCache {
            keys: bimap::BiMap::new(),
            states: Vec::new(),
        }
    }

    /// Canonicalizes a candidate. A key seen before resolves to the
    /// already-cached instance, keeping whatever depth was recorded at
    /// first insertion even when the candidate's differs.
    pub fn lookup_or_insert(&mut self, candidate: BoardState) -> StateId {
        let key = candidate.grid.key();
        if let Some(&id) = self.keys.get_by_left(&key) {
            return id;
        }
        let id = self.states.len();

        // we know that this insertion is unique, because the id is fresh and the key was just checked
        self.keys.insert_no_overwrite(key, id).unwrap();
        self.states.push(candidate);
        id
    }

    pub fn get_state(&self, id: StateId) -> Option<&BoardState> {
        self.states.get(id)
    }

    pub fn get_by_key(&self, key: &StateKey) -> Option<StateId> {
        self.keys.get_by_left(key).copied()
    }

    pub fn key_of(&self, id: StateId) -> Option<&StateKey> {
        self.keys.get_by_right(&id)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.states.clear();
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::TileGrid;

    #[test]
    fn lookup_or_insert_is_idempotent() {
        let mut cache = StateCache::new();
        let first = cache.lookup_or_insert(BoardState {
            grid: TileGrid::solved(3),
            depth: 0,
        });
        let second = cache.lookup_or_insert(BoardState {
            grid: TileGrid::solved(3),
            depth: 7,
        });

        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
        // the depth recorded at first insertion wins
        assert_eq!(cache.get_state(first).unwrap().depth, 0);
    }

    #[test]
    fn get_by_key_finds_the_canonical_instance() {
        let mut cache = StateCache::new();
        let solved = TileGrid::solved(4);
        let key = solved.key();
        let id = cache.lookup_or_insert(BoardState {
            grid: solved,
            depth: 0,
        });

        assert_eq!(cache.get_by_key(&key), Some(id));
        assert_eq!(cache.key_of(id), Some(&key));
    }

    #[test]
    fn clear_resets_the_table() {
        let mut cache = StateCache::new();
        let key = TileGrid::solved(3).key();
        cache.lookup_or_insert(BoardState {
            grid: TileGrid::solved(3),
            depth: 0,
        });

        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.get_by_key(&key), None);
    }
}
