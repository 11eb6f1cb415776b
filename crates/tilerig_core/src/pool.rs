//! Generational entity pool
//!
//! Transient entities (bullets, effects) live in a slotmap arena.
//! Removal is two-phase: `kill` marks a slot dead, `sweep` compacts.
//! Iteration between the two never observes a removal, and stale keys
//! keep returning `None` after their slot is reused.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Key to an entity in a [`Pool`]
    ///
    /// Generational, so a key held across a kill/spawn cycle of the same
    /// slot resolves to `None` instead of the new occupant.
    pub struct PoolKey;
}

/// Arena of transient entities with deferred removal
#[derive(Clone, Debug)]
pub struct Pool<E> {
    entries: SlotMap<PoolKey, E>,
    dead: Vec<PoolKey>,
}

impl<E> Pool<E> {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            dead: Vec::new(),
        }
    }

    /// Insert an entity and return its key
    pub fn spawn(&mut self, entity: E) -> PoolKey {
        self.entries.insert(entity)
    }

    /// Mark an entity dead; it stays visible until the next [`Pool::sweep`]
    pub fn kill(&mut self, key: PoolKey) {
        if self.entries.contains_key(key) {
            self.dead.push(key);
        }
    }

    /// Remove everything marked dead
    pub fn sweep(&mut self) {
        for key in self.dead.drain(..) {
            if self.entries.remove(key).is_some() {
                log::trace!("pool: swept entity {:?}", key);
            }
        }
    }

    pub fn get(&self, key: PoolKey) -> Option<&E> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: PoolKey) -> Option<&mut E> {
        self.entries.get_mut(key)
    }

    /// Number of live entries (the dead count until swept)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = PoolKey> + '_ {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PoolKey, &E)> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PoolKey, &mut E)> {
        self.entries.iter_mut()
    }
}

impl<E> Default for Pool<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_and_get() {
        let mut pool = Pool::new();
        let key = pool.spawn("bullet");
        assert_eq!(pool.get(key), Some(&"bullet"));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_kill_is_deferred_until_sweep() {
        let mut pool = Pool::new();
        let key = pool.spawn(1);
        pool.kill(key);

        // Still visible before the sweep
        assert!(pool.get(key).is_some());
        assert_eq!(pool.len(), 1);

        pool.sweep();
        assert!(pool.get(key).is_none());
        assert!(pool.is_empty());
    }

    #[test]
    fn test_stale_key_after_reuse() {
        let mut pool = Pool::new();
        let old = pool.spawn(1);
        pool.kill(old);
        pool.sweep();

        let new = pool.spawn(2);
        assert!(pool.get(old).is_none(), "stale key must not see new occupant");
        assert_eq!(pool.get(new), Some(&2));
    }

    #[test]
    fn test_kill_while_iterating() {
        let mut pool = Pool::new();
        for i in 0..5 {
            pool.spawn(i);
        }

        // Mark the even entries while iterating, then sweep
        let dead: Vec<_> = pool
            .iter()
            .filter(|(_, v)| *v % 2 == 0)
            .map(|(k, _)| k)
            .collect();
        for key in dead {
            pool.kill(key);
        }
        assert_eq!(pool.len(), 5);

        pool.sweep();
        assert_eq!(pool.len(), 2);
        assert!(pool.iter().all(|(_, v)| v % 2 == 1));
    }

    #[test]
    fn test_double_kill_harmless() {
        let mut pool = Pool::new();
        let key = pool.spawn(1);
        pool.kill(key);
        pool.kill(key);
        pool.sweep();
        assert!(pool.is_empty());
    }
}
