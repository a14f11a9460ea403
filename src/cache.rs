//! Bounded token → restoration cache.
//!
//! Eviction is by insertion order: when full, the entry that has been resident
//! longest goes first. Reading an entry does not refresh it.

use hashbrown::HashMap;
use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 1000;

#[derive(Debug, Clone)]
pub struct RestorationCache {
    map: HashMap<Box<str>, Box<str>>,
    order: VecDeque<Box<str>>,
    capacity: usize,
}

impl Default for RestorationCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl RestorationCache {
    /// A capacity of zero disables caching.
    pub fn with_capacity(capacity: usize) -> Self {
        let prealloc = capacity.min(DEFAULT_CAPACITY);
        Self {
            map: HashMap::with_capacity(prealloc),
            order: VecDeque::with_capacity(prealloc),
            capacity,
        }
    }

    /// Keys are case-sensitive tokens exactly as they appeared in the input.
    #[inline]
    pub fn get(&self, token: &str) -> Option<&str> {
        self.map.get(token).map(|s| &**s)
    }

    /// Store `restored` for `token`. Overwriting an existing key keeps its
    /// position in the eviction order.
    pub fn insert(&mut self, token: &str, restored: &str) {
        if self.capacity == 0 {
            return;
        }
        if let Some(slot) = self.map.get_mut(token) {
            *slot = restored.into();
            return;
        }
        while self.map.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.map.remove(&oldest);
        }
        let key: Box<str> = token.into();
        self.order.push_back(key.clone());
        self.map.insert(key, restored.into());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }
}
