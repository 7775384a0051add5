//! Bounded least-recently-touched cache used as the cross-chunk signature
//! registry.
//!
//! Collapses the source system's doubly-linked list plus hash map into one
//! opaque component, implemented here as an intrusive arena-backed LRU so
//! `has`/`add`/eviction stay O(1) without pulling in an external LRU crate.

use std::collections::HashMap;
use std::hash::Hash;

struct Node<K> {
    key: K,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A fixed-capacity set of keys with strict least-recently-touched eviction.
///
/// Both [`has`](Self::has) and [`add`](Self::add) count as a touch: this
/// mirrors a presence-only registry, not a value cache.
pub struct BoundedRecencyCache<K> {
    capacity: usize,
    index: HashMap<K, usize>,
    nodes: Vec<Node<K>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<K: Eq + Hash + Copy> BoundedRecencyCache<K> {
    /// Creates a cache holding at most `capacity` keys (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            index: HashMap::new(),
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
        }
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the cache holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns whether `key` is present, touching its recency if so.
    pub fn has(&mut self, key: K) -> bool {
        if let Some(&idx) = self.index.get(&key) {
            self.move_to_front(idx);
            true
        } else {
            false
        }
    }

    /// Records `key` as present, touching its recency. Evicts the
    /// least-recently-touched entry first if the cache is at capacity and
    /// `key` is not already present.
    pub fn add(&mut self, key: K) {
        if let Some(&idx) = self.index.get(&key) {
            self.move_to_front(idx);
            return;
        }
        if self.index.len() >= self.capacity {
            self.evict_tail();
        }
        let idx = self.alloc_node(key);
        self.push_front(idx);
        self.index.insert(key, idx);
    }

    fn alloc_node(&mut self, key: K) -> usize {
        let node = Node {
            key,
            prev: None,
            next: None,
        };
        if let Some(idx) = self.free.pop() {
            self.nodes[idx] = node;
            idx
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }
        self.nodes[idx].prev = None;
        self.nodes[idx].next = None;
    }

    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].next = self.head;
        if let Some(h) = self.head {
            self.nodes[h].prev = Some(idx);
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }
        self.detach(idx);
        self.push_front(idx);
    }

    fn evict_tail(&mut self) {
        if let Some(idx) = self.tail {
            let key = self.nodes[idx].key;
            self.detach(idx);
            self.index.remove(&key);
            self.free.push(idx);
        }
    }
}
