//! Short-term memory: a bounded FIFO of recently applied move keys.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// A capacity-bounded FIFO of move keys with O(1) membership tests.
///
/// Pushing onto a full list evicts the oldest key, so the list never holds
/// more than `capacity` entries. Duplicate keys are counted: evicting an old
/// copy of a key does not lift the tabu while a newer copy is still queued.
#[derive(Debug, Clone)]
pub struct TabuList<K> {
    queue: VecDeque<K>,
    counts: HashMap<K, usize>,
    capacity: usize,
}

impl<K: Clone + Eq + Hash> TabuList<K> {
    /// Creates an empty list holding at most `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            counts: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    /// Whether `key` is currently tabu.
    pub fn contains(&self, key: &K) -> bool {
        self.counts.contains_key(key)
    }

    /// Records `key` as the most recent move, evicting the oldest key if
    /// the list is full.
    pub fn push(&mut self, key: K) {
        if self.queue.len() == self.capacity {
            if let Some(oldest) = self.queue.pop_front() {
                if let Some(count) = self.counts.get_mut(&oldest) {
                    *count -= 1;
                    if *count == 0 {
                        self.counts.remove(&oldest);
                    }
                }
            }
        }
        *self.counts.entry(key.clone()).or_insert(0) += 1;
        self.queue.push_back(key);
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the list holds no keys.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Maximum number of keys the list can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_membership() {
        let mut list = TabuList::new(3);
        assert!(!list.contains(&(1, 2)));

        list.push((1, 2));
        assert!(list.contains(&(1, 2)));
        assert!(!list.contains(&(2, 3)));
    }

    #[test]
    fn test_list_fifo_eviction() {
        let mut list = TabuList::new(2);
        list.push("a");
        list.push("b");
        list.push("c");

        assert!(!list.contains(&"a"), "oldest key should be evicted");
        assert!(list.contains(&"b"));
        assert!(list.contains(&"c"));
    }

    #[test]
    fn test_list_never_exceeds_capacity() {
        let mut list = TabuList::new(4);
        for i in 0..100 {
            list.push(i % 7);
            assert!(list.len() <= list.capacity());
        }
    }

    #[test]
    fn test_list_duplicate_keys_survive_one_eviction() {
        let mut list = TabuList::new(3);
        list.push(9);
        list.push(1);
        list.push(9);
        // Evicts the first copy of 9; the second copy keeps it tabu.
        list.push(2);

        assert!(list.contains(&9));
        assert!(list.contains(&1));
        assert!(list.contains(&2));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_list_empty() {
        let list: TabuList<usize> = TabuList::new(5);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 5);
    }
}
