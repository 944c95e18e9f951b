use std::{
    collections::BinaryHeap,
    cmp::Ordering
};


/// Pending entry in the frontier
#[derive(Debug)]
struct Entry<N, P> {
    node: N,
    priority: P,
    seq: u64, // insertion order, breaks ties between equal priorities
}

// BinaryHeap is a max-heap, so the ordering is reversed to pop the
// smallest priority first. Among equal priorities the smallest seq
// (earliest inserted) wins, matching a linear first-minimum scan.
impl<N, P: Ord> Ord for Entry<N, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<N, P: Ord> PartialOrd for Entry<N, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<N, P: Ord> PartialEq for Entry<N, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}
impl<N, P: Ord> Eq for Entry<N, P> {}


/// Min-priority frontier over (node, priority) pairs
///
/// Entries are never deduplicated: the same node may be pending several
/// times with different priorities, and the search is expected to
/// neutralize stale entries through its cost map. Extraction order is
/// deterministic: smallest priority first, first-inserted wins ties.
#[derive(Debug)]
pub struct PriorityQueue<N, P> {
    heap: BinaryHeap<Entry<N, P>>,
    seq: u64,
}

impl<N, P: Ord> PriorityQueue<N, P> {

    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Append a pending entry, leaving any existing entries for the
    /// same node in place
    pub fn put(&mut self, node: N, priority: P) {
        self.heap.push(Entry {
            node,
            priority,
            seq: self.seq,
        });
        self.seq += 1;
    }

    /// Remove and return the node with the smallest priority,
    /// or None when the queue is empty
    pub fn pop_min(&mut self) -> Option<N> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<N, P: Ord> Default for PriorityQueue<N, P> {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_priority_order() {
        let mut queue = PriorityQueue::new();
        queue.put("c", 7);
        queue.put("a", 1);
        queue.put("b", 4);

        assert_eq!(queue.pop_min(), Some("a"));
        assert_eq!(queue.pop_min(), Some("b"));
        assert_eq!(queue.pop_min(), Some("c"));
        assert_eq!(queue.pop_min(), None);
    }

    #[test]
    fn test_equal_priorities_pop_in_insertion_order() {
        let mut queue = PriorityQueue::new();
        queue.put("first", 5);
        queue.put("second", 5);
        queue.put("cheapest", 3);
        queue.put("third", 5);

        assert_eq!(queue.pop_min(), Some("cheapest"));
        assert_eq!(queue.pop_min(), Some("first"));
        assert_eq!(queue.pop_min(), Some("second"));
        assert_eq!(queue.pop_min(), Some("third"));
    }

    #[test]
    fn test_duplicate_nodes_are_kept() {
        let mut queue = PriorityQueue::new();
        queue.put("a", 9);
        queue.put("a", 2);

        assert_eq!(queue.pop_min(), Some("a"));
        assert_eq!(queue.pop_min(), Some("a"));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_is_empty() {
        let mut queue: PriorityQueue<&str, i32> = PriorityQueue::new();
        assert!(queue.is_empty());

        queue.put("a", 1);
        assert!(!queue.is_empty());

        queue.pop_min();
        assert!(queue.is_empty());
    }
}
