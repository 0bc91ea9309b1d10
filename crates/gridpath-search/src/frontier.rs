use std::collections::BinaryHeap;

/// Reference into the per-run node array, ordered by priority for use in
/// `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) priority: i32,
    /// Insertion sequence number, used to break priority ties.
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first,
        // and among equal priorities the earliest pushed.
        other
            .priority
            .cmp(&self.priority)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier with FIFO tie-breaking.
///
/// Entries are never removed or updated in place: a cell whose cost improves
/// is pushed again and the stale entry is discarded by the caller when popped.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<NodeRef>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, idx: usize, priority: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(NodeRef { idx, priority, seq });
    }

    /// Pop the lowest-priority entry, earliest first on ties.
    pub(crate) fn pop(&mut self) -> Option<NodeRef> {
        self.heap.pop()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
