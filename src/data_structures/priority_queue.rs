use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-queue of `(node, distance)` entries used by Dijkstra.
///
/// Entries with equal distance pop in ascending node index, so the order
/// in which nodes are settled is deterministic. Stale entries are not
/// removed on decrease-key; callers skip them on pop.
#[derive(Debug)]
pub struct DistanceQueue<P>
where
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(P, usize)>>,
    pushes: usize,
}

impl<P> DistanceQueue<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        DistanceQueue {
            heap: BinaryHeap::new(),
            pushes: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total number of pushes since creation
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    pub fn push(&mut self, node: usize, distance: P) {
        self.pushes += 1;
        self.heap.push(Reverse((distance, node)));
    }

    /// Removes the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(usize, P)> {
        self.heap.pop().map(|Reverse((distance, node))| (node, distance))
    }
}

impl<P> Default for DistanceQueue<P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_smallest_distance_then_lowest_index() {
        let mut queue = DistanceQueue::new();
        queue.push(4, 7u64);
        queue.push(3, 2);
        queue.push(1, 2);
        queue.push(0, 9);

        assert_eq!(queue.len(), 4);
        assert_eq!(queue.pop(), Some((1, 2)));
        assert_eq!(queue.pop(), Some((3, 2)));
        assert_eq!(queue.pop(), Some((4, 7)));
        assert_eq!(queue.pop(), Some((0, 9)));
        assert!(queue.is_empty());
        assert_eq!(queue.pushes(), 4);
    }
}
