use std::cmp::Ordering;

/// Min-heap entry for [`std::collections::BinaryHeap`]: ordering is reversed
/// so the smallest score pops first, ties broken by insertion sequence.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MinEntry {
    pub score: f64,
    pub seq: u64,
    pub node: usize,
}

impl PartialEq for MinEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MinEntry {}

impl PartialOrd for MinEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Binary min-heap over arena indices that supports re-scoring an element
/// already in the heap. Ties pop in insertion order.
#[derive(Debug, Default)]
pub(crate) struct IndexedMinHeap {
    entries: Vec<(usize, f64, u64)>,
    positions: Vec<Option<usize>>,
    next_seq: u64,
}

impl IndexedMinHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, node: usize) -> bool {
        matches!(self.positions.get(node), Some(Some(_)))
    }

    pub fn push(&mut self, node: usize, score: f64) {
        if self.contains(node) {
            self.rescore(node, score);
            return;
        }
        if self.positions.len() <= node {
            self.positions.resize(node + 1, None);
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push((node, score, seq));
        let last = self.entries.len() - 1;
        self.positions[node] = Some(last);
        self.sift_up(last);
    }

    pub fn pop(&mut self) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.swap(0, last);
        let (node, _, _) = self.entries.pop()?;
        self.positions[node] = None;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(node)
    }

    pub fn rescore(&mut self, node: usize, score: f64) {
        let Some(Some(pos)) = self.positions.get(node).copied() else {
            return;
        };
        self.entries[pos].1 = score;
        self.sift_up(pos);
        if let Some(Some(pos)) = self.positions.get(node).copied() {
            self.sift_down(pos);
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        let (_, score_a, seq_a) = self.entries[a];
        let (_, score_b, seq_b) = self.entries[b];
        score_a.total_cmp(&score_b).then(seq_a.cmp(&seq_b)) == Ordering::Less
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions[self.entries[a].0] = Some(a);
        self.positions[self.entries[b].0] = Some(b);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn min_entry_pops_smallest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(MinEntry { score: 3.0, seq: 0, node: 0 });
        heap.push(MinEntry { score: 1.0, seq: 1, node: 1 });
        heap.push(MinEntry { score: 1.0, seq: 2, node: 2 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn rescore_moves_element() {
        let mut heap = IndexedMinHeap::new();
        heap.push(0, 5.0);
        heap.push(1, 4.0);
        heap.push(2, 6.0);
        heap.rescore(2, 1.0);
        assert!(heap.contains(2));
        assert_eq!(heap.pop(), Some(2));
        heap.rescore(0, 10.0);
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(0));
        assert_eq!(heap.pop(), None);
    }
}
