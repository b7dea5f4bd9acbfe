use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::point::Point;

/// An open-set entry. Orders by ascending `f`, breaking ties FIFO on the
/// insertion sequence number so expansion order is deterministic within a
/// run.
struct OpenEntry {
    f: f64,
    seq: u64,
    point: Point,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest f; equal-f entries pop
        // in insertion order.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority frontier (open set) for the search: a min-ordering container of
/// points keyed by total estimated cost.
///
/// There is no decrease-key. An entry's priority is the `f` value it was
/// pushed with; when a relaxation later lowers a frontier cell's cost the
/// entry is left where it is, so a cell can be popped with a stale priority.
/// This mirrors the engine's documented frontier contract and keeps every
/// cell in the heap at most once.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<OpenEntry>,
    seq: u64,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }

    pub fn push(&mut self, point: Point, f: f64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(OpenEntry { f, seq, point });
    }

    pub fn pop(&mut self) -> Option<Point> {
        self.heap.pop().map(|entry| entry.point)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Snapshot of the current frontier contents, in internal heap order.
    pub fn points(&self) -> Vec<Point> {
        self.heap.iter().map(|entry| entry.point).collect()
    }
}
