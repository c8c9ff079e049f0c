use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};

use crate::find::Algorithm;

/// The objects that we store in the frontier
#[derive(Debug)]
pub(crate) struct ToVisit<R> {
    /// Ordering key for the priority queue, unused by the stack and the queue
    pub priority: usize,
    /// Insertion counter, breaks ties between equal priorities in FIFO order
    pub sequence: u64,
    /// The accumulated cost at the time this entry was pushed
    pub cost: usize,
    pub point: R,
}

impl<R> Ord for ToVisit<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.sequence.cmp(&other.sequence))
            .reverse() // reverse for BinaryHeap to be a min-heap
    }
}

impl<R> PartialOrd for ToVisit<R> {
    fn partial_cmp(&self, other: &ToVisit<R>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R> PartialEq for ToVisit<R> {
    fn eq(&self, other: &ToVisit<R>) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<R> Eq for ToVisit<R> {}

/// The container of discovered but not yet expanded cells, its discipline depends on the
/// algorithm.
#[derive(Debug)]
pub(crate) enum Frontier<R> {
    Stack(Vec<ToVisit<R>>),
    Queue(VecDeque<ToVisit<R>>),
    Priority(BinaryHeap<ToVisit<R>>),
}

impl<R> Frontier<R> {
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::DepthFirst => Frontier::Stack(Vec::new()),
            Algorithm::BreadthFirst => Frontier::Queue(VecDeque::new()),
            Algorithm::GreedyBestFirst | Algorithm::AStar => Frontier::Priority(BinaryHeap::new()),
        }
    }

    pub fn push(&mut self, visit: ToVisit<R>) {
        match self {
            Frontier::Stack(stack) => stack.push(visit),
            Frontier::Queue(queue) => queue.push_back(visit),
            Frontier::Priority(heap) => heap.push(visit),
        }
    }

    pub fn pop(&mut self) -> Option<ToVisit<R>> {
        match self {
            Frontier::Stack(stack) => stack.pop(),
            Frontier::Queue(queue) => queue.pop_front(),
            Frontier::Priority(heap) => heap.pop(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Stack(stack) => stack.len(),
            Frontier::Queue(queue) => queue.len(),
            Frontier::Priority(heap) => heap.len(),
        }
    }
}
