//! Frontier containers for the three search strategies.
//!
//! The engine talks to every strategy through the [`Frontier`] trait. The
//! concrete container is chosen once per run via [`StrategyFrontier`].

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use crate::algorithm::SearchAlgorithm;
use crate::error::{Error, Result};
use crate::grid::Cell;
use crate::node::{NodeId, SearchNode};

/// Frontier entry: a node handle plus the fields the policies need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuedNode {
    pub id: NodeId,
    pub state: Cell,
    pub estimate: u32,
}

impl QueuedNode {
    pub fn new(id: NodeId, node: &SearchNode) -> Self {
        Self {
            id,
            state: node.state,
            estimate: node.estimated_cost(),
        }
    }
}

/// Contract shared by every frontier policy.
pub trait Frontier {
    /// Insert a node.
    fn push(&mut self, node: QueuedNode);

    /// Remove the next node according to the policy.
    ///
    /// Returns [`Error::EmptyFrontier`] when nothing is queued.
    fn pop(&mut self) -> Result<QueuedNode>;

    /// Number of queued nodes.
    fn len(&self) -> usize;

    /// Whether any queued node has `state`.
    fn contains_state(&self, state: Cell) -> bool;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Multiset of queued states so `contains_state` does not scan the container.
#[derive(Debug, Default)]
struct StateIndex {
    counts: HashMap<Cell, usize>,
}

impl StateIndex {
    fn insert(&mut self, state: Cell) {
        *self.counts.entry(state).or_insert(0) += 1;
    }

    fn remove(&mut self, state: Cell) {
        if let Some(count) = self.counts.get_mut(&state) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&state);
            }
        }
    }

    fn contains(&self, state: Cell) -> bool {
        self.counts.contains_key(&state)
    }
}

/// LIFO frontier used by depth-first search.
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<QueuedNode>,
    states: StateIndex,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn push(&mut self, node: QueuedNode) {
        self.states.insert(node.state);
        self.nodes.push(node);
    }

    fn pop(&mut self) -> Result<QueuedNode> {
        let node = self.nodes.pop().ok_or(Error::EmptyFrontier)?;
        self.states.remove(node.state);
        Ok(node)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn contains_state(&self, state: Cell) -> bool {
        self.states.contains(state)
    }
}

/// FIFO frontier used by breadth-first search.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<QueuedNode>,
    states: StateIndex,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn push(&mut self, node: QueuedNode) {
        self.states.insert(node.state);
        self.nodes.push_back(node);
    }

    fn pop(&mut self) -> Result<QueuedNode> {
        let node = self.nodes.pop_front().ok_or(Error::EmptyFrontier)?;
        self.states.remove(node.state);
        Ok(node)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn contains_state(&self, state: Cell) -> bool {
        self.states.contains(state)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PriorityEntry {
    node: QueuedNode,
    sequence: u64,
}

impl Ord for PriorityEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate, with
        // earlier insertions winning ties.
        other
            .node
            .estimate
            .cmp(&self.node.estimate)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Stable min-priority frontier used by A*, ordered by `g + h`.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<PriorityEntry>,
    states: StateIndex,
    next_sequence: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node: QueuedNode) {
        self.states.insert(node.state);
        self.heap.push(PriorityEntry {
            node,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
    }

    fn pop(&mut self) -> Result<QueuedNode> {
        let entry = self.heap.pop().ok_or(Error::EmptyFrontier)?;
        self.states.remove(entry.node.state);
        Ok(entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn contains_state(&self, state: Cell) -> bool {
        self.states.contains(state)
    }
}

/// Closed set of frontier policies, picked from the algorithm at engine
/// construction time.
#[derive(Debug)]
pub enum StrategyFrontier {
    Queue(QueueFrontier),
    Stack(StackFrontier),
    Priority(PriorityFrontier),
}

impl StrategyFrontier {
    pub fn for_algorithm(algorithm: SearchAlgorithm) -> Self {
        match algorithm {
            SearchAlgorithm::Bfs => StrategyFrontier::Queue(QueueFrontier::new()),
            SearchAlgorithm::Dfs => StrategyFrontier::Stack(StackFrontier::new()),
            SearchAlgorithm::AStar => StrategyFrontier::Priority(PriorityFrontier::new()),
        }
    }

    fn inner(&self) -> &dyn Frontier {
        match self {
            StrategyFrontier::Queue(frontier) => frontier,
            StrategyFrontier::Stack(frontier) => frontier,
            StrategyFrontier::Priority(frontier) => frontier,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Frontier {
        match self {
            StrategyFrontier::Queue(frontier) => frontier,
            StrategyFrontier::Stack(frontier) => frontier,
            StrategyFrontier::Priority(frontier) => frontier,
        }
    }
}

impl Frontier for StrategyFrontier {
    fn push(&mut self, node: QueuedNode) {
        self.inner_mut().push(node);
    }

    fn pop(&mut self) -> Result<QueuedNode> {
        self.inner_mut().pop()
    }

    fn len(&self) -> usize {
        self.inner().len()
    }

    fn contains_state(&self, state: Cell) -> bool {
        self.inner().contains_state(state)
    }
}
