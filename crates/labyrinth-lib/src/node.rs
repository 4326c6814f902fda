//! Search tree nodes stored in an append-only arena.
//!
//! Parents are referenced by [`NodeId`] handle rather than by pointer, so the
//! tree has a single owner (the arena) and reconstruction is a handle walk.

use crate::grid::{Action, Cell};

/// Handle to a node stored in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One step of a partial path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub state: Cell,
    pub parent: Option<NodeId>,
    pub action: Option<Action>,
    pub path_cost: u32,
    pub heuristic_value: u32,
}

impl SearchNode {
    /// Root of the search tree.
    pub fn root(state: Cell, heuristic_value: u32) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            path_cost: 0,
            heuristic_value,
        }
    }

    /// Estimated total cost through this node (`g + h`).
    pub fn estimated_cost(&self) -> u32 {
        self.path_cost.saturating_add(self.heuristic_value)
    }
}

/// Append-only owner of every node created during one search run.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Create a child of `parent` one unit step further along the path.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        action: Action,
        state: Cell,
        heuristic_value: u32,
    ) -> NodeId {
        let path_cost = self.get(parent).path_cost + 1;
        self.insert(SearchNode {
            state,
            parent: Some(parent),
            action: Some(action),
            path_cost,
            heuristic_value,
        })
    }

    /// Look up a node. Handles are only minted by this arena, so they are
    /// always in range.
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk parent links from `id` to the root and return the
    /// `(action, state)` pairs in travel order. The root is not included.
    pub fn path_to(&self, id: NodeId) -> Vec<(Action, Cell)> {
        let mut steps = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            if let Some(action) = node.action {
                steps.push((action, node.state));
            }
            current = node.parent;
        }
        steps.reverse();
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_cost_increments_by_one() {
        let mut arena = NodeArena::new();
        let root = arena.insert(SearchNode::root(Cell::new(0, 0), 4));
        let child = arena.insert_child(root, Action::Right, Cell::new(0, 1), 3);
        let grandchild = arena.insert_child(child, Action::Down, Cell::new(1, 1), 2);

        assert_eq!(arena.get(root).path_cost, 0);
        assert_eq!(arena.get(child).path_cost, 1);
        assert_eq!(arena.get(grandchild).path_cost, 2);
        assert_eq!(arena.get(grandchild).estimated_cost(), 4);
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn path_to_returns_travel_order_without_root() {
        let mut arena = NodeArena::new();
        let root = arena.insert(SearchNode::root(Cell::new(0, 0), 0));
        let a = arena.insert_child(root, Action::Down, Cell::new(1, 0), 0);
        let b = arena.insert_child(a, Action::Right, Cell::new(1, 1), 0);

        assert_eq!(
            arena.path_to(b),
            vec![
                (Action::Down, Cell::new(1, 0)),
                (Action::Right, Cell::new(1, 1))
            ]
        );
        assert!(arena.path_to(root).is_empty());
    }
}
