use crate::graph_store::{MovieId, PersonId};
use std::collections::{HashSet, VecDeque};

pub type NodeIndex = usize; // position in the search's arena of expanded nodes

// parent and action are None only on the root node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    pub state: PersonId,
    pub parent: Option<NodeIndex>,
    pub action: Option<MovieId>,
}

impl SearchNode {
    pub fn root(state: PersonId) -> Self {
        Self {
            state,
            parent: None,
            action: None,
        }
    }

    pub fn child(state: PersonId, parent: NodeIndex, action: MovieId) -> Self {
        Self {
            state,
            parent: Some(parent),
            action: Some(action),
        }
    }
}

pub trait Frontier {
    fn add(&mut self, node: SearchNode);

    fn remove(&mut self) -> Option<SearchNode>;

    fn contains_state(&self, state: &PersonId) -> bool; // pending nodes only

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First-in-first-out frontier. Expanding in this order is what makes the
/// first path found a shortest one.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    queue: VecDeque<SearchNode>,
    pending: HashSet<PersonId>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: SearchNode) {
        self.pending.insert(node.state.clone());
        self.queue.push_back(node);
    }

    fn remove(&mut self) -> Option<SearchNode> {
        let node = self.queue.pop_front()?;
        self.pending.remove(&node.state);
        Some(node)
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.pending.contains(state)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

// LIFO: finds a path, not necessarily a short one
#[derive(Debug, Default)]
pub struct StackFrontier {
    stack: Vec<SearchNode>,
    pending: HashSet<PersonId>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: SearchNode) {
        self.pending.insert(node.state.clone());
        self.stack.push(node);
    }

    fn remove(&mut self) -> Option<SearchNode> {
        let node = self.stack.pop()?;
        self.pending.remove(&node.state);
        Some(node)
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.pending.contains(state)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}
