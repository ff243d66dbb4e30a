//! Breadth-first search for the shortest chain of shared movies between two people.

use crate::frontier::{Frontier, QueueFrontier, SearchNode};
use crate::graph_store::{GraphStore, MovieId, PersonId};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("person {0} is not in the graph")]
    UnknownPerson(PersonId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub movie: MovieId,
    pub person: PersonId,
}

// source excluded, target included
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    pub fn degrees(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

pub struct PathFinder<'g> {
    graph: &'g GraphStore,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g GraphStore) -> Self {
        Self { graph }
    }

    pub fn shortest_path(
        &self,
        source: &PersonId,
        target: &PersonId,
    ) -> Result<Option<Path>, SearchError> {
        self.search_with(QueueFrontier::new(), source, target)
    }

    /// Runs the search loop over an arbitrary frontier. Only a FIFO frontier
    /// guarantees the returned path is a shortest one.
    pub fn search_with<F: Frontier>(
        &self,
        mut frontier: F,
        source: &PersonId,
        target: &PersonId,
    ) -> Result<Option<Path>, SearchError> {
        for id in [source, target] {
            if !self.graph.contains_person(id) {
                return Err(SearchError::UnknownPerson(id.clone()));
            }
        }
        if source == target {
            return Ok(Some(Path::default()));
        }

        // expanded nodes; children point at their parent by index
        let mut nodes: Vec<SearchNode> = Vec::new();
        let mut explored: HashSet<PersonId> = HashSet::new();

        frontier.add(SearchNode::root(source.clone()));

        while let Some(node) = frontier.remove() {
            explored.insert(node.state.clone());
            let neighbors = self.graph.neighbors(&node.state);
            let parent = nodes.len();
            nodes.push(node);

            for (movie, person) in neighbors {
                if explored.contains(&person) || frontier.contains_state(&person) {
                    continue;
                }
                let child = SearchNode::child(person, parent, movie);
                if &child.state == target {
                    let path = reconstruct(&nodes, &child);
                    debug!(
                        %source,
                        %target,
                        explored = explored.len(),
                        degrees = path.degrees(),
                        "path found"
                    );
                    return Ok(Some(path));
                }
                frontier.add(child);
            }
        }

        debug!(%source, %target, explored = explored.len(), "not connected");
        Ok(None)
    }
}

fn reconstruct(nodes: &[SearchNode], goal: &SearchNode) -> Path {
    let mut steps = Vec::new();
    let mut cursor = Some(goal); // walk parents back to the root, then flip
    while let Some(node) = cursor {
        let (Some(movie), Some(parent)) = (&node.action, node.parent) else {
            break;
        };
        steps.push(Step {
            movie: movie.clone(),
            person: node.state.clone(),
        });
        cursor = nodes.get(parent);
    }
    steps.reverse();
    Path { steps }
}
