//! Degrees of separation between people linked by the movies they starred in.
//!
//! A dataset of people, movies and cast memberships is loaded once into a
//! [`GraphStore`] and a [`NameIndex`]; [`PathFinder`] then answers shortest
//! connection queries with a breadth-first search.

pub mod data_loading;
pub mod frontier;
pub mod graph_store;
pub mod name_index;
pub mod path_finding;
pub mod presenter;

pub use data_loading::{load_dataset, Dataset, LoadError, LoadReport};
pub use frontier::{Frontier, NodeIndex, QueueFrontier, SearchNode, StackFrontier};
pub use graph_store::{GraphStore, LinkError, Movie, MovieId, Person, PersonId};
pub use name_index::{NameIndex, Resolution};
pub use path_finding::{Path, PathFinder, SearchError, Step};
