//! Case-insensitive lookup from a person's name to the ids carrying it.

use crate::graph_store::{GraphStore, PersonId};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    NotFound,
    Unique(PersonId),
    Ambiguous(BTreeSet<PersonId>), // caller picks one
}

impl Resolution {
    pub fn unique(self) -> Option<PersonId> {
        match self {
            Self::Unique(id) => Some(id),
            Self::NotFound | Self::Ambiguous(_) => None,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct NameIndex {
    names: HashMap<String, BTreeSet<PersonId>>,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_graph(graph: &GraphStore) -> Self {
        let mut index = Self::new();
        for person in graph.people() {
            index.insert(&person.name, person.id.clone());
        }
        index
    }

    pub fn insert(&mut self, name: &str, id: PersonId) {
        self.names.entry(normalize(name)).or_default().insert(id);
    }

    pub fn resolve(&self, name: &str) -> Resolution {
        let Some(ids) = self.names.get(&normalize(name)) else {
            return Resolution::NotFound;
        };
        let mut iter = ids.iter();
        match (iter.next(), iter.next()) {
            (None, _) => Resolution::NotFound,
            (Some(id), None) => Resolution::Unique(id.clone()),
            _ => Resolution::Ambiguous(ids.clone()),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_shared_name() {
        let mut index = NameIndex::new();
        index.insert("Same Name", PersonId::new("P1"));
        index.insert("Same Name", PersonId::new("P2"));

        let expected: BTreeSet<_> = [PersonId::new("P1"), PersonId::new("P2")]
            .into_iter()
            .collect();
        assert_eq!(index.resolve("same name"), Resolution::Ambiguous(expected));
        assert_eq!(index.resolve("nobody"), Resolution::NotFound);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_resolve_ignores_case_and_padding() {
        let mut index = NameIndex::new();
        index.insert("Kevin Bacon", PersonId::new("102"));
        assert_eq!(
            index.resolve("  KEVIN bacon\n"),
            Resolution::Unique(PersonId::new("102"))
        );
        assert_eq!(
            index.resolve("kevin bacon").unique(),
            Some(PersonId::new("102"))
        );
    }

    #[test]
    fn test_from_graph() {
        let mut graph = GraphStore::new();
        graph.insert_person(PersonId::new("1"), "Tom Hanks", Some(1956));
        graph.insert_person(PersonId::new("2"), "Meg Ryan", Some(1961));
        let index = NameIndex::from_graph(&graph);
        assert_eq!(index.len(), 2);
        assert_eq!(index.resolve("meg ryan").unique(), Some(PersonId::new("2")));
        assert!(index.resolve("Tom").unique().is_none());
    }
}
