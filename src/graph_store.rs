//! In-memory bipartite graph of people and the movies they starred in.

use serde::Deserialize;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<u16>,
    pub movies: BTreeSet<MovieId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: Option<u16>,
    pub stars: BTreeSet<PersonId>,
}

/// A cast membership that could not be recorded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("unknown person {0}")]
    UnknownPerson(PersonId),
    #[error("unknown movie {0}")]
    UnknownMovie(MovieId),
}

#[derive(Debug, Default, Clone)]
pub struct GraphStore {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_person(&mut self, id: PersonId, name: impl Into<String>, birth: Option<u16>) {
        match self.people.entry(id) {
            Entry::Occupied(mut existing) => {
                let person = existing.get_mut();
                person.name = name.into();
                person.birth = birth;
                // movies stay; the movies' star sets still point here
            }
            Entry::Vacant(slot) => {
                let id = slot.key().clone();
                slot.insert(Person {
                    id,
                    name: name.into(),
                    birth,
                    movies: BTreeSet::new(),
                });
            }
        }
    }

    pub fn insert_movie(&mut self, id: MovieId, title: impl Into<String>, year: Option<u16>) {
        match self.movies.entry(id) {
            Entry::Occupied(mut existing) => {
                let movie = existing.get_mut();
                movie.title = title.into();
                movie.year = year; // stars kept, same as insert_person
            }
            Entry::Vacant(slot) => {
                let id = slot.key().clone();
                slot.insert(Movie {
                    id,
                    title: title.into(),
                    year,
                    stars: BTreeSet::new(),
                });
            }
        }
    }

    /// Records that `person` starred in `movie`, on both sides of the relation.
    /// Both ids are checked before either side is touched.
    pub fn link(&mut self, person: &PersonId, movie: &MovieId) -> Result<(), LinkError> {
        if !self.people.contains_key(person) {
            return Err(LinkError::UnknownPerson(person.clone()));
        }
        let Some(m) = self.movies.get_mut(movie) else {
            return Err(LinkError::UnknownMovie(movie.clone()));
        };
        m.stars.insert(person.clone());
        if let Some(p) = self.people.get_mut(person) {
            p.movies.insert(movie.clone());
        }
        Ok(())
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    pub fn contains_person(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    // every (movie, co-star) pair through one of the person's movies, the person itself included
    pub fn neighbors(&self, person: &PersonId) -> BTreeSet<(MovieId, PersonId)> {
        debug_assert!(
            self.contains_person(person),
            "neighbors queried for unknown person {person}"
        );
        let mut neighbors = BTreeSet::new();
        let Some(p) = self.people.get(person) else {
            return neighbors;
        };
        for movie_id in &p.movies {
            if let Some(movie) = self.movies.get(movie_id) {
                for star in &movie.stars {
                    neighbors.insert((movie_id.clone(), star.clone()));
                }
            }
        }
        neighbors
    }
}
