//! Loads the people, movies and stars tables into a [`GraphStore`] and [`NameIndex`].

use crate::graph_store::{GraphStore, MovieId, PersonId};
use crate::name_index::NameIndex;
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed {table}: {source}")]
    Csv {
        table: String,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: PersonId,
    name: String,
    #[serde(deserialize_with = "csv::invalid_option")]
    birth: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: MovieId,
    title: String,
    #[serde(deserialize_with = "csv::invalid_option")]
    year: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: PersonId,
    movie_id: MovieId,
}

// counts from one load
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub people: usize,
    pub movies: usize,
    pub stars: usize,
    pub skipped_stars: usize,
}

#[derive(Debug)]
pub struct Dataset {
    pub graph: GraphStore,
    pub names: NameIndex,
    pub report: LoadReport,
}

impl Dataset {
    /// Loads from in-memory tables, each with a header row.
    pub fn from_readers<P, M, S>(people: P, movies: M, stars: S) -> Result<Self, LoadError>
    where
        P: io::Read,
        M: io::Read,
        S: io::Read,
    {
        let mut graph = GraphStore::new();
        let mut report = LoadReport::default();

        load_people(&mut graph, people).map_err(|source| LoadError::Csv {
            table: PEOPLE_FILE.to_string(),
            source,
        })?;
        load_movies(&mut graph, movies).map_err(|source| LoadError::Csv {
            table: MOVIES_FILE.to_string(),
            source,
        })?;
        report.people = graph.person_count(); // distinct ids, repeated rows collapse
        report.movies = graph.movie_count();
        let (linked, skipped) = load_stars(&mut graph, stars).map_err(|source| LoadError::Csv {
            table: STARS_FILE.to_string(),
            source,
        })?;
        report.stars = linked;
        report.skipped_stars = skipped;

        let names = NameIndex::from_graph(&graph);
        info!(
            people = report.people,
            movies = report.movies,
            stars = report.stars,
            skipped_stars = report.skipped_stars,
            "dataset loaded"
        );
        Ok(Self {
            graph,
            names,
            report,
        })
    }
}

fn open(dir: &Path, file: &str) -> Result<File, LoadError> {
    let path = dir.join(file);
    File::open(&path).map_err(|source| LoadError::Open { path, source })
}

pub fn load_dataset(dir: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let dir = dir.as_ref();
    debug!(dir = %dir.display(), "loading dataset");
    Dataset::from_readers(
        open(dir, PEOPLE_FILE)?,
        open(dir, MOVIES_FILE)?,
        open(dir, STARS_FILE)?,
    )
}

pub fn load_people<R: io::Read>(graph: &mut GraphStore, reader: R) -> Result<(), csv::Error> {
    let mut rdr = csv::Reader::from_reader(reader);
    for row in rdr.deserialize() {
        let row: PersonRow = row?;
        graph.insert_person(row.id, row.name, row.birth);
    }
    Ok(())
}

pub fn load_movies<R: io::Read>(graph: &mut GraphStore, reader: R) -> Result<(), csv::Error> {
    let mut rdr = csv::Reader::from_reader(reader);
    for row in rdr.deserialize() {
        let row: MovieRow = row?;
        graph.insert_movie(row.id, row.title, row.year);
    }
    Ok(())
}

/// Links cast memberships, returning `(linked, skipped)`. Malformed or dangling
/// rows are skipped; only I/O failures abort the load.
pub fn load_stars<R: io::Read>(
    graph: &mut GraphStore,
    reader: R,
) -> Result<(usize, usize), csv::Error> {
    let mut rdr = csv::Reader::from_reader(reader);
    let (mut linked, mut skipped) = (0, 0);
    for row in rdr.deserialize::<StarRow>() {
        let row = match row {
            Ok(row) => row,
            Err(err) if err.is_io_error() => return Err(err),
            Err(err) => {
                debug!(error = %err, "skipping malformed stars row");
                skipped += 1;
                continue;
            }
        };
        match graph.link(&row.person_id, &row.movie_id) {
            Ok(()) => linked += 1,
            Err(err) => {
                debug!(error = %err, "skipping dangling stars row");
                skipped += 1;
            }
        }
    }
    Ok((linked, skipped))
}
