//! Terminal-facing pieces: picking among people who share a name, and printing a path.

use crate::graph_store::{GraphStore, PersonId};
use crate::name_index::{NameIndex, Resolution};
use crate::path_finding::Path;
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};

pub fn resolve_person<R: BufRead, W: Write>(
    names: &NameIndex,
    graph: &GraphStore,
    name: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<PersonId>> {
    match names.resolve(name) {
        Resolution::NotFound => Ok(None),
        Resolution::Unique(id) => Ok(Some(id)),
        Resolution::Ambiguous(candidates) => {
            choose_person(graph, name.trim(), &candidates, input, output)
        }
    }
}

/// Lists the candidates and reads an id back. Anything outside the list resolves to `None`.
pub fn choose_person<R: BufRead, W: Write>(
    graph: &GraphStore,
    name: &str,
    candidates: &BTreeSet<PersonId>,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<PersonId>> {
    writeln!(output, "Which '{name}'?")?;
    for id in candidates {
        let (display, birth) = graph
            .person(id)
            .map(|p| (p.name.as_str(), p.birth.map(|b| b.to_string())))
            .unwrap_or((name, None));
        writeln!(
            output,
            "ID: {id}, Name: {display}, Birth: {}",
            birth.unwrap_or_default()
        )?;
    }
    write!(output, "Intended Person ID: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let picked = PersonId::new(line.trim());
    Ok(candidates.contains(&picked).then_some(picked))
}

pub fn render_path<W: Write>(
    graph: &GraphStore,
    source: &PersonId,
    path: Option<&Path>,
    output: &mut W,
) -> io::Result<()> {
    let Some(path) = path else {
        return writeln!(output, "Not connected.");
    };
    writeln!(output, "{} degrees of separation.", path.degrees())?;

    let name_of = |id: &PersonId| {
        graph
            .person(id)
            .map_or_else(|| id.to_string(), |p| p.name.clone())
    };
    let mut previous = source;
    for (i, step) in path.steps().iter().enumerate() {
        let title = graph
            .movie(&step.movie)
            .map_or_else(|| step.movie.to_string(), |m| m.title.clone());
        writeln!(
            output,
            "{}: {} and {} starred in {}",
            i + 1,
            name_of(previous),
            name_of(&step.person),
            title
        )?;
        previous = &step.person;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_store::MovieId;
    use crate::path_finding::PathFinder;
    use std::io::Cursor;

    fn sample() -> (GraphStore, NameIndex) {
        let mut graph = GraphStore::new();
        graph.insert_person(PersonId::new("1"), "Alice", Some(1970));
        graph.insert_person(PersonId::new("2"), "Bob", None);
        graph.insert_person(PersonId::new("3"), "Carol", Some(1985));
        graph.insert_person(PersonId::new("4"), "Carol", Some(1990));
        graph.insert_movie(MovieId::new("m1"), "First Film", Some(1999));
        graph.insert_movie(MovieId::new("m2"), "Second Film", None);
        graph.link(&PersonId::new("1"), &MovieId::new("m1")).unwrap();
        graph.link(&PersonId::new("2"), &MovieId::new("m1")).unwrap();
        graph.link(&PersonId::new("2"), &MovieId::new("m2")).unwrap();
        graph.link(&PersonId::new("3"), &MovieId::new("m2")).unwrap();
        let names = NameIndex::from_graph(&graph);
        (graph, names)
    }

    #[test]
    fn test_render_path() {
        let (graph, _) = sample();
        let source = PersonId::new("1");
        let path = PathFinder::new(&graph)
            .shortest_path(&source, &PersonId::new("3"))
            .unwrap();

        let mut out = Vec::new();
        render_path(&graph, &source, path.as_ref(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2 degrees of separation.\n\
             1: Alice and Bob starred in First Film\n\
             2: Bob and Carol starred in Second Film\n"
        );
    }

    #[test]
    fn test_render_not_connected() {
        let (graph, _) = sample();
        let mut out = Vec::new();
        render_path(&graph, &PersonId::new("1"), None, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Not connected.\n");
    }

    #[test]
    fn test_resolve_unique_skips_prompt() {
        let (graph, names) = sample();
        let mut out = Vec::new();
        let id = resolve_person(&names, &graph, "alice", &mut Cursor::new(""), &mut out).unwrap();
        assert_eq!(id, Some(PersonId::new("1")));
        assert!(out.is_empty());
        let id = resolve_person(&names, &graph, "Dave", &mut Cursor::new(""), &mut out).unwrap();
        assert_eq!(id, None);
    }

    #[test]
    fn test_choose_among_shared_name() {
        let (graph, names) = sample();
        let mut out = Vec::new();
        let id =
            resolve_person(&names, &graph, "Carol", &mut Cursor::new("4\n"), &mut out).unwrap();
        assert_eq!(id, Some(PersonId::new("4")));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Which 'Carol'?\n\
             ID: 3, Name: Carol, Birth: 1985\n\
             ID: 4, Name: Carol, Birth: 1990\n\
             Intended Person ID: "
        );
    }

    #[test]
    fn test_invalid_choice_resolves_to_none() {
        let (graph, names) = sample();
        let mut out = Vec::new();
        let id =
            resolve_person(&names, &graph, "carol", &mut Cursor::new("1\n"), &mut out).unwrap();
        assert_eq!(id, None);
    }
}
