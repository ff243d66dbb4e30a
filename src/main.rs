use anyhow::{Context, Result};
use clap::Parser;
use degrees::presenter::{render_path, resolve_person};
use degrees::{load_dataset, Dataset, PathFinder, PersonId};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Find the degrees of separation between two people through the movies they starred in.
#[derive(Parser)]
#[command(name = "degrees", version, about)]
struct Cli {
    /// Directory holding people.csv, movies.csv and stars.csv
    #[arg(default_value = "large")]
    directory: PathBuf,

    /// Source person's name; prompted for when omitted
    #[arg(long)]
    source: Option<String>,

    /// Target person's name; prompted for when omitted
    #[arg(long)]
    target: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("DEGREES_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_name<R: BufRead, W: Write>(
    given: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    if let Some(name) = given {
        return Ok(name);
    } // otherwise prompt
    write!(output, "Name: ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn pick_person<R: BufRead, W: Write>(
    dataset: &Dataset,
    given: Option<String>,
    input: &mut R,
    output: &mut W,
) -> Result<Option<PersonId>> {
    let name = read_name(given, input, output)?;
    Ok(resolve_person(
        &dataset.names,
        &dataset.graph,
        &name,
        input,
        output,
    )?)
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Done,
    PersonNotFound,
}

fn run<R: BufRead, W: Write>(cli: Cli, input: &mut R, output: &mut W) -> Result<Outcome> {
    writeln!(output, "Loading data...")?;
    let dataset = load_dataset(&cli.directory)
        .with_context(|| format!("loading dataset from {}", cli.directory.display()))?;
    writeln!(output, "Data loaded.")?;

    let Some(source) = pick_person(&dataset, cli.source, input, output)? else {
        return Ok(Outcome::PersonNotFound);
    };
    let Some(target) = pick_person(&dataset, cli.target, input, output)? else {
        return Ok(Outcome::PersonNotFound);
    };

    let path = PathFinder::new(&dataset.graph).shortest_path(&source, &target)?;
    render_path(&dataset.graph, &source, path.as_ref(), output)?;
    Ok(Outcome::Done)
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();
    let outcome = run(cli, &mut io::stdin().lock(), &mut io::stdout())?;
    Ok(match outcome {
        Outcome::Done => ExitCode::SUCCESS,
        Outcome::PersonNotFound => {
            eprintln!("Person not found.");
            ExitCode::FAILURE
        }
    })
}
