//! Clique Communities: Connected Components of k-Clique Graphs
//!
//! Reads a weighted graph, drops every edge above a weight threshold,
//! expands the remainder into a clique complex, and reports, for each
//! dimension k, the connected components of the k-clique graph. Each
//! component is one community: a maximal set of k-cliques chained
//! together along shared (k-1)-faces.
//!
//! Progress goes to stderr, results to stdout: one bracketed component
//! per line, a blank line between dimensions.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tda_persistence::{
    calculate_connected_components, clique_graph, RipsExpander, Simplex, SimplicialComplex,
};

/// Extract clique communities from a weighted graph.
///
/// K is the maximum simplex dimension used for the clique graph
/// extraction, not the clique cardinality: K = 2 yields 3-clique
/// communities, because 2-simplices have 3 vertices.
#[derive(Debug, Parser)]
#[command(name = "clique-communities")]
struct Args {
    /// Edge list file: one "u v weight" triple per line, '#' comments
    filename: PathBuf,

    /// Edges with a weight above this threshold are ignored
    threshold: f64,

    /// Maximum simplex dimension for the expansion
    k: usize,
}

fn main() -> ExitCode {
    let args = Args::parse();

    eprint!("* Reading '{}'...", args.filename.display());

    let complex = match read_edge_list(&args.filename) {
        Ok(complex) => complex,
        Err(message) => {
            eprintln!("\nError: {}", message);
            return ExitCode::FAILURE;
        }
    };

    eprintln!("finished");

    // Thresholding --------------------------------------------------

    eprint!(
        "* Filtering input data to threshold epsilon={}...",
        args.threshold
    );

    let complex: SimplicialComplex = complex
        .iter()
        .filter(|simplex| simplex.data() <= args.threshold)
        .cloned()
        .collect();

    eprintln!("finished");

    // Expansion -----------------------------------------------------

    let expander = RipsExpander::new();
    let mut complex = expander.assign_maximum_weight(&expander.expand(&complex, args.k), &complex);
    complex.sort_by_weight();

    for k in 1..=args.k {
        eprint!("* Extracting {}-clique graph...", k);
        let graph = clique_graph(&complex, k);
        eprintln!("finished");

        eprintln!("* {}-clique graph has {} simplices", k, graph.len());

        let mut forest = match calculate_connected_components(&graph) {
            Ok(forest) => forest,
            Err(error) => {
                eprintln!("Error: {}", error);
                return ExitCode::FAILURE;
            }
        };

        let roots = forest.roots();
        eprintln!("* {}-clique graph has {} connected components", k, roots.len());

        for root in roots {
            // Node identifiers of the clique graph are indices into the
            // expanded complex, so members map straight back to simplices.
            let members = match forest.members_of(root) {
                Ok(members) => members,
                Err(error) => {
                    eprintln!("Error: {}", error);
                    return ExitCode::FAILURE;
                }
            };

            let mut simplices: Vec<&Simplex> =
                members.iter().map(|&index| complex.at(index)).collect();
            simplices.sort_by(|a, b| a.cmp_lexicographic(b));

            let community: Vec<String> = simplices.iter().map(|s| s.to_string()).collect();
            println!("[{}]", community.join(","));
        }

        println!();
    }

    ExitCode::SUCCESS
}

/// Parse a whitespace-separated edge list ("u v weight", weight optional
/// and defaulting to 0) into a 1-skeleton whose vertices carry weight 0.
fn read_edge_list(path: &PathBuf) -> Result<SimplicialComplex, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|error| format!("cannot read '{}': {}", path.display(), error))?;

    let mut complex = SimplicialComplex::new();

    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let u = parse_token::<usize>(tokens.next(), number)?;
        let v = parse_token::<usize>(tokens.next(), number)?;
        let weight = match tokens.next() {
            Some(token) => token
                .parse::<f64>()
                .map_err(|_| format!("line {}: malformed weight '{}'", number + 1, token))?,
            None => 0.0,
        };

        complex.push(Simplex::new(vec![u], 0.0));
        complex.push(Simplex::new(vec![v], 0.0));
        complex.push(Simplex::new(vec![u, v], weight));
    }

    Ok(complex)
}

fn parse_token<T: std::str::FromStr>(token: Option<&str>, line: usize) -> Result<T, String> {
    let token = token.ok_or_else(|| format!("line {}: expected an edge", line + 1))?;
    token
        .parse::<T>()
        .map_err(|_| format!("line {}: malformed value '{}'", line + 1, token))
}
