use std::{
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use adjgraph::{algo::*, gens::*, io::*, prelude::*};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "adjgraph", about = "Adjacency-list graph algorithms", version)]
struct Cli {
    /// Log debug events to stderr (otherwise `RUST_LOG` decides, default `warn`)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Run every algorithm on the built-in five node sample graph
    Demo,
    /// Read an edge list and report on it or convert it
    Run {
        /// Edge list with header `p <name> <n> <m>` and 1-based `u v` lines
        file: PathBuf,

        /// Treat edges as directed
        #[arg(long)]
        directed: bool,

        /// Start node (0-based) for BFS, DFS and shortest paths
        #[arg(long, default_value_t = 0)]
        start: Node,

        /// Output format: `listing` (adjacency listing and algorithm reports), `dot` or `edgelist`
        #[arg(long, default_value = "listing")]
        format: FileFormat,
    },
    /// Write a random G(n,p) graph to stdout
    Random {
        /// Number of nodes
        n: NumNodes,

        /// Edge probability
        p: f64,

        /// Seed of the random generator
        #[arg(long, default_value_t = 1)]
        seed: u64,

        /// Generate a directed graph
        #[arg(long)]
        directed: bool,

        /// Output format: `edgelist`, `dot` or `listing`
        #[arg(long, default_value = "edgelist")]
        format: FileFormat,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut out = BufWriter::new(std::io::stdout().lock());
    execute(cli.command, &mut out)?;
    out.flush()?;

    Ok(())
}

fn execute<W: Write>(command: Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::Demo => demo(out),
        Commands::Run {
            file,
            directed,
            start,
            format,
        } => {
            info!(file = %file.display(), directed, ?format, "reading edge list");
            if directed {
                let graph: AdjList = read_edge_list(&file)?;
                write_graph(out, &graph, start, format)?;
                if format == FileFormat::Listing {
                    write_ordering(out, &graph)?;
                }
                Ok(())
            } else {
                let graph: AdjListUndir = read_edge_list(&file)?;
                write_graph(out, &graph, start, format)
            }
        }
        Commands::Random {
            n,
            p,
            seed,
            directed,
            format,
        } => {
            let rng = &mut Pcg64Mcg::seed_from_u64(seed);
            if directed {
                AdjList::gnp(rng, n, p)
                    .context("Failed to generate graph")?
                    .try_write_to_writer(out, format)?;
            } else {
                AdjListUndir::gnp(rng, n, p)
                    .context("Failed to generate graph")?
                    .try_write_to_writer(out, format)?;
            }
            Ok(())
        }
    }
}

fn read_edge_list<G: GraphRead>(file: &Path) -> Result<G> {
    G::try_from_file(file, FileFormat::EdgeList)
        .with_context(|| format!("Failed to read {}", file.display()))
}

/// Writes the full report for [`FileFormat::Listing`], otherwise only the graph in `format`
fn write_graph<W, G>(out: &mut W, graph: &G, start: Node, format: FileFormat) -> Result<()>
where
    W: Write,
    G: AdjacencyList + GraphType + GraphEdgeEditing + GraphWrite,
{
    match format {
        FileFormat::Listing => write_report(out, graph, start),
        _ => Ok(graph.try_write_to_writer(out, format)?),
    }
}

/// Builds the five node sample graph plus a small DAG and reports on both
fn demo<W: Write>(out: &mut W) -> Result<()> {
    let mut graph = AdjListUndir::try_new(5)?;
    graph.add_edges([(0, 1), (0, 4), (1, 2), (1, 3), (3, 4)])?;
    write_report(out, &graph, 0)?;

    writeln!(out)?;
    let mut dag = AdjList::try_new(6)?;
    dag.connect_path([5, 2, 3, 1])?;
    dag.add_edges([(5, 0), (4, 0), (4, 1)])?;
    write_ordering(out, &dag)?;

    // closes the path 5 -> 2 -> 3 -> 1 into a cycle
    dag.add_edge(1, 5)?;
    writeln!(out, "After adding edge (1, 5):")?;
    write_ordering(out, &dag)
}

/// Listing, traversals, distances, degrees and the DFS-ordered clone of `graph`
fn write_report<W, G>(out: &mut W, graph: &G, start: Node) -> Result<()>
where
    W: Write,
    G: AdjacencyList + GraphType + GraphEdgeEditing + GraphWrite,
{
    graph.check_node(start).context("Invalid start node")?;

    graph.try_write_to_writer(&mut *out, FileFormat::Listing)?;
    write_traversal(out, "BFS", start, &graph.bfs_order(start)?)?;
    write_traversal(out, "DFS", start, &graph.dfs_order(start)?)?;
    write_distances(out, &graph.unit_dijkstra(start)?)?;
    write_degrees(out, graph)?;

    let Relabelled {
        graph: clone,
        mapping,
    } = graph.dfs_clone_from(start)?;
    writeln!(
        out,
        "Clone in DFS order from vertex {start} (new ids: {}):",
        mapping.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
    )?;
    clone.try_write_to_writer(&mut *out, FileFormat::Listing)?;

    Ok(())
}

fn write_ordering<W: Write>(out: &mut W, graph: &AdjList) -> Result<()> {
    if graph.has_cycle()? {
        writeln!(out, "Graph contains a cycle")?;
    } else {
        writeln!(out, "Graph is acyclic")?;
        write_topological_order(out, &graph.topological_sort()?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("adjgraph-{name}-{}.txt", std::process::id()))
    }

    #[test]
    fn parse_subcommands() {
        let cli = Cli::try_parse_from(["adjgraph", "demo"]).unwrap();
        assert_eq!(cli.command, Commands::Demo);
        assert!(!cli.verbose);

        let cli = Cli::try_parse_from([
            "adjgraph", "run", "g.txt", "--directed", "--start", "3", "--format", "dot", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Commands::Run {
                file: PathBuf::from("g.txt"),
                directed: true,
                start: 3,
                format: FileFormat::Dot,
            }
        );

        let cli = Cli::try_parse_from(["adjgraph", "run", "g.txt"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Run {
                format: FileFormat::Listing,
                ..
            }
        ));

        let cli = Cli::try_parse_from(["adjgraph", "random", "10", "0.5"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Random {
                n: 10,
                p: 0.5,
                seed: 1,
                directed: false,
                format: FileFormat::EdgeList,
            }
        );
    }

    #[test]
    fn parse_errors() {
        assert!(Cli::try_parse_from(["adjgraph"]).is_err());
        assert!(Cli::try_parse_from(["adjgraph", "run"]).is_err());
        assert!(Cli::try_parse_from(["adjgraph", "run", "g.txt", "--format", "svg"]).is_err());
        assert!(Cli::try_parse_from(["adjgraph", "random", "-1", "0.5"]).is_err());
    }

    #[test]
    fn demo_output() {
        let mut out = Vec::new();
        demo(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("Adjacency list of vertex 0:\n4 -> 1 -> NULL\n"));
        assert!(out.contains("BFS starting from vertex 0: 0 4 1 3 2\n"));
        assert!(out.contains("DFS starting from vertex 0: 0 4 3 1 2\n"));
        assert!(out.contains("Vertex 2: Distance = 2\n"));
        assert!(out.contains("Vertex 1: In-degree = 3, Out-degree = 3\n"));
        assert!(out.contains("Clone in DFS order from vertex 0 (new ids: 0 3 4 2 1):\n"));
        assert!(out.contains("Graph is acyclic\nTopological Sort: 5 4 2 3 1 0\n"));
        assert!(out.ends_with("After adding edge (1, 5):\nGraph contains a cycle\n"));
    }

    #[test]
    fn random_then_run() {
        let mut edge_list = Vec::new();
        execute(
            Commands::Random {
                n: 8,
                p: 0.3,
                seed: 4,
                directed: true,
                format: FileFormat::EdgeList,
            },
            &mut edge_list,
        )
        .unwrap();

        let path = temp_file("random");
        std::fs::write(&path, &edge_list).unwrap();

        let run = |start, format| {
            let mut out = Vec::new();
            execute(
                Commands::Run {
                    file: path.clone(),
                    directed: true,
                    start,
                    format,
                },
                &mut out,
            )
            .map(|_| String::from_utf8(out).unwrap())
        };
        let report = run(0, FileFormat::Listing);
        let rewritten = run(0, FileFormat::EdgeList);
        let dot = run(0, FileFormat::Dot);
        let bad_start = run(8, FileFormat::Listing);
        std::fs::remove_file(&path).unwrap();

        assert!(report.unwrap().contains("BFS starting from vertex 0: 0"));
        // directed edge lists are written in insertion order, so reading and writing is lossless
        assert_eq!(rewritten.unwrap().as_bytes(), edge_list.as_slice());
        assert!(dot.unwrap().starts_with("digraph {\n"));
        assert!(bad_start.is_err());
    }

    #[test]
    fn random_in_other_formats() {
        let random = |format| {
            let mut out = Vec::new();
            execute(
                Commands::Random {
                    n: 3,
                    p: 1.0,
                    seed: 1,
                    directed: false,
                    format,
                },
                &mut out,
            )
            .unwrap();
            String::from_utf8(out).unwrap()
        };

        // p = 1 draws every normalized pair including self-loops
        assert_eq!(
            random(FileFormat::Dot),
            "graph {\nu1--u1;u1--u2;u1--u3;u2--u2;u2--u3;u3--u3;\n}\n"
        );
        assert!(random(FileFormat::Listing).starts_with("Adjacency list of vertex 0:\n"));
    }

    #[test]
    fn run_reports_unreadable_files() {
        let path = temp_file("missing");
        let result = execute(
            Commands::Run {
                file: path,
                directed: false,
                start: 0,
                format: FileFormat::Listing,
            },
            &mut Vec::new(),
        );
        assert!(result.unwrap_err().to_string().starts_with("Failed to read"));
    }
}
