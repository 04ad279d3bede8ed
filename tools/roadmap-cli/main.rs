use clap::{Args, Parser, Subcommand, ValueEnum};
use roadmap::category::category_style;
use roadmap::data::sample_roadmap;
use roadmap::logging::init_tracing;
use roadmap::prelude::*;
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing::info;

/// Explore routes through an immigration roadmap graph
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    /// Log at debug level (overrides ROADMAP_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Run in interactive mode with a command prompt
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Roadmap JSON document with `blocks` and `connections`
    #[arg(long, conflicts_with_all = ["blocks", "snapshot"])]
    data: Option<String>,

    /// JSON array of block rows (requires --connections)
    #[arg(long, requires = "connections")]
    blocks: Option<String>,

    /// JSON array of connection rows (requires --blocks)
    #[arg(long, requires = "blocks")]
    connections: Option<String>,

    /// Binary graph snapshot written by the `snapshot` command
    #[arg(long, conflicts_with = "blocks")]
    snapshot: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Enumerate and rank all routes between two blocks
    Paths {
        start: String,
        end: String,
        /// Maximum number of transitions, -1 for unlimited
        #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
        depth: i64,
        #[arg(short, long, value_enum, default_value_t = SortCli::Time)]
        sort: SortCli,
        #[arg(short, long, value_enum, default_value_t = FormatCli::Text)]
        format: FormatCli,
        /// Abort after this many node expansions
        #[arg(long)]
        budget: Option<usize>,
    },
    /// List every block with its estimates
    Blocks,
    /// Show default start and end candidates
    Terminals,
    /// Print the part of the roadmap reachable from a block, with its transitions, as JSON
    Subgraph { id: String },
    /// Save the loaded graph as a binary snapshot
    Snapshot { output: String },
}

/// CLI-specific mirror of `SortCriteria` for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortCli {
    Time,
    Cost,
    Steps,
}

impl From<SortCli> for SortCriteria {
    fn from(sort: SortCli) -> Self {
        match sort {
            SortCli::Time => SortCriteria::Time,
            SortCli::Cost => SortCriteria::Cost,
            SortCli::Steps => SortCriteria::Steps,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatCli {
    /// Ranked, human-readable listing
    Text,
    /// Ranked path results with metrics
    Json,
    /// Bare id arrays, as returned by the path-finding endpoint
    Wire,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let graph = load_graph(&cli.source);

    if cli.human {
        run_interactive(&graph);
        return;
    }

    match cli.command {
        Some(command) => run_command(&graph, command),
        None => exit_with_error("No command given. Use --help, or -i for interactive mode."),
    }
}

fn load_graph(source: &SourceArgs) -> Graph {
    let load_start = Instant::now();

    if let Some(path) = &source.snapshot {
        let graph = GraphArtifact::from_file(path)
            .and_then(GraphArtifact::into_graph)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load snapshot: {}", e)));
        info!(path = %path, blocks = graph.len(), elapsed = ?load_start.elapsed(), "snapshot loaded");
        return graph;
    }

    let definition = match (&source.data, &source.blocks, &source.connections) {
        (Some(path), _, _) => RoadmapDefinition::from_file(path),
        (None, Some(blocks), Some(connections)) => {
            RoadmapDefinition::from_files(blocks, connections)
        }
        _ => {
            info!("no roadmap data provided, using the built-in sample roadmap");
            Ok(sample_roadmap())
        }
    }
    .and_then(RoadmapDefinition::require_blocks)
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to load roadmap data: {}", e)));

    let graph = GraphBuilder::from_definition(definition)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert roadmap data: {}", e)))
        .build();
    info!(
        blocks = graph.len(),
        transitions = graph.edge_count(),
        elapsed = ?load_start.elapsed(),
        "roadmap loaded"
    );
    graph
}

fn run_command(graph: &Graph, command: Command) {
    match command {
        Command::Paths {
            start,
            end,
            depth,
            sort,
            format,
            budget,
        } => {
            let depth = MaxDepth::try_from(depth)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            run_paths(graph, &start, &end, depth, sort.into(), format, budget)
                .unwrap_or_else(|e| exit_with_error(&e));
        }
        Command::Blocks => print_blocks(graph),
        Command::Terminals => print_terminals(graph),
        Command::Subgraph { id } => {
            print_subgraph(graph, &id).unwrap_or_else(|e| exit_with_error(&e));
        }
        Command::Snapshot { output } => {
            GraphArtifact::from_graph(graph)
                .save(&output)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to save snapshot: {}", e)));
            println!("Wrote snapshot of {} blocks to '{}'", graph.len(), output);
        }
    }
}

fn run_paths(
    graph: &Graph,
    start: &str,
    end: &str,
    depth: MaxDepth,
    sort: SortCriteria,
    format: FormatCli,
    budget: Option<usize>,
) -> std::result::Result<(), String> {
    let query = PathQuery::new(start, end, depth);
    query
        .validate_against(graph)
        .map_err(|e| e.to_string())?;

    let search_start = Instant::now();
    let mut finder = PathFinder::new(graph).max_depth(depth);
    if let Some(budget) = budget {
        finder = finder.node_budget(budget);
    }
    let paths = finder.find(start, end).map_err(|e| e.to_string())?;
    let search_duration = search_start.elapsed();

    if format == FormatCli::Wire {
        let json = PathResponse(paths).to_json().map_err(|e| e.to_string())?;
        println!("{}", json);
        return Ok(());
    }

    let mut results = describe_paths(graph, paths).map_err(|e| e.to_string())?;
    rank(&mut results, sort);

    match format {
        FormatCli::Json => {
            let json = serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?;
            println!("{}", json);
        }
        _ => {
            print_results(&results, sort);
            println!("\nSearch took {:?} (depth: {})", search_duration, depth);
        }
    }
    Ok(())
}

fn print_results(results: &[PathResult], sort: SortCriteria) {
    if results.is_empty() {
        println!("No route found.");
        return;
    }
    println!("Found {} path(s), sorted by {}:", results.len(), sort);
    for (index, result) in results.iter().enumerate() {
        println!("  {}. {}", index + 1, result.formatted);
        println!(
            "     Time: {}, Cost: {}, Steps: {}",
            PathFormatter::format_months(result.total_time),
            PathFormatter::format_cost(result.total_cost),
            result.steps()
        );
    }
}

fn print_blocks(graph: &Graph) {
    println!("Blocks ({}):", graph.len());
    for block in graph.blocks() {
        let style = category_style(&block.category);
        println!(
            "- {}: {} [{} | {} {}] {} / {}",
            block.id,
            block.display_name(),
            block.category,
            style.icon,
            style.color,
            PathFormatter::format_months(block.average_time),
            PathFormatter::format_cost(block.cost)
        );
    }
    let dangling = graph.dangling_references();
    if !dangling.is_empty() {
        println!("\nDangling references ({}):", dangling.len());
        for (from, to) in dangling {
            println!("  {} -> {} (unknown)", from, to);
        }
    }
}

fn print_terminals(graph: &Graph) {
    let terminals = find_terminal(graph);
    println!("Start candidates:");
    for block in &terminals.starts {
        println!("  - {} ({})", block.id, block.display_name());
    }
    println!("End candidates:");
    for block in &terminals.ends {
        println!("  - {} ({})", block.id, block.display_name());
    }
}

fn print_subgraph(graph: &Graph, id: &str) -> std::result::Result<(), String> {
    let subgraph = SubgraphResponse::from_graph(graph, id)
        .ok_or_else(|| format!("No such block: '{}'", id))?;
    let json = subgraph.to_json_pretty().map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

/// Runs a small command prompt over the loaded graph.
fn run_interactive(graph: &Graph) {
    println!("--- Roadmap Interactive Mode ---");
    println!("Commands: get_paths <start> <end> <depth> [time|cost|steps], blocks, terminals, subgraph <id>, quit");

    let stdin = io::stdin();
    loop {
        print!(">> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["blocks"] => print_blocks(graph),
            ["terminals"] => print_terminals(graph),
            ["subgraph", id] => {
                if let Err(e) = print_subgraph(graph, id) {
                    println!("{}", e);
                }
            }
            ["get_paths", start, end, depth, rest @ ..] => {
                let sort = match rest.first().map(|s| s.parse::<SortCriteria>()) {
                    None => SortCriteria::Time,
                    Some(Ok(sort)) => sort,
                    Some(Err(e)) => {
                        println!("{}", e);
                        continue;
                    }
                };
                let outcome = depth
                    .parse::<MaxDepth>()
                    .map_err(|e| e.to_string())
                    .and_then(|depth| {
                        run_paths(graph, start, end, depth, sort, FormatCli::Text, None)
                    });
                if let Err(e) = outcome {
                    println!("{}", e);
                }
            }
            ["get_paths", ..] => println!("Usage: get_paths <start> <end> <depth> [time|cost|steps]"),
            _ => println!("Unknown command. Try: get_paths, blocks, terminals, subgraph, quit"),
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
