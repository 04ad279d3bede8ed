use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roadmap::category::known_categories;
use roadmap::logging::init_tracing;
use roadmap::record::{BlockRecord, ConnectionRecord, RoadmapDefinition};
use std::fs;
use tracing::info;

/// A CLI tool to generate random layered roadmaps for stress-testing path search
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_roadmap.json")]
    output: String,

    /// Number of layers between the entry block and the destination block
    #[arg(long, default_value_t = 6)]
    layers: usize,

    /// Blocks per layer
    #[arg(long, default_value_t = 4)]
    width: usize,

    /// Maximum transitions from each block into the next layer
    #[arg(long, default_value_t = 2)]
    fan_out: usize,

    /// Probability that a block also links back to the previous layer
    #[arg(long, default_value_t = 0.1)]
    back_edges: f64,

    /// Probability that a block carries a forward connection to a missing id
    #[arg(long, default_value_t = 0.05)]
    dangling: f64,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(false);

    if cli.width == 0 || cli.fan_out == 0 {
        eprintln!("Error: --width and --fan-out must be at least 1");
        std::process::exit(1);
    }
    for (name, p) in [("--back-edges", cli.back_edges), ("--dangling", cli.dangling)] {
        if !(0.0..=1.0).contains(&p) {
            eprintln!("Error: {} ({}) must be between 0 and 1", name, p);
            std::process::exit(1);
        }
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!(
        "Generating roadmap ({} layers x {} blocks, fan-out up to {})...",
        cli.layers, cli.width, cli.fan_out
    );
    let definition = generate_roadmap(&mut rng, &cli);

    fs::write(&cli.output, definition.to_json_pretty()?)?;

    info!(
        blocks = definition.blocks.len(),
        connections = definition.connections.len(),
        "roadmap generated"
    );
    println!(
        "Successfully generated and saved roadmap to '{}' (start: 'entry', end: 'destination')",
        cli.output
    );

    Ok(())
}

fn generate_roadmap(rng: &mut StdRng, cli: &Cli) -> RoadmapDefinition {
    let categories: Vec<&str> = known_categories().collect();
    let mut definition = RoadmapDefinition::default();

    definition
        .blocks
        .push(BlockRecord::new("entry", "Entry", "Status", 0.0, 0.0));

    let mut previous_layer = vec!["entry".to_string()];
    for layer in 0..cli.layers {
        let current_layer: Vec<String> = (0..cli.width)
            .map(|slot| format!("l{}_b{}", layer, slot))
            .collect();

        for (slot, id) in current_layer.iter().enumerate() {
            let category = categories[(layer + slot) % categories.len()];
            let mut block = BlockRecord::new(
                id,
                &format!("Layer {} Option {}", layer + 1, slot + 1),
                category,
                rng.random_range(0.5..24.0_f64).round(),
                rng.random_range(0.0..20_000.0_f64).round(),
            );
            if rng.random_bool(cli.dangling) {
                block.forward_connections.push(format!("{}_retired", id));
            }
            definition.blocks.push(block);
        }

        link_layers(rng, &previous_layer, &current_layer, cli.fan_out, &mut definition);
        if layer > 0 {
            for id in &current_layer {
                if rng.random_bool(cli.back_edges) {
                    let target = &previous_layer[rng.random_range(0..previous_layer.len())];
                    definition
                        .connections
                        .push(ConnectionRecord::new(id, target));
                }
            }
        }
        previous_layer = current_layer;
    }

    definition.blocks.push(BlockRecord::new(
        "destination",
        "Citizenship",
        "Status",
        6.0,
        630.0,
    ));
    for id in &previous_layer {
        definition
            .connections
            .push(ConnectionRecord::new(id, "destination"));
    }

    definition
}

/// Connects every block of `from` to between one and `fan_out` blocks of `to`.
fn link_layers(
    rng: &mut StdRng,
    from: &[String],
    to: &[String],
    fan_out: usize,
    definition: &mut RoadmapDefinition,
) {
    for source in from {
        let count = rng.random_range(1..=fan_out.min(to.len()));
        let offset = rng.random_range(0..to.len());
        for k in 0..count {
            let target = &to[(offset + k) % to.len()];
            definition
                .connections
                .push(ConnectionRecord::new(source, target));
        }
    }
}
