use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use ratgen::{engine::Engine, report, rng, Config};

#[derive(Debug, Parser)]
#[command(author, version, about = "Selective breeding simulation for rat body weight")]
struct Cli {
    /// Path to a YAML programme file (reference programme when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the random stream
    #[arg(long)]
    seed: Option<u64>,

    /// Override the generation cutoff
    #[arg(long)]
    generations: Option<u32>,

    /// Override the goal mean weight in grams
    #[arg(long)]
    goal: Option<u64>,

    /// Print the results as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::from_yaml(path)
            .with_context(|| format!("Failed to load programme {}", path.display()))?,
        None => Config::reference(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(limit) = cli.generations {
        config.generation_limit = limit;
    }
    if let Some(goal) = cli.goal {
        config.goal_weight = goal;
    }

    let level_name = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    let level = Level::from_str(level_name)
        .with_context(|| format!("Unknown log level '{level_name}'"))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let start = Instant::now();
    let mut engine = Engine::new(config.clone(), rng::from_config(&config))
        .context("Failed to set up the breeding programme")?;
    let summary = engine.run().context("Breeding programme aborted")?;
    let elapsed = start.elapsed().as_secs_f64();

    if cli.json {
        println!("{}", report::to_json(&summary, &config, elapsed)?);
    } else {
        print!("{}", report::render(&summary, &config, elapsed));
    }
    Ok(())
}
