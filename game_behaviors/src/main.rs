//! Skirmish - runs a scenario on the message bus and logs what happens.
//!
//! Usage:
//!   skirmish                        run the built-in demo for 10 ticks
//!   skirmish --scenario battle.toml run a scenario file
//!   skirmish --ticks 0              run until interrupted
//!   skirmish --json                 print the final roster as JSON

use std::path::PathBuf;

use clap::Parser;
use game_behaviors::Scenario;

#[derive(Parser, Debug)]
#[command(name = "skirmish", version, about = "Run an entity/component skirmish")]
struct Cli {
    /// Scenario file (TOML). Defaults to the built-in demo.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Override the scenario's tick count; 0 runs forever.
    #[arg(long)]
    ticks: Option<u64>,

    /// Print the final roster as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let scenario = match &cli.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::demo(),
    };
    let ticks = cli.ticks.unwrap_or(scenario.ticks);

    tracing::info!(
        entities = scenario.entities.len(),
        ticks,
        "starting skirmish"
    );

    let mut game = scenario.build()?;
    let ran = game.main_loop(Some(ticks))?;

    tracing::info!(ticks = ran, "skirmish finished");

    if cli.json {
        println!("{}", game.snapshot().to_json_pretty()?);
    }

    Ok(())
}
