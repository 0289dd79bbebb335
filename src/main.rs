use anyhow::Context;
use clap::Parser;
use tictactoe::{
    Config,
    cli::{CliArgs, Command, print_simulation, run_repl, run_simulation},
};
use tracing_subscriber::EnvFilter;

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let file_config = match &args.config {
        Some(path) => Config::load(path).context("Could not load configuration")?,
        None => Config::default(),
    };
    let config = args.apply_to(file_config);

    init_tracing(config.log_level());
    tracing::debug!(?config, "Starting");

    match args.command.clone().unwrap_or(Command::Play) {
        Command::Play => run_repl(&config),
        Command::Simulate {
            games,
            opponent_seed,
            json,
        } => {
            let report = run_simulation(&config, games, opponent_seed);
            print_simulation(&report, json)
        }
    }
}
